//! Integer money amounts.

use serde::{Deserialize, Serialize};

/// An amount of money in whole Toman.
///
/// The café API deals exclusively in integer Toman; no field anywhere in
/// the system carries fractional digits. Keeping the raw integer behind a
/// newtype stops amounts from being mixed up with counts or IDs.
///
/// Display formatting lives in [`crate::format::format_toman`]; this type
/// is deliberately just the number.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Toman(i64);

impl Toman {
    /// Create an amount from a raw Toman value.
    #[must_use]
    pub const fn new(amount: i64) -> Self {
        Self(amount)
    }

    /// The raw integer amount.
    #[must_use]
    pub const fn amount(self) -> i64 {
        self.0
    }
}

impl From<i64> for Toman {
    fn from(amount: i64) -> Self {
        Self(amount)
    }
}

impl From<Toman> for i64 {
    fn from(amount: Toman) -> Self {
        amount.0
    }
}

impl std::ops::Add for Toman {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl std::iter::Sum for Toman {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        Self(iter.map(|t| t.0).sum())
    }
}
