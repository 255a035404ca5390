//! Locale-fixed formatting for user-facing numbers.
//!
//! Output matches what the café's frontend has always shown: Persian
//! (Extended Arabic-Indic) digits, U+066C as the grouping separator, zero
//! fraction digits, and a fixed currency suffix. Nothing here consults the
//! process locale, so the output is identical on every machine.

use crate::types::Toman;

/// Currency suffix appended to every formatted amount.
pub const CURRENCY_SUFFIX: &str = "تومان";

/// ARABIC THOUSANDS SEPARATOR.
const GROUP_SEPARATOR: char = '\u{66c}';

/// First code point of the Extended Arabic-Indic digit block (۰).
const PERSIAN_ZERO: u32 = 0x06F0;

/// Replace ASCII digits with Persian digits, leaving everything else as-is.
#[must_use]
pub fn to_persian_digits(input: &str) -> String {
    input
        .chars()
        .map(|c| {
            if c.is_ascii_digit() {
                char::from_u32(PERSIAN_ZERO + (c as u32 - '0' as u32)).unwrap_or(c)
            } else {
                c
            }
        })
        .collect()
}

/// Group an integer into thousands with the Persian separator.
///
/// The digits themselves stay ASCII; callers combine this with
/// [`to_persian_digits`] for display.
#[must_use]
pub fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        grouped.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(GROUP_SEPARATOR);
        }
        grouped.push(c);
    }
    grouped
}

/// Format an amount for display: `۱٬۲۳۴ تومان`.
///
/// Zero fraction digits by construction; the grouping and suffix do not
/// depend on any locale setting.
#[must_use]
pub fn format_toman(amount: Toman) -> String {
    format!(
        "{} {CURRENCY_SUFFIX}",
        to_persian_digits(&group_thousands(amount.amount()))
    )
}
