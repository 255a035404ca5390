//! Status and role enums.
//!
//! The server owns the set of valid values for both enums; anything this
//! client does not recognize is carried through unchanged in `Other` so a
//! newer server never breaks an older client.

use serde::{Deserialize, Serialize};

/// Order lifecycle status.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum OrderStatus {
    Open,
    Closed,
    Cancelled,
    /// A status value this client does not know about.
    Other(String),
}

impl OrderStatus {
    /// The wire representation of this status.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Open => "open",
            Self::Closed => "closed",
            Self::Cancelled => "cancelled",
            Self::Other(raw) => raw,
        }
    }

    /// Badge class used when rendering this status.
    #[must_use]
    pub const fn badge_class(&self) -> &'static str {
        match self {
            Self::Open => "badge-warning",
            Self::Closed => "badge-success",
            Self::Cancelled => "badge-danger",
            Self::Other(_) => "badge-info",
        }
    }

    /// Persian display label.
    ///
    /// Unrecognized statuses pass their raw text through unchanged.
    #[must_use]
    pub fn display_text(&self) -> &str {
        match self {
            Self::Open => "باز",
            Self::Closed => "بسته",
            Self::Cancelled => "لغو شده",
            Self::Other(raw) => raw,
        }
    }
}

impl From<&str> for OrderStatus {
    fn from(value: &str) -> Self {
        match value {
            "open" => Self::Open,
            "closed" => Self::Closed,
            "cancelled" => Self::Cancelled,
            other => Self::Other(other.to_owned()),
        }
    }
}

impl From<String> for OrderStatus {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<OrderStatus> for String {
    fn from(status: OrderStatus) -> Self {
        status.as_str().to_owned()
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User role with different permission levels.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    /// Full access, including user administration.
    Admin,
    /// Day-to-day order taking.
    Cashier,
    /// A role this client does not know about.
    Other(String),
}

impl Role {
    /// The wire representation of this role.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Admin => "admin",
            Self::Cashier => "cashier",
            Self::Other(raw) => raw,
        }
    }

    /// Whether this role grants access to the admin panel.
    #[must_use]
    pub const fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }
}

impl From<&str> for Role {
    fn from(value: &str) -> Self {
        match value {
            "admin" => Self::Admin,
            "cashier" => Self::Cashier,
            other => Self::Other(other.to_owned()),
        }
    }
}

impl From<String> for Role {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.as_str().to_owned()
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_statuses_round_trip() {
        for raw in ["open", "closed", "cancelled"] {
            let status = OrderStatus::from(raw);
            assert_eq!(status.as_str(), raw);
            assert!(!matches!(status, OrderStatus::Other(_)));
        }
    }

    #[test]
    fn unknown_status_passes_through_unchanged() {
        let status = OrderStatus::from("refunded");
        assert_eq!(status.display_text(), "refunded");
        assert_eq!(status.badge_class(), "badge-info");
        assert_eq!(status.as_str(), "refunded");
    }

    #[test]
    fn status_serde_uses_wire_strings() {
        let json = serde_json::to_string(&OrderStatus::Cancelled).expect("serialize");
        assert_eq!(json, "\"cancelled\"");
        let back: OrderStatus = serde_json::from_str("\"open\"").expect("deserialize");
        assert_eq!(back, OrderStatus::Open);
        let unknown: OrderStatus = serde_json::from_str("\"on-hold\"").expect("deserialize");
        assert_eq!(unknown, OrderStatus::Other("on-hold".to_owned()));
    }

    #[test]
    fn status_badges_match_lifecycle() {
        assert_eq!(OrderStatus::Open.badge_class(), "badge-warning");
        assert_eq!(OrderStatus::Closed.badge_class(), "badge-success");
        assert_eq!(OrderStatus::Cancelled.badge_class(), "badge-danger");
    }

    #[test]
    fn role_admin_check() {
        assert!(Role::Admin.is_admin());
        assert!(!Role::Cashier.is_admin());
        assert!(!Role::Other("barista".to_owned()).is_admin());
    }

    #[test]
    fn unknown_role_survives_round_trip() {
        let role: Role = serde_json::from_str("\"barista\"").expect("deserialize");
        assert_eq!(role, Role::Other("barista".to_owned()));
        assert_eq!(
            serde_json::to_string(&role).expect("serialize"),
            "\"barista\""
        );
    }
}
