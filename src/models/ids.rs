//! Strongly-typed expense identifier
//!
//! A newtype over a v4 UUID. Serializes as the plain UUID string; the
//! Display form shows a short "exp-" prefix for terminal output.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Unique identifier for an expense record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpenseId(Uuid);

impl ExpenseId {
    /// Create a new random id
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wrap an existing UUID
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// The underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for ExpenseId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "exp-{}", &self.0.to_string()[..8])
    }
}

impl From<Uuid> for ExpenseId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl FromStr for ExpenseId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.strip_prefix("exp-").unwrap_or(s);
        Ok(Self(Uuid::parse_str(s)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_unique() {
        let a = ExpenseId::new();
        let b = ExpenseId::new();
        assert_ne!(a, b);
        assert!(!a.as_uuid().is_nil());
    }

    #[test]
    fn test_display_prefix() {
        let id = ExpenseId::new();
        let shown = id.to_string();
        assert!(shown.starts_with("exp-"));
        assert_eq!(shown.len(), 12);
    }

    #[test]
    fn test_parse_full_uuid() {
        let raw = "550e8400-e29b-41d4-a716-446655440000";
        let id: ExpenseId = raw.parse().unwrap();
        assert_eq!(id.as_uuid().to_string(), raw);
    }

    #[test]
    fn test_serde_round_trip() {
        let id = ExpenseId::new();
        let json = serde_json::to_string(&id).unwrap();
        // Transparent: the JSON is just the quoted UUID string
        assert!(json.starts_with('"'));
        let back: ExpenseId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, back);
    }
}
