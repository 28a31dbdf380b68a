//! User record.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Ids are folded into this range so they stay short and readable.
const ID_SPACE: i64 = 10_000;

/// Represents a user in the system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    /// Unique user identifier, never negative
    pub id: i64,
    /// User's display name
    pub name: String,
    /// User's email address
    pub email: String,
    /// Wall-clock time the record was built
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new user with a clock-derived id, stamped now.
    pub fn new(name: &str, email: &str) -> Self {
        let now = Utc::now();
        Self {
            id: id_from_time(now),
            name: name.to_string(),
            email: email.to_string(),
            created_at: now,
        }
    }

    /// Build a user with an explicit id, stamped now.
    pub fn with_id(id: i64, name: &str, email: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            email: email.to_string(),
            created_at: Utc::now(),
        }
    }
}

/// Derive an id from a timestamp. Not unique across rapid calls.
pub fn id_from_time(ts: DateTime<Utc>) -> i64 {
    // Pre-1677/post-2262 timestamps have no nanosecond form; fall back to micros.
    let ticks = ts
        .timestamp_nanos_opt()
        .unwrap_or_else(|| ts.timestamp_micros());
    ticks.rem_euclid(ID_SPACE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_new_user_fields() {
        let before = Utc::now();
        let user = User::new("John Doe", "john@example.com");
        assert!(user.id >= 0);
        assert!(user.id < ID_SPACE);
        assert_eq!(user.name, "John Doe");
        assert_eq!(user.email, "john@example.com");
        assert!(user.created_at >= before);
    }

    #[test]
    fn test_id_from_time_is_modulo() {
        let ts = Utc.timestamp_opt(1_700_000_000, 123_456_789).unwrap();
        // 1_700_000_000_123_456_789 % 10_000
        assert_eq!(id_from_time(ts), 6789);
    }

    #[test]
    fn test_id_from_time_before_epoch_is_non_negative() {
        let ts = Utc.timestamp_opt(-1, 999_999_999).unwrap();
        let id = id_from_time(ts);
        assert!((0..ID_SPACE).contains(&id));
    }

    #[test]
    fn test_user_serializes_rfc3339() {
        let mut user = User::with_id(7, "a", "b");
        user.created_at = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["created_at"], "2024-01-02T03:04:05Z");
    }
}
