//! Session identifier minting.
//!
//! Identifiers are `S{yyyymmddHHMMSS}_{8 hex}`: human-scannable in creation
//! order, unique with overwhelming probability across concurrent callers,
//! and short enough for a `varchar(50)` column. Minting is an injectable
//! strategy so tests can pin the clock and the random suffix.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Formats a session identifier from a clock reading and a random suffix.
///
/// Pure: the same inputs always yield the same identifier.
pub fn format_session_id(at: DateTime<Utc>, suffix: &str) -> String {
    format!("S{}_{}", at.format("%Y%m%d%H%M%S"), suffix)
}

/// Strategy for minting new session identifiers.
pub trait SessionIdMinter: Send + Sync {
    fn mint(&self) -> String;
}

/// Production minter: current UTC time plus 8 hex characters of a v4 UUID.
#[derive(Debug, Clone, Default)]
pub struct SystemSessionIdMinter;

impl SessionIdMinter for SystemSessionIdMinter {
    fn mint(&self) -> String {
        let suffix = Uuid::new_v4().simple().to_string()[..8].to_string();
        format_session_id(Utc::now(), &suffix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn format_is_deterministic_for_fixed_inputs() {
        let at = Utc.with_ymd_and_hms(2024, 3, 7, 9, 5, 42).unwrap();
        assert_eq!(format_session_id(at, "deadbeef"), "S20240307090542_deadbeef");
    }

    #[test]
    fn system_minter_produces_expected_shape() {
        let id = SystemSessionIdMinter.mint();
        assert!(id.starts_with('S'));
        assert_eq!(id.len(), 1 + 14 + 1 + 8);
        assert_eq!(id.as_bytes()[15], b'_');
        assert!(id[1..15].bytes().all(|b| b.is_ascii_digit()));
        assert!(id[16..].bytes().all(|b| b.is_ascii_hexdigit()));
    }

    #[test]
    fn system_minter_does_not_repeat_suffixes() {
        let a = SystemSessionIdMinter.mint();
        let b = SystemSessionIdMinter.mint();
        assert_ne!(a, b);
    }
}
