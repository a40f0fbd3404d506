//! Field-level rules for time entries.
//!
//! These functions are plugged into `#[validate(custom(function = ...))]`
//! attributes on the entry DTOs, so they return [`ValidationError`] rather
//! than [`CoreError`](crate::error::CoreError).

use std::borrow::Cow;

use chrono::NaiveTime;
use validator::ValidationError;

/// Status assigned to entries created without an explicit status.
pub const DEFAULT_ENTRY_STATUS: &str = "draft";

/// Parse a zero-padded 24-hour `HH:MM` clock time.
pub fn parse_clock_time(value: &str) -> Option<NaiveTime> {
    if value.len() != 5 {
        return None;
    }
    NaiveTime::parse_from_str(value, "%H:%M").ok()
}

/// Reject anything that is not a zero-padded `HH:MM` clock time.
pub fn validate_clock_time(value: &str) -> Result<(), ValidationError> {
    match parse_clock_time(value) {
        Some(_) => Ok(()),
        None => Err(ValidationError::new("clock_time")
            .with_message(Cow::Owned(format!("'{value}' is not a HH:MM clock time")))),
    }
}

/// Reject empty or whitespace-only strings.
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::new("blank").with_message(Cow::Borrowed("must not be blank")))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn accepts_padded_clock_times() {
        assert!(validate_clock_time("08:00").is_ok());
        assert!(validate_clock_time("00:00").is_ok());
        assert!(validate_clock_time("23:59").is_ok());
    }

    #[test]
    fn rejects_malformed_clock_times() {
        for bad in ["8:00", "24:00", "12:60", "0800", "08:00:00", "", "ab:cd"] {
            assert!(validate_clock_time(bad).is_err(), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn parse_clock_time_returns_time() {
        let parsed = parse_clock_time("16:30");
        assert_matches!(parsed, Some(t) if t == NaiveTime::from_hms_opt(16, 30, 0).unwrap());
    }

    #[test]
    fn blank_strings_rejected() {
        assert!(validate_not_blank("assembly").is_ok());
        assert!(validate_not_blank("").is_err());
        assert!(validate_not_blank("   ").is_err());
    }
}
