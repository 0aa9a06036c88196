//! Common validation utilities

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").expect("valid email regex")
});

static USERNAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_\-]{3,32}$").expect("valid username regex"));

/// Common validation functions
pub mod validators {
    use super::{EMAIL_PATTERN, USERNAME_PATTERN};

    /// Check if a string is not empty (ignoring surrounding whitespace)
    pub fn not_empty(value: &str) -> bool {
        !value.trim().is_empty()
    }

    /// Check if a string length is within bounds
    pub fn length_between(value: &str, min: usize, max: usize) -> bool {
        let len = value.len();
        len >= min && len <= max
    }

    /// Check if an email address is well-formed
    pub fn is_valid_email(email: &str) -> bool {
        EMAIL_PATTERN.is_match(email)
    }

    /// Check if a username is well-formed (3-32 chars, alphanumeric plus `_` and `-`)
    pub fn is_valid_username(username: &str) -> bool {
        USERNAME_PATTERN.is_match(username)
    }
}

#[cfg(test)]
mod tests {
    use super::validators::*;

    #[test]
    fn test_not_empty() {
        assert!(not_empty("abc"));
        assert!(!not_empty(""));
        assert!(!not_empty("   "));
    }

    #[test]
    fn test_length_between() {
        assert!(length_between("abcd", 3, 8));
        assert!(!length_between("ab", 3, 8));
        assert!(!length_between("abcdefghi", 3, 8));
    }

    #[test]
    fn test_is_valid_email() {
        assert!(is_valid_email("reader@example.com"));
        assert!(is_valid_email("a.b+tag@mail.example.co"));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("missing@tld"));
        assert!(!is_valid_email("@example.com"));
    }

    #[test]
    fn test_is_valid_username() {
        assert!(is_valid_username("qingyu_writer"));
        assert!(is_valid_username("abc"));
        assert!(!is_valid_username("ab"));
        assert!(!is_valid_username("has space"));
        assert!(!is_valid_username("way-too-long-username-far-beyond-limit"));
    }
}
