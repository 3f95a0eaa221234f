//! Identifier patterns shared by construction and decode.

use once_cell::sync::Lazy;
use regex::Regex;

static FORM_NAME_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9A-Za-z_\-.]{3,32}$").unwrap());

static FIELD_NAME_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9A-Za-z_]{2,32}$").unwrap());

static CONTENT_HASH_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-f0-9]{40}$").unwrap());

static OBFUSCATED_KEY_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-f0-9]{12}$").unwrap());

static NUMERIC_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+$").unwrap());

pub(crate) fn is_valid_form_name(name: &str) -> bool {
    FORM_NAME_REGEX.is_match(name)
}

pub(crate) fn is_valid_field_name(field: &str) -> bool {
    FIELD_NAME_REGEX.is_match(field)
}

pub(crate) fn is_valid_content_hash(hash: &str) -> bool {
    CONTENT_HASH_REGEX.is_match(hash)
}

/// A well-formed obfuscated key: 12 hex characters, never a pure integer.
pub(crate) fn is_valid_key(key: &str) -> bool {
    OBFUSCATED_KEY_REGEX.is_match(key) && !NUMERIC_REGEX.is_match(key)
}

pub(crate) fn is_all_digits(s: &str) -> bool {
    NUMERIC_REGEX.is_match(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_name_pattern() {
        assert!(is_valid_form_name("login"));
        assert!(is_valid_form_name("user.profile-v2"));
        assert!(is_valid_form_name("a_b"));
        assert!(!is_valid_form_name("ab"));
        assert!(!is_valid_form_name("has space"));
        assert!(!is_valid_form_name(&"x".repeat(33)));
        assert!(!is_valid_form_name(""));
    }

    #[test]
    fn test_field_name_pattern() {
        assert!(is_valid_field_name("username"));
        assert!(is_valid_field_name("f2"));
        assert!(!is_valid_field_name("x"));
        assert!(!is_valid_field_name("e-mail"));
        assert!(!is_valid_field_name("dotted.name"));
        assert!(!is_valid_field_name(&"f".repeat(33)));
    }

    #[test]
    fn test_content_hash_pattern() {
        assert!(is_valid_content_hash(&"a1".repeat(20)));
        assert!(!is_valid_content_hash(&"A1".repeat(20)));
        assert!(!is_valid_content_hash("a1b2"));
    }

    #[test]
    fn test_key_pattern() {
        assert!(is_valid_key("a23456789012"));
        assert!(is_valid_key("0a0a0a0a0a0a"));
        // Pure integers are never valid keys
        assert!(!is_valid_key("123456789012"));
        // Wrong length or alphabet
        assert!(!is_valid_key("a2345678901"));
        assert!(!is_valid_key("g23456789012"));
    }

    #[test]
    fn test_all_digits() {
        assert!(is_all_digits("123456789012"));
        assert!(!is_all_digits("a23456789012"));
        assert!(!is_all_digits(""));
    }
}
