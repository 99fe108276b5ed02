//! Key validation
//!
//! Structural checks applied to every caller-supplied key, in order,
//! short-circuiting on the first violation:
//! 1. key must not be blank
//! 2. key must not exceed [`MAX_KEY_LEN`] characters
//! 3. key must not contain the literal substring `..`
//!
//! The `..` rule is a traversal guard for any path-based mapping of keys;
//! the current hash mapper never emits separators, but keys are rejected
//! before mapping regardless.

use std::fmt;

/// Maximum key length in characters
pub const MAX_KEY_LEN: usize = 256;

/// Why a key was rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidKeyReason {
    /// Empty or whitespace-only
    Blank,

    /// Longer than [`MAX_KEY_LEN`] characters
    TooLong(usize),

    /// Contains the literal substring `..`
    Traversal,
}

impl fmt::Display for InvalidKeyReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidKeyReason::Blank => write!(f, "key must not be blank"),
            InvalidKeyReason::TooLong(len) => {
                write!(f, "key length {} exceeds maximum of {}", len, MAX_KEY_LEN)
            }
            InvalidKeyReason::Traversal => write!(f, "key must not contain \"..\""),
        }
    }
}

/// Validate a key, returning the first rule it violates
pub fn validate(key: &str) -> Result<(), InvalidKeyReason> {
    if key.trim().is_empty() {
        return Err(InvalidKeyReason::Blank);
    }

    let len = key.chars().count();
    if len > MAX_KEY_LEN {
        return Err(InvalidKeyReason::TooLong(len));
    }

    if key.contains("..") {
        return Err(InvalidKeyReason::Traversal);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_ordinary_keys() {
        assert_eq!(validate("auth_token"), Ok(()));
        assert_eq!(validate("user.42.profile"), Ok(()));
        assert_eq!(validate("a"), Ok(()));
    }

    #[test]
    fn rejects_blank_keys() {
        assert_eq!(validate(""), Err(InvalidKeyReason::Blank));
        assert_eq!(validate("   "), Err(InvalidKeyReason::Blank));
        assert_eq!(validate("\t\n"), Err(InvalidKeyReason::Blank));
    }

    #[test]
    fn rejects_overlong_keys() {
        let key = "k".repeat(300);
        assert_eq!(validate(&key), Err(InvalidKeyReason::TooLong(300)));
    }

    #[test]
    fn accepts_key_at_exact_limit() {
        let key = "k".repeat(MAX_KEY_LEN);
        assert_eq!(validate(&key), Ok(()));
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        // 256 three-byte characters, still within the limit
        let key = "\u{4e2d}".repeat(MAX_KEY_LEN);
        assert_eq!(validate(&key), Ok(()));
    }

    #[test]
    fn rejects_traversal_sequences() {
        assert_eq!(validate(".."), Err(InvalidKeyReason::Traversal));
        assert_eq!(validate("a/../b"), Err(InvalidKeyReason::Traversal));
        assert_eq!(validate("prefix.."), Err(InvalidKeyReason::Traversal));
    }

    #[test]
    fn single_dots_are_allowed() {
        assert_eq!(validate("a.b.c"), Ok(()));
        assert_eq!(validate(".hidden"), Ok(()));
    }

    #[test]
    fn rules_apply_in_order() {
        // blank wins over length, length wins over traversal
        assert_eq!(validate(""), Err(InvalidKeyReason::Blank));
        let long_traversal = format!("{}..", "k".repeat(300));
        assert_eq!(validate(&long_traversal), Err(InvalidKeyReason::TooLong(302)));
    }
}
