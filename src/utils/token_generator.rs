//! Random token generation for short URLs.
//!
//! Tokens are drawn uniformly from the 62-symbol alphanumeric alphabet
//! (upper and lower ASCII letters plus digits).

use rand::{Rng, distr::Alphanumeric};

/// Generates a random token of `len` alphanumeric characters.
///
/// Uniqueness is not guaranteed here; the store rejects collisions by
/// re-drawing against its short URL map.
///
/// # Examples
///
/// ```
/// use shortlink::utils::token_generator::generate_token;
///
/// let token = generate_token(5);
/// assert_eq!(token.len(), 5);
/// assert!(token.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_token(len: usize) -> String {
    rand::rng()
        .sample_iter(Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generate_token_has_requested_length() {
        for len in [1, 5, 12, 32] {
            assert_eq!(generate_token(len).len(), len);
        }
    }

    #[test]
    fn test_generate_token_alphanumeric_only() {
        let token = generate_token(256);
        assert!(token.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_generate_token_covers_letter_and_digit_classes() {
        // A long enough draw should touch all three character classes.
        let token = generate_token(2048);

        assert!(token.chars().any(|c| c.is_ascii_uppercase()));
        assert!(token.chars().any(|c| c.is_ascii_lowercase()));
        assert!(token.chars().any(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_generate_token_produces_unique_tokens() {
        let mut tokens = HashSet::new();

        for _ in 0..1000 {
            tokens.insert(generate_token(16));
        }

        assert_eq!(tokens.len(), 1000);
    }
}
