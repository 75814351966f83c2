//! Salted password digest primitives.
//!
//! The digest is a deterrent, not a security boundary: a single salted
//! SHA-256 pass, hex-encoded, compared against the configured credential
//! record. The polynomial scheme exists only for runtimes without a
//! SHA-256 primitive; it is explicitly weaker and must never be treated
//! as equivalent security.

use sha2::{Digest, Sha256};

use crmdesk_core::config::auth::DigestScheme;

/// Fixed salt appended to the password before digesting.
pub const PASSWORD_SALT: &str = "crm_salt_2024";

/// Compute the digest of `password` under the given scheme.
pub fn compute(scheme: DigestScheme, password: &str) -> String {
    match scheme {
        DigestScheme::Sha256 => sha256_digest(password),
        DigestScheme::Polynomial => polynomial_digest(password),
    }
}

/// Salted single-pass SHA-256 digest, lowercase hex.
pub fn sha256_digest(password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    hasher.update(PASSWORD_SALT.as_bytes());
    hex::encode(hasher.finalize())
}

/// Order-sensitive 32-bit polynomial rolling hash of the salted password,
/// lowercase hex of the absolute value.
///
/// Runs over UTF-16 code units with wrapping 32-bit arithmetic
/// (`h = (h << 5) - h + c`), matching the historical fallback exactly so
/// digests recorded under it keep validating.
pub fn polynomial_digest(password: &str) -> String {
    let salted = format!("{password}{PASSWORD_SALT}");
    if salted.is_empty() {
        return "0".to_string();
    }

    let mut hash: i32 = 0;
    for unit in salted.encode_utf16() {
        hash = hash
            .wrapping_shl(5)
            .wrapping_sub(hash)
            .wrapping_add(i32::from(unit));
    }
    format!("{:x}", hash.unsigned_abs())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sha256_known_vector() {
        // sha256("admin123" + "crm_salt_2024")
        assert_eq!(
            sha256_digest("admin123"),
            "e255ae21d2c108113893c0f8f6d7aec5057aee799862d72859600725e623a7eb"
        );
    }

    #[test]
    fn test_sha256_deterministic() {
        assert_eq!(sha256_digest("password1"), sha256_digest("password1"));
    }

    #[test]
    fn test_sha256_distinguishes_inputs() {
        assert_ne!(sha256_digest("password1"), sha256_digest("password2"));
    }

    #[test]
    fn test_polynomial_known_vectors() {
        assert_eq!(polynomial_digest("admin123"), "61a1a57b");
        assert_eq!(polynomial_digest("password1"), "2d9670e");
    }

    #[test]
    fn test_polynomial_order_sensitive() {
        assert_ne!(polynomial_digest("ab"), polynomial_digest("ba"));
    }

    #[test]
    fn test_schemes_disagree() {
        assert_ne!(
            compute(DigestScheme::Sha256, "admin123"),
            compute(DigestScheme::Polynomial, "admin123")
        );
    }
}
