//! Admin credential configuration.

use serde::{Deserialize, Serialize};

/// Admin credential configuration.
///
/// The password is never stored; only its salted digest is. The digest of the
/// development default (`admin123`) is baked in so the console works out of
/// the box. Override both fields in production.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CredentialsConfig {
    /// Admin username.
    #[serde(default = "default_username")]
    pub username: String,
    /// Hex-encoded salted digest of the admin password.
    #[serde(default = "default_password_digest")]
    pub password_digest: String,
    /// Digest scheme the stored digest was produced with.
    #[serde(default)]
    pub digest_scheme: DigestScheme,
}

impl Default for CredentialsConfig {
    fn default() -> Self {
        Self {
            username: default_username(),
            password_digest: default_password_digest(),
            digest_scheme: DigestScheme::default(),
        }
    }
}

/// Digest scheme used for the stored password digest.
///
/// `Polynomial` is a non-cryptographic rolling hash kept only for runtimes
/// without a SHA-256 primitive. It is explicitly weaker than `Sha256` and
/// must never be treated as equivalent security.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DigestScheme {
    /// Salted single-pass SHA-256, hex-encoded.
    Sha256,
    /// Order-sensitive 32-bit polynomial rolling hash. Weak; deterrent only.
    Polynomial,
}

impl Default for DigestScheme {
    fn default() -> Self {
        Self::Sha256
    }
}

impl std::fmt::Display for DigestScheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DigestScheme::Sha256 => write!(f, "sha256"),
            DigestScheme::Polynomial => write!(f, "polynomial"),
        }
    }
}

fn default_username() -> String {
    "admin".to_string()
}

// sha256("admin123" + "crm_salt_2024")
fn default_password_digest() -> String {
    "e255ae21d2c108113893c0f8f6d7aec5057aee799862d72859600725e623a7eb".to_string()
}
