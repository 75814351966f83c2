//! # crmdesk-auth
//!
//! Local login-attempt guard for the CRMDesk console. Enforces rate
//! limiting and timed lockout independent of any server-side check:
//!
//! - salted password digest comparison (SHA-256, with a documented weaker
//!   fallback scheme)
//! - attempt counting with a 5-attempt threshold and 15-minute lockout
//! - lazy forgiveness of stale attempt state after an hour of inactivity

pub mod clock;
pub mod digest;
pub mod error;
pub mod guard;

pub use clock::{Clock, SystemClock};
pub use error::AuthError;
pub use guard::{CredentialRecord, GuardSnapshot, SessionGuard};
