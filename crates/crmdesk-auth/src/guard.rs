//! Stateful login-attempt guard with rate limiting and timed lockout.

use tracing::{debug, warn};

use crmdesk_core::config::auth::{CredentialsConfig, DigestScheme};

use crate::clock::{Clock, SystemClock};
use crate::digest;
use crate::error::AuthError;

/// Failed attempts allowed before the guard locks.
pub const MAX_ATTEMPTS: u32 = 5;

/// How long the guard stays locked after the threshold is crossed.
pub const BLOCK_DURATION_MS: i64 = 15 * 60 * 1000;

/// Inactivity span after which accumulated failures are forgiven.
pub const RESET_WINDOW_MS: i64 = 60 * 60 * 1000;

/// The configured admin credential. Immutable once the guard is built.
#[derive(Debug, Clone)]
pub struct CredentialRecord {
    /// Expected username.
    pub username: String,
    /// Hex digest the password must reproduce.
    pub password_digest: String,
    /// Scheme the stored digest was produced with.
    pub scheme: DigestScheme,
}

impl From<&CredentialsConfig> for CredentialRecord {
    fn from(config: &CredentialsConfig) -> Self {
        Self {
            username: config.username.clone(),
            password_digest: config.password_digest.clone(),
            scheme: config.digest_scheme,
        }
    }
}

/// Mutable attempt-tracking state. Only the guard's own methods touch it;
/// count and lock are always reset together.
#[derive(Debug, Clone, Default)]
struct AttemptState {
    count: u32,
    last_attempt_at_ms: i64,
    locked_until_ms: Option<i64>,
}

/// Read-only diagnostic snapshot of the guard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuardSnapshot {
    /// Consecutive failed attempts recorded so far.
    pub attempts: u32,
    /// Threshold at which the guard locks.
    pub max_attempts: u32,
    /// Whether the guard is currently locked.
    pub is_locked: bool,
    /// Whole seconds until unlock, 0 when not locked.
    pub remaining_lock_seconds: u64,
    /// Instant of the most recent failed attempt, epoch milliseconds.
    pub last_attempt_at_ms: i64,
}

/// Local, stateful login-attempt guard.
///
/// Enforces rate limiting and timed lockout independent of any server-side
/// check. State is process-local and single-writer; one instance is owned
/// by the application context rather than living in a global.
#[derive(Debug)]
pub struct SessionGuard<C: Clock = SystemClock> {
    credentials: CredentialRecord,
    state: AttemptState,
    clock: C,
}

impl SessionGuard<SystemClock> {
    /// Build a guard over the system clock.
    pub fn new(credentials: CredentialRecord) -> Self {
        Self::with_clock(credentials, SystemClock)
    }
}

impl<C: Clock> SessionGuard<C> {
    /// Build a guard with an explicit clock source.
    pub fn with_clock(credentials: CredentialRecord, clock: C) -> Self {
        Self {
            credentials,
            state: AttemptState::default(),
            clock,
        }
    }

    /// Validate a credential pair.
    ///
    /// Returns `Ok(true)` on a match (resetting the attempt streak and any
    /// lock), `Ok(false)` on a mismatch, and [`AuthError::LockedOut`] when
    /// called while locked, raised before any digest computation.
    pub fn validate(&mut self, username: &str, password: &str) -> Result<bool, AuthError> {
        if self.is_locked() {
            let remaining_seconds = self.remaining_lock_seconds();
            warn!(remaining_seconds, "login rejected: guard is locked");
            return Err(AuthError::LockedOut { remaining_seconds });
        }

        let supplied = digest::compute(self.credentials.scheme, password);
        let matched =
            username == self.credentials.username && supplied == self.credentials.password_digest;

        if matched {
            self.state.count = 0;
            self.state.locked_until_ms = None;
            debug!("login accepted, attempt streak cleared");
            Ok(true)
        } else {
            self.record_failure();
            Ok(false)
        }
    }

    /// Whether the guard is currently locked.
    ///
    /// Querying also lazily forgives stale state: once more than
    /// [`RESET_WINDOW_MS`] has passed since the last attempt, the count and
    /// lock reset together. Decay happens on the next query after the
    /// window, not on a timer.
    pub fn is_locked(&mut self) -> bool {
        let now = self.clock.now_ms();

        if let Some(until) = self.state.locked_until_ms {
            if now < until {
                return true;
            }
        }

        if now - self.state.last_attempt_at_ms > RESET_WINDOW_MS {
            self.state.count = 0;
            self.state.locked_until_ms = None;
        }

        false
    }

    /// Whole seconds until the lock expires (ceiling); 0 when not locked.
    pub fn remaining_lock_seconds(&mut self) -> u64 {
        if !self.is_locked() {
            return 0;
        }
        let now = self.clock.now_ms();
        let until = self.state.locked_until_ms.unwrap_or(now);
        ((until - now).max(0) as u64).div_ceil(1000)
    }

    /// Read-only snapshot for diagnostics.
    ///
    /// The attempt count is captured before the lock query so the snapshot
    /// reflects state as of the call, even when the query itself triggers
    /// the lazy reset.
    pub fn describe_state(&mut self) -> GuardSnapshot {
        let attempts = self.state.count;
        let last_attempt_at_ms = self.state.last_attempt_at_ms;
        let is_locked = self.is_locked();
        GuardSnapshot {
            attempts,
            max_attempts: MAX_ATTEMPTS,
            is_locked,
            remaining_lock_seconds: self.remaining_lock_seconds(),
            last_attempt_at_ms,
        }
    }

    /// Forget all attempt state, including the last-attempt stamp.
    pub fn reset(&mut self) {
        self.state = AttemptState::default();
    }

    fn record_failure(&mut self) {
        let now = self.clock.now_ms();
        self.state.count += 1;
        self.state.last_attempt_at_ms = now;

        if self.state.count >= MAX_ATTEMPTS {
            self.state.locked_until_ms = Some(now + BLOCK_DURATION_MS);
            warn!(
                attempts = self.state.count,
                "attempt threshold crossed, guard locked"
            );
        } else {
            debug!(attempts = self.state.count, "failed login recorded");
        }
    }
}
