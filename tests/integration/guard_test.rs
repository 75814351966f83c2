//! Login flow: configuration defaults through digest to lockout and back.

use crmdesk_auth::guard::{BLOCK_DURATION_MS, RESET_WINDOW_MS};
use crmdesk_auth::{AuthError, CredentialRecord, SessionGuard};
use crmdesk_core::config::auth::CredentialsConfig;

use crate::helpers::ManualClock;

fn default_guard(clock: &ManualClock) -> SessionGuard<ManualClock> {
    // The stock configuration carries the digest of the development
    // password, so the whole chain (config -> record -> digest compare)
    // is exercised without any hand-built fixture.
    let record = CredentialRecord::from(&CredentialsConfig::default());
    SessionGuard::with_clock(record, clock.clone())
}

#[test]
fn test_default_configuration_accepts_dev_password() {
    let clock = ManualClock::at(10_000_000);
    let mut guard = default_guard(&clock);
    assert_eq!(guard.validate("admin", "admin123"), Ok(true));
    assert_eq!(guard.validate("admin", "admin124"), Ok(false));
}

#[test]
fn test_lockout_lifecycle() {
    let clock = ManualClock::at(10_000_000);
    let mut guard = default_guard(&clock);

    // Four failures: still open for business.
    for _ in 0..4 {
        assert_eq!(guard.validate("admin", "wrong"), Ok(false));
    }
    assert!(!guard.is_locked());

    // Fifth failure locks for 15 minutes.
    assert_eq!(guard.validate("admin", "wrong"), Ok(false));
    assert!(guard.is_locked());
    assert_eq!(guard.remaining_lock_seconds(), 900);

    // Even the correct password is rejected while locked.
    assert_eq!(
        guard.validate("admin", "admin123"),
        Err(AuthError::LockedOut {
            remaining_seconds: 900
        })
    );

    // The countdown shrinks with time, without new failures.
    clock.advance(10 * 60 * 1000);
    assert_eq!(guard.remaining_lock_seconds(), 300);

    // After the lock expires, the correct password succeeds and the
    // streak is gone.
    clock.advance(BLOCK_DURATION_MS);
    assert_eq!(guard.validate("admin", "admin123"), Ok(true));
    assert_eq!(guard.describe_state().attempts, 0);
}

#[test]
fn test_hour_of_inactivity_forgives_everything() {
    let clock = ManualClock::at(10_000_000);
    let mut guard = default_guard(&clock);

    for _ in 0..5 {
        let _ = guard.validate("admin", "wrong");
    }
    assert!(guard.is_locked());

    clock.advance(RESET_WINDOW_MS + 1);
    assert!(!guard.is_locked());
    let snapshot = guard.describe_state();
    assert_eq!(snapshot.attempts, 0);
    assert_eq!(snapshot.remaining_lock_seconds, 0);
}
