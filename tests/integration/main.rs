//! Cross-crate integration tests for the CRMDesk console core.

mod helpers;

mod feed_test;
mod guard_test;
mod realtime_test;
