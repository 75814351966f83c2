//! # crmdesk-core
//!
//! Core crate for CRMDesk. Contains configuration schemas, domain record
//! types, timestamp normalization, and the unified error system.
//!
//! This crate has **no** internal dependencies on other CRMDesk crates.

pub mod config;
pub mod error;
pub mod result;
pub mod time;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
