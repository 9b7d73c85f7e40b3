//! # signalhub-core
//!
//! Core crate for SignalHub. Contains the port traits implemented by the
//! host application, configuration schemas, typed identifiers, shared
//! value types, and the unified error system.
//!
//! This crate has **no** internal dependencies on other SignalHub crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
