//! # curseapi-core
//!
//! Core crate for CurseAPI. Contains configuration schemas, typed
//! identifiers, sorting types, and the unified error system.
//!
//! This crate has **no** internal dependencies on other CurseAPI crates.

pub mod config;
pub mod error;
pub mod result;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
