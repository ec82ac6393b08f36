//! Shared errors and configuration for Mintmark.
//!
//! This crate provides the pieces every other crate leans on:
//! - Application-wide error type and result alias
//! - Layered configuration (files, then environment)

pub mod config;
pub mod error;

pub use config::{AppConfig, IsoSourceConfig, LogConfig, RefreshConfig};
pub use error::{AppError, AppResult};
