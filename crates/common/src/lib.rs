//! Shared utilities, configuration, and error handling for Flowreel
//!
//! This crate provides common functionality used across the Flowreel backend:
//! - Configuration management following 12-factor principles
//! - Error types and handling

pub mod config;
pub mod error;

pub use config::Config;
pub use error::{Error, Result};
