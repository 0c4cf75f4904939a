//! Common types and errors for hello-world.
//!
//! This crate provides shared functionality used across the workspace:
//! - Error types using `thiserror`
//! - Configuration of the entry sequence bounds

pub mod config;
pub mod error;

pub use config::{MAX_FIBONACCI_INPUT, MAX_SUM_UPPER_BOUND, SequenceConfig};
pub use error::ProgramError;
