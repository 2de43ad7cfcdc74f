//! # Jenkins Domain
//!
//! Shared types for the Jenkins management API client.
//!
//! This crate contains:
//! - Error types and Result definitions
//! - Client configuration structures
//! - Response-shape types for the credential store API
//! - Shared constants
//!
//! ## Architecture
//! - No dependencies on other workspace crates
//! - Only external dependencies allowed
//! - Pure data structures, no I/O

pub mod config;
pub mod constants;
pub mod errors;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
