//! Error handling
//!
//! Defines error types for the call session controller.

pub mod types;

pub use types::*;
