//! Console front end
//!
//! Hosts the controller behind line-oriented `call` / `hangup` triggers.

pub mod commands;
pub mod handler;

pub use commands::{Trigger, parse_command};
pub use handler::run_console;
