//! Call session controller
//!
//! Owns the single session handle and mediates the start/end triggers.

pub mod core;
pub mod observers;
pub mod state;

pub use self::core::CallSessionController;
pub use observers::register_diagnostic_observers;
pub use state::ControllerState;
