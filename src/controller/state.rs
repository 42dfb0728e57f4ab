//! Controller state
//!
//! The state is derived from whether a session handle is currently held.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerState {
    /// No session handle; the next start fetches a credential
    Uninitialized,
    /// A session handle exists and connect has been requested on it
    Initialized,
}

impl ControllerState {
    pub fn from_handle_present(present: bool) -> Self {
        if present {
            ControllerState::Initialized
        } else {
            ControllerState::Uninitialized
        }
    }
}

impl fmt::Display for ControllerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ControllerState::Uninitialized => write!(f, "uninitialized"),
            ControllerState::Initialized => write!(f, "initialized"),
        }
    }
}
