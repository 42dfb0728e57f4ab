pub mod config;
pub mod console;
pub mod controller;
pub mod credential;
pub mod device;
pub mod error;
pub mod utils;

pub use self::config::{AppConfig, RestartPolicy};
pub use controller::{CallSessionController, ControllerState};
