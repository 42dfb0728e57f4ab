//! Voice device boundary
//!
//! Traits and types describing the external voice SDK, plus a loopback
//! implementation for running without one.

pub mod events;
pub mod handle;
pub mod loopback;
pub mod options;

pub use events::{DeviceEvent, EventKind, Observer, ObserverRegistry};
pub use handle::{DeviceFactory, SessionHandle};
pub use loopback::{LoopbackDevice, LoopbackFactory};
pub use options::{Codec, DeviceOptions};
