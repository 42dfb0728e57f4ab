//! Diagnostic observers
//!
//! Attached to every new session handle. They only log; none of them touch
//! controller state.

use log::{error, info};

use crate::device::{DeviceEvent, EventKind, SessionHandle};

/// Registers one logging observer per lifecycle event kind.
pub fn register_diagnostic_observers(handle: &dyn SessionHandle) {
    handle.on(
        EventKind::Ready,
        Box::new(|_: &DeviceEvent| info!("Voice device ready")),
    );
    handle.on(
        EventKind::Error,
        Box::new(|event: &DeviceEvent| {
            if let DeviceEvent::Error(e) = event {
                error!("Voice device error: {}", e);
            }
        }),
    );
    handle.on(
        EventKind::Connect,
        Box::new(|_: &DeviceEvent| info!("Call connected")),
    );
    handle.on(
        EventKind::Disconnect,
        Box::new(|_: &DeviceEvent| info!("Call disconnected")),
    );
}
