//! Session handle boundary
//!
//! These traits are the whole surface the controller needs from a voice SDK:
//! construct with a credential, register observers, connect, disconnect all.

use std::sync::Arc;

use super::{DeviceOptions, EventKind, Observer};
use crate::credential::Credential;
use crate::error::DeviceError;

/// One voice connection object obtained from the SDK.
///
/// `connect` and `disconnect_all` are fire-and-forget; outcomes are reported
/// to the observers registered through `on`.
pub trait SessionHandle: Send + Sync {
    /// Registers an observer for one lifecycle event kind.
    fn on(&self, kind: EventKind, observer: Observer);

    /// Requests an outgoing connection.
    fn connect(&self);

    /// Terminates every active connection on this handle.
    fn disconnect_all(&self);
}

/// Builds session handles from a credential.
pub trait DeviceFactory: Send + Sync {
    fn create(
        &self,
        credential: &Credential,
        options: &DeviceOptions,
    ) -> Result<Arc<dyn SessionHandle>, DeviceError>;
}
