//! Loopback session handle
//!
//! In-process stand-in for a voice SDK. It performs no media work, it only
//! walks the ready/connect/disconnect lifecycle and reports it to observers,
//! which is enough to drive the controller from the console binary.

use log::debug;
use std::sync::{Arc, Mutex, PoisonError};

use super::{
    DeviceEvent, DeviceFactory, DeviceOptions, EventKind, Observer, ObserverRegistry,
    SessionHandle,
};
use crate::credential::Credential;
use crate::error::{ConnectionError, DeviceError};

#[derive(Debug, Default)]
struct LoopbackState {
    ready: bool,
    active: bool,
    connects: usize,
    disconnects: usize,
}

/// Session handle that connects to nothing.
#[derive(Debug)]
pub struct LoopbackDevice {
    credential: Credential,
    options: DeviceOptions,
    observers: ObserverRegistry,
    state: Mutex<LoopbackState>,
}

impl LoopbackDevice {
    pub fn new(credential: Credential, options: DeviceOptions) -> Self {
        Self {
            credential,
            options,
            observers: ObserverRegistry::new(),
            state: Mutex::new(LoopbackState::default()),
        }
    }

    pub fn credential(&self) -> &Credential {
        &self.credential
    }

    pub fn options(&self) -> &DeviceOptions {
        &self.options
    }

    pub fn is_active(&self) -> bool {
        self.lock_state().active
    }

    /// Number of `connect` requests received.
    pub fn connect_count(&self) -> usize {
        self.lock_state().connects
    }

    /// Number of `disconnect_all` requests received.
    pub fn disconnect_count(&self) -> usize {
        self.lock_state().disconnects
    }

    pub fn observer_count(&self, kind: EventKind) -> usize {
        self.observers.count(kind)
    }

    /// Reports an SDK-level failure to the error observers.
    pub fn report_error(&self, error: ConnectionError) {
        self.observers.emit(&DeviceEvent::Error(error));
    }

    fn lock_state(&self) -> std::sync::MutexGuard<'_, LoopbackState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl SessionHandle for LoopbackDevice {
    fn on(&self, kind: EventKind, observer: Observer) {
        self.observers.register(kind, observer);
    }

    fn connect(&self) {
        let mut pending = Vec::new();
        {
            let mut state = self.lock_state();
            state.connects += 1;
            if !state.ready {
                state.ready = true;
                pending.push(DeviceEvent::Ready);
            }
            if state.active {
                debug!("Loopback device already has an active call");
            } else {
                state.active = true;
                pending.push(DeviceEvent::Connect);
            }
        }

        for event in &pending {
            self.observers.emit(event);
        }
    }

    fn disconnect_all(&self) {
        let was_active = {
            let mut state = self.lock_state();
            state.disconnects += 1;
            std::mem::replace(&mut state.active, false)
        };

        if was_active {
            self.observers.emit(&DeviceEvent::Disconnect);
        }
    }
}

/// Factory producing [`LoopbackDevice`]s.
#[derive(Debug, Clone, Default)]
pub struct LoopbackFactory {
    reject_empty_credentials: bool,
}

impl LoopbackFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Refuse to build a device from a blank token, as a real SDK would.
    pub fn rejecting_empty_credentials() -> Self {
        Self {
            reject_empty_credentials: true,
        }
    }
}

impl DeviceFactory for LoopbackFactory {
    fn create(
        &self,
        credential: &Credential,
        options: &DeviceOptions,
    ) -> Result<Arc<dyn SessionHandle>, DeviceError> {
        if self.reject_empty_credentials && credential.as_str().trim().is_empty() {
            return Err(DeviceError::Construction("empty access token".into()));
        }

        debug!(
            "Creating loopback device (codecs: {:?}, ringing: {})",
            options.codec_names(),
            options.enable_ringing_state
        );
        Ok(Arc::new(LoopbackDevice::new(credential.clone(), options.clone())))
    }
}
