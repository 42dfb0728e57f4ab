use log::{debug, error, info, warn};
use std::sync::Arc;
use tokio::sync::Mutex;

use super::{ControllerState, register_diagnostic_observers};
use crate::config::{AppConfig, RestartPolicy};
use crate::credential::{CredentialSource, HttpCredentialSource};
use crate::device::{DeviceFactory, DeviceOptions, SessionHandle};
use crate::error::ControllerError;

/// Mediates the start/end triggers and a single lazily built session handle.
///
/// - At most one handle exists per controller.
/// - The credential is fetched only when no handle exists.
/// - `end` never fails; with no handle it does nothing.
pub struct CallSessionController {
    credentials: Arc<dyn CredentialSource>,
    factory: Arc<dyn DeviceFactory>,
    options: DeviceOptions,
    restart_policy: RestartPolicy,
    handle: Mutex<Option<Arc<dyn SessionHandle>>>,
    // Serializes initialization so concurrent starts fetch only once.
    // Never taken by `end`, which keeps hangup responsive during a fetch.
    init_lock: Mutex<()>,
}

impl CallSessionController {
    pub fn new(
        credentials: Arc<dyn CredentialSource>,
        factory: Arc<dyn DeviceFactory>,
        options: DeviceOptions,
    ) -> Self {
        Self {
            credentials,
            factory,
            options,
            restart_policy: RestartPolicy::default(),
            handle: Mutex::new(None),
            init_lock: Mutex::new(()),
        }
    }

    /// Builds a controller fetching credentials over HTTP from `token_url`.
    pub fn from_config(
        config: &AppConfig,
        factory: Arc<dyn DeviceFactory>,
    ) -> Result<Self, ControllerError> {
        let credentials = HttpCredentialSource::new(&config.token_url)?;
        Ok(Self::new(Arc::new(credentials), factory, config.device.clone())
            .with_restart_policy(config.restart_policy))
    }

    pub fn with_restart_policy(mut self, policy: RestartPolicy) -> Self {
        self.restart_policy = policy;
        self
    }

    pub fn restart_policy(&self) -> RestartPolicy {
        self.restart_policy
    }

    pub fn options(&self) -> &DeviceOptions {
        &self.options
    }

    pub async fn state(&self) -> ControllerState {
        ControllerState::from_handle_present(self.has_handle().await)
    }

    pub async fn has_handle(&self) -> bool {
        self.handle.lock().await.is_some()
    }

    /// Places a call.
    ///
    /// Builds the session handle first if none exists, then requests connect
    /// on it. The connect outcome is reported only through the handle's
    /// observers.
    pub async fn start(&self) -> Result<(), ControllerError> {
        let _init = self.init_lock.lock().await;

        let mut slot = self.handle.lock().await;
        if slot.is_none() {
            // Released across the fetch so `end` stays a no-op meanwhile.
            drop(slot);
            let handle = self.initialize().await?;
            slot = self.handle.lock().await;
            if slot.is_some() {
                // Only `start` installs handles and it holds `init_lock`.
                warn!("Session handle appeared during initialization, replacing it");
            }
            *slot = Some(handle);
        } else {
            debug!("Reusing existing session handle");
        }

        // Connect under the slot guard so `end`/`reset` cannot take the
        // handle between the check and the request.
        if let Some(handle) = slot.as_ref() {
            info!("Requesting connect on session handle");
            handle.connect();
        }
        Ok(())
    }

    async fn initialize(&self) -> Result<Arc<dyn SessionHandle>, ControllerError> {
        info!("No session handle yet, fetching credential");

        let credential = self.credentials.fetch().await.map_err(|e| {
            error!("Failed to fetch credential: {}", e);
            e
        })?;
        debug!("Credential received: {:?}", credential);

        let handle = self.factory.create(&credential, &self.options).map_err(|e| {
            error!("Failed to construct session handle: {}", e);
            e
        })?;

        register_diagnostic_observers(handle.as_ref());

        info!(
            "Session handle created (codecs: {:?}, ringing state: {})",
            self.options.codec_names(),
            self.options.enable_ringing_state
        );
        Ok(handle)
    }

    /// Hangs up every active connection on the current handle.
    ///
    /// Under [`RestartPolicy::Recreate`] the handle is also dropped.
    pub async fn end(&self) {
        let mut slot = self.handle.lock().await;

        match slot.as_ref() {
            Some(handle) => {
                info!("Disconnecting all connections on session handle");
                handle.disconnect_all();
            }
            None => {
                debug!("No session handle, nothing to disconnect");
                return;
            }
        }

        if self.restart_policy == RestartPolicy::Recreate {
            slot.take();
            debug!("Session handle dropped, next start fetches a new credential");
        }
    }

    /// Tears the controller down to `Uninitialized`.
    ///
    /// Disconnects and drops the current handle. Returns whether one existed.
    pub async fn reset(&self) -> bool {
        let mut slot = self.handle.lock().await;

        match slot.take() {
            Some(handle) => {
                info!("Resetting controller, dropping session handle");
                handle.disconnect_all();
                true
            }
            None => {
                debug!("Reset requested with no session handle");
                false
            }
        }
    }
}
