#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::Semaphore;

use call_session_controller::credential::{Credential, CredentialSource, parse_token_payload};
use call_session_controller::device::{
    DeviceEvent, DeviceFactory, DeviceOptions, EventKind, Observer, ObserverRegistry,
    SessionHandle,
};
use call_session_controller::error::{CredentialFetchError, DeviceError};

/// Credential source replaying canned `/token` bodies.
pub struct MockCredentials {
    responses: Mutex<VecDeque<Result<Vec<u8>, CredentialFetchError>>>,
    fetches: AtomicUsize,
    gate: Option<Arc<Semaphore>>,
}

impl MockCredentials {
    pub fn with_bodies(bodies: &[&str]) -> Self {
        Self {
            responses: Mutex::new(bodies.iter().map(|b| Ok(b.as_bytes().to_vec())).collect()),
            fetches: AtomicUsize::new(0),
            gate: None,
        }
    }

    pub fn failing(error: CredentialFetchError) -> Self {
        Self {
            responses: Mutex::new(VecDeque::from([Err(error)])),
            fetches: AtomicUsize::new(0),
            gate: None,
        }
    }

    /// Each fetch waits for a permit on `gate` before answering.
    pub fn gated(mut self, gate: Arc<Semaphore>) -> Self {
        self.gate = Some(gate);
        self
    }

    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CredentialSource for MockCredentials {
    async fn fetch(&self) -> Result<Credential, CredentialFetchError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);

        if let Some(gate) = &self.gate {
            gate.acquire()
                .await
                .expect("gate closed")
                .forget();
        }

        let next = self
            .responses
            .lock()
            .unwrap()
            .pop_front()
            .expect("no canned credential response left");
        parse_token_payload(&next?)
    }
}

/// Session handle recording every call made on it.
#[derive(Default)]
pub struct MockHandle {
    pub credential: String,
    pub options: DeviceOptions,
    observers: ObserverRegistry,
    registered: Mutex<Vec<EventKind>>,
    connects: AtomicUsize,
    disconnects: AtomicUsize,
    live: AtomicBool,
}

impl MockHandle {
    /// True when the last request was a connect.
    pub fn is_live(&self) -> bool {
        self.live.load(Ordering::SeqCst)
    }

    pub fn connect_count(&self) -> usize {
        self.connects.load(Ordering::SeqCst)
    }

    pub fn disconnect_count(&self) -> usize {
        self.disconnects.load(Ordering::SeqCst)
    }

    pub fn registered_kinds(&self) -> Vec<EventKind> {
        self.registered.lock().unwrap().clone()
    }

    /// Fires an event as the SDK would.
    pub fn emit(&self, event: DeviceEvent) -> usize {
        self.observers.emit(&event)
    }
}

impl SessionHandle for MockHandle {
    fn on(&self, kind: EventKind, observer: Observer) {
        self.registered.lock().unwrap().push(kind);
        self.observers.register(kind, observer);
    }

    fn connect(&self) {
        self.connects.fetch_add(1, Ordering::SeqCst);
        self.live.store(true, Ordering::SeqCst);
    }

    fn disconnect_all(&self) {
        self.disconnects.fetch_add(1, Ordering::SeqCst);
        self.live.store(false, Ordering::SeqCst);
    }
}

/// Factory handing out [`MockHandle`]s and keeping them for inspection.
#[derive(Default)]
pub struct MockFactory {
    created: Mutex<Vec<Arc<MockHandle>>>,
    fail_with: Option<DeviceError>,
}

impl MockFactory {
    pub fn failing(error: DeviceError) -> Self {
        Self {
            created: Mutex::new(Vec::new()),
            fail_with: Some(error),
        }
    }

    pub fn created(&self) -> Vec<Arc<MockHandle>> {
        self.created.lock().unwrap().clone()
    }

    pub fn create_count(&self) -> usize {
        self.created.lock().unwrap().len()
    }
}

impl DeviceFactory for MockFactory {
    fn create(
        &self,
        credential: &Credential,
        options: &DeviceOptions,
    ) -> Result<Arc<dyn SessionHandle>, DeviceError> {
        if let Some(err) = &self.fail_with {
            return Err(err.clone());
        }

        let handle = Arc::new(MockHandle {
            credential: credential.as_str().to_string(),
            options: options.clone(),
            ..MockHandle::default()
        });
        self.created.lock().unwrap().push(Arc::clone(&handle));
        Ok(handle)
    }
}
