//! Application state and the startup readiness gate

use std::sync::Arc;

use tokio::sync::watch;

use jwks_core::repositories::KeyRepository;
use jwks_core::services::jwks::JwksPublisher;
use jwks_core::services::keys::KeySelector;
use jwks_core::services::token::TokenService;

/// Shared application state passed to every handler
///
/// An explicit context object instead of process globals: the store handle
/// (through the services) and the readiness gate travel together.
pub struct AppState<R: KeyRepository> {
    pub selector: KeySelector<R>,
    pub token_service: TokenService,
    pub publisher: JwksPublisher<R>,
    pub readiness: ReadinessGate,
}

impl<R: KeyRepository> AppState<R> {
    /// Wire the services over one repository handle
    pub fn new(repository: Arc<R>, readiness: ReadinessGate) -> Self {
        Self {
            selector: KeySelector::new(repository.clone()),
            token_service: TokenService::new(),
            publisher: JwksPublisher::new(KeySelector::new(repository)),
            readiness,
        }
    }
}

/// Create a linked readiness handle/gate pair
///
/// The handle stays with startup code; the gate is cloned into the app
/// state. Requests await the gate and are released in admission order once
/// `mark_ready` is called.
pub fn readiness_channel() -> (ReadinessHandle, ReadinessGate) {
    let (tx, rx) = watch::channel(false);
    (ReadinessHandle { tx }, ReadinessGate { rx })
}

/// Startup-side handle that resolves the readiness gate exactly once
pub struct ReadinessHandle {
    tx: watch::Sender<bool>,
}

impl ReadinessHandle {
    /// Release all queued requests
    ///
    /// Called after schema initialization and lifecycle invariant
    /// enforcement have both succeeded.
    pub fn mark_ready(&self) {
        let _ = self.tx.send(true);
    }
}

/// Request-side gate that holds handlers until startup completes
///
/// There is deliberately no timeout: requests queue indefinitely while
/// startup is in flight.
#[derive(Clone)]
pub struct ReadinessGate {
    rx: watch::Receiver<bool>,
}

impl ReadinessGate {
    /// Wait until the service is ready
    pub async fn wait(&self) {
        let mut rx = self.rx.clone();
        while !*rx.borrow() {
            if rx.changed().await.is_err() {
                // Startup handle dropped; nothing left to wait for
                break;
            }
        }
    }

    /// Non-blocking readiness probe
    pub fn is_ready(&self) -> bool {
        *self.rx.borrow()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_gate_opens_once_marked_ready() {
        let (handle, gate) = readiness_channel();
        assert!(!gate.is_ready());

        let waiter = {
            let gate = gate.clone();
            tokio::spawn(async move { gate.wait().await })
        };

        handle.mark_ready();
        waiter.await.unwrap();
        assert!(gate.is_ready());
    }

    #[tokio::test]
    async fn test_wait_returns_immediately_when_already_ready() {
        let (handle, gate) = readiness_channel();
        handle.mark_ready();
        gate.wait().await;
    }
}
