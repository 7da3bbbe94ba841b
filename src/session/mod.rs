pub mod exchange;

pub use exchange::{AuthError, CredentialExchange, HttpCredentialExchange, OfflineExchange};

use std::sync::{Arc, RwLock};
use tracing::{error, info};

/// A signed-in session as handed back by the identity exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub display_name: Option<String>,
}

/// Explicit session-state container, created once at app start and injected
/// wherever the signed-in user is read. Replaces the ambient auth singleton
/// of the original design with a defined init/teardown lifecycle.
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<Option<Session>>>,
}

impl SessionStore {
    /// Init at app start: nobody is signed in yet.
    pub fn start() -> Self {
        Self::default()
    }

    pub fn sign_in(&self, session: Session) {
        let mut guard = self.inner.write().expect("session lock poisoned");
        *guard = Some(session);
    }

    /// Teardown: discard the session.
    pub fn sign_out(&self) {
        let mut guard = self.inner.write().expect("session lock poisoned");
        *guard = None;
    }

    pub fn current(&self) -> Option<Session> {
        self.inner.read().expect("session lock poisoned").clone()
    }

    pub fn is_signed_in(&self) -> bool {
        self.inner.read().expect("session lock poisoned").is_some()
    }
}

/// Gate in front of the protected board: exchanges a third-party credential
/// for a session and records it in the store.
pub struct SessionGate {
    store: SessionStore,
    exchange: Arc<dyn CredentialExchange>,
}

impl SessionGate {
    pub fn new(store: SessionStore, exchange: Arc<dyn CredentialExchange>) -> Self {
        Self { store, exchange }
    }

    /// Attempt sign-in. A missing credential or a rejected exchange leaves
    /// the store empty and surfaces nothing beyond a diagnostic log; the
    /// caller stays on the sign-in view.
    pub async fn sign_in(&self, credential: Option<&str>) -> bool {
        let Some(credential) = credential else {
            error!("identity credential is missing");
            return false;
        };

        match self.exchange.exchange(credential).await {
            Ok(session) => {
                info!(
                    display_name = session.display_name.as_deref().unwrap_or("<none>"),
                    "signed in"
                );
                self.store.sign_in(session);
                true
            }
            Err(err) => {
                error!("sign-in failed: {err}");
                false
            }
        }
    }
}
