//! Typed client for the remote data/auth service the portal delegates to.
//!
//! The service is an opaque collaborator: it owns all persistence and
//! authentication state. This crate exposes the slice of its contract the
//! portal consumes — session operations, a password-reset request, and
//! row-level record operations over two named collections — plus the staff
//! workflows composed from them.

mod auth;
mod config;
mod http;
mod records;
pub mod staff;

pub use auth::SessionEvents;
pub use config::ServiceConfig;
pub use records::{Collection, SelectQuery};
pub use staff::{DashboardData, SignInOutcome, StaffPortal};

use futures::channel::mpsc;
use shared_types::Session;
use std::sync::{Arc, Mutex};

/// Handle to the remote service. Clones share the same session slot and
/// subscriber list, so any clone observes sign-ins performed through another.
#[derive(Clone)]
pub struct PortalClient {
    http: reqwest::Client,
    config: ServiceConfig,
    session: Arc<Mutex<Option<Session>>>,
    subscribers: Arc<Mutex<Vec<mpsc::UnboundedSender<Option<Session>>>>>,
}

impl PortalClient {
    pub fn new(config: ServiceConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
            session: Arc::new(Mutex::new(None)),
            subscribers: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// The session currently held by this client, if any.
    pub fn session(&self) -> Option<Session> {
        self.session.lock().expect("session lock poisoned").clone()
    }

    /// Store a new session value and notify every live subscriber.
    ///
    /// Subscribers whose receiving end has been dropped are pruned here, so
    /// an unsubscribe is simply dropping the `SessionEvents` handle.
    pub(crate) fn set_session(&self, session: Option<Session>) {
        *self.session.lock().expect("session lock poisoned") = session.clone();
        let mut subscribers = self.subscribers.lock().expect("subscriber lock poisoned");
        subscribers.retain(|tx| tx.unbounded_send(session.clone()).is_ok());
    }

    /// Subscribe to session-change notifications. Every change to the
    /// session slot (sign-in, sign-up, sign-out, restore) delivers the new
    /// session value; dropping the returned handle unsubscribes.
    pub fn on_session_change(&self) -> SessionEvents {
        let (tx, rx) = mpsc::unbounded();
        self.subscribers
            .lock()
            .expect("subscriber lock poisoned")
            .push(tx);
        SessionEvents::new(rx)
    }

    /// Record operations over a named collection.
    pub fn collection(&self, name: &'static str) -> Collection<'_> {
        Collection::new(self, name)
    }
}
