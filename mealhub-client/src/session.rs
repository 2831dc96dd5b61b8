//! Session identity and session lifecycle
//!
//! The identity record is persisted as a session-scoped JSON blob so a full
//! page reload within the same browsing session restores the login state.
//! A missing or corrupted blob means logged out, never a failure.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::cart::CartStore;
use crate::storage::SessionStore;
use shared::models::user::{AdminInfo, UserInfo};

/// Storage key for the persisted identity blob
pub const IDENTITY_STORAGE_KEY: &str = "session_identity";

/// The logged-in identity for this browsing session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SessionIdentity {
    Customer(UserInfo),
    Admin(AdminInfo),
}

impl SessionIdentity {
    pub fn is_customer(&self) -> bool {
        matches!(self, SessionIdentity::Customer(_))
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, SessionIdentity::Admin(_))
    }
}

/// Holder of the session's logged-in identity
///
/// Gates cart mutation (customer) and admin catalog operations (admin).
pub struct IdentityStore {
    storage: Arc<dyn SessionStore>,
    current: Option<SessionIdentity>,
}

impl IdentityStore {
    /// Restore the identity from session storage
    pub fn load(storage: Arc<dyn SessionStore>) -> Self {
        let current = match storage.get(IDENTITY_STORAGE_KEY) {
            Some(blob) => match serde_json::from_str(&blob) {
                Ok(identity) => Some(identity),
                Err(e) => {
                    tracing::warn!(error = %e, "Discarding corrupted identity blob");
                    storage.remove(IDENTITY_STORAGE_KEY);
                    None
                }
            },
            None => None,
        };

        Self { storage, current }
    }

    pub fn current(&self) -> Option<&SessionIdentity> {
        self.current.as_ref()
    }

    /// The customer record, if a customer is logged in
    pub fn customer(&self) -> Option<&UserInfo> {
        match self.current.as_ref()? {
            SessionIdentity::Customer(user) => Some(user),
            SessionIdentity::Admin(_) => None,
        }
    }

    /// The admin record, if an admin is logged in
    pub fn admin(&self) -> Option<&AdminInfo> {
        match self.current.as_ref()? {
            SessionIdentity::Admin(admin) => Some(admin),
            SessionIdentity::Customer(_) => None,
        }
    }

    /// Record a successful login/signup
    pub fn login(&mut self, identity: SessionIdentity) {
        match serde_json::to_string(&identity) {
            Ok(blob) => self.storage.set(IDENTITY_STORAGE_KEY, &blob),
            Err(e) => tracing::warn!(error = %e, "Failed to persist identity"),
        }
        tracing::info!(admin = identity.is_admin(), "Session identity set");
        self.current = Some(identity);
    }

    /// Destroy the identity record
    pub fn logout(&mut self) {
        self.current = None;
        self.storage.remove(IDENTITY_STORAGE_KEY);
        tracing::info!("Session identity cleared");
    }
}

/// The commerce session: identity plus cart, with a defined lifecycle
///
/// Created once per browsing session (`start`), restored from session
/// storage; `logout` tears down both the identity and the cart.
pub struct CommerceSession {
    pub identity: IdentityStore,
    pub cart: CartStore,
}

impl CommerceSession {
    /// Initialize the session from storage, tolerating absent state
    pub fn start(storage: Arc<dyn SessionStore>) -> Self {
        Self {
            identity: IdentityStore::load(storage.clone()),
            cart: CartStore::load(storage),
        }
    }

    /// Explicit logout: clears the identity and empties the cart
    pub fn logout(&mut self) {
        self.identity.logout();
        self.cart.clear();
    }
}
