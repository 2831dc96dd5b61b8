//! Session-scoped key-value storage
//!
//! Stand-in for the browser's sessionStorage: opaque string blobs under
//! fixed keys, alive for one browsing session. Embedders supply their own
//! backing; tests and headless use get the in-memory implementation.

use std::collections::HashMap;
use std::sync::Mutex;

/// Session-scoped string key-value slot
pub trait SessionStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// In-memory session storage
#[derive(Debug, Default)]
pub struct MemorySession {
    slots: Mutex<HashMap<String, String>>,
}

impl MemorySession {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySession {
    fn get(&self, key: &str) -> Option<String> {
        self.slots.lock().unwrap().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.slots.lock().unwrap().insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.slots.lock().unwrap().remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_get_remove() {
        let store = MemorySession::new();
        assert_eq!(store.get("cart"), None);

        store.set("cart", "[]");
        assert_eq!(store.get("cart").as_deref(), Some("[]"));

        store.remove("cart");
        assert_eq!(store.get("cart"), None);
    }
}
