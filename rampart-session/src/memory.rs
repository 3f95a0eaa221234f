//! In-memory session scope.

use crate::traits::SessionScope;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::RwLock;

/// In-process [`SessionScope`] implementation.
///
/// Backs request-scoped sessions and every test in the workspace. Interior
/// locking makes each single-key operation atomic so the scope can be shared
/// as `Arc<dyn SessionScope>`.
///
/// # Examples
///
/// ```rust
/// use rampart_session::{MemorySession, SessionScope};
/// use serde_json::Value;
///
/// let session = MemorySession::new();
/// session.bag_set("obfuscated_forms", "login", Value::from("blob"));
/// assert!(session.bag_get("obfuscated_forms", "login").is_some());
///
/// session.bag_clear("obfuscated_forms");
/// assert!(session.bag_get("obfuscated_forms", "login").is_none());
/// ```
#[derive(Debug, Default)]
pub struct MemorySession {
    meta: RwLock<HashMap<String, Value>>,
    bags: RwLock<HashMap<String, HashMap<String, Value>>>,
}

impl MemorySession {
    /// Create an empty session scope.
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionScope for MemorySession {
    fn get(&self, key: &str) -> Option<Value> {
        self.meta.read().unwrap().get(key).cloned()
    }

    fn set(&self, key: &str, value: Value) {
        self.meta.write().unwrap().insert(key.to_string(), value);
    }

    fn delete(&self, key: &str) {
        self.meta.write().unwrap().remove(key);
    }

    fn bag_get(&self, bag: &str, key: &str) -> Option<Value> {
        self.bags
            .read()
            .unwrap()
            .get(bag)
            .and_then(|entries| entries.get(key))
            .cloned()
    }

    fn bag_set(&self, bag: &str, key: &str, value: Value) {
        self.bags
            .write()
            .unwrap()
            .entry(bag.to_string())
            .or_default()
            .insert(key.to_string(), value);
    }

    fn bag_delete(&self, bag: &str, key: &str) {
        if let Some(entries) = self.bags.write().unwrap().get_mut(bag) {
            entries.remove(key);
        }
    }

    fn bag_clear(&self, bag: &str) {
        self.bags.write().unwrap().remove(bag);
    }
}
