//! Session scope trait definition.

use serde_json::Value;

/// Scoped key-value mapping for the current session, with named
/// sub-namespaces ("bags").
///
/// Every read and write is atomic at the granularity of one key or one bag
/// entry; no multi-key transaction is offered. Concurrency discipline beyond
/// that is the implementation's concern.
pub trait SessionScope: Send + Sync {
    /// Get a value from the scoped mapping.
    fn get(&self, key: &str) -> Option<Value>;

    /// Set a value in the scoped mapping, replacing any existing one.
    fn set(&self, key: &str, value: Value);

    /// Delete a value from the scoped mapping.
    fn delete(&self, key: &str);

    /// Get a value from the named bag.
    fn bag_get(&self, bag: &str, key: &str) -> Option<Value>;

    /// Set a value in the named bag, replacing any existing one.
    fn bag_set(&self, bag: &str, key: &str, value: Value);

    /// Delete a value from the named bag.
    fn bag_delete(&self, bag: &str, key: &str);

    /// Drop the named bag and everything in it.
    fn bag_clear(&self, bag: &str);
}
