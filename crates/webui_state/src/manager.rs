//! Scoped state store
//!
//! A [`StateManager`] holds typed values in four scopes, notifies
//! subscribers when values are updated, keeps a capped debug history, and
//! round-trips its contents through JSON.
//!
//! # Example
//!
//! ```
//! use webui_state::{StateConfiguration, StateManager, StateScope};
//!
//! let manager = StateManager::new(StateConfiguration::debug());
//! manager.register_state("counter", 0, StateScope::Shared).unwrap();
//!
//! let _handle = manager.subscribe("counter", StateScope::Shared, |value| {
//!     println!("counter is now {}", value);
//! });
//!
//! manager.update_state("counter", 1, StateScope::Shared).unwrap();
//! assert_eq!(manager.get_state::<i32>("counter", StateScope::Shared), Some(1));
//! ```
//!
//! # Locking
//!
//! Entries and history share one mutex. Subscribers live behind a separate
//! lock and are copied out before being called, so a callback may call
//! back into the manager.
//!
//! Callbacks run after the entry lock is released. When two threads update
//! the same key at once, subscribers may see the values in a different order
//! from the one in which the writes were applied; the stored value is always
//! the last write.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::SystemTime;

use indexmap::IndexMap;
use parking_lot::{Mutex, RwLock};
use rustc_hash::FxHashMap;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{debug, trace};

use crate::config::StateConfiguration;
use crate::entry::StateEntry;
use crate::error::{Result, StateError};
use crate::history::{DebugHistory, DebugHistoryRecord};
use crate::scope::StateScope;
use crate::script::JavaScriptGenerator;

/// Callback invoked with the new value after an update
pub type StateCallback = Arc<dyn Fn(&Value) + Send + Sync>;

/// Handle for unsubscribing from state updates
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionHandle {
    id: u64,
    scope: StateScope,
    key: String,
}

impl SubscriptionHandle {
    pub fn scope(&self) -> StateScope {
        self.scope
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

struct Subscriber {
    id: u64,
    callback: StateCallback,
}

type SubscriberKey = (StateScope, String);

/// Entries and history, guarded together
struct StoreInner {
    scopes: IndexMap<StateScope, IndexMap<String, StateEntry>>,
    history: DebugHistory,
}

impl StoreInner {
    fn new(history_capacity: usize) -> Self {
        Self {
            scopes: StateScope::ALL
                .iter()
                .map(|scope| (*scope, IndexMap::new()))
                .collect(),
            history: DebugHistory::new(history_capacity),
        }
    }

    fn scope(&self, scope: StateScope) -> Option<&IndexMap<String, StateEntry>> {
        self.scopes.get(&scope)
    }

    fn scope_mut(&mut self, scope: StateScope) -> &mut IndexMap<String, StateEntry> {
        self.scopes.entry(scope).or_default()
    }

    fn entry(&self, scope: StateScope, key: &str) -> Option<&StateEntry> {
        self.scope(scope).and_then(|entries| entries.get(key))
    }

    /// Insert or overwrite; returns the previous value
    fn put(&mut self, scope: StateScope, key: &str, value: Value) -> Option<Value> {
        let entries = self.scope_mut(scope);
        match entries.get_mut(key) {
            Some(entry) => {
                entry.last_modified = SystemTime::now();
                Some(std::mem::replace(&mut entry.value, value))
            }
            None => {
                entries.insert(key.to_string(), StateEntry::new(scope, key, value));
                None
            }
        }
    }
}

/// Thread-safe, multi-scope state store
pub struct StateManager {
    config: StateConfiguration,
    inner: Mutex<StoreInner>,
    subscribers: RwLock<FxHashMap<SubscriberKey, Vec<Subscriber>>>,
    next_subscription: AtomicU64,
}

impl Default for StateManager {
    fn default() -> Self {
        Self::new(StateConfiguration::default())
    }
}

impl StateManager {
    /// Create an empty store; the configuration is fixed for its lifetime
    pub fn new(config: StateConfiguration) -> Self {
        Self {
            inner: Mutex::new(StoreInner::new(config.max_debug_history())),
            config,
            subscribers: RwLock::new(FxHashMap::default()),
            next_subscription: AtomicU64::new(0),
        }
    }

    pub fn configuration(&self) -> &StateConfiguration {
        &self.config
    }

    // =========================================================================
    // Writes
    // =========================================================================

    /// Insert or overwrite a value without notifying subscribers
    ///
    /// Registration seeds state; only [`update_state`](Self::update_state)
    /// triggers callbacks.
    pub fn register_state<T: Serialize>(
        &self,
        key: impl Into<String>,
        value: T,
        scope: StateScope,
    ) -> Result<()> {
        let key = key.into();
        let value = encode(&key, &value)?;
        self.register_value(&key, value, scope);
        Ok(())
    }

    /// Overwrite a value and notify its subscribers in registration order
    ///
    /// A missing key is inserted.
    pub fn update_state<T: Serialize>(
        &self,
        key: impl Into<String>,
        value: T,
        scope: StateScope,
    ) -> Result<()> {
        let key = key.into();
        let value = encode(&key, &value)?;
        self.update_value(&key, value, scope);
        Ok(())
    }

    /// [`register_state`](Self::register_state) with an already-encoded value
    pub fn register_value(&self, key: &str, value: Value, scope: StateScope) {
        let mut inner = self.inner.lock();
        self.write_locked(&mut inner, scope, key, value);
        debug!(scope = %scope, key, "registered state");
    }

    /// [`update_state`](Self::update_state) with an already-encoded value
    pub fn update_value(&self, key: &str, value: Value, scope: StateScope) {
        {
            let mut inner = self.inner.lock();
            self.write_locked(&mut inner, scope, key, value.clone());
        }
        debug!(scope = %scope, key, "updated state");
        self.notify(scope, key, &value);
    }

    fn write_locked(&self, inner: &mut StoreInner, scope: StateScope, key: &str, value: Value) {
        let record_value = self.config.enable_debugging().then(|| value.clone());
        let previous = inner.put(scope, key, value);
        if let Some(value) = record_value {
            inner.history.push(DebugHistoryRecord {
                key: scope.composite_key(key),
                previous,
                value,
                timestamp: SystemTime::now(),
            });
        }
    }

    /// Remove one entry; subscriptions for the key are kept
    pub fn remove_state(&self, key: &str, scope: StateScope) -> bool {
        let removed = self
            .inner
            .lock()
            .scope_mut(scope)
            .shift_remove(key)
            .is_some();
        if removed {
            debug!(scope = %scope, key, "removed state");
        }
        removed
    }

    /// Remove every entry in `scope`; other scopes are untouched
    pub fn clear_state(&self, scope: StateScope) {
        let count = {
            let mut inner = self.inner.lock();
            let entries = inner.scope_mut(scope);
            let count = entries.len();
            entries.clear();
            count
        };
        debug!(scope = %scope, count, "cleared state scope");
    }

    /// Remove every entry in every scope
    pub fn clear_all(&self) {
        let mut inner = self.inner.lock();
        for entries in inner.scopes.values_mut() {
            entries.clear();
        }
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// Decode a value, or `None` if it is missing or does not fit `T`
    pub fn get_state<T: DeserializeOwned>(&self, key: &str, scope: StateScope) -> Option<T> {
        let inner = self.inner.lock();
        let entry = inner.entry(scope, key)?;
        let decoded = entry.decode();
        if decoded.is_none() {
            trace!(scope = %scope, key, "state value does not match requested type");
        }
        decoded
    }

    /// The raw JSON value
    pub fn get_value(&self, key: &str, scope: StateScope) -> Option<Value> {
        self.inner
            .lock()
            .entry(scope, key)
            .map(|entry| entry.value.clone())
    }

    pub fn get_entry(&self, key: &str, scope: StateScope) -> Option<StateEntry> {
        self.inner.lock().entry(scope, key).cloned()
    }

    pub fn contains(&self, key: &str, scope: StateScope) -> bool {
        self.inner.lock().entry(scope, key).is_some()
    }

    /// Keys in `scope`, in insertion order
    pub fn keys(&self, scope: StateScope) -> Vec<String> {
        self.inner
            .lock()
            .scope(scope)
            .map(|entries| entries.keys().cloned().collect())
            .unwrap_or_default()
    }

    /// Every entry, scopes in declaration order, keys in insertion order
    pub fn snapshot(&self) -> Vec<StateEntry> {
        self.inner
            .lock()
            .scopes
            .values()
            .flat_map(|entries| entries.values().cloned())
            .collect()
    }

    // =========================================================================
    // Subscriptions
    // =========================================================================

    /// Call `callback` with the new value on every update of `(scope, key)`
    pub fn subscribe<F>(
        &self,
        key: impl Into<String>,
        scope: StateScope,
        callback: F,
    ) -> SubscriptionHandle
    where
        F: Fn(&Value) + Send + Sync + 'static,
    {
        let key = key.into();
        let id = self.next_subscription.fetch_add(1, Ordering::Relaxed);
        self.subscribers
            .write()
            .entry((scope, key.clone()))
            .or_default()
            .push(Subscriber {
                id,
                callback: Arc::new(callback),
            });

        SubscriptionHandle { id, scope, key }
    }

    /// Like [`subscribe`](Self::subscribe) but decodes first; updates that
    /// do not decode to `T` are skipped
    pub fn subscribe_typed<T, F>(
        &self,
        key: impl Into<String>,
        scope: StateScope,
        callback: F,
    ) -> SubscriptionHandle
    where
        T: DeserializeOwned,
        F: Fn(T) + Send + Sync + 'static,
    {
        self.subscribe(key, scope, move |value| {
            if let Ok(decoded) = T::deserialize(value) {
                callback(decoded);
            }
        })
    }

    /// Stop notifying a subscriber; returns whether it was registered
    pub fn unsubscribe(&self, handle: &SubscriptionHandle) -> bool {
        let mut subscribers = self.subscribers.write();
        let map_key = (handle.scope, handle.key.clone());
        let Some(subs) = subscribers.get_mut(&map_key) else {
            return false;
        };
        let before = subs.len();
        subs.retain(|sub| sub.id != handle.id);
        let removed = subs.len() != before;
        if subs.is_empty() {
            subscribers.remove(&map_key);
        }
        removed
    }

    pub fn subscriber_count(&self, key: &str, scope: StateScope) -> usize {
        self.subscribers
            .read()
            .get(&(scope, key.to_string()))
            .map_or(0, Vec::len)
    }

    fn notify(&self, scope: StateScope, key: &str, value: &Value) {
        let callbacks: Vec<StateCallback> = self
            .subscribers
            .read()
            .get(&(scope, key.to_string()))
            .map(|subs| subs.iter().map(|sub| sub.callback.clone()).collect())
            .unwrap_or_default();

        if callbacks.is_empty() {
            return;
        }

        trace!(scope = %scope, key, count = callbacks.len(), "notifying subscribers");
        for callback in callbacks {
            callback(value);
        }
    }

    // =========================================================================
    // Debug history
    // =========================================================================

    /// Recorded changes, oldest first
    pub fn debug_history(&self) -> Vec<DebugHistoryRecord> {
        self.inner.lock().history.records().cloned().collect()
    }

    pub fn clear_debug_history(&self) {
        self.inner.lock().history.clear();
    }

    // =========================================================================
    // JSON import / export
    // =========================================================================

    /// Serialize every scope as `{ scope: { key: value } }`
    ///
    /// Scopes appear in declaration order and keys in insertion order.
    pub fn export_state_json(&self) -> String {
        let inner = self.inner.lock();
        let mut root = Map::new();
        for (scope, entries) in &inner.scopes {
            let object: Map<String, Value> = entries
                .iter()
                .map(|(key, entry)| (key.clone(), entry.value.clone()))
                .collect();
            root.insert(scope.as_str().to_string(), Value::Object(object));
        }
        Value::Object(root).to_string()
    }

    /// Merge a snapshot produced by [`export_state_json`](Self::export_state_json)
    ///
    /// Matching entries are overwritten and unrelated entries are kept.
    /// Imported values are registered, so subscribers are not notified. The
    /// whole input is validated before anything is written. Returns the
    /// number of entries imported.
    pub fn import_state_json(&self, json: &str) -> Result<usize> {
        let root: Value = serde_json::from_str(json)?;
        let Value::Object(scopes) = root else {
            return Err(StateError::InvalidSnapshot(
                "top level must be an object keyed by scope".to_string(),
            ));
        };

        let mut staged = Vec::new();
        for (scope_name, entries) in scopes {
            let scope: StateScope = scope_name.parse()?;
            let Value::Object(entries) = entries else {
                return Err(StateError::InvalidSnapshot(format!(
                    "scope '{}' must be an object keyed by state key",
                    scope_name
                )));
            };
            staged.extend(entries.into_iter().map(|(key, value)| (scope, key, value)));
        }

        let count = staged.len();
        {
            let mut inner = self.inner.lock();
            for (scope, key, value) in staged {
                self.write_locked(&mut inner, scope, &key, value);
            }
        }
        debug!(count, "imported state snapshot");
        Ok(count)
    }

    // =========================================================================
    // Client runtime
    // =========================================================================

    /// Generate the client runtime for the current snapshot
    pub fn generate_javascript(&self) -> String {
        self.generate_javascript_with(&JavaScriptGenerator::default())
    }

    /// Generate the client runtime with a custom generator
    pub fn generate_javascript_with(&self, generator: &JavaScriptGenerator) -> String {
        generator.generate_complete_script(&self.snapshot(), &self.config)
    }
}

fn encode<T: Serialize>(key: &str, value: &T) -> Result<Value> {
    serde_json::to_value(value).map_err(|source| StateError::Encode {
        key: key.to_string(),
        source,
    })
}
