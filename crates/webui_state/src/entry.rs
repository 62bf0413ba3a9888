//! Stored state values

use std::time::SystemTime;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::scope::StateScope;

/// A single named value in the store
///
/// Values are kept in their JSON form and decoded to the caller's type on
/// read, so one store can hold heterogeneous values.
#[derive(Clone, Debug, PartialEq)]
pub struct StateEntry {
    pub scope: StateScope,
    pub key: String,
    pub value: Value,
    pub last_modified: SystemTime,
}

impl StateEntry {
    pub fn new(scope: StateScope, key: impl Into<String>, value: Value) -> Self {
        Self {
            scope,
            key: key.into(),
            value,
            last_modified: SystemTime::now(),
        }
    }

    /// Decode the stored value, or `None` if it does not fit `T`
    pub fn decode<T: DeserializeOwned>(&self) -> Option<T> {
        T::deserialize(&self.value).ok()
    }

    /// `"scope.key"`
    pub fn composite_key(&self) -> String {
        self.scope.composite_key(&self.key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_matching_and_mismatched_types() {
        let entry = StateEntry::new(StateScope::Component, "count", json!(3));
        assert_eq!(entry.decode::<i32>(), Some(3));
        assert_eq!(entry.decode::<f64>(), Some(3.0));
        assert_eq!(entry.decode::<String>(), None);
        assert_eq!(entry.decode::<bool>(), None);
        assert_eq!(entry.composite_key(), "component.count");
    }
}
