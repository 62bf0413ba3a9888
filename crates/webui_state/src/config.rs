//! State store configuration
//!
//! A [`StateConfiguration`] is fixed once handed to a
//! [`StateManager`](crate::StateManager). Changing behavior means building a
//! new manager.
//!
//! Configurations can be loaded from TOML (or JSON) with either snake_case
//! or camelCase keys:
//!
//! ```
//! use webui_state::{StateConfiguration, StorageType};
//!
//! let config = StateConfiguration::from_toml_str(r#"
//!     enable_persistence = true
//!     storage_type = "localStorage"
//!     enable_debugging = true
//!     max_debug_history = 50
//! "#).unwrap();
//!
//! assert_eq!(config.storage_type(), StorageType::LocalStorage);
//! assert_eq!(config.max_debug_history(), 50);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, StateError};

/// Where the generated client runtime persists state
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum StorageType {
    /// No persistence beyond the page lifetime
    #[default]
    Memory,
    /// `window.localStorage`
    LocalStorage,
    /// `window.sessionStorage`
    SessionStorage,
}

impl StorageType {
    /// The name used in generated code
    pub fn as_str(&self) -> &'static str {
        match self {
            StorageType::Memory => "memory",
            StorageType::LocalStorage => "localStorage",
            StorageType::SessionStorage => "sessionStorage",
        }
    }
}

impl fmt::Display for StorageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StorageType {
    type Err = StateError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "memory" => Ok(StorageType::Memory),
            "localStorage" | "local_storage" => Ok(StorageType::LocalStorage),
            "sessionStorage" | "session_storage" => Ok(StorageType::SessionStorage),
            other => Err(StateError::UnknownStorageType(other.to_string())),
        }
    }
}

impl TryFrom<String> for StorageType {
    type Error = StateError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<StorageType> for String {
    fn from(value: StorageType) -> Self {
        value.as_str().to_string()
    }
}

/// Configuration for a state store and its generated client runtime
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawStateConfiguration")]
pub struct StateConfiguration {
    enable_persistence: bool,
    storage_type: StorageType,
    enable_debugging: bool,
    max_debug_history: usize,
}

impl Default for StateConfiguration {
    fn default() -> Self {
        Self::standard()
    }
}

impl StateConfiguration {
    pub fn new(
        enable_persistence: bool,
        storage_type: StorageType,
        enable_debugging: bool,
        max_debug_history: usize,
    ) -> Self {
        Self {
            enable_persistence,
            storage_type,
            enable_debugging,
            max_debug_history,
        }
    }

    /// Standard configuration: in-memory, no debugging.
    pub fn standard() -> Self {
        Self::new(false, StorageType::Memory, false, 100)
    }

    /// Debug configuration with history recording.
    pub fn debug() -> Self {
        Self::new(false, StorageType::Memory, true, 1_000)
    }

    /// Minimal configuration for low overhead.
    pub fn minimal() -> Self {
        Self::new(false, StorageType::Memory, false, 0)
    }

    /// Testing configuration: history on with a small cap.
    pub fn testing() -> Self {
        Self::new(false, StorageType::Memory, true, 10)
    }

    /// Persist client state in `localStorage`.
    pub fn persistent() -> Self {
        Self::new(true, StorageType::LocalStorage, false, 100)
    }

    /// Load from a flat TOML table
    pub fn from_toml_str(input: &str) -> Result<Self> {
        Ok(toml::from_str(input)?)
    }

    /// Load from a JSON object
    pub fn from_json_str(input: &str) -> Result<Self> {
        Ok(serde_json::from_str(input)?)
    }

    pub fn with_persistence(mut self, storage_type: StorageType) -> Self {
        self.enable_persistence = storage_type != StorageType::Memory;
        self.storage_type = storage_type;
        self
    }

    pub fn with_debugging(mut self, enabled: bool) -> Self {
        self.enable_debugging = enabled;
        self
    }

    pub fn with_max_debug_history(mut self, max: usize) -> Self {
        self.max_debug_history = max;
        self
    }

    pub fn enable_persistence(&self) -> bool {
        self.enable_persistence
    }

    pub fn storage_type(&self) -> StorageType {
        self.storage_type
    }

    pub fn enable_debugging(&self) -> bool {
        self.enable_debugging
    }

    pub fn max_debug_history(&self) -> usize {
        self.max_debug_history
    }
}

/// Unvalidated mirror of [`StateConfiguration`] as it appears in files
#[derive(Deserialize)]
#[serde(default)]
struct RawStateConfiguration {
    #[serde(alias = "enablePersistence")]
    enable_persistence: bool,
    #[serde(alias = "storageType")]
    storage_type: String,
    #[serde(alias = "enableDebugging")]
    enable_debugging: bool,
    #[serde(alias = "maxDebugHistory")]
    max_debug_history: i64,
}

impl Default for RawStateConfiguration {
    fn default() -> Self {
        let standard = StateConfiguration::standard();
        Self {
            enable_persistence: standard.enable_persistence,
            storage_type: standard.storage_type.as_str().to_string(),
            enable_debugging: standard.enable_debugging,
            max_debug_history: standard.max_debug_history as i64,
        }
    }
}

impl TryFrom<RawStateConfiguration> for StateConfiguration {
    type Error = StateError;

    fn try_from(raw: RawStateConfiguration) -> Result<Self> {
        let storage_type = raw.storage_type.parse()?;
        let max_debug_history = usize::try_from(raw.max_debug_history)
            .map_err(|_| StateError::NegativeHistoryCap(raw.max_debug_history))?;
        Ok(Self::new(
            raw.enable_persistence,
            storage_type,
            raw.enable_debugging,
            max_debug_history,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets() {
        let standard = StateConfiguration::default();
        assert!(!standard.enable_persistence());
        assert_eq!(standard.storage_type(), StorageType::Memory);
        assert!(!standard.enable_debugging());
        assert_eq!(standard.max_debug_history(), 100);

        let debug = StateConfiguration::debug();
        assert!(debug.enable_debugging());
        assert_eq!(debug.max_debug_history(), 1_000);
    }

    #[test]
    fn test_builder_methods() {
        let config = StateConfiguration::standard()
            .with_persistence(StorageType::SessionStorage)
            .with_debugging(true)
            .with_max_debug_history(5);
        assert!(config.enable_persistence());
        assert_eq!(config.storage_type(), StorageType::SessionStorage);
        assert!(config.enable_debugging());
        assert_eq!(config.max_debug_history(), 5);

        let memory = config.with_persistence(StorageType::Memory);
        assert!(!memory.enable_persistence());
    }

    #[test]
    fn test_storage_type_parse() {
        assert_eq!("memory".parse::<StorageType>().ok(), Some(StorageType::Memory));
        assert_eq!(
            "local_storage".parse::<StorageType>().ok(),
            Some(StorageType::LocalStorage)
        );
        assert!(matches!(
            "indexedDB".parse::<StorageType>(),
            Err(StateError::UnknownStorageType(name)) if name == "indexedDB"
        ));
    }

    #[test]
    fn test_toml_defaults_missing_fields() {
        let config = StateConfiguration::from_toml_str("enable_debugging = true").unwrap();
        assert!(config.enable_debugging());
        assert_eq!(config.max_debug_history(), 100);
        assert_eq!(config.storage_type(), StorageType::Memory);
    }

    #[test]
    fn test_toml_rejects_unknown_storage_type() {
        let result = StateConfiguration::from_toml_str(r#"storage_type = "cookies""#);
        assert!(result.is_err());
        let message = result.unwrap_err().to_string();
        assert!(message.contains("cookies"), "{message}");
    }

    #[test]
    fn test_rejects_negative_history_cap() {
        let result = StateConfiguration::from_json_str(r#"{"maxDebugHistory": -1}"#);
        let message = result.unwrap_err().to_string();
        assert!(message.contains("must not be negative"), "{message}");
    }

    #[test]
    fn test_json_camel_case() {
        let config = StateConfiguration::from_json_str(
            r#"{
                "enablePersistence": true,
                "storageType": "sessionStorage",
                "enableDebugging": false,
                "maxDebugHistory": 3
            }"#,
        )
        .unwrap();
        assert_eq!(
            config,
            StateConfiguration::new(true, StorageType::SessionStorage, false, 3)
        );
    }

    #[test]
    fn test_serialize_round_trip() {
        let config = StateConfiguration::debug().with_persistence(StorageType::LocalStorage);
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains(r#""storage_type":"localStorage""#));
        assert_eq!(StateConfiguration::from_json_str(&json).unwrap(), config);
    }
}
