//! `webui.toml` handling
//!
//! ```toml
//! [state]
//! enable_persistence = true
//! storage_type = "localStorage"
//! enable_debugging = false
//! max_debug_history = 100
//!
//! [script]
//! server_url = "ws://localhost:8080/ws"
//! ```
//!
//! Both tables are optional. A file without a `[state]` table is read as a
//! flat state configuration.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use webui_state::StateConfiguration;

/// Configuration stored in webui.toml
#[derive(Debug, Default, Deserialize)]
pub struct WebuiConfig {
    #[serde(default)]
    pub state: StateConfiguration,
    #[serde(default)]
    pub script: ScriptConfig,
}

/// Client runtime generation settings
#[derive(Debug, Default, Deserialize)]
pub struct ScriptConfig {
    /// WebSocket endpoint for server sync
    #[serde(default, alias = "serverUrl")]
    pub server_url: Option<String>,
}

impl WebuiConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        Self::parse(&content).with_context(|| format!("Failed to parse {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        let table: toml::Table = toml::from_str(content)?;
        if table.contains_key("state") || table.contains_key("script") {
            return Ok(toml::from_str(content)?);
        }

        Ok(Self {
            state: StateConfiguration::from_toml_str(content)?,
            script: ScriptConfig::default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use webui_state::StorageType;

    #[test]
    fn test_sectioned_config() {
        let config = WebuiConfig::parse(
            r#"
            [state]
            enable_debugging = true
            storage_type = "sessionStorage"

            [script]
            server_url = "wss://example.com/ws"
            "#,
        )
        .unwrap();
        assert!(config.state.enable_debugging());
        assert_eq!(config.state.storage_type(), StorageType::SessionStorage);
        assert_eq!(config.script.server_url.as_deref(), Some("wss://example.com/ws"));
    }

    #[test]
    fn test_flat_config() {
        let config = WebuiConfig::parse("maxDebugHistory = 7").unwrap();
        assert_eq!(config.state.max_debug_history(), 7);
        assert!(config.script.server_url.is_none());
    }

    #[test]
    fn test_invalid_storage_type_is_reported() {
        let err = WebuiConfig::parse("[state]\nstorage_type = \"cookies\"").unwrap_err();
        assert!(format!("{err:#}").contains("cookies"));
    }
}
