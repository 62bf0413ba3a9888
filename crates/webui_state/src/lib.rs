//! WebUI State
//!
//! Server-side reactive state and the client runtime that mirrors it:
//!
//! - **Scopes**: component, shared, global and session partitions
//! - **State Manager**: thread-safe typed store with subscribers, a capped
//!   debug history and JSON import/export
//! - **Configuration**: presets and TOML/JSON loading for persistence and
//!   debugging options
//! - **Script Generation**: a self-contained `WebUIStateManager` JavaScript
//!   runtime plus button and form handler snippets
//!
//! # Example
//!
//! ```rust
//! use webui_state::{ButtonAction, StateConfiguration, StateManager, StateScope};
//!
//! let manager = StateManager::new(StateConfiguration::standard());
//! manager.register_state("counter", 0, StateScope::Component).unwrap();
//!
//! let script = manager.generate_javascript();
//! assert!(script.contains("WebUIStateManager.createState('counter', 0);"));
//!
//! let handler = webui_state::JavaScriptGenerator::default()
//!     .generate_button_handler("incr-btn", "counter", &ButtonAction::Increment);
//! assert!(handler.contains("addEventListener('click'"));
//! ```

pub mod config;
pub mod entry;
pub mod error;
pub mod history;
pub mod manager;
pub mod scope;
pub mod script;

pub use config::{StateConfiguration, StorageType};
pub use entry::StateEntry;
pub use error::{Result, StateError};
pub use history::{DebugHistory, DebugHistoryRecord};
pub use manager::{StateCallback, StateManager, SubscriptionHandle};
pub use scope::StateScope;
pub use script::{
    js_string, json_literal, ButtonAction, JavaScriptGenerator, BINDING_ATTRIBUTE,
    DEFAULT_SERVER_URL, RUNTIME_OBJECT, STORAGE_PREFIX,
};
