//! Client runtime generation
//!
//! [`JavaScriptGenerator`] turns a state snapshot and a
//! [`StateConfiguration`] into a self-contained JavaScript program that
//! owns the client-side copy of the state, binds it to the DOM and listens
//! for server pushes. Output is plain text assembled from templates and is
//! deterministic for a given input.
//!
//! The program has five parts, always in this order:
//!
//! 1. the `WebUIStateManager` runtime object
//! 2. configuration assignments
//! 3. one `createState` call per entry
//! 4. a `DOMContentLoaded` hook that binds `[data-webui-state]` elements and
//!    opens server sync
//! 5. the debug dump function, only when debugging is enabled
//!
//! Values are embedded as JSON. A value that cannot be encoded becomes
//! `null` and a warning is logged; generation itself never fails.

mod handlers;
mod runtime;

use std::fmt::Write;

use rustc_hash::FxHashMap;
use serde::Serialize;
use tracing::{debug, warn};

use crate::config::StateConfiguration;
use crate::entry::StateEntry;
use crate::scope::StateScope;

pub use handlers::ButtonAction;
pub use runtime::{BINDING_ATTRIBUTE, DEFAULT_SERVER_URL, RUNTIME_OBJECT, STORAGE_PREFIX};

/// Generates the client runtime and per-element handler snippets
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JavaScriptGenerator {
    server_url: String,
}

impl Default for JavaScriptGenerator {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.to_string(),
        }
    }
}

impl JavaScriptGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the WebSocket endpoint used for server sync
    pub fn with_server_url(mut self, url: impl Into<String>) -> Self {
        self.server_url = url.into();
        self
    }

    pub fn server_url(&self) -> &str {
        &self.server_url
    }

    /// Generate the complete program for `states`
    ///
    /// The client id of an entry is its key. When two scopes hold the same
    /// key the later scope's `createState` runs last and wins.
    pub fn generate_complete_script(
        &self,
        states: &[StateEntry],
        config: &StateConfiguration,
    ) -> String {
        let mut script = String::with_capacity(runtime::RUNTIME.len() + 256 * (states.len() + 4));

        script.push_str(runtime::RUNTIME);
        script.push('\n');

        script.push_str(&configuration_block(config));
        script.push('\n');

        let mut seen: FxHashMap<&str, StateScope> = FxHashMap::default();
        for entry in states {
            if let Some(previous) = seen.insert(entry.key.as_str(), entry.scope) {
                warn!(
                    key = %entry.key,
                    first = %previous,
                    second = %entry.scope,
                    "state id used in more than one scope; the later scope wins on the client"
                );
            }
            script.push_str(&self.create_state_call(&entry.key, &entry.value));
            script.push('\n');
        }
        if !states.is_empty() {
            script.push('\n');
        }

        script.push_str(&self.dom_ready_block());

        if config.enable_debugging() {
            script.push('\n');
            script.push_str(DEBUG_BLOCK);
        }

        debug!(
            entries = states.len(),
            bytes = script.len(),
            "generated client runtime"
        );
        script
    }

    /// A `// State: <id>` comment and the `createState` call for one entry
    ///
    /// With debugging enabled a `console.debug` line follows the call.
    pub fn generate_state_script(
        &self,
        entry: &StateEntry,
        id: &str,
        config: &StateConfiguration,
    ) -> String {
        let mut script = format!(
            "// State: {}\n{}\n",
            comment_text(id),
            self.create_state_call(id, &entry.value)
        );
        if config.enable_debugging() {
            let _ = writeln!(
                script,
                "console.debug('WebUI: created state', {});",
                js_string(id)
            );
        }
        script
    }

    /// `WebUIStateManager.createState('<id>', <json>);`
    pub fn create_state_call<T: Serialize + ?Sized>(&self, id: &str, value: &T) -> String {
        format!(
            "{}.createState({}, {});",
            RUNTIME_OBJECT,
            js_string(id),
            json_literal(id, value)
        )
    }

    fn dom_ready_block(&self) -> String {
        format!(
            "document.addEventListener('DOMContentLoaded', function() {{\n  \
             document.querySelectorAll('[{attr}]').forEach(function(element) {{\n    \
             {obj}.bindElement(element);\n  \
             }});\n  \
             {obj}.setupServerSync({url});\n\
             }});\n",
            attr = BINDING_ATTRIBUTE,
            obj = RUNTIME_OBJECT,
            url = js_string(&self.server_url),
        )
    }
}

const DEBUG_BLOCK: &str = r#"WebUIStateManager.debug = function() {
  console.group('WebUI state');
  console.log('states', WebUIStateManager.snapshot());
  console.log('history', WebUIStateManager.history());
  console.groupEnd();
};
"#;

fn configuration_block(config: &StateConfiguration) -> String {
    format!(
        "{obj}.enablePersistence = {};\n\
         {obj}.enableDebugging = {};\n\
         {obj}.storageType = {};\n\
         {obj}.maxDebugHistory = {};\n",
        config.enable_persistence(),
        config.enable_debugging(),
        js_string(config.storage_type().as_str()),
        config.max_debug_history(),
        obj = RUNTIME_OBJECT,
    )
}

/// Single-quoted JavaScript string literal
pub fn js_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('\'');
    let mut chars = value.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            '<' if chars.peek() == Some(&'/') => out.push_str("<\\"),
            c if c.is_control() => {
                let _ = write!(out, "\\u{:04x}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push('\'');
    out
}

/// JSON text safe to embed in a `<script>` element, or `null` on failure
pub fn json_literal<T: Serialize + ?Sized>(id: &str, value: &T) -> String {
    match serde_json::to_string(value) {
        Ok(json) => json.replace("</", "<\\/"),
        Err(err) => {
            warn!(id, error = %err, "state value could not be encoded; emitting null");
            "null".to_string()
        }
    }
}

fn comment_text(id: &str) -> String {
    id.replace(['\n', '\r', '\u{2028}', '\u{2029}'], " ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StorageType;
    use serde_json::json;
    use std::collections::HashMap;

    fn entries() -> Vec<StateEntry> {
        vec![
            StateEntry::new(StateScope::Component, "counter", json!(0)),
            StateEntry::new(StateScope::Shared, "user", json!({"name": "Ada", "tags": ["x"]})),
            StateEntry::new(StateScope::Global, "theme", json!("dark")),
        ]
    }

    #[test]
    fn test_runtime_exposes_contract_methods() {
        let script = JavaScriptGenerator::default()
            .generate_complete_script(&[], &StateConfiguration::standard());
        assert!(script.starts_with("const WebUIStateManager = (function() {"));
        for method in [
            "createState",
            "getState",
            "setState",
            "subscribe",
            "unsubscribe",
            "bindElement",
            "updateDOM",
            "updateElementProperty",
            "notifyListeners",
            "setupServerSync",
            "debug",
        ] {
            assert!(
                script.contains(&format!("    {}: function(", method)),
                "missing {method}"
            );
        }
        assert!(script.contains("const states = new Map();"));
        assert!(script.contains("const listeners = new Map();"));
        assert!(script.contains("const elements = new Map();"));
    }

    #[test]
    fn test_complete_script_sections_in_order() {
        let config = StateConfiguration::debug().with_persistence(StorageType::LocalStorage);
        let script = JavaScriptGenerator::default().generate_complete_script(&entries(), &config);

        let runtime = script.find("const WebUIStateManager").unwrap();
        let settings = script.find("WebUIStateManager.enablePersistence = true;").unwrap();
        let first_state = script.find("WebUIStateManager.createState('counter', 0);").unwrap();
        let ready = script.find("document.addEventListener('DOMContentLoaded'").unwrap();
        let debug = script.find("WebUIStateManager.debug = function()").unwrap();

        assert!(runtime < settings);
        assert!(settings < first_state);
        assert!(first_state < ready);
        assert!(ready < debug);
    }

    #[test]
    fn test_configuration_literals() {
        let config = StateConfiguration::standard()
            .with_persistence(StorageType::SessionStorage)
            .with_max_debug_history(25);
        let script = JavaScriptGenerator::default().generate_complete_script(&[], &config);

        assert!(script.contains("WebUIStateManager.enablePersistence = true;"));
        assert!(script.contains("WebUIStateManager.enableDebugging = false;"));
        assert!(script.contains("WebUIStateManager.storageType = 'sessionStorage';"));
        assert!(script.contains("WebUIStateManager.maxDebugHistory = 25;"));
    }

    #[test]
    fn test_create_state_calls_use_json() {
        let script = JavaScriptGenerator::default()
            .generate_complete_script(&entries(), &StateConfiguration::standard());
        assert!(script.contains("WebUIStateManager.createState('counter', 0);"));
        assert!(script.contains(
            r#"WebUIStateManager.createState('user', {"name":"Ada","tags":["x"]});"#
        ));
        assert!(script.contains(r#"WebUIStateManager.createState('theme', "dark");"#));
    }

    #[test]
    fn test_dom_ready_binds_and_syncs() {
        let script = JavaScriptGenerator::default()
            .generate_complete_script(&[], &StateConfiguration::standard());
        assert!(script.contains("document.querySelectorAll('[data-webui-state]')"));
        assert!(script.contains("WebUIStateManager.bindElement(element);"));
        assert!(script.contains("WebUIStateManager.setupServerSync('ws://localhost:8080/ws');"));
        assert!(script.contains("message.type === 'stateUpdate'"));
        assert!(script.contains("message.type === 'reload'"));
        assert!(script.contains(
            "console.error('WebUI: failed to process server message', error);"
        ));
    }

    #[test]
    fn test_custom_server_url() {
        let generator = JavaScriptGenerator::new().with_server_url("wss://example.com/live");
        let script = generator.generate_complete_script(&[], &StateConfiguration::standard());
        assert!(script.contains("WebUIStateManager.setupServerSync('wss://example.com/live');"));
        assert!(!script.contains("ws://localhost:8080/ws"));
    }

    #[test]
    fn test_debug_block_only_when_debugging() {
        let generator = JavaScriptGenerator::default();
        let plain = generator.generate_complete_script(&[], &StateConfiguration::standard());
        let debug = generator.generate_complete_script(&[], &StateConfiguration::debug());
        assert!(!plain.contains("WebUIStateManager.debug = function()"));
        assert!(debug.contains("WebUIStateManager.debug = function()"));
        assert!(debug.contains("console.log('states', WebUIStateManager.snapshot());"));
    }

    #[test]
    fn test_persistence_uses_prefixed_keys() {
        let script = JavaScriptGenerator::default()
            .generate_complete_script(&[], &StateConfiguration::persistent());
        assert!(script.contains("store.setItem('webui:' + id, JSON.stringify(value));"));
        assert!(script.contains("store.getItem('webui:' + id)"));
    }

    #[test]
    fn test_generation_is_deterministic() {
        let generator = JavaScriptGenerator::default();
        let config = StateConfiguration::debug();
        assert_eq!(
            generator.generate_complete_script(&entries(), &config),
            generator.generate_complete_script(&entries(), &config)
        );
    }

    #[test]
    fn test_colliding_ids_keep_both_calls_in_order() {
        let states = vec![
            StateEntry::new(StateScope::Shared, "theme", json!("light")),
            StateEntry::new(StateScope::Global, "theme", json!("dark")),
        ];
        let script = JavaScriptGenerator::default()
            .generate_complete_script(&states, &StateConfiguration::standard());
        let light = script.find(r#"createState('theme', "light")"#).unwrap();
        let dark = script.find(r#"createState('theme', "dark")"#).unwrap();
        assert!(light < dark);
    }

    #[test]
    fn test_state_script() {
        let entry = StateEntry::new(StateScope::Shared, "count", json!(3));
        let generator = JavaScriptGenerator::default();

        let script =
            generator.generate_state_script(&entry, "count", &StateConfiguration::standard());
        assert_eq!(
            script,
            "// State: count\nWebUIStateManager.createState('count', 3);\n"
        );

        let debug = generator.generate_state_script(&entry, "count", &StateConfiguration::debug());
        assert!(debug.contains("console.debug('WebUI: created state', 'count');"));
    }

    #[test]
    fn test_unencodable_value_becomes_null() {
        let mut map = HashMap::new();
        map.insert((1, 2), "pair");
        let call = JavaScriptGenerator::default().create_state_call("pairs", &map);
        assert_eq!(call, "WebUIStateManager.createState('pairs', null);");
    }

    #[test]
    fn test_embedded_values_cannot_close_script() {
        let entry = StateEntry::new(StateScope::Shared, "html", json!("</script><b>"));
        let script = JavaScriptGenerator::default()
            .generate_state_script(&entry, "html", &StateConfiguration::standard());
        assert!(!script.contains("</script>"));
        assert!(script.contains(r#""<\/script><b>""#));
    }

    #[test]
    fn test_values_use_json_escaping() {
        let call = JavaScriptGenerator::default()
            .create_state_call("greeting", &json!("say \"hi\"\\\n\t"));
        assert_eq!(
            call,
            r#"WebUIStateManager.createState('greeting', "say \"hi\"\\\n\t");"#
        );

        let nested = JavaScriptGenerator::default()
            .create_state_call("doc", &json!({"path": "C:\\tmp", "lines": ["a\nb"]}));
        assert_eq!(
            nested,
            r#"WebUIStateManager.createState('doc', {"path":"C:\\tmp","lines":["a\nb"]});"#
        );
    }

    #[test]
    fn test_js_string_escaping() {
        assert_eq!(js_string("counter"), "'counter'");
        assert_eq!(js_string("it's"), r"'it\'s'");
        assert_eq!(js_string("a\\b"), r"'a\\b'");
        assert_eq!(js_string("line\nbreak"), r"'line\nbreak'");
        assert_eq!(js_string("</script>"), r"'<\/script>'");
        assert_eq!(js_string("\u{0}"), r"'\u0000'");
    }
}
