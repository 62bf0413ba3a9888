//! Event handler snippets for buttons and forms

use std::convert::Infallible;
use std::fmt::{self, Write};
use std::str::FromStr;

use super::{js_string, JavaScriptGenerator, RUNTIME_OBJECT};

/// What a button click does to its state
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ButtonAction {
    /// Add one, treating a missing value as zero
    Increment,
    /// Subtract one, treating a missing value as zero
    Decrement,
    /// Negate the current value
    Toggle,
    /// Arbitrary statement; `$STATE_ID` is replaced with the state id
    Custom(String),
}

impl ButtonAction {
    /// Placeholder substituted in [`ButtonAction::Custom`] templates
    pub const STATE_ID_PLACEHOLDER: &'static str = "$STATE_ID";

    fn statement(&self, state_id: &str) -> String {
        let id = js_string(state_id);
        match self {
            ButtonAction::Increment => format!(
                "{obj}.setState({id}, ({obj}.getState({id}) || 0) + 1);",
                obj = RUNTIME_OBJECT
            ),
            ButtonAction::Decrement => format!(
                "{obj}.setState({id}, ({obj}.getState({id}) || 0) - 1);",
                obj = RUNTIME_OBJECT
            ),
            ButtonAction::Toggle => format!(
                "{obj}.setState({id}, !{obj}.getState({id}));",
                obj = RUNTIME_OBJECT
            ),
            ButtonAction::Custom(template) => {
                template.replace(Self::STATE_ID_PLACEHOLDER, state_id)
            }
        }
    }
}

impl fmt::Display for ButtonAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ButtonAction::Increment => f.write_str("increment"),
            ButtonAction::Decrement => f.write_str("decrement"),
            ButtonAction::Toggle => f.write_str("toggle"),
            ButtonAction::Custom(template) => f.write_str(template),
        }
    }
}

impl FromStr for ButtonAction {
    type Err = Infallible;

    /// Known action names map to their variant; anything else is a custom
    /// template
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "increment" => ButtonAction::Increment,
            "decrement" => ButtonAction::Decrement,
            "toggle" => ButtonAction::Toggle,
            other => ButtonAction::Custom(other.to_string()),
        })
    }
}

impl JavaScriptGenerator {
    /// Attach a click handler to `button_id` that applies `action` to
    /// `state_id`
    pub fn generate_button_handler(
        &self,
        button_id: &str,
        state_id: &str,
        action: &ButtonAction,
    ) -> String {
        format!(
            "document.getElementById({button})?.addEventListener('click', function() {{\n  \
             {statement}\n\
             }});\n",
            button = js_string(button_id),
            statement = action.statement(state_id),
        )
    }

    /// Attach a submit handler to `form_id` that copies each field's value
    /// into its state, in the order given
    pub fn generate_form_handler<I, F, S>(&self, form_id: &str, fields: I) -> String
    where
        I: IntoIterator<Item = (F, S)>,
        F: AsRef<str>,
        S: AsRef<str>,
    {
        let mut script = format!(
            "document.getElementById({})?.addEventListener('submit', function(event) {{\n  \
             event.preventDefault();\n  \
             const form = event.target;\n",
            js_string(form_id)
        );
        for (field, state) in fields {
            let _ = writeln!(
                script,
                "  {}.setState({}, form[{}].value);",
                RUNTIME_OBJECT,
                js_string(state.as_ref()),
                js_string(field.as_ref())
            );
        }
        script.push_str("});\n");
        script
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexMap;

    #[test]
    fn test_increment_handler() {
        let script = JavaScriptGenerator::default().generate_button_handler(
            "incr-btn",
            "counter",
            &ButtonAction::Increment,
        );
        assert!(script.contains(
            "WebUIStateManager.setState('counter', \
             (WebUIStateManager.getState('counter') || 0) + 1)"
        ));
        assert!(script.starts_with(
            "document.getElementById('incr-btn')?.addEventListener('click', function() {"
        ));
    }

    #[test]
    fn test_decrement_and_toggle_handlers() {
        let generator = JavaScriptGenerator::default();
        let decrement = generator.generate_button_handler("b", "count", &ButtonAction::Decrement);
        assert!(decrement.contains(
            "WebUIStateManager.setState('count', (WebUIStateManager.getState('count') || 0) - 1)"
        ));

        let toggle = generator.generate_button_handler("b", "open", &ButtonAction::Toggle);
        assert!(toggle.contains(
            "WebUIStateManager.setState('open', !WebUIStateManager.getState('open'))"
        ));
    }

    #[test]
    fn test_custom_handler_substitutes_state_id() {
        let action =
            ButtonAction::Custom("WebUIStateManager.setState('$STATE_ID', 'reset');".into());
        let script =
            JavaScriptGenerator::default().generate_button_handler("reset", "form_state", &action);
        assert!(script.contains("WebUIStateManager.setState('form_state', 'reset');"));
        assert!(!script.contains("$STATE_ID"));
    }

    #[test]
    fn test_form_handler() {
        let mut fields = IndexMap::new();
        fields.insert("firstName", "user_first");
        fields.insert("lastName", "user_last");

        let script = JavaScriptGenerator::default().generate_form_handler("signup", fields);
        assert!(script.contains("addEventListener('submit', function(event)"));
        assert!(script.contains("event.preventDefault();"));
        assert!(script.contains("const form = event.target;"));
        assert!(script.contains(
            "WebUIStateManager.setState('user_first', form['firstName'].value)"
        ));

        let first = script.find("user_first").unwrap();
        let last = script.find("user_last").unwrap();
        assert!(first < last);
    }

    #[test]
    fn test_action_from_str() {
        assert_eq!("increment".parse::<ButtonAction>(), Ok(ButtonAction::Increment));
        assert_eq!("toggle".parse::<ButtonAction>(), Ok(ButtonAction::Toggle));
        assert_eq!(
            "alert($STATE_ID)".parse::<ButtonAction>(),
            Ok(ButtonAction::Custom("alert($STATE_ID)".into()))
        );
    }
}
