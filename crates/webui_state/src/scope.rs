//! State scopes

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::StateError;

/// A partition of the state store; keys are unique within a scope
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StateScope {
    /// Local to one component instance
    Component,
    /// Shared between a group of components
    Shared,
    /// Application wide
    Global,
    /// Tied to the browser session
    Session,
}

impl StateScope {
    /// Every scope, in snapshot order
    pub const ALL: [StateScope; 4] = [
        StateScope::Component,
        StateScope::Shared,
        StateScope::Global,
        StateScope::Session,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StateScope::Component => "component",
            StateScope::Shared => "shared",
            StateScope::Global => "global",
            StateScope::Session => "session",
        }
    }

    /// `"scope.key"`, as used in debug history records
    pub fn composite_key(&self, key: &str) -> String {
        format!("{}.{}", self.as_str(), key)
    }
}

impl fmt::Display for StateScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StateScope {
    type Err = StateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StateScope::ALL
            .iter()
            .copied()
            .find(|scope| scope.as_str() == s)
            .ok_or_else(|| StateError::UnknownScope(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scope_names() {
        assert_eq!(StateScope::Shared.as_str(), "shared");
        assert_eq!(StateScope::Session.composite_key("token"), "session.token");
        assert_eq!("global".parse::<StateScope>().ok(), Some(StateScope::Global));
        assert!(matches!(
            "local".parse::<StateScope>(),
            Err(StateError::UnknownScope(name)) if name == "local"
        ));
    }
}
