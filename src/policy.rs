//! Naming conventions of the documented language.
//!
//! Which leading parameter is an implicit receiver, which receiver marks a
//! class-level method, which member is the constructor, and which member
//! names are hidden from the reference. Defaults follow Python.

use anyhow::{Context, Result};
use regex::Regex;
use serde::Deserialize;
use std::sync::LazyLock;

static RE_HIDDEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^_").unwrap());

const DEFAULT_RECEIVERS: &[&str] = &["self", "cls"];
const DEFAULT_CLASS_RECEIVERS: &[&str] = &["cls"];
const DEFAULT_CONSTRUCTOR: &str = "__init__";

#[derive(Debug, Clone)]
pub struct Policy {
    /// Names of the implicit first parameter of a method
    pub receivers: Vec<String>,
    /// Receivers that mark a class-level (static-like) method
    pub class_receivers: Vec<String>,
    /// Member name that denotes the constructor
    pub constructor: String,
    /// Member names matching this pattern are left out of the reference
    pub hidden: Regex,
}

impl Default for Policy {
    fn default() -> Self {
        Self {
            receivers: owned_names(DEFAULT_RECEIVERS),
            class_receivers: owned_names(DEFAULT_CLASS_RECEIVERS),
            constructor: DEFAULT_CONSTRUCTOR.to_string(),
            hidden: RE_HIDDEN.clone(),
        }
    }
}

/// Serialized form of [`Policy`]. Missing fields keep their defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PolicyConfig {
    pub receivers: Option<Vec<String>>,
    pub class_receivers: Option<Vec<String>>,
    pub constructor: Option<String>,
    pub hidden: Option<String>,
}

impl Policy {
    pub fn from_config(config: PolicyConfig) -> Result<Self> {
        let defaults = Self::default();
        let hidden = match config.hidden {
            Some(pattern) => Regex::new(&pattern)
                .with_context(|| format!("invalid hidden-name pattern: {}", pattern))?,
            None => defaults.hidden,
        };
        Ok(Self {
            receivers: config.receivers.unwrap_or(defaults.receivers),
            class_receivers: config.class_receivers.unwrap_or(defaults.class_receivers),
            constructor: config.constructor.unwrap_or(defaults.constructor),
            hidden,
        })
    }

    pub fn is_receiver(&self, name: &str) -> bool {
        self.receivers.iter().any(|r| r == name)
    }

    pub fn is_class_receiver(&self, name: &str) -> bool {
        self.class_receivers.iter().any(|r| r == name)
    }

    pub fn is_constructor(&self, name: &str) -> bool {
        self.constructor == name
    }

    /// Hidden names are skipped unless they denote the constructor.
    pub fn is_hidden(&self, name: &str) -> bool {
        !self.is_constructor(name) && self.hidden.is_match(name)
    }
}

fn owned_names(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| n.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn python_defaults() {
        let policy = Policy::default();
        assert!(policy.is_receiver("self"));
        assert!(policy.is_receiver("cls"));
        assert!(policy.is_class_receiver("cls"));
        assert!(!policy.is_class_receiver("self"));
        assert!(policy.is_constructor("__init__"));
    }

    #[test]
    fn constructor_is_never_hidden() {
        let policy = Policy::default();
        assert!(policy.is_hidden("_private"));
        assert!(policy.is_hidden("__repr__"));
        assert!(!policy.is_hidden("__init__"));
        assert!(!policy.is_hidden("public"));
    }

    #[test]
    fn config_overrides_only_given_fields() {
        let config = PolicyConfig {
            receivers: Some(vec!["this".to_string()]),
            hidden: Some(r"^internal_".to_string()),
            ..Default::default()
        };
        let policy = Policy::from_config(config).unwrap();
        assert!(policy.is_receiver("this"));
        assert!(!policy.is_receiver("self"));
        assert!(policy.is_hidden("internal_helper"));
        assert!(!policy.is_hidden("_private"));
        assert_eq!(policy.constructor, "__init__");
    }

    #[test]
    fn invalid_pattern_is_reported() {
        let config = PolicyConfig {
            hidden: Some("(".to_string()),
            ..Default::default()
        };
        let err = Policy::from_config(config).unwrap_err();
        assert!(err.to_string().contains("invalid hidden-name pattern"));
    }
}
