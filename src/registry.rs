//! Validator registry
//!
//! Maps validator names to factories. Resolution by name is the only
//! lookup; an unknown name is reported by the caller as a configuration
//! error rather than skipped.

use crate::builtins;
use crate::config::Configuration;
use crate::validator::{Validator, ValidatorContext};
use std::collections::HashMap;

/// Builds a validator bound to its run context.
pub type ValidatorFactory = Box<dyn Fn(&ValidatorContext) -> Box<dyn Validator> + Send + Sync>;

/// Registry of all validators that can be named in configuration.
pub struct ValidatorRegistry {
    factories: HashMap<String, ValidatorFactory>,
}

impl ValidatorRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    /// Create a registry holding the built-in validators.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        builtins::register_builtins(&mut registry);
        registry
    }

    /// Built-ins plus every command validator declared in `config`.
    ///
    /// A declared command shadows a built-in of the same name.
    pub fn from_config(config: &Configuration) -> Self {
        let mut registry = Self::with_builtins();
        for (name, spec) in config.commands() {
            builtins::register_command(&mut registry, name, spec.clone());
        }
        registry
    }

    /// Register `factory` under `name`, replacing any previous entry.
    pub fn register<F>(&mut self, name: impl Into<String>, factory: F)
    where
        F: Fn(&ValidatorContext) -> Box<dyn Validator> + Send + Sync + 'static,
    {
        let name = name.into();
        if self.factories.insert(name.clone(), Box::new(factory)).is_some() {
            tracing::debug!("validator '{}' re-registered", name);
        }
    }

    /// Look up the factory registered under `name`.
    pub fn resolve(&self, name: &str) -> Option<&ValidatorFactory> {
        self.factories.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.factories.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.factories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}

impl Default for ValidatorRegistry {
    fn default() -> Self {
        Self::new()
    }
}
