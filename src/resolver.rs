//! Turns configured names into runnable validators
//!
//! The resolved list for a category is the enabled names, in order, with
//! every excluded name removed. Exclusion always wins over inclusion and
//! the list is never re-sorted, so report order follows configuration
//! order exactly.

use crate::config::Configuration;
use crate::error::{HookError, HookResult};
use crate::registry::ValidatorRegistry;
use crate::validator::{Category, Validator, ValidatorContext};
use std::path::PathBuf;
use std::sync::Arc;

pub struct ListResolver {
    registry: Arc<ValidatorRegistry>,
    config: Arc<Configuration>,
}

impl ListResolver {
    pub fn new(registry: Arc<ValidatorRegistry>, config: Arc<Configuration>) -> Self {
        Self { registry, config }
    }

    pub fn registry(&self) -> &Arc<ValidatorRegistry> {
        &self.registry
    }

    pub fn config(&self) -> &Arc<Configuration> {
        &self.config
    }

    /// Names that survive exclusion, in enabled order. Not checked against
    /// the registry.
    pub fn names(&self, category: Category) -> Vec<&str> {
        let excluded = self.config.excluded(category);
        self.config
            .enabled(category)
            .iter()
            .filter(|name| !excluded.contains(name))
            .collect()
    }

    /// Instantiate the validators for `category`, bound to `files`.
    ///
    /// Fails on the first name with no registry entry; nothing is returned
    /// for the category in that case.
    pub fn resolve(
        &self,
        category: Category,
        files: &Arc<[PathBuf]>,
    ) -> HookResult<Vec<Box<dyn Validator>>> {
        let names = self.names(category);
        tracing::debug!("resolving {}: {:?}", category, names);

        let context = ValidatorContext {
            registry: Arc::clone(&self.registry),
            config: Arc::clone(&self.config),
            files: Arc::clone(files),
        };

        let mut validators = Vec::with_capacity(names.len());
        for name in names {
            let factory =
                self.registry
                    .resolve(name)
                    .ok_or_else(|| HookError::UnknownValidator {
                        category,
                        name: name.to_string(),
                    })?;
            validators.push(factory(&context));
        }
        Ok(validators)
    }
}
