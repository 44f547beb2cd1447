use super::{ConfigFile, Configuration};
use crate::error::HookResult;
use figment::{
    Figment,
    providers::{Env, Format, Json, Toml, Yaml},
};
use std::path::Path;

// Embed the default config at compile time
pub const DEFAULT_CONFIG: &str = include_str!("../../default-config.toml");

const REPO_CONFIG_STEMS: [&str; 2] = ["commit-guard", ".commit-guard"];
const ENV_PREFIX: &str = "COMMIT_GUARD_";

impl Configuration {
    /// Load the layered configuration: defaults, user, repository, env.
    pub fn load() -> HookResult<Self> {
        Self::load_with_custom_config(None)
    }

    /// Same as [`Configuration::load`], but a custom file replaces the
    /// user and repository layers.
    pub fn load_with_custom_config(custom_config: Option<&Path>) -> HookResult<Self> {
        if let Some(path) = custom_config.filter(|path| !path.is_file()) {
            return Err(figment::Error::from(format!(
                "config file {} does not exist",
                path.display()
            ))
            .into());
        }
        Self::from_figment(Self::figment(custom_config))
    }

    /// The provider stack, lowest priority first.
    pub fn figment(custom_config: Option<&Path>) -> Figment {
        let mut figment = Figment::new().merge(Toml::string(DEFAULT_CONFIG));

        if let Some(custom_path) = custom_config {
            figment = merge_any_format(figment, custom_path);
        } else {
            if let Some(user_dir) = user_config_dir() {
                for ext in ["toml", "json", "yaml", "yml"] {
                    figment = merge_any_format(figment, &user_dir.join(format!("config.{ext}")));
                }
            }
            for stem in REPO_CONFIG_STEMS {
                for ext in ["toml", "json", "yaml", "yml"] {
                    figment = merge_any_format(figment, Path::new(&format!("{stem}.{ext}")));
                }
            }
        }

        // Environment variables always have highest priority
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Extract and validate a configuration from an arbitrary provider stack.
    pub fn from_figment(figment: Figment) -> HookResult<Self> {
        let raw: ConfigFile = figment.extract()?;

        for (name, spec) in &raw.validators {
            if spec.command.trim().is_empty() {
                return Err(figment::Error::from(format!(
                    "validator '{name}' has an empty command"
                ))
                .into());
            }
        }

        let config = Configuration::from(raw);
        tracing::trace!(
            checks = config.checks.enabled.len(),
            warnings = config.warnings.enabled.len(),
            commands = config.commands.len(),
            "configuration loaded"
        );
        Ok(config)
    }
}

fn merge_any_format(figment: Figment, path: &Path) -> Figment {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => figment.merge(Json::file(path)),
        Some("yaml") | Some("yml") => figment.merge(Yaml::file(path)),
        _ => figment.merge(Toml::file(path)),
    }
}

fn user_config_dir() -> Option<std::path::PathBuf> {
    std::env::var_os("HOME").map(|home| Path::new(&home).join(".config").join("commit-guard"))
}
