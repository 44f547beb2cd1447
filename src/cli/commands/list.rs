use crate::config::Configuration;
use crate::registry::ValidatorRegistry;
use crate::resolver::ListResolver;
use crate::validator::Category;
use anyhow::Result;
use clap::Args;
use serde_json::json;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

#[derive(Args, Clone)]
pub struct ListArgs {
    /// Only list this category
    #[arg(long, value_enum)]
    pub category: Option<Category>,

    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,

    /// List every registered validator instead of the configured ones
    #[arg(long)]
    pub available: bool,
}

pub async fn execute(args: ListArgs, config_path: Option<&Path>) -> Result<ExitCode> {
    let config = Arc::new(Configuration::load_with_custom_config(config_path)?);
    let registry = Arc::new(ValidatorRegistry::from_config(&config));

    if args.available {
        let names = registry.names();
        if args.json {
            println!("{}", serde_json::to_string_pretty(&names)?);
        } else {
            for name in names {
                println!("{name}");
            }
        }
        return Ok(ExitCode::SUCCESS);
    }

    let resolver = ListResolver::new(Arc::clone(&registry), config);
    let categories = match args.category {
        Some(category) => vec![category],
        None => vec![Category::Warnings, Category::Checks],
    };

    // Resolve for real so unknown names fail exactly like `run` would
    let no_files: Arc<[PathBuf]> = Arc::from(Vec::new());
    let mut resolved = Vec::new();
    for category in categories {
        let names: Vec<String> = resolver
            .resolve(category, &no_files)?
            .iter()
            .map(|v| v.name().to_string())
            .collect();
        resolved.push((category, names));
    }

    if args.json {
        let map: serde_json::Map<String, serde_json::Value> = resolved
            .into_iter()
            .map(|(category, names)| (category.to_string(), json!(names)))
            .collect();
        println!("{}", serde_json::to_string_pretty(&map)?);
    } else {
        for (category, names) in resolved {
            println!("{}: {}", category, names.join(" "));
        }
    }
    Ok(ExitCode::SUCCESS)
}
