//! CLI Tooling
//!
//! Command-line interface over the tea catalog. Each command reads the store
//! fresh; `add` is the only command that writes.

use crate::config::{ConfigLoader, TeashelfConfig};
use crate::error::ApiError;
use crate::store::JsonFileTeaStore;
use crate::tea::{ClockIdGenerator, TeaCatalog};
use crate::types::{Tea, TeaDraft};
use clap::{Parser, Subcommand};
use serde_json::json;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;

/// Teashelf CLI - a tea catalog in a flat JSON file
#[derive(Parser)]
#[command(name = "teashelf")]
#[command(about = "A tea catalog with unique ids and names, stored in a JSON file")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Tea collection file (overrides storage.data_file)
    #[arg(long)]
    pub data_file: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a tea, or update the description of the tea with this name
    Add {
        /// Tea name (unique)
        name: String,
        /// Free-form description
        #[arg(long, default_value = "")]
        description: String,
    },
    /// Show the tea with this exact name
    Get {
        /// Tea name, matched exactly
        name: String,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Print the effective configuration
    Config,
}

/// CLI context holding the resolved configuration and catalog
pub struct CliContext {
    config: TeashelfConfig,
    data_file: PathBuf,
    catalog: TeaCatalog,
}

impl CliContext {
    /// Create a new CLI context, loading configuration from `config_path`
    /// or the standard sources relative to the current directory.
    pub fn new(config_path: Option<PathBuf>, data_file: Option<PathBuf>) -> Result<Self, ApiError> {
        let mut config = if let Some(cfg_path) = &config_path {
            ConfigLoader::load_from_file(cfg_path)?
        } else {
            let cwd = std::env::current_dir().map_err(|e| {
                ApiError::ConfigError(format!("Failed to get current directory: {}", e))
            })?;
            ConfigLoader::load(&cwd)?
        };

        if let Some(path) = data_file {
            config.storage.data_file = Some(path);
        }

        Self::from_config(config)
    }

    /// Create a context from an already loaded configuration
    pub fn from_config(config: TeashelfConfig) -> Result<Self, ApiError> {
        let data_file = config.storage.resolve_data_file()?;
        let store = Arc::new(JsonFileTeaStore::new(data_file.clone()));
        let catalog = TeaCatalog::new(store, Arc::new(ClockIdGenerator::new()));

        Ok(Self {
            config,
            data_file,
            catalog,
        })
    }

    pub fn config(&self) -> &TeashelfConfig {
        &self.config
    }

    pub fn data_file(&self) -> &Path {
        &self.data_file
    }

    pub fn catalog(&self) -> &TeaCatalog {
        &self.catalog
    }

    /// Execute a CLI command
    pub fn execute(&self, command: &Commands) -> Result<String, ApiError> {
        match command {
            Commands::Add { name, description } => self.handle_add(name, description),
            Commands::Get { name, format } => self.handle_get(name, format),
            Commands::Config => self.handle_config(),
        }
    }

    fn handle_add(&self, name: &str, description: &str) -> Result<String, ApiError> {
        let outcome = self.catalog.add_tea(TeaDraft::new(name, description));
        match (outcome.success, outcome.id) {
            (true, Some(id)) => {
                let verb = if outcome.created { "Added" } else { "Updated" };
                info!(tea_id = id, data_file = %self.data_file.display(), "add finished");
                Ok(format!("{} tea {} (id {})", verb, name, id))
            }
            _ => Err(ApiError::SaveFailed(name.to_string())),
        }
    }

    fn handle_get(&self, name: &str, format: &str) -> Result<String, ApiError> {
        let tea = self
            .catalog
            .get_tea_by_name(name)?
            .ok_or_else(|| ApiError::TeaNotFound(name.to_string()))?;
        match format {
            "json" => Ok(format_tea_json(&tea)),
            "text" | _ => Ok(format_tea_text(&tea)),
        }
    }

    fn handle_config(&self) -> Result<String, ApiError> {
        let mut output = self.config.to_toml_string()?;
        output.push_str(&format!("\n# resolved data file: {}", self.data_file.display()));
        Ok(output)
    }
}

/// Format a tea as text
fn format_tea_text(tea: &Tea) -> String {
    let mut output = format!("Tea: {}\n", tea.name);
    output.push_str(&format!("Id: {}\n", tea.id));
    if tea.description.is_empty() {
        output.push_str("Description: (none)");
    } else {
        output.push_str(&format!("Description: {}", tea.description));
    }
    output
}

/// Format a tea as JSON
fn format_tea_json(tea: &Tea) -> String {
    let out = json!({
        "id": tea.id,
        "name": tea.name,
        "description": tea.description,
    });
    serde_json::to_string_pretty(&out).unwrap_or_else(|_| "{}".to_string())
}
