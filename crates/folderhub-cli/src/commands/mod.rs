//! CLI command definitions and dispatch.

pub mod folder;
pub mod migrate;
pub mod org;
pub mod project;
pub mod serve;

use clap::{Parser, Subcommand};

use folderhub_core::config::AppConfig;
use folderhub_core::error::AppError;
use folderhub_database::DatabasePool;
use folderhub_service::AppServices;

use crate::output::OutputFormat;

/// FolderHub: organization folder trees with materialized paths
#[derive(Debug, Parser)]
#[command(name = "folderhub", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the FolderHub server
    Serve(serve::ServeArgs),
    /// Database migration management
    Migrate(migrate::MigrateArgs),
    /// Organization management
    Org(org::OrgArgs),
    /// Folder tree management
    Folder(folder::FolderArgs),
    /// Project management
    Project(project::ProjectArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        match &self.command {
            Commands::Serve(args) => serve::execute(args, &self.config).await,
            Commands::Migrate(args) => migrate::execute(args, &self.config).await,
            Commands::Org(args) => org::execute(args, &self.config, self.format).await,
            Commands::Folder(args) => folder::execute(args, &self.config, self.format).await,
            Commands::Project(args) => project::execute(args, &self.config, self.format).await,
        }
    }
}

/// Helper: load configuration from file
pub fn load_config(config_path: &str) -> Result<AppConfig, AppError> {
    AppConfig::load(config_path)
}

/// Helper: connect to the configured database
pub async fn connect(config: &AppConfig) -> Result<DatabasePool, AppError> {
    DatabasePool::connect(&config.database).await
}

/// Helper: load config, connect and wire the services
pub async fn services(config_path: &str) -> Result<AppServices, AppError> {
    let config = load_config(config_path)?;
    let db = connect(&config).await?;
    Ok(AppServices::new(db.into_pool(), config.tree))
}
