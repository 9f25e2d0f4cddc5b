//! Start the FolderHub server.

use clap::Args;

use folderhub_core::error::AppError;
use folderhub_database::migration;

/// Arguments for the serve command
#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Override the bind port
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Skip running pending migrations on startup
    #[arg(long)]
    pub skip_migrations: bool,
}

/// Execute the serve command
pub async fn execute(args: &ServeArgs, config_path: &str) -> Result<(), AppError> {
    let mut config = super::load_config(config_path)?;
    if let Some(port) = args.port {
        config.server.port = port;
    }

    let db = super::connect(&config).await?;
    if !args.skip_migrations {
        migration::run_migrations(db.pool()).await?;
    }

    folderhub_api::run_server(config, db).await
}
