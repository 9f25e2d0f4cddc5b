//! Organization management CLI commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use folderhub_core::error::AppError;
use folderhub_entity::organization::Organization;

use crate::output::{self, OutputFormat};

/// Arguments for organization commands
#[derive(Debug, Args)]
pub struct OrgArgs {
    /// Organization subcommand
    #[command(subcommand)]
    pub command: OrgCommand,
}

/// Organization subcommands
#[derive(Debug, Subcommand)]
pub enum OrgCommand {
    /// Create an organization
    Create {
        /// Organization name
        #[arg(short, long)]
        name: String,
    },
    /// List organizations
    List,
}

/// Organization display row
#[derive(Debug, Serialize, Tabled)]
struct OrgRow {
    id: String,
    name: String,
    created_at: String,
}

impl From<Organization> for OrgRow {
    fn from(org: Organization) -> Self {
        Self {
            id: org.id.to_string(),
            name: org.name,
            created_at: org.created_at.format("%Y-%m-%d %H:%M").to_string(),
        }
    }
}

/// Execute organization commands
pub async fn execute(
    args: &OrgArgs,
    config_path: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    let services = super::services(config_path).await?;

    match &args.command {
        OrgCommand::Create { name } => {
            let org = services.organizations.create_organization(name).await?;
            output::print_success(&format!("Organization '{}' created (id: {})", org.name, org.id));
        }
        OrgCommand::List => {
            let rows: Vec<OrgRow> = services
                .organizations
                .list_organizations()
                .await?
                .into_iter()
                .map(OrgRow::from)
                .collect();
            output::print_list(&rows, format);
        }
    }

    Ok(())
}
