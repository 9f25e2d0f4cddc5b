//! Project management CLI commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use folderhub_core::error::AppError;
use folderhub_core::types::{FolderId, OrganizationId, ProjectId};
use folderhub_entity::project::Project;

use crate::output::{self, OutputFormat};

/// Arguments for project commands
#[derive(Debug, Args)]
pub struct ProjectArgs {
    /// Project subcommand
    #[command(subcommand)]
    pub command: ProjectCommand,
}

/// Project subcommands
#[derive(Debug, Subcommand)]
pub enum ProjectCommand {
    /// Create a project
    Create {
        /// Organization ID
        #[arg(short, long)]
        org: OrganizationId,
        /// Project name
        #[arg(short, long)]
        name: String,
        /// Folder to file the project in
        #[arg(long)]
        folder: Option<FolderId>,
    },
    /// File a project in a folder (omit --folder to unfile it)
    Assign {
        /// Project ID
        id: ProjectId,
        /// Target folder ID
        #[arg(long)]
        folder: Option<FolderId>,
    },
    /// List projects in a folder, or unfiled projects
    List {
        /// Organization ID
        #[arg(short, long)]
        org: OrganizationId,
        /// Folder ID
        #[arg(long)]
        folder: Option<FolderId>,
    },
}

/// Project display row
#[derive(Debug, Serialize, Tabled)]
struct ProjectRow {
    id: String,
    name: String,
    folder: String,
}

impl From<Project> for ProjectRow {
    fn from(project: Project) -> Self {
        Self {
            id: project.id.to_string(),
            folder: project
                .folder_id
                .map(|f| f.to_string())
                .unwrap_or_else(|| "-".to_string()),
            name: project.name,
        }
    }
}

/// Execute project commands
pub async fn execute(
    args: &ProjectArgs,
    config_path: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    let services = super::services(config_path).await?;
    let projects = &services.projects;

    match &args.command {
        ProjectCommand::Create { org, name, folder } => {
            let project = projects.create_project(*org, name, *folder).await?;
            output::print_item(&ProjectRow::from(project), format);
        }
        ProjectCommand::Assign { id, folder } => {
            let project = projects.assign_folder(*id, *folder).await?;
            output::print_item(&ProjectRow::from(project), format);
        }
        ProjectCommand::List { org, folder } => {
            let rows: Vec<ProjectRow> = projects
                .list_projects(*org, *folder)
                .await?
                .into_iter()
                .map(ProjectRow::from)
                .collect();
            output::print_list(&rows, format);
        }
    }

    Ok(())
}
