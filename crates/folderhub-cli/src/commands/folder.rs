//! Folder tree management CLI commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use folderhub_core::error::AppError;
use folderhub_core::types::{FolderId, OrganizationId};
use folderhub_entity::folder::Folder;

use crate::output::{self, OutputFormat};

/// Arguments for folder commands
#[derive(Debug, Args)]
pub struct FolderArgs {
    /// Folder subcommand
    #[command(subcommand)]
    pub command: FolderCommand,
}

/// Folder subcommands
#[derive(Debug, Subcommand)]
pub enum FolderCommand {
    /// Create a folder
    Create {
        /// Organization ID
        #[arg(short, long)]
        org: OrganizationId,
        /// Folder name
        #[arg(short, long)]
        name: String,
        /// Parent folder ID (omit for a root folder)
        #[arg(short, long)]
        parent: Option<FolderId>,
    },
    /// List root folders, or the children of a folder
    List {
        /// Organization ID
        #[arg(short, long)]
        org: OrganizationId,
        /// Parent folder ID
        #[arg(short, long)]
        parent: Option<FolderId>,
    },
    /// Move a folder and its subtree
    Move {
        /// Folder ID
        id: FolderId,
        /// New parent folder ID (omit to move to the root level)
        #[arg(short, long)]
        parent: Option<FolderId>,
    },
    /// Rename a folder
    Rename {
        /// Folder ID
        id: FolderId,
        /// New name
        #[arg(short, long)]
        name: String,
    },
    /// Delete an empty folder
    Delete {
        /// Folder ID
        id: FolderId,
        /// Skip confirmation prompt
        #[arg(long)]
        force: bool,
    },
    /// Show an organization's folder tree, or the subtree of one folder
    Tree {
        /// Organization ID
        #[arg(short, long, required_unless_present = "folder")]
        org: Option<OrganizationId>,
        /// Root folder ID
        #[arg(long)]
        folder: Option<FolderId>,
    },
    /// List the ancestors of a folder, root first
    Ancestors {
        /// Folder ID
        id: FolderId,
    },
    /// List every folder below a folder
    Descendants {
        /// Folder ID
        id: FolderId,
    },
}

/// Folder display row
#[derive(Debug, Serialize, Tabled)]
struct FolderRow {
    id: String,
    name: String,
    depth: usize,
    path: String,
    updated_at: String,
}

impl From<Folder> for FolderRow {
    fn from(folder: Folder) -> Self {
        Self {
            id: folder.id.to_string(),
            depth: folder.depth(),
            name: folder.name,
            path: folder.path,
            updated_at: folder.updated_at.format("%Y-%m-%d %H:%M").to_string(),
        }
    }
}

fn rows(folders: Vec<Folder>) -> Vec<FolderRow> {
    folders.into_iter().map(FolderRow::from).collect()
}

/// Execute folder commands
pub async fn execute(
    args: &FolderArgs,
    config_path: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    let services = super::services(config_path).await?;
    let folders = &services.folders;

    match &args.command {
        FolderCommand::Create { org, name, parent } => {
            let folder = folders.create_folder(*org, name, *parent).await?;
            output::print_success(&format!(
                "Folder '{}' created (id: {}, path: {})",
                folder.name, folder.id, folder.path
            ));
        }
        FolderCommand::List { org, parent } => {
            let children = folders.find_children(*org, *parent).await?;
            output::print_list(&rows(children), format);
        }
        FolderCommand::Move { id, parent } => {
            let moved = folders.move_folder(*id, *parent).await?;
            output::print_success(&format!("Folder moved to {}", moved.path));
        }
        FolderCommand::Rename { id, name } => {
            let renamed = folders.rename_folder(*id, name).await?;
            output::print_success(&format!("Folder renamed to '{}'", renamed.name));
        }
        FolderCommand::Delete { id, force } => {
            let folder = folders.get_folder(*id).await?;
            if !force {
                let confirm = dialoguer::Confirm::new()
                    .with_prompt(format!("Delete folder '{}'?", folder.name))
                    .default(false)
                    .interact()
                    .map_err(|e| AppError::internal(format!("Input error: {e}")))?;

                if !confirm {
                    println!("Cancelled.");
                    return Ok(());
                }
            }

            folders.delete_folder(*id).await?;
            output::print_success(&format!("Folder '{}' deleted", folder.name));
        }
        FolderCommand::Tree { org, folder } => match (folder, org) {
            (Some(root), _) => {
                let node = services.trees.get_tree(*root).await?;
                output::print_tree(std::slice::from_ref(&node), format);
            }
            (None, Some(org)) => {
                let forest = services.trees.get_forest(*org).await?;
                output::print_tree(&forest.roots, format);
            }
            (None, None) => {
                return Err(AppError::validation("Either --org or --folder is required"));
            }
        },
        FolderCommand::Ancestors { id } => {
            let ancestors = folders.find_ancestors(*id).await?;
            output::print_list(&rows(ancestors), format);
        }
        FolderCommand::Descendants { id } => {
            let descendants = folders.find_all_descendants(*id).await?;
            output::print_list(&rows(descendants), format);
        }
    }

    Ok(())
}
