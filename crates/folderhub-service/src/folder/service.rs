//! Folder tree operations over materialized paths.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use sqlx::{Sqlite, SqliteConnection, SqlitePool, Transaction};
use tracing::{debug, info, warn};

use folderhub_core::config::TreeConfig;
use folderhub_core::error::AppError;
use folderhub_core::types::{FolderId, OrganizationId};
use folderhub_database::repositories::{FolderRepository, OrganizationRepository};
use folderhub_entity::folder::{Folder, FolderPath, NewFolder};

use super::lock::OrganizationLocks;
use crate::error::{FolderTreeError, TreeResult, validate_name};

/// Creates, queries, moves, renames and deletes folders.
///
/// Every folder stores the chain of ids from its root down to itself. A move
/// rewrites that chain on the folder and on every descendant inside a single
/// transaction.
#[derive(Debug, Clone)]
pub struct FolderService {
    /// Connection pool; each operation decides its own transaction scope.
    pool: SqlitePool,
    /// Depth limit and other tree rules.
    config: TreeConfig,
    /// Serializes structural changes per organization.
    locks: Arc<OrganizationLocks>,
}

impl FolderService {
    /// Creates a new folder service.
    pub fn new(pool: SqlitePool, config: TreeConfig, locks: Arc<OrganizationLocks>) -> Self {
        Self {
            pool,
            config,
            locks,
        }
    }

    /// The configured maximum path depth.
    pub fn max_depth(&self) -> usize {
        self.config.max_depth
    }

    /// Gets a folder by ID.
    pub async fn get_folder(&self, folder_id: FolderId) -> TreeResult<Folder> {
        let mut conn = self.pool.acquire().await?;
        FolderRepository::find_by_id(&mut conn, folder_id)
            .await?
            .ok_or(FolderTreeError::FolderNotFound(folder_id))
    }

    /// Creates a folder as a root (`parent_id == None`) or under a parent of
    /// the same organization.
    pub async fn create_folder(
        &self,
        organization_id: OrganizationId,
        name: &str,
        parent_id: Option<FolderId>,
    ) -> TreeResult<Folder> {
        let name = validate_name(name, "Folder")?;

        let _guard = self.locks.acquire(organization_id).await;
        let mut tx = self.begin_write().await?;

        OrganizationRepository::find_by_id(&mut tx, organization_id)
            .await?
            .ok_or(FolderTreeError::OrganizationNotFound(organization_id))?;

        let parent_path = match parent_id {
            Some(pid) => {
                let parent = FolderRepository::find_in_organization(&mut tx, organization_id, pid)
                    .await?
                    .ok_or(FolderTreeError::ParentNotFound(pid))?;
                Some(parse_path(&parent)?)
            }
            None => None,
        };

        let id = FolderId::new();
        let path = FolderPath::under(parent_path.as_ref(), id);
        self.check_depth(path.depth())?;

        let folder = FolderRepository::create(
            &mut tx,
            &NewFolder {
                id,
                organization_id,
                parent_id,
                name,
                path,
            },
            Utc::now(),
        )
        .await?;

        tx.commit()
            .await
            .map_err(|e| FolderTreeError::storage("Failed to commit folder creation", e))?;

        info!(
            organization_id = %organization_id,
            folder_id = %folder.id,
            path = %folder.path,
            "Folder created"
        );

        Ok(folder)
    }

    /// Lists direct children of a folder, or the organization's roots when
    /// `parent_id` is `None`. Ordered by name.
    pub async fn find_children(
        &self,
        organization_id: OrganizationId,
        parent_id: Option<FolderId>,
    ) -> TreeResult<Vec<Folder>> {
        let mut conn = self.pool.acquire().await?;

        if let Some(pid) = parent_id {
            FolderRepository::find_in_organization(&mut conn, organization_id, pid)
                .await?
                .ok_or(FolderTreeError::FolderNotFound(pid))?;
        }

        Ok(FolderRepository::find_children(&mut conn, organization_id, parent_id).await?)
    }

    /// Lists every folder below `folder_id`, excluding the folder itself,
    /// ordered by path.
    pub async fn find_all_descendants(&self, folder_id: FolderId) -> TreeResult<Vec<Folder>> {
        let mut conn = self.pool.acquire().await?;
        FolderRepository::find_by_id(&mut conn, folder_id)
            .await?
            .ok_or(FolderTreeError::FolderNotFound(folder_id))?;

        Ok(FolderRepository::find_descendants(&mut conn, folder_id).await?)
    }

    /// Lists the ancestors of `folder_id`, root first, excluding the folder
    /// itself. A root folder has no ancestors.
    pub async fn find_ancestors(&self, folder_id: FolderId) -> TreeResult<Vec<Folder>> {
        let mut conn = self.pool.acquire().await?;
        let folder = FolderRepository::find_by_id(&mut conn, folder_id)
            .await?
            .ok_or(FolderTreeError::FolderNotFound(folder_id))?;

        load_ancestors(&mut conn, &folder).await
    }

    /// Moves a folder under `new_parent_id`, or to the root level when
    /// `None`, and rewrites the path of every descendant.
    ///
    /// Either the folder and all of its descendants end up with their new
    /// paths, or nothing changes.
    pub async fn move_folder(
        &self,
        folder_id: FolderId,
        new_parent_id: Option<FolderId>,
    ) -> TreeResult<Folder> {
        let organization_id = self.get_folder(folder_id).await?.organization_id;

        let _guard = self.locks.acquire(organization_id).await;
        let mut tx = self.begin_write().await?;

        match self.apply_move(&mut tx, folder_id, new_parent_id).await {
            Ok((folder, cascaded)) => {
                tx.commit()
                    .await
                    .map_err(|e| FolderTreeError::storage("Failed to commit folder move", e))?;

                info!(
                    organization_id = %organization_id,
                    folder_id = %folder_id,
                    new_parent_id = ?new_parent_id,
                    path = %folder.path,
                    descendants = cascaded,
                    "Folder moved"
                );

                Ok(folder)
            }
            Err(err) => {
                if let Err(rollback_err) = tx.rollback().await {
                    warn!(folder_id = %folder_id, error = %rollback_err, "Rollback failed");
                }
                warn!(folder_id = %folder_id, error = %err, "Folder move rejected");
                Err(err)
            }
        }
    }

    /// Every read and write of a move, on one transaction.
    ///
    /// Returns the moved folder and the number of descendants rewritten.
    async fn apply_move(
        &self,
        tx: &mut Transaction<'static, Sqlite>,
        folder_id: FolderId,
        new_parent_id: Option<FolderId>,
    ) -> TreeResult<(Folder, usize)> {
        let folder = FolderRepository::find_by_id(&mut **tx, folder_id)
            .await?
            .ok_or(FolderTreeError::FolderNotFound(folder_id))?;

        if new_parent_id == Some(folder_id) {
            return Err(FolderTreeError::InvalidMove {
                folder_id,
                target_id: folder_id,
            });
        }

        let new_parent = match new_parent_id {
            Some(pid) => Some(
                FolderRepository::find_in_organization(&mut **tx, folder.organization_id, pid)
                    .await?
                    .ok_or(FolderTreeError::ParentNotFound(pid))?,
            ),
            None => None,
        };

        let old_path = parse_path(&folder)?;
        let new_parent_path = new_parent.as_ref().map(parse_path).transpose()?;

        if let Some(parent_path) = &new_parent_path {
            if parent_path.contains(folder_id) {
                return Err(FolderTreeError::InvalidMove {
                    folder_id,
                    target_id: parent_path.leaf(),
                });
            }
        }

        let new_path = FolderPath::under(new_parent_path.as_ref(), folder_id);
        self.check_depth(new_path.depth())?;

        let descendants = FolderRepository::find_descendants(&mut **tx, folder_id).await?;
        let mut rebased = Vec::with_capacity(descendants.len());
        for descendant in &descendants {
            let path = parse_path(descendant)?;
            let moved = path
                .rebase(&old_path, &new_path)
                .ok_or_else(|| {
                    FolderTreeError::Storage(AppError::internal(format!(
                        "Folder {} is not under {}",
                        descendant.id, old_path
                    )))
                })?;
            self.check_depth(moved.depth())?;
            rebased.push((descendant.id, moved));
        }

        let now = Utc::now();
        let moved = FolderRepository::move_folder(
            &mut **tx,
            folder_id,
            new_parent_id,
            &new_path.to_string(),
            now,
        )
        .await?
        .ok_or(FolderTreeError::FolderNotFound(folder_id))?;

        for (id, path) in &rebased {
            let updated =
                FolderRepository::update_path(&mut **tx, *id, &path.to_string(), now).await?;
            if !updated {
                return Err(FolderTreeError::FolderNotFound(*id));
            }
            debug!(folder_id = %id, path = %path, "Descendant path rewritten");
        }

        Ok((moved, rebased.len()))
    }

    /// Renames a folder. Paths are id-based, so no other row changes.
    pub async fn rename_folder(&self, folder_id: FolderId, new_name: &str) -> TreeResult<Folder> {
        let name = validate_name(new_name, "Folder")?;

        let mut conn = self.pool.acquire().await?;
        let folder = FolderRepository::rename(&mut conn, folder_id, &name, Utc::now())
            .await?
            .ok_or(FolderTreeError::FolderNotFound(folder_id))?;

        info!(folder_id = %folder_id, new_name = %folder.name, "Folder renamed");

        Ok(folder)
    }

    /// Deletes a folder that has no subfolders. Projects filed in it become
    /// unfiled.
    pub async fn delete_folder(&self, folder_id: FolderId) -> TreeResult<()> {
        let organization_id = self.get_folder(folder_id).await?.organization_id;

        let _guard = self.locks.acquire(organization_id).await;
        let mut tx = self.begin_write().await?;

        let folder = FolderRepository::find_by_id(&mut tx, folder_id)
            .await?
            .ok_or(FolderTreeError::FolderNotFound(folder_id))?;

        if FolderRepository::count_children(&mut tx, folder_id).await? > 0 {
            return Err(FolderTreeError::FolderNotEmpty(folder_id));
        }

        FolderRepository::delete(&mut tx, folder_id).await?;
        tx.commit()
            .await
            .map_err(|e| FolderTreeError::storage("Failed to commit folder deletion", e))?;

        info!(
            organization_id = %organization_id,
            folder_id = %folder_id,
            path = %folder.path,
            "Folder deleted"
        );

        Ok(())
    }

    /// Opens a transaction holding the database write lock from its first
    /// statement, so a read-then-write sequence never has to upgrade.
    async fn begin_write(&self) -> TreeResult<Transaction<'static, Sqlite>> {
        self.pool
            .begin_with("BEGIN IMMEDIATE")
            .await
            .map_err(|e| FolderTreeError::storage("Failed to begin write transaction", e))
    }

    fn check_depth(&self, depth: usize) -> TreeResult<()> {
        if depth > self.config.max_depth {
            return Err(FolderTreeError::MaxDepthExceeded {
                depth,
                max_depth: self.config.max_depth,
            });
        }
        Ok(())
    }
}

/// Parse a folder's stored path.
pub(crate) fn parse_path(folder: &Folder) -> TreeResult<FolderPath> {
    folder
        .folder_path()
        .map_err(|source| FolderTreeError::CorruptPath {
            folder_id: folder.id,
            source,
        })
}

/// Fetch the ancestors named by `folder`'s path, root first.
pub(crate) async fn load_ancestors(
    conn: &mut SqliteConnection,
    folder: &Folder,
) -> TreeResult<Vec<Folder>> {
    let path = parse_path(folder)?;
    let ancestor_ids = path.ancestor_ids();
    if ancestor_ids.is_empty() {
        return Ok(Vec::new());
    }

    let mut by_id: HashMap<FolderId, Folder> = FolderRepository::find_by_ids(conn, ancestor_ids)
        .await?
        .into_iter()
        .map(|f| (f.id, f))
        .collect();

    let mut ancestors = Vec::with_capacity(ancestor_ids.len());
    for id in ancestor_ids {
        match by_id.remove(id) {
            Some(ancestor) => ancestors.push(ancestor),
            None => warn!(folder_id = %folder.id, ancestor_id = %id, "Ancestor missing from path"),
        }
    }

    Ok(ancestors)
}
