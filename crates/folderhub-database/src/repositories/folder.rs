//! Folder repository implementation.

use chrono::{DateTime, Utc};
use sqlx::{QueryBuilder, Sqlite, SqliteConnection};

use folderhub_core::error::{AppError, ErrorKind};
use folderhub_core::result::AppResult;
use folderhub_core::types::{FolderId, OrganizationId};
use folderhub_entity::folder::{Folder, NewFolder};

/// Folder CRUD and tree queries.
///
/// Every method runs on the connection it is handed, which may be a pooled
/// connection or an open transaction.
#[derive(Debug, Clone, Copy, Default)]
pub struct FolderRepository;

impl FolderRepository {
    /// Find a folder by ID.
    pub async fn find_by_id(conn: &mut SqliteConnection, id: FolderId) -> AppResult<Option<Folder>> {
        sqlx::query_as::<_, Folder>("SELECT * FROM folders WHERE id = ?1")
            .bind(id)
            .fetch_optional(conn)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find folder", e))
    }

    /// Find a folder by ID, only if it belongs to `organization_id`.
    pub async fn find_in_organization(
        conn: &mut SqliteConnection,
        organization_id: OrganizationId,
        id: FolderId,
    ) -> AppResult<Option<Folder>> {
        sqlx::query_as::<_, Folder>(
            "SELECT * FROM folders WHERE id = ?1 AND organization_id = ?2",
        )
        .bind(id)
        .bind(organization_id)
        .fetch_optional(conn)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find folder", e))
    }

    /// Fetch several folders by ID, in no particular order.
    pub async fn find_by_ids(conn: &mut SqliteConnection, ids: &[FolderId]) -> AppResult<Vec<Folder>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut builder = QueryBuilder::<Sqlite>::new("SELECT * FROM folders WHERE id IN (");
        let mut separated = builder.separated(", ");
        for id in ids {
            separated.push_bind(*id);
        }
        separated.push_unseparated(")");

        builder
            .build_query_as::<Folder>()
            .fetch_all(conn)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to fetch folders", e))
    }

    /// List direct children of `parent_id`, or the organization's root
    /// folders when `parent_id` is `None`, ordered by name.
    pub async fn find_children(
        conn: &mut SqliteConnection,
        organization_id: OrganizationId,
        parent_id: Option<FolderId>,
    ) -> AppResult<Vec<Folder>> {
        // `IS` matches NULL as well as equal values.
        sqlx::query_as::<_, Folder>(
            "SELECT * FROM folders WHERE organization_id = ?1 AND parent_id IS ?2 \
             ORDER BY name ASC, id ASC",
        )
        .bind(organization_id)
        .bind(parent_id)
        .fetch_all(conn)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list children", e))
    }

    /// Recursive query to get all descendants of a folder, ordered by path.
    ///
    /// The folder itself is not included.
    pub async fn find_descendants(conn: &mut SqliteConnection, id: FolderId) -> AppResult<Vec<Folder>> {
        sqlx::query_as::<_, Folder>(
            "WITH RECURSIVE tree(id) AS ( \
                SELECT id FROM folders WHERE parent_id = ?1 \
                UNION ALL \
                SELECT f.id FROM folders f INNER JOIN tree t ON f.parent_id = t.id \
             ) \
             SELECT f.* FROM folders f INNER JOIN tree t ON f.id = t.id \
             ORDER BY f.path ASC",
        )
        .bind(id)
        .fetch_all(conn)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list descendants", e))
    }

    /// Every folder of an organization, ordered by path.
    pub async fn find_by_organization(
        conn: &mut SqliteConnection,
        organization_id: OrganizationId,
    ) -> AppResult<Vec<Folder>> {
        sqlx::query_as::<_, Folder>(
            "SELECT * FROM folders WHERE organization_id = ?1 ORDER BY path ASC",
        )
        .bind(organization_id)
        .fetch_all(conn)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list folders", e))
    }

    /// Insert a new folder.
    pub async fn create(
        conn: &mut SqliteConnection,
        data: &NewFolder,
        now: DateTime<Utc>,
    ) -> AppResult<Folder> {
        sqlx::query_as::<_, Folder>(
            "INSERT INTO folders (id, organization_id, parent_id, name, path, created_at, updated_at) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?6) RETURNING *",
        )
        .bind(data.id)
        .bind(data.organization_id)
        .bind(data.parent_id)
        .bind(&data.name)
        .bind(data.path.to_string())
        .bind(now)
        .fetch_one(conn)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
                AppError::conflict(format!("Folder path '{}' already exists", data.path))
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create folder", e),
        })
    }

    /// Rename a folder. The path is untouched.
    pub async fn rename(
        conn: &mut SqliteConnection,
        id: FolderId,
        new_name: &str,
        now: DateTime<Utc>,
    ) -> AppResult<Option<Folder>> {
        sqlx::query_as::<_, Folder>(
            "UPDATE folders SET name = ?2, updated_at = ?3 WHERE id = ?1 RETURNING *",
        )
        .bind(id)
        .bind(new_name)
        .bind(now)
        .fetch_optional(conn)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to rename folder", e))
    }

    /// Re-parent a folder and store its recomputed path.
    pub async fn move_folder(
        conn: &mut SqliteConnection,
        id: FolderId,
        new_parent_id: Option<FolderId>,
        new_path: &str,
        now: DateTime<Utc>,
    ) -> AppResult<Option<Folder>> {
        sqlx::query_as::<_, Folder>(
            "UPDATE folders SET parent_id = ?2, path = ?3, updated_at = ?4 \
             WHERE id = ?1 RETURNING *",
        )
        .bind(id)
        .bind(new_parent_id)
        .bind(new_path)
        .bind(now)
        .fetch_optional(conn)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to move folder", e))
    }

    /// Overwrite a single folder's path. Returns `true` if a row changed.
    pub async fn update_path(
        conn: &mut SqliteConnection,
        id: FolderId,
        new_path: &str,
        now: DateTime<Utc>,
    ) -> AppResult<bool> {
        let result = sqlx::query("UPDATE folders SET path = ?2, updated_at = ?3 WHERE id = ?1")
            .bind(id)
            .bind(new_path)
            .bind(now)
            .execute(conn)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to update folder path", e)
            })?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete a folder row. Returns `true` if deleted.
    pub async fn delete(conn: &mut SqliteConnection, id: FolderId) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM folders WHERE id = ?1")
            .bind(id)
            .execute(conn)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete folder", e))?;
        Ok(result.rows_affected() > 0)
    }

    /// Count direct child folders.
    pub async fn count_children(conn: &mut SqliteConnection, id: FolderId) -> AppResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM folders WHERE parent_id = ?1")
            .bind(id)
            .fetch_one(conn)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count children", e)
            })?;
        Ok(count as u64)
    }
}
