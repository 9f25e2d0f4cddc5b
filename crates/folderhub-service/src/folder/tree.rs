//! Folder tree building and breadcrumb resolution.

use std::collections::HashMap;

use sqlx::SqlitePool;

use folderhub_core::types::{FolderId, OrganizationId};
use folderhub_database::repositories::{
    FolderRepository, OrganizationRepository, ProjectRepository,
};
use folderhub_entity::folder::{Folder, FolderNode, FolderTree};

use super::service::load_ancestors;
use crate::error::{FolderTreeError, TreeResult};

/// Builds nested folder trees for display.
#[derive(Debug, Clone)]
pub struct TreeService {
    /// Connection pool.
    pool: SqlitePool,
}

impl TreeService {
    /// Creates a new tree service.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Builds the subtree rooted at `folder_id`.
    pub async fn get_tree(&self, folder_id: FolderId) -> TreeResult<FolderNode> {
        let mut conn = self.pool.acquire().await?;

        let root = FolderRepository::find_by_id(&mut conn, folder_id)
            .await?
            .ok_or(FolderTreeError::FolderNotFound(folder_id))?;
        let descendants = FolderRepository::find_descendants(&mut conn, folder_id).await?;
        let project_counts =
            ProjectRepository::count_by_folder(&mut conn, root.organization_id).await?;

        let mut children = group_by_parent(descendants);
        Ok(build_node(root, &mut children, &project_counts))
    }

    /// Builds every root tree of an organization.
    pub async fn get_forest(&self, organization_id: OrganizationId) -> TreeResult<FolderTree> {
        let mut conn = self.pool.acquire().await?;

        OrganizationRepository::find_by_id(&mut conn, organization_id)
            .await?
            .ok_or(FolderTreeError::OrganizationNotFound(organization_id))?;

        let folders = FolderRepository::find_by_organization(&mut conn, organization_id).await?;
        if folders.is_empty() {
            return Ok(FolderTree::empty());
        }
        let project_counts = ProjectRepository::count_by_folder(&mut conn, organization_id).await?;

        let (roots, rest): (Vec<Folder>, Vec<Folder>) =
            folders.into_iter().partition(Folder::is_root);
        let mut children = group_by_parent(rest);

        let mut roots = roots;
        sort_by_name(&mut roots);
        let nodes = roots
            .into_iter()
            .map(|root| build_node(root, &mut children, &project_counts))
            .collect();

        Ok(FolderTree::from_roots(nodes))
    }

    /// The trail from the root down to and including `folder_id`.
    pub async fn get_breadcrumbs(&self, folder_id: FolderId) -> TreeResult<Vec<Folder>> {
        let mut conn = self.pool.acquire().await?;
        let folder = FolderRepository::find_by_id(&mut conn, folder_id)
            .await?
            .ok_or(FolderTreeError::FolderNotFound(folder_id))?;

        let mut trail = load_ancestors(&mut conn, &folder).await?;
        trail.push(folder);
        Ok(trail)
    }
}

fn group_by_parent(folders: Vec<Folder>) -> HashMap<FolderId, Vec<Folder>> {
    let mut children: HashMap<FolderId, Vec<Folder>> = HashMap::new();
    for folder in folders {
        if let Some(parent_id) = folder.parent_id {
            children.entry(parent_id).or_default().push(folder);
        }
    }
    for siblings in children.values_mut() {
        sort_by_name(siblings);
    }
    children
}

fn sort_by_name(folders: &mut [Folder]) {
    folders.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
}

fn build_node(
    folder: Folder,
    children: &mut HashMap<FolderId, Vec<Folder>>,
    project_counts: &HashMap<FolderId, u64>,
) -> FolderNode {
    let nested = children
        .remove(&folder.id)
        .unwrap_or_default()
        .into_iter()
        .map(|child| build_node(child, children, project_counts))
        .collect();

    FolderNode {
        id: folder.id,
        depth: folder.depth(),
        project_count: project_counts.get(&folder.id).copied().unwrap_or(0),
        name: folder.name,
        path: folder.path,
        children: nested,
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use folderhub_entity::folder::FolderPath;

    use super::*;

    fn folder(name: &str, parent: Option<&Folder>) -> Folder {
        let id = FolderId::new();
        let path = match parent {
            Some(p) => p.folder_path().expect("valid path").child(id),
            None => FolderPath::root(id),
        };
        Folder {
            id,
            organization_id: OrganizationId::new(),
            parent_id: parent.map(|p| p.id),
            name: name.to_string(),
            path: path.to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_build_node_nests_and_sorts_children() {
        let root = folder("root", None);
        let b = folder("b", Some(&root));
        let a = folder("a", Some(&root));
        let leaf = folder("leaf", Some(&a));

        let mut counts = HashMap::new();
        counts.insert(a.id, 3);

        let mut children = group_by_parent(vec![b.clone(), a.clone(), leaf.clone()]);
        let node = build_node(root, &mut children, &counts);

        assert_eq!(node.size(), 4);
        assert_eq!(node.depth, 1);
        let names: Vec<_> = node.children.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b"]);
        assert_eq!(node.children[0].project_count, 3);
        assert_eq!(node.children[0].children[0].id, leaf.id);
        assert_eq!(node.children[0].children[0].depth, 3);
    }
}
