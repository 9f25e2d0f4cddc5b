//! Folder tree structures for hierarchical display.

use serde::{Deserialize, Serialize};

use folderhub_core::types::FolderId;

/// A node in a folder tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FolderNode {
    /// Folder ID.
    pub id: FolderId,
    /// Folder name.
    pub name: String,
    /// Materialized path.
    pub path: String,
    /// Number of path segments.
    pub depth: usize,
    /// Number of projects filed directly in this folder.
    pub project_count: u64,
    /// Child folder nodes, ordered by name.
    pub children: Vec<FolderNode>,
}

impl FolderNode {
    /// Number of nodes in this subtree, including this one.
    pub fn size(&self) -> u64 {
        1 + self.children.iter().map(FolderNode::size).sum::<u64>()
    }
}

/// Every root tree of an organization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FolderTree {
    /// The root node(s) of the tree.
    pub roots: Vec<FolderNode>,
    /// Total number of folders in the tree.
    pub total_folders: u64,
}

impl FolderTree {
    /// Create an empty folder tree.
    pub fn empty() -> Self {
        Self {
            roots: Vec::new(),
            total_folders: 0,
        }
    }

    /// Build from root nodes, counting every folder.
    pub fn from_roots(roots: Vec<FolderNode>) -> Self {
        let total_folders = roots.iter().map(FolderNode::size).sum();
        Self {
            roots,
            total_folders,
        }
    }
}
