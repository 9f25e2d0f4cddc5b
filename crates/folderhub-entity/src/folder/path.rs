//! Materialized folder paths.
//!
//! A path is the `/`-joined chain of folder ids from the organization root
//! down to the folder itself, e.g. `/<root-id>/<child-id>`. The last segment
//! is always the folder's own id; every earlier segment is an ancestor.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use folderhub_core::types::FolderId;

/// Errors raised while parsing a stored path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    /// The path does not start with `/`.
    #[error("path '{0}' must start with '/'")]
    NotAbsolute(String),
    /// The path has no segments.
    #[error("path is empty")]
    Empty,
    /// A segment is not a folder id.
    #[error("invalid path segment '{segment}' in '{path}'")]
    InvalidSegment {
        /// The full path.
        path: String,
        /// The offending segment.
        segment: String,
    },
}

/// A parsed, non-empty materialized path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FolderPath {
    ids: Vec<FolderId>,
}

impl FolderPath {
    /// The path of a root folder: `/<id>`.
    pub fn root(id: FolderId) -> Self {
        Self { ids: vec![id] }
    }

    /// The path of a direct child of this path.
    pub fn child(&self, id: FolderId) -> Self {
        let mut ids = self.ids.clone();
        ids.push(id);
        Self { ids }
    }

    /// The path a folder gets under `parent`, or as a root when `None`.
    pub fn under(parent: Option<&FolderPath>, id: FolderId) -> Self {
        match parent {
            Some(parent) => parent.child(id),
            None => Self::root(id),
        }
    }

    /// Number of id segments.
    pub fn depth(&self) -> usize {
        self.ids.len()
    }

    /// The folder this path belongs to.
    pub fn leaf(&self) -> FolderId {
        // Non-empty by construction.
        self.ids[self.ids.len() - 1]
    }

    /// Ancestor ids in root-first order, excluding the folder itself.
    pub fn ancestor_ids(&self) -> &[FolderId] {
        &self.ids[..self.ids.len() - 1]
    }

    /// Whether `prefix` is this path or one of its ancestors' paths.
    pub fn starts_with(&self, prefix: &FolderPath) -> bool {
        self.ids.starts_with(&prefix.ids)
    }

    /// Whether `id` appears anywhere in the path.
    pub fn contains(&self, id: FolderId) -> bool {
        self.ids.contains(&id)
    }

    /// Replace `old_prefix` with `new_prefix`, keeping the remaining suffix.
    ///
    /// Returns `None` when this path is not under `old_prefix`.
    pub fn rebase(&self, old_prefix: &FolderPath, new_prefix: &FolderPath) -> Option<FolderPath> {
        if !self.starts_with(old_prefix) {
            return None;
        }
        let mut ids = new_prefix.ids.clone();
        ids.extend_from_slice(&self.ids[old_prefix.ids.len()..]);
        Some(Self { ids })
    }
}

impl fmt::Display for FolderPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for id in &self.ids {
            write!(f, "/{id}")?;
        }
        Ok(())
    }
}

impl FromStr for FolderPath {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rest = s
            .strip_prefix('/')
            .ok_or_else(|| PathError::NotAbsolute(s.to_string()))?;
        if rest.is_empty() {
            return Err(PathError::Empty);
        }

        let ids = rest
            .split('/')
            .map(|segment| {
                segment.parse::<FolderId>().map_err(|_| PathError::InvalidSegment {
                    path: s.to_string(),
                    segment: segment.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { ids })
    }
}

impl TryFrom<String> for FolderPath {
    type Error = PathError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<FolderPath> for String {
    fn from(path: FolderPath) -> String {
        path.to_string()
    }
}
