//! Folder tree configuration.

use serde::{Deserialize, Serialize};

/// Rules applied to every organization's folder tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreeConfig {
    /// Maximum number of identifier segments in a folder path.
    ///
    /// A folder whose parent already sits at this depth cannot be created.
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            max_depth: default_max_depth(),
        }
    }
}

fn default_max_depth() -> usize {
    4
}
