//! Folder domain entities.

pub mod model;
pub mod path;
pub mod tree;

pub use model::{Folder, NewFolder};
pub use path::{FolderPath, PathError};
pub use tree::{FolderNode, FolderTree};
