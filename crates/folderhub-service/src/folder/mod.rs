//! Folder tree management and tree rendering services.

pub mod lock;
pub mod service;
pub mod tree;

pub use lock::OrganizationLocks;
pub use service::FolderService;
pub use tree::TreeService;
