//! Repository implementations for all FolderHub entities.

pub mod folder;
pub mod organization;
pub mod project;

pub use folder::FolderRepository;
pub use organization::OrganizationRepository;
pub use project::ProjectRepository;
