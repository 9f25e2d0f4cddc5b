//! Project entities.

pub mod model;

pub use model::Project;
