//! Organization entities.

pub mod model;

pub use model::Organization;
