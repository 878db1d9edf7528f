// Résumé data: load once, validate against a declarative schema, sort,
// and serve read-only projections of the cached document.

pub mod error;
pub mod featured;
pub mod handlers;
pub mod loader;
pub mod schema;
pub mod sections;
pub mod sorting;

pub use error::DataIntegrityError;
pub use loader::ResumeStore;
