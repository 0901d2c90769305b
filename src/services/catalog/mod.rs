//! Template & Persona Catalogs

pub mod personas;
pub mod registry;
pub mod templates;

pub use personas::builtin_personas;
pub use registry::{CatalogFile, CatalogRegistry};
pub use templates::builtin_templates;
