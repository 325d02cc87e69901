pub mod catalog;
pub mod docstore;

pub use catalog::{InMemoryTypeCatalog, TypeCatalog};
pub use docstore::{DocumentationStore, InMemoryDocumentationStore};
