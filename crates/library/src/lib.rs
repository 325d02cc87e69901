//! Type library loading for docdump.
//!
//! Libraries are described by JSON manifests (one per library) listing the
//! library's name, the libraries it references and its declared types.
//! [`LibrarySet`] loads manifests, resolves references from already-loaded
//! libraries or from reference directories, and exposes everything through
//! the [`TypeCatalog`](docdump_traits::TypeCatalog) trait.

mod error;
mod manifest;
mod set;

pub use error::LibraryError;
pub use manifest::LibraryManifest;
pub use set::LibrarySet;
