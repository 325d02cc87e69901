//! XML documentation-comment stores.
//!
//! Compilers emit member documentation as a `<doc><members><member name="…">`
//! file next to each library. This crate loads such files into
//! [`DocumentationStore`](docdump_traits::DocumentationStore) implementations.

mod error;
mod store;

pub use error::XmlDocError;
pub use store::XmlDocumentationStore;
