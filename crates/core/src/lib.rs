//! # docdump-core
//!
//! The metadata-to-document compiler.
//!
//! - **names**: short display names for well-known type identities
//! - **ident**: camel-case and slug generation
//! - **normalize**: whitespace and summary clean-up of documentation fragments
//! - **lookup**: ordered, first-match documentation lookup
//! - **classify**: property eligibility, categories, ordering and type-kind resolution
//! - **assemble**: documented-kind discovery and document assembly
//! - **writer**: XML and JSON serialization of the assembled document
//!
//! ## Design Principle
//!
//! The compiler only talks to its inputs through the
//! [`TypeCatalog`](docdump_traits::TypeCatalog) and
//! [`DocumentationStore`](docdump_traits::DocumentationStore) traits. Lookup
//! tables ([`TypeNameResolver`], [`Vocabulary`]) are built once and passed by
//! reference.

pub use docdump_traits as traits;
pub use docdump_types as types;

pub mod assemble;
pub mod classify;
pub mod document;
pub mod error;
pub mod ident;
pub mod lookup;
pub mod names;
pub mod normalize;
pub mod vocabulary;
pub mod writer;

pub use assemble::Compiler;
pub use classify::{Category, CategoryTable, Classifier, TypeMembers};
pub use document::{
    ApiDocument, ElementTypeEntry, EnumMemberEntry, KindEntry, PropertyEntry, PropertyType,
};
pub use error::{CompileError, OutputError};
pub use ident::{camel_case, slugify};
pub use lookup::DocLookup;
pub use names::TypeNameResolver;
pub use normalize::{collapse_whitespace, normalize_fragment, normalize_summary};
pub use vocabulary::{DocKind, Vocabulary};
pub use writer::{XmlDocumentWriter, write_json};
