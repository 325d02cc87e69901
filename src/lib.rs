//! # docdump
//!
//! Compiles annotated type libraries and their XML documentation comments
//! into a single XML (or JSON) document describing every configurable
//! target, layout, layout renderer and filter.
//!
//! ```no_run
//! use docdump::{DocDumpBuilder, DocDumpError};
//!
//! fn main() -> Result<(), DocDumpError> {
//!     let dump = DocDumpBuilder::new()
//!         .with_library_file("NLog.json")
//!         .with_comments_file("NLog.xml")
//!         .build()?;
//!     dump.generate_to_file("NLog.api.xml")
//! }
//! ```

pub mod builder;
pub mod config;
pub mod error;

pub use builder::{DocDump, DocDumpBuilder};
pub use config::OutputFormat;
pub use error::DocDumpError;

pub use docdump_core as core;
pub use docdump_core::{ApiDocument, TypeNameResolver, Vocabulary};
pub use docdump_library as library;
pub use docdump_traits as traits;
pub use docdump_types as types;
pub use docdump_xmldoc as xmldoc;
