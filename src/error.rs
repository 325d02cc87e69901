// src/error.rs
use docdump_core::{CompileError, OutputError};
use docdump_library::LibraryError;
use docdump_xmldoc::XmlDocError;
use thiserror::Error;

/// A comprehensive error type for a documentation dump run.
#[derive(Error, Debug)]
pub enum DocDumpError {
    #[error("Library loading failed: {0}")]
    Library(#[from] LibraryError),

    #[error("Documentation comments could not be loaded: {0}")]
    Comments(#[from] XmlDocError),

    #[error("Compilation failed: {0}")]
    Compile(#[from] CompileError),

    #[error("Writing output failed: {0}")]
    Output(#[from] OutputError),

    #[error("Invalid vocabulary: {0}")]
    Vocabulary(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Output is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("Configuration error: {0}")]
    Config(String),
}
