//! Error types for compilation and output.

use thiserror::Error;

/// Errors that abort a compilation run.
#[derive(Error, Debug)]
pub enum CompileError {
    #[error("Invalid order value '{value}' in documentation entry '{entry}'")]
    InvalidOrder { entry: String, value: String },

    #[error("Type '{name}' referenced by '{referenced_by}' is not in any loaded library")]
    UnresolvedType { name: String, referenced_by: String },

    #[error("Malformed '{annotation}' annotation on '{member}': {message}")]
    MalformedAnnotation {
        annotation: String,
        member: String,
        message: String,
    },
}

/// Errors raised while serializing the assembled document.
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Quick-XML error: {0}")]
    QuickXml(#[from] quick_xml::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
