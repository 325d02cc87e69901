use std::path::PathBuf;
use thiserror::Error;

/// Error type for library loading operations.
#[derive(Error, Debug)]
pub enum LibraryError {
    #[error("Failed to read library manifest '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid library manifest '{path}': {source}")]
    Manifest {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Could not resolve library '{library}' referenced by '{referenced_by}'")]
    Unresolved {
        library: String,
        referenced_by: String,
    },
}
