use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum XmlDocError {
    #[error("Failed to read documentation file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("XML parsing error: {0}")]
    XmlParse(#[from] roxmltree::Error),
}
