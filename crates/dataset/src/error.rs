use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("Could not open file {} for writing.", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not open file {} for reading.", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("An I/O error occurred while accessing the dataset: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed dataset line {line}: {reason}")]
    Parse { line: usize, reason: String },
}
