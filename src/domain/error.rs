use std::path::PathBuf;
use thiserror::Error;

/// Faults the session turns into an error toast.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("query execution failed: {0}")]
    Execution(String),
    #[error("export failed: {0}")]
    Export(String),
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed value stored under {key}: {source}")]
    Malformed {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}
