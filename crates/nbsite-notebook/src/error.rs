use std::path::PathBuf;

/// Errors raised while tagging a notebook.
#[derive(Debug, thiserror::Error)]
pub enum NotebookError {
    #[error("The file '{}' does not exist.", .0.display())]
    FileNotFound(PathBuf),
    #[error("failed to parse notebook '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("notebook root must be a JSON object")]
    RootNotObject,
    #[error("notebook `cells` must be an array")]
    CellsNotArray,
    #[error("cell {index}: {reason}")]
    MalformedCell { index: usize, reason: &'static str },
    #[error("failed to serialize notebook: {0}")]
    Serialize(#[source] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, NotebookError>;
