use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum SidebarError {
    #[error("TOC file not found: {}", .0.display())]
    TocNotFound(PathBuf),
    #[error("Template file not found: {}", .0.display())]
    TemplateNotFound(PathBuf),
    #[error("failed to read file timestamp of {}: {source}", path.display())]
    Timestamp {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to render year groups: {0}")]
    Render(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SidebarError>;
