use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The selected file is not something we can read as an archive.
    #[error("Invalid upload '{}': {reason}", path.display())]
    InvalidUpload { path: PathBuf, reason: String },

    /// The archive reader rejected the file.
    #[error("Failed to decode archive '{}': {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: zip::result::ZipError,
    },

    #[error("Invalid config: {0}")]
    Config(String),

    #[error("Export failed: {0}")]
    Export(#[from] ExportError),

    #[error("No archive loaded")]
    NoTree,
}

/// Failures while turning a rendered view into an SVG file.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("nothing to export for {0}")]
    EmptyTarget(&'static str),

    #[error("serialized output is not an SVG document")]
    Malformed,

    #[error("could not write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
