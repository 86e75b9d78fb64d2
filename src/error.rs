//! Error types for collection runs

use std::path::PathBuf;

use thiserror::Error;

/// Fatal errors. Per-file problems never surface here; they are recorded
/// inline in the output instead.
#[derive(Error, Debug)]
pub enum CollateError {
    #[error("cannot access '{}'", path.display())]
    RootNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("not a directory: {}", .0.display())]
    RootNotDirectory(PathBuf),

    #[error("invalid glob pattern: {pattern}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("failed to create output file: {}", path.display())]
    OutputCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write output file: {}", path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The output file was written, but wrapping it in an archive failed.
    #[error("failed to create archive for {}", output.display())]
    Archive {
        output: PathBuf,
        #[source]
        source: zip::result::ZipError,
    },
}

pub type Result<T> = std::result::Result<T, CollateError>;
