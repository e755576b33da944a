// ABOUTME: Error types for the mdslides application
// ABOUTME: Provides structured error handling for argument checks, reading, writing and watching

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// The destination operation that was running when a write failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteStep {
    RemoveDestination,
    CreateDestination,
    WriteSlide,
}

impl fmt::Display for WriteStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let step = match self {
            WriteStep::RemoveDestination => "remove destination",
            WriteStep::CreateDestination => "create destination",
            WriteStep::WriteSlide => "write slide",
        };
        f.write_str(step)
    }
}

#[derive(Error, Debug)]
pub enum MdSlidesError {
    #[error("Source filepath is not provided\nexample usage: mdslides ./path/to/source.md")]
    MissingArgument,

    #[error("File does not exist.\n{0:?}")]
    SourceNotFound(PathBuf),

    #[error("Input validation error: {0}")]
    ValidationError(String),

    #[error("Failed to read file {path:?}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to {step} {path:?}: {source}")]
    WriteError {
        step: WriteStep,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Watch error: {0}")]
    WatchError(String),
}

impl MdSlidesError {
    pub(crate) fn write(step: WriteStep, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        MdSlidesError::WriteError {
            step,
            path: path.into(),
            source,
        }
    }
}

// Watcher failures are only ever setup failures
impl From<notify::Error> for MdSlidesError {
    fn from(err: notify::Error) -> Self {
        MdSlidesError::WatchError(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, MdSlidesError>;
