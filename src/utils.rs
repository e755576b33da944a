// ABOUTME: Utility functions for the mdslides application
// ABOUTME: Provides source path resolution and validation helpers

use crate::errors::{MdSlidesError, Result};
use std::path::{Path, PathBuf};

/// Validate that a file exists
pub fn validate_file_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(MdSlidesError::SourceNotFound(path.to_path_buf()));
    }
    if !path.is_file() {
        return Err(MdSlidesError::ValidationError(format!(
            "Path is not a file: {:?}",
            path
        )));
    }
    Ok(())
}

/// Resolve the source argument against `cwd` and check that it is an existing file
pub fn resolve_source(cwd: &Path, source: Option<&Path>) -> Result<PathBuf> {
    let source = source.ok_or(MdSlidesError::MissingArgument)?;
    let resolved = cwd.join(source);
    validate_file_exists(&resolved)?;
    Ok(resolved)
}

/// Get the absolute path
pub fn get_absolute_path(path: &Path) -> Result<PathBuf> {
    std::fs::canonicalize(path).map_err(|e| {
        MdSlidesError::ValidationError(format!("Failed to get absolute path for {:?}: {}", path, e))
    })
}
