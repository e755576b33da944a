// ABOUTME: Writer module for the mdslides application
// ABOUTME: Reads the source, clears the destination and writes one numbered file per slide

use crate::errors::{MdSlidesError, Result, WriteStep};
use crate::splitter::{self, SplitOptions};
use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};

/// Run one full split-and-write cycle, returning the written files in slide order
pub fn run(source: &Path, dest: &Path, options: &SplitOptions) -> Result<Vec<PathBuf>> {
    info!("Splitting {:?} into {:?}", source, dest);

    let bytes = fs::read(source).map_err(|e| MdSlidesError::ReadError {
        path: source.to_path_buf(),
        source: e,
    })?;
    let content = String::from_utf8_lossy(&bytes);

    reset_destination(dest)?;

    let slides = splitter::split(&content, options);
    let output_files = write_slides(dest, &slides)?;

    info!("Wrote {} slides to {:?}", output_files.len(), dest);
    Ok(output_files)
}

/// Remove `dest` if present, then create it empty
pub fn reset_destination(dest: &Path) -> Result<()> {
    if dest.is_dir() {
        fs::remove_dir_all(dest)
            .map_err(|e| MdSlidesError::write(WriteStep::RemoveDestination, dest, e))?;
    } else if dest.exists() {
        fs::remove_file(dest)
            .map_err(|e| MdSlidesError::write(WriteStep::RemoveDestination, dest, e))?;
    }

    fs::create_dir_all(dest)
        .map_err(|e| MdSlidesError::write(WriteStep::CreateDestination, dest, e))
}

/// Write each slide to `dest/NNN.md`
pub fn write_slides(dest: &Path, slides: &[String]) -> Result<Vec<PathBuf>> {
    let mut output_files = Vec::with_capacity(slides.len());

    for (i, slide) in slides.iter().enumerate() {
        let path = dest.join(slide_file_name(i));
        fs::write(&path, slide)
            .map_err(|e| MdSlidesError::write(WriteStep::WriteSlide, &path, e))?;
        debug!("Wrote slide {:?}", path);
        output_files.push(path);
    }

    Ok(output_files)
}

/// File name for the slide at 0-based `index`: 1-based, padded to at least three digits
pub fn slide_file_name(index: usize) -> String {
    format!("{:03}.md", index + 1)
}
