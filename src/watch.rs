// ABOUTME: Watch module for monitoring the source file and re-splitting it
// ABOUTME: Provides file watching, modification-time filtering and the per-run confirmation line

use chrono::Timelike;
use log::{debug, error, info};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::time::{Duration, SystemTime};

use notify::{RecursiveMode, Watcher};
use notify_debouncer_full::{new_debouncer, DebounceEventResult};

use crate::errors::Result;
use crate::splitter::SplitOptions;
use crate::utils;
use crate::writer;

/// Configuration for watch mode
#[derive(Debug, Clone)]
pub struct WatchConfig {
    /// Path to the markdown file to watch
    pub source: PathBuf,

    /// Output directory for slides
    pub dest: PathBuf,

    /// Editor command printed after each run
    pub editor: String,

    pub split: SplitOptions,

    /// Debounce time in milliseconds
    pub debounce_ms: u64,
}

/// Split once and print the confirmation line
pub fn run_once(config: &WatchConfig) -> Result<Vec<PathBuf>> {
    let output_files = writer::run(&config.source, &config.dest, &config.split)?;
    println!(
        "{}",
        confirmation_message(&chrono::Local::now(), &config.editor, &config.dest)
    );
    Ok(output_files)
}

/// `[H:M:S] MDSlides created` followed by the command that opens the slides
pub fn confirmation_message<T: Timelike>(time: &T, editor: &str, dest: &Path) -> String {
    format!(
        "[{}:{}:{}] MDSlides created\n{} {}/*",
        time.hour(),
        time.minute(),
        time.second(),
        editor,
        dest.display()
    )
}

/// Split the source, then keep re-splitting it whenever its modification time changes.
///
/// Only returns early on setup errors; failed re-runs are reported and watching continues.
pub fn watch_source(config: &WatchConfig) -> Result<()> {
    utils::validate_file_exists(&config.source)?;

    run_once(config)?;
    let mut last_modified = modified_time(&config.source);

    let (tx, rx) = mpsc::channel::<DebounceEventResult>();
    let mut debouncer = new_debouncer(Duration::from_millis(config.debounce_ms), None, tx)?;

    // Editors often replace the file on save, so watch the directory rather than the file
    let watch_path = match config.source.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    let abs_watch_path = utils::get_absolute_path(&watch_path)?;

    debouncer
        .watcher()
        .watch(&abs_watch_path, RecursiveMode::NonRecursive)?;

    info!("Watching for changes to {:?}", config.source);

    for result in rx {
        match result {
            Ok(events) => {
                let paths = events
                    .iter()
                    .flat_map(|event| event.paths.iter())
                    .map(PathBuf::as_path);

                if let Some(Err(e)) = handle_change(config, paths, &mut last_modified) {
                    error!("Failed to regenerate slides: {}", e);
                    eprintln!("Failed to regenerate slides: {}", e);
                }
            }
            Err(errors) => {
                for e in errors {
                    error!("Watch error: {:?}", e);
                }
            }
        }
    }

    Ok(())
}

/// Decide what one batch of changed paths means for the source and re-split if needed.
///
/// Returns `None` when the batch does not touch the source or its modification
/// time is unchanged since `last_modified`; otherwise the outcome of the re-run.
pub fn handle_change<'a>(
    config: &WatchConfig,
    paths: impl IntoIterator<Item = &'a Path>,
    last_modified: &mut Option<SystemTime>,
) -> Option<Result<Vec<PathBuf>>> {
    if !paths
        .into_iter()
        .any(|path| is_source_path(path, &config.source))
    {
        return None;
    }

    let modified = modified_time(&config.source);
    if modified == *last_modified {
        debug!("Source event without modification time change, skipping");
        return None;
    }
    *last_modified = modified;

    Some(run_once(config))
}

/// Whether a watcher event path refers to the source file
pub fn is_source_path(path: &Path, source: &Path) -> bool {
    if path == source {
        return true;
    }

    match (
        utils::get_absolute_path(path),
        utils::get_absolute_path(source),
    ) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

fn modified_time(path: &Path) -> Option<SystemTime> {
    fs::metadata(path).and_then(|m| m.modified()).ok()
}
