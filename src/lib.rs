// ABOUTME: Library module for the mdslides program.
// ABOUTME: Contains the splitter, the slide writer and watch mode.

// Reexport modules
pub mod config;
pub mod errors;
pub mod splitter;
pub mod utils;
pub mod watch;
pub mod writer;

// Reexport common types and functions
pub use config::Config;
pub use errors::{MdSlidesError, Result, WriteStep};
pub use splitter::{LineEnding, Slide, SplitOptions, find_slides, render_slide, split};
pub use watch::{WatchConfig, watch_source};
pub use writer::{run, slide_file_name, write_slides};
