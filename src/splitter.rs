// ABOUTME: Splitter module for the mdslides application
// ABOUTME: Breaks one markdown document into slide texts at top-level heading lines

use clap::ValueEnum;
use log::debug;

/// Line terminator used to break a document into lines and to join slide lines back together
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LineEnding {
    /// `\n`
    Lf,
    /// `\r\n`
    #[value(name = "crlf")]
    CrLf,
    /// Whatever the current platform uses
    #[default]
    Native,
}

impl LineEnding {
    pub fn as_str(self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
            LineEnding::Native => {
                if cfg!(windows) {
                    "\r\n"
                } else {
                    "\n"
                }
            }
        }
    }
}

/// Options controlling how a document is split
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SplitOptions {
    pub line_ending: LineEnding,

    /// Rewrite `\r\n` and lone `\r` to `line_ending` before splitting
    pub normalize_line_endings: bool,
}

/// A run of document lines that becomes one output file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slide {
    /// Raw text of the line that opened the slide
    pub title: String,
    /// First line, inclusive
    pub start: usize,
    /// Last line, exclusive
    pub end: usize,
}

/// Split a document into rendered slide texts, in document order
pub fn split(text: &str, options: &SplitOptions) -> Vec<String> {
    let terminator = options.line_ending.as_str();

    let normalized;
    let text = if options.normalize_line_endings {
        normalized = normalize_line_endings(text, terminator);
        normalized.as_str()
    } else {
        text
    };

    let lines: Vec<&str> = text.split(terminator).collect();
    let slides = find_slides(&lines);
    debug!("Found {} slides in {} lines", slides.len(), lines.len());

    slides
        .iter()
        .map(|slide| render_slide(&lines, slide, options.line_ending))
        .collect()
}

/// Locate slide boundaries.
///
/// Line 0 always seeds the first slide. Every later line starting with `#` closes
/// the current slide and opens a new one, except the final line, which always
/// belongs to the slide that is open when the document ends.
pub fn find_slides(lines: &[&str]) -> Vec<Slide> {
    let Some(first) = lines.first() else {
        return Vec::new();
    };

    let last = lines.len() - 1;
    let mut slides = Vec::new();
    let mut current = Slide {
        title: first.to_string(),
        start: 0,
        end: 0,
    };

    for (i, line) in lines.iter().enumerate().take(last).skip(1) {
        if line.starts_with('#') {
            debug!("Slide boundary at line {}: {}", i, line);
            let next = Slide {
                title: line.to_string(),
                start: i,
                end: 0,
            };
            let mut closed = std::mem::replace(&mut current, next);
            closed.end = i;
            slides.push(closed);
        }
    }

    current.end = lines.len();
    slides.push(current);
    slides
}

/// Render the lines of one slide as trimmed markdown.
///
/// Lines starting with `<!--` are dropped. Comments that span several lines or
/// start mid-line are left alone. A byte order mark at either edge is trimmed
/// along with the whitespace.
pub fn render_slide(lines: &[&str], slide: &Slide, line_ending: LineEnding) -> String {
    let terminator = line_ending.as_str();

    let body = lines[slide.start..slide.end]
        .iter()
        .filter(|line| !line.starts_with("<!--"))
        .copied()
        .collect::<Vec<_>>()
        .join(terminator);

    let triple = terminator.repeat(3);
    let double = terminator.repeat(2);
    body.replace(&triple, &double)
        .trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
        .to_string()
}

fn normalize_line_endings(text: &str, terminator: &str) -> String {
    text.replace("\r\n", "\n")
        .replace('\r', "\n")
        .replace('\n', terminator)
}
