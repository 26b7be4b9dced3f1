//! Output formats and file handling

pub mod plain;
pub mod srt;

use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::{ConvertError, Result};

pub use plain::render_plain;
pub use srt::render_srt;

/// Kind of file produced by a conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// SubRip subtitles
    Srt,
    /// CD cue sheet
    Cue,
    /// Plain-text transcript built from cue tracks
    Plain,
}

impl OutputFormat {
    /// Text that replaces `.vtt` in the source file name
    pub fn suffix(&self) -> &'static str {
        match self {
            OutputFormat::Srt => ".srt",
            OutputFormat::Cue => ".cue",
            OutputFormat::Plain => "_plain.txt",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::Srt => "SubRip",
            OutputFormat::Cue => "cue sheet",
            OutputFormat::Plain => "plain text",
        };
        f.write_str(name)
    }
}

/// Output path for `source`: same directory, `.vtt` in the file name replaced
/// by the format's suffix.
///
/// A file name without `.vtt` gets the suffix appended so the source is never
/// overwritten.
pub fn derive_output_path(source: &Path, format: OutputFormat) -> Result<PathBuf> {
    let name = source
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| ConvertError::UnsupportedSource(source.to_path_buf()))?;

    let output_name = if name.contains(".vtt") {
        name.replace(".vtt", format.suffix())
    } else {
        format!("{}{}", name, format.suffix())
    };

    Ok(source.with_file_name(output_name))
}

/// Write a rendered document, replacing any existing file
pub fn write_output(path: &Path, content: &str) -> Result<()> {
    std::fs::write(path, content)?;
    tracing::debug!("Wrote {} bytes to {}", content.len(), path.display());
    Ok(())
}
