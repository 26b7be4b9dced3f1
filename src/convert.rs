//! Conversion pipelines
//!
//! Each call reads one WebVTT file and writes one output file. Nothing is
//! carried over between calls.

use std::path::{Path, PathBuf};

use crate::caption::Caption;
use crate::config::ConvertConfig;
use crate::cue::{aggregate_tracks, render_cue_sheet};
use crate::error::{ConvertError, Result};
use crate::output::{derive_output_path, render_plain, render_srt, write_output, OutputFormat};
use crate::vtt::read_vtt_file;

/// Summary of a finished conversion
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionReport {
    /// File that was written
    pub output: PathBuf,
    /// Output format
    pub format: OutputFormat,
    /// Captions parsed from the source
    pub captions: usize,
    /// Blocks written: subtitles for SubRip, tracks otherwise
    pub entries: usize,
}

/// Runs conversions with a fixed configuration
#[derive(Debug, Clone, Default)]
pub struct Converter {
    config: ConvertConfig,
}

impl Converter {
    /// Create a new converter
    pub fn new(config: ConvertConfig) -> Self {
        Self { config }
    }

    /// Get the configuration
    pub fn config(&self) -> &ConvertConfig {
        &self.config
    }

    /// Convert `source` and write the result next to it.
    ///
    /// Returns [`ConvertError::SourceNotFound`] without writing anything when the
    /// source does not exist.
    pub fn convert(&self, source: &Path, format: OutputFormat) -> Result<ConversionReport> {
        if !source.exists() {
            return Err(ConvertError::SourceNotFound(source.to_path_buf()));
        }
        self.config.validate()?;

        let output = derive_output_path(source, format)?;
        tracing::info!(
            "Converting {} to {} ({})",
            source.display(),
            output.display(),
            format
        );

        let captions = read_vtt_file(source)?;
        let (document, entries) = self.render(&captions, format);
        write_output(&output, &document)?;

        tracing::info!(
            "Wrote {} entries from {} captions to {}",
            entries,
            captions.len(),
            output.display()
        );

        Ok(ConversionReport {
            output,
            format,
            captions: captions.len(),
            entries,
        })
    }

    /// Render parsed captions in the given format.
    ///
    /// Returns the document and the number of blocks in it.
    pub fn render(&self, captions: &[Caption], format: OutputFormat) -> (String, usize) {
        match format {
            OutputFormat::Srt => match self.config.srt.max_caption_secs {
                Some(max) => {
                    let clamped: Vec<Caption> =
                        captions.iter().cloned().map(|c| c.clamped(max)).collect();
                    (render_srt(&clamped), clamped.len())
                }
                None => (render_srt(captions), captions.len()),
            },
            OutputFormat::Cue => {
                let tracks = aggregate_tracks(captions, self.config.cue.interval_secs);
                (
                    render_cue_sheet(&self.config.cue.header(), &tracks),
                    tracks.len(),
                )
            }
            OutputFormat::Plain => {
                let tracks = aggregate_tracks(captions, self.config.cue.interval_secs);
                (render_plain(&tracks), tracks.len())
            }
        }
    }
}
