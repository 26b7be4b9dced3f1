//! Conversion configuration

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::cue::CueSheetHeader;
use crate::error::{ConvertError, Result};

/// Cue sheet configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CueConfig {
    /// Minimum seconds between track starts; 0 makes every caption a track
    pub interval_secs: f64,

    /// Sheet title
    pub title: String,

    /// Audio file the sheet refers to
    pub audio_file: String,

    /// Sheet performer
    pub performer: String,

    /// Colour tag written on every track
    pub track_color: String,
}

impl Default for CueConfig {
    fn default() -> Self {
        let header = CueSheetHeader::default();
        Self {
            interval_secs: 0.0,
            title: header.title,
            audio_file: header.audio_file,
            performer: header.performer,
            track_color: header.track_color,
        }
    }
}

impl CueConfig {
    /// Header fields for the generated sheet
    pub fn header(&self) -> CueSheetHeader {
        CueSheetHeader {
            title: self.title.clone(),
            audio_file: self.audio_file.clone(),
            performer: self.performer.clone(),
            track_color: self.track_color.clone(),
        }
    }
}

/// SubRip configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SrtConfig {
    /// Longest time a caption stays on screen; unlimited when unset
    pub max_caption_secs: Option<f64>,
}

/// Conversion configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConvertConfig {
    /// Cue sheet configuration
    pub cue: CueConfig,

    /// SubRip configuration
    pub srt: SrtConfig,

    /// Report a missing source file as an error instead of skipping it
    pub strict: bool,

    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,

    /// Log output format (pretty, json)
    pub log_format: String,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            cue: CueConfig::default(),
            srt: SrtConfig::default(),
            strict: false,
            log_level: "info".to_string(),
            log_format: "pretty".to_string(),
        }
    }
}

impl ConvertConfig {
    /// Check value ranges
    pub fn validate(&self) -> Result<()> {
        // infinity is allowed and yields no tracks
        if self.cue.interval_secs.is_nan() || self.cue.interval_secs < 0.0 {
            return Err(ConvertError::Config(format!(
                "cue interval must be a non-negative number of seconds, got {}",
                self.cue.interval_secs
            )));
        }

        if let Some(max) = self.srt.max_caption_secs {
            if !max.is_finite() || max <= 0.0 {
                return Err(ConvertError::Config(format!(
                    "max caption duration must be a positive number of seconds, got {}",
                    max
                )));
            }
        }

        Ok(())
    }

    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: ConvertConfig =
            toml::from_str(&content).map_err(|e| ConvertError::Config(e.to_string()))?;
        Ok(config)
    }

    /// Save configuration to a TOML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| ConvertError::Config(e.to_string()))?;
        std::fs::write(path.as_ref(), content)?;
        Ok(())
    }
}
