//! Configuration file support
//!
//! Loads conversion settings from TOML files. Every section and field is
//! optional; anything left out keeps its default.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::config::{ConvertConfig, CueConfig, SrtConfig};
use crate::error::{ConvertError, Result};

/// Configuration file format
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    /// Cue sheet settings
    pub cue: Option<CueSettings>,
    /// SubRip settings
    pub srt: Option<SrtSettings>,
    /// Logging settings
    pub logging: Option<LoggingSettings>,
    /// Behavior settings
    pub behavior: Option<BehaviorSettings>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CueSettings {
    /// Minimum seconds between track starts
    pub interval_secs: Option<f64>,
    /// Sheet title
    pub title: Option<String>,
    /// Audio file referenced by the sheet
    pub audio_file: Option<String>,
    /// Sheet performer
    pub performer: Option<String>,
    /// Track colour tag
    pub track_color: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SrtSettings {
    /// Longest time a caption stays on screen
    pub max_caption_secs: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Output format (json, pretty)
    pub format: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BehaviorSettings {
    /// Fail when the source file is missing
    pub strict: Option<bool>,
}

impl ConfigFile {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            ConvertError::Config(format!("cannot read {}: {}", path.display(), e))
        })?;
        let config: ConfigFile = toml::from_str(&content)
            .map_err(|e| ConvertError::Config(format!("{}: {}", path.display(), e)))?;
        Ok(config)
    }

    /// Save configuration to a TOML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| ConvertError::Config(e.to_string()))?;
        std::fs::write(path.as_ref(), content)?;
        Ok(())
    }

    /// Generate default configuration file
    pub fn default_config() -> Self {
        let defaults = ConvertConfig::default();
        Self {
            cue: Some(CueSettings {
                interval_secs: Some(defaults.cue.interval_secs),
                title: Some(defaults.cue.title),
                audio_file: Some(defaults.cue.audio_file),
                performer: Some(defaults.cue.performer),
                track_color: Some(defaults.cue.track_color),
            }),
            srt: Some(SrtSettings {
                max_caption_secs: None,
            }),
            logging: Some(LoggingSettings {
                level: defaults.log_level,
                format: Some(defaults.log_format),
            }),
            behavior: Some(BehaviorSettings {
                strict: Some(defaults.strict),
            }),
        }
    }

    /// Convert to ConvertConfig
    pub fn into_convert_config(self) -> ConvertConfig {
        let defaults = ConvertConfig::default();
        let cue = self.cue.unwrap_or_default();
        let logging = self.logging;

        ConvertConfig {
            cue: CueConfig {
                interval_secs: cue.interval_secs.unwrap_or(defaults.cue.interval_secs),
                title: cue.title.unwrap_or(defaults.cue.title),
                audio_file: cue.audio_file.unwrap_or(defaults.cue.audio_file),
                performer: cue.performer.unwrap_or(defaults.cue.performer),
                track_color: cue.track_color.unwrap_or(defaults.cue.track_color),
            },
            srt: SrtConfig {
                max_caption_secs: self.srt.and_then(|s| s.max_caption_secs),
            },
            strict: self
                .behavior
                .and_then(|b| b.strict)
                .unwrap_or(defaults.strict),
            log_level: logging
                .as_ref()
                .map(|l| l.level.clone())
                .unwrap_or(defaults.log_level),
            log_format: logging
                .and_then(|l| l.format)
                .unwrap_or(defaults.log_format),
        }
    }
}

/// Generate default configuration file at the specified path
pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
    let config = ConfigFile::default_config();
    config.to_file(path)?;
    Ok(())
}
