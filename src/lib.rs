//! WebVTT subtitle conversion
//!
//! Reads WebVTT caption files and writes them as SubRip subtitles, as a CD
//! cue sheet with one track per group of captions, or as a plain-text
//! transcript of those tracks.

// helper.
macro_rules! regex {
    ($re:literal $(,)?) => {{
        static RE: std::sync::OnceLock<regex::Regex> = std::sync::OnceLock::new();
        RE.get_or_init(|| regex::Regex::new($re).unwrap())
    }};
}

pub mod caption;
pub mod config;
pub mod config_file;
pub mod convert;
pub mod cue;
pub mod error;
pub mod output;
pub mod time;
pub mod vtt;


pub use caption::Caption;
pub use config::ConvertConfig;
pub use convert::{ConversionReport, Converter};
pub use error::{ConvertError, Result};
pub use output::OutputFormat;
pub use time::{CaptionTime, CueTime};
