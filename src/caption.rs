//! Caption records

use crate::time::CaptionTime;

/// A single caption with timing and one line of text
#[derive(Debug, Clone, PartialEq)]
pub struct Caption {
    /// Time the caption appears
    pub start: CaptionTime,
    /// Time the caption disappears
    pub end: CaptionTime,
    /// Caption text, surrounding whitespace removed
    pub text: String,
}

impl Caption {
    /// Create a new caption
    pub fn new(start: CaptionTime, end: CaptionTime, text: impl Into<String>) -> Self {
        Self {
            start,
            end,
            text: text.into().trim().to_string(),
        }
    }

    /// Display duration in seconds, never negative
    pub fn duration(&self) -> f64 {
        self.start.diff_between(&self.end)
    }

    /// Limit the display duration to `max_secs`, keeping the start time
    pub fn clamped(self, max_secs: f64) -> Self {
        if self.duration() <= max_secs {
            return self;
        }
        let end = self.start.offset_by_millis((max_secs * 1000.0).round() as i64);
        Self { end, ..self }
    }

    /// Timing line and text as they appear inside a SubRip block
    pub fn render_srt_body(&self) -> String {
        format!("{} --> {}\n{}\n", self.start, self.end, self.text)
    }
}
