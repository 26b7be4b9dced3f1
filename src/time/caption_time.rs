//! Millisecond caption timestamps

use std::fmt;
use std::str::FromStr;

use chrono::Duration;

use crate::error::{ConvertError, Result};
use crate::time::cue_time::FRAMES_PER_SECOND;

const MS_PER_SECOND: i64 = 1000;
const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;

/// A point in a caption timeline.
///
/// Stored as an offset from midnight of a fixed epoch day so two times can be
/// subtracted. Hours are not wrapped at 24.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct CaptionTime {
    offset: Duration,
}

impl CaptionTime {
    /// Build a time from its components.
    ///
    /// Components are not range checked: a minute value of 75 simply adds
    /// 75 minutes to the offset.
    pub fn new(hours: u32, minutes: u32, seconds: u32, millis: u32) -> Self {
        let total = hours as i64 * MS_PER_HOUR
            + minutes as i64 * MS_PER_MINUTE
            + seconds as i64 * MS_PER_SECOND
            + millis as i64;
        Self::from_millis(total)
    }

    /// Build a time from a millisecond offset
    pub fn from_millis(millis: i64) -> Self {
        Self {
            offset: Duration::milliseconds(millis),
        }
    }

    pub fn hours(&self) -> i64 {
        self.offset.num_hours()
    }

    pub fn minutes(&self) -> i64 {
        self.offset.num_minutes() % 60
    }

    pub fn seconds(&self) -> i64 {
        self.offset.num_seconds() % 60
    }

    pub fn millis(&self) -> i64 {
        self.offset.num_milliseconds() % MS_PER_SECOND
    }

    /// Offset from the epoch in milliseconds
    pub fn as_millis(&self) -> i64 {
        self.offset.num_milliseconds()
    }

    /// Seconds elapsed since epoch midnight
    pub fn total_seconds(&self) -> f64 {
        self.as_millis() as f64 / MS_PER_SECOND as f64
    }

    /// Absolute distance to `other` in seconds.
    ///
    /// Always non-negative, whichever of the two times comes first.
    pub fn diff_between(&self, other: &CaptionTime) -> f64 {
        let diff = other.offset - self.offset;
        (diff.num_milliseconds() as f64 / MS_PER_SECOND as f64).abs()
    }

    /// Shift this time by a number of milliseconds
    pub fn offset_by_millis(&self, millis: i64) -> Self {
        Self {
            offset: self.offset + Duration::milliseconds(millis),
        }
    }

    /// Position of this time in cue sheet frames, truncated toward zero.
    ///
    /// Computed in integer milliseconds so that e.g. 0.04s maps to exactly 3 frames.
    pub fn to_cue_frames(&self) -> u64 {
        let millis = self.as_millis().max(0) as u64;
        millis * FRAMES_PER_SECOND / MS_PER_SECOND as u64
    }

    /// SubRip notation: `HH:MM:SS,mmm`
    pub fn to_srt_string(&self) -> String {
        format!(
            "{:02}:{:02}:{:02},{:03}",
            self.hours(),
            self.minutes(),
            self.seconds(),
            self.millis()
        )
    }
}

impl fmt::Display for CaptionTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_srt_string())
    }
}

impl FromStr for CaptionTime {
    type Err = ConvertError;

    /// Parse a single `[HH:]MM:SS.mmm` (WebVTT) or `HH:MM:SS,mmm` (SubRip) timestamp
    fn from_str(s: &str) -> Result<Self> {
        let caps = regex!(r"^(?:(\d{1,2}):)?(\d{2}):(\d{2})[.,](\d{3})$")
            .captures(s.trim())
            .ok_or_else(|| ConvertError::InvalidTimestamp(s.to_string()))?;

        let field = |idx: usize| -> Result<u32> {
            match caps.get(idx) {
                Some(m) => m
                    .as_str()
                    .parse()
                    .map_err(|_| ConvertError::InvalidTimestamp(s.to_string())),
                None => Ok(0),
            }
        };

        Ok(Self::new(field(1)?, field(2)?, field(3)?, field(4)?))
    }
}
