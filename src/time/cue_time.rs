//! Cue sheet timestamps
//!
//! Cue sheets address audio in frames of 1/75 second and write positions as
//! `MM:SS:FF`. There is no hour field; minutes simply keep counting past 59.

use std::fmt;
use std::ops::Sub;

use crate::time::CaptionTime;

/// Cue sheet frames per second
pub const FRAMES_PER_SECOND: u64 = 75;

const FRAMES_PER_MINUTE: u64 = 60 * FRAMES_PER_SECOND;

/// A position in a cue sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct CueTime {
    minutes: u64,
    seconds: u64,
    frames: u64,
}

impl CueTime {
    /// Split a total frame count into minutes, seconds and frames
    pub fn from_frames(total_frames: u64) -> Self {
        let minutes = total_frames / FRAMES_PER_MINUTE;
        let remainder = total_frames % FRAMES_PER_MINUTE;
        Self {
            minutes,
            seconds: remainder / FRAMES_PER_SECOND,
            frames: remainder % FRAMES_PER_SECOND,
        }
    }

    pub fn minutes(&self) -> u64 {
        self.minutes
    }

    pub fn seconds(&self) -> u64 {
        self.seconds
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Total frame count; inverse of [`CueTime::from_frames`]
    pub fn in_frames(&self) -> u64 {
        self.frames + FRAMES_PER_SECOND * self.seconds + FRAMES_PER_MINUTE * self.minutes
    }

    pub fn in_seconds(&self) -> f64 {
        self.in_frames() as f64 / FRAMES_PER_SECOND as f64
    }

    /// Cue sheet notation: `MM:SS:FF`
    pub fn to_cue_string(&self) -> String {
        format!("{:02}:{:02}:{:02}", self.minutes, self.seconds, self.frames)
    }

    /// Transcript notation: `{h}h {mm}m {ss}s`.
    ///
    /// Hours are split off only when minutes exceed 60, so exactly 60 minutes
    /// renders as `0h 60m ..`.
    pub fn to_plain_string(&self) -> String {
        let mut minutes = self.minutes;
        let mut hours = 0;
        if minutes > 60 {
            hours = minutes / 60;
            minutes -= hours * 60;
        }
        format!("{}h {:02}m {:02}s", hours, minutes, self.seconds)
    }
}

impl From<CaptionTime> for CueTime {
    fn from(time: CaptionTime) -> Self {
        Self::from_frames(time.to_cue_frames())
    }
}

/// Difference in seconds
impl Sub for CueTime {
    type Output = f64;

    fn sub(self, other: CueTime) -> f64 {
        self.in_seconds() - other.in_seconds()
    }
}

impl fmt::Display for CueTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_cue_string())
    }
}
