//! Time model
//!
//! Two notations are supported:
//! - `CaptionTime`: millisecond timestamps as used by WebVTT and SubRip
//! - `CueTime`: minutes/seconds/frames as used by cue sheets (75 frames per second)

pub mod caption_time;
pub mod cue_time;

pub use caption_time::CaptionTime;
pub use cue_time::{CueTime, FRAMES_PER_SECOND};
