//! Cue sheet output
//!
//! Captions are grouped into tracks by elapsed time, then written as a cue
//! sheet for a single audio file.

pub mod sheet;
pub mod track;

pub use sheet::{render_cue_sheet, CueSheetHeader};
pub use track::{aggregate_tracks, CueTrack};
