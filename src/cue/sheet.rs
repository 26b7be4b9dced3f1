//! Cue sheet generator

use crate::cue::CueTrack;

/// Sheet-level fields written before the first track
#[derive(Debug, Clone, PartialEq)]
pub struct CueSheetHeader {
    pub title: String,
    pub audio_file: String,
    pub performer: String,
    /// Colour written as a `REM COLOR` line on every track
    pub track_color: String,
}

impl Default for CueSheetHeader {
    fn default() -> Self {
        Self {
            title: "Dummy".to_string(),
            audio_file: "dummy.wav".to_string(),
            performer: "David Grigg & Perry Middlemiss".to_string(),
            track_color: "blue".to_string(),
        }
    }
}

/// Generate a cue sheet.
///
/// Tracks are numbered 1, 2, 3.. in the order given.
pub fn render_cue_sheet(header: &CueSheetHeader, tracks: &[CueTrack]) -> String {
    let mut output = String::new();

    // Header
    output.push_str(&format!("TITLE \"{}\"\n", header.title));
    output.push_str(&format!("FILE \"{}\" WAVE\n", header.audio_file));
    output.push_str(&format!("PERFORMER \"{}\"\n", header.performer));

    for (i, track) in tracks.iter().enumerate() {
        output.push_str(&format!("  TRACK {:02} AUDIO\n", i + 1));
        output.push_str(&format!("\tTITLE \"{}\"\n", track.title));
        output.push_str(&format!("\tINDEX 01 {}\n", track.start.to_cue_string()));
        output.push_str(&format!("\tREM COLOR {}\n", header.track_color));
    }

    output
}
