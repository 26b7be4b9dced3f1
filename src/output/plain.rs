//! Plain-text transcript generator

use crate::cue::CueTrack;

/// Generate a transcript: each track as `[{h}h {mm}m {ss}s]` followed by its title
pub fn render_plain(tracks: &[CueTrack]) -> String {
    let mut output = String::new();

    for track in tracks {
        output.push_str(&format!(
            "[{}]\n{}\n\n",
            track.start.to_plain_string(),
            track.title
        ));
    }

    output
}
