//! Grouping captions into cue tracks

use crate::caption::Caption;
use crate::time::CueTime;

/// One playable segment of a cue sheet
#[derive(Debug, Clone, PartialEq)]
pub struct CueTrack {
    /// 1-based position in the sheet
    pub number: usize,
    /// Text of every caption merged into this track
    pub title: String,
    /// Start of the track
    pub start: CueTime,
}

/// Group captions into tracks.
///
/// Caption text accumulates until the time elapsed since the previous track
/// start reaches `min_interval_secs`; the track then starts at the start of the
/// caption that crossed the threshold. Elapsed time is measured from zero for
/// the first track. Captions left over after the last track are dropped.
///
/// With an interval of zero every caption becomes its own track.
pub fn aggregate_tracks(captions: &[Caption], min_interval_secs: f64) -> Vec<CueTrack> {
    let mut tracks = Vec::new();
    let mut accumulator = String::new();
    let mut elapsed_ms: i64 = 0;
    let mut last_ms: i64 = 0;

    for caption in captions {
        accumulator.push_str(&caption.text);
        accumulator.push(' ');

        let start_ms = caption.start.as_millis();
        elapsed_ms += start_ms - last_ms;
        last_ms = start_ms;

        if elapsed_ms as f64 / 1000.0 >= min_interval_secs {
            let track = CueTrack {
                number: tracks.len() + 1,
                title: std::mem::take(&mut accumulator),
                start: CueTime::from(caption.start),
            };
            tracing::debug!("Track {:02} at {}", track.number, track.start);
            tracks.push(track);
            elapsed_ms = 0;
        }
    }

    if !accumulator.is_empty() {
        tracing::debug!(
            "Dropping trailing text below the {}s interval: {:?}",
            min_interval_secs,
            accumulator.trim_end()
        );
    }

    tracks
}
