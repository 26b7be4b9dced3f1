//! WebVTT caption parser

use std::path::Path;

use regex::Captures;

use crate::caption::Caption;
use crate::error::{ConvertError, Result};
use crate::time::CaptionTime;

/// Parse the timing line of a cue, e.g. `00:01.000 --> 00:04.500`.
///
/// The hour field is optional on both sides. The pattern is searched for
/// anywhere in the line, so trailing cue settings are tolerated.
pub fn parse_timing_line(line: &str) -> Option<(CaptionTime, CaptionTime)> {
    let caps = regex!(
        r"(?x)
        ([0-9]?[0-9]?):?([0-9]{2}):([0-9]{2}).([0-9]{3})
        \ -->\ 
        ([0-9]?[0-9]?):?([0-9]{2}):([0-9]{2}).([0-9]{3})"
    )
    .captures(line)?;

    let start = time_from_groups(&caps, 1)?;
    let end = time_from_groups(&caps, 5)?;
    Some((start, end))
}

// helper.
fn time_from_groups(caps: &Captures<'_>, first: usize) -> Option<CaptionTime> {
    let group = |idx: usize| caps.get(idx).map(|m| m.as_str()).unwrap_or("");

    let hours = match group(first) {
        "" => 0,
        h => h.parse().ok()?,
    };
    let minutes = group(first + 1).parse().ok()?;
    let seconds = group(first + 2).parse().ok()?;
    let millis = group(first + 3).parse().ok()?;

    Some(CaptionTime::new(hours, minutes, seconds, millis))
}

// helper.
fn split_lines(content: &str) -> Vec<&str> {
    let mut lines: Vec<&str> = regex!(r"\r\n|\r|\n").split(content).collect();
    // a trailing line break does not start another line
    if lines.last() == Some(&"") {
        lines.pop();
    }
    lines
}

/// Parse WebVTT content into captions, in file order.
///
/// Each timing line takes the line right after it as the caption text, whatever
/// that line holds. Further text lines of a multi-line cue are not part of the
/// caption; they fail to match as timing lines and are skipped. The last line
/// of the input is never examined as a timing line. Lines may end in `\n`,
/// `\r\n` or a lone `\r`.
pub fn parse_vtt(content: &str) -> Vec<Caption> {
    let lines = split_lines(content);
    let last = lines.len().saturating_sub(1);
    let mut captions = Vec::new();

    let mut line_num = 0;
    while line_num < last {
        let line = lines[line_num];
        if let Some((start, end)) = parse_timing_line(line) {
            line_num += 1;
            captions.push(Caption::new(start, end, lines[line_num]));
        } else {
            tracing::trace!("Skipping line {}: {:?}", line_num + 1, line);
        }
        line_num += 1;
    }

    captions
}

/// Read and parse a WebVTT file
pub fn read_vtt_file<P: AsRef<Path>>(path: P) -> Result<Vec<Caption>> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => ConvertError::SourceNotFound(path.to_path_buf()),
        _ => ConvertError::Io(e),
    })?;

    let captions = parse_vtt(&content);
    tracing::debug!("Parsed {} captions from {}", captions.len(), path.display());
    Ok(captions)
}
