//! WebVTT input
//!
//! Only the timing lines and the single text line after each of them are read.
//! Headers, cue identifiers, settings and styling are ignored.

pub mod parser;

pub use parser::{parse_timing_line, parse_vtt, read_vtt_file};
