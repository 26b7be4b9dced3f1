//! Test fixtures for integration tests
//!
//! Provides WebVTT documents written to temporary directories.

use std::path::{Path, PathBuf};

/// Test WebVTT document
#[derive(Debug, Clone)]
pub struct TestVtt {
    pub name: &'static str,
    pub description: &'static str,
    pub content: &'static str,
    pub expected_captions: usize,
}

impl TestVtt {
    /// Two captions, no header
    pub fn basic() -> Self {
        Self {
            name: "basic",
            description: "Two bare timing/text pairs",
            content: "00:00:01.000 --> 00:00:03.000\n\
                      Hello world\n\
                      00:00:05.000 --> 00:00:07.000\n\
                      Goodbye\n",
            expected_captions: 2,
        }
    }

    /// Full WebVTT document with header, identifiers and settings
    pub fn with_header() -> Self {
        Self {
            name: "with_header",
            description: "WEBVTT header, NOTE block, cue ids and cue settings",
            content: "WEBVTT - episode 12\n\
                      \n\
                      NOTE transcribed automatically\n\
                      \n\
                      intro\n\
                      00:00.500 --> 00:02.000\n\
                      Welcome back\n\
                      \n\
                      2\n\
                      00:10.000 --> 00:12.250 align:start\n\
                      Today we talk about cue sheets\n\
                      \n\
                      3\n\
                      00:40.000 --> 00:44.000\n\
                      <v Host>and frames\n\
                      \n",
            expected_captions: 3,
        }
    }

    /// Captions past the one hour mark
    pub fn long_running() -> Self {
        Self {
            name: "long_running",
            description: "Timestamps with hour fields",
            content: "WEBVTT\n\
                      \n\
                      00:59:59.000 --> 01:00:01.000\n\
                      Almost an hour\n\
                      \n\
                      01:00:00.000 --> 01:00:02.000\n\
                      Exactly an hour\n\
                      \n\
                      01:05:30.040 --> 01:05:32.000\n\
                      Past the hour\n\
                      \n",
            expected_captions: 3,
        }
    }

    /// Multi-line cue text, only the first line is kept
    pub fn multi_line() -> Self {
        Self {
            name: "multi_line",
            description: "Cue with two text lines",
            content: "WEBVTT\n\
                      \n\
                      00:00:01.000 --> 00:00:04.000\n\
                      First line\n\
                      second line\n\
                      \n\
                      00:00:05.000 --> 00:00:06.000\n\
                      Next cue\n\
                      \n",
            expected_captions: 2,
        }
    }

    /// Write the document into `dir` as `<name>.vtt`
    pub fn write_to(&self, dir: &Path) -> PathBuf {
        let path = dir.join(format!("{}.vtt", self.name));
        std::fs::write(&path, self.content).expect("write fixture");
        path
    }
}

/// All fixtures
pub fn all_fixtures() -> Vec<TestVtt> {
    vec![
        TestVtt::basic(),
        TestVtt::with_header(),
        TestVtt::long_running(),
        TestVtt::multi_line(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vtt::parse_vtt;

    #[test]
    fn test_fixture_caption_counts() {
        for fixture in all_fixtures() {
            assert_eq!(
                parse_vtt(fixture.content).len(),
                fixture.expected_captions,
                "{}: {}",
                fixture.name,
                fixture.description
            );
        }
    }

    #[test]
    fn test_write_to() {
        let dir = tempfile::tempdir().unwrap();
        let path = TestVtt::basic().write_to(dir.path());
        assert_eq!(path.file_name().unwrap(), "basic.vtt");
        assert!(path.exists());
    }
}
