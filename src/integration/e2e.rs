//! End-to-end integration tests

use std::path::Path;

use crate::config::ConvertConfig;
use crate::convert::Converter;
use crate::error::ConvertError;
use crate::integration::fixtures::TestVtt;
use crate::output::OutputFormat;

/// Convert a fixture in `dir` and return the output text
fn convert_fixture(
    dir: &Path,
    fixture: &TestVtt,
    config: ConvertConfig,
    format: OutputFormat,
) -> String {
    let source = fixture.write_to(dir);
    let report = Converter::new(config)
        .convert(&source, format)
        .expect("conversion succeeds");
    assert_eq!(report.captions, fixture.expected_captions);
    std::fs::read_to_string(&report.output).expect("output written")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_srt_e2e() {
        let dir = tempdir().unwrap();
        let srt = convert_fixture(
            dir.path(),
            &TestVtt::basic(),
            ConvertConfig::default(),
            OutputFormat::Srt,
        );
        assert_eq!(
            srt,
            "1\n00:00:01,000 --> 00:00:03,000\nHello world\n\n\
             2\n00:00:05,000 --> 00:00:07,000\nGoodbye\n\n"
        );
        assert!(dir.path().join("basic.srt").exists());
    }

    #[test]
    fn test_cue_e2e() {
        let dir = tempdir().unwrap();
        let cue = convert_fixture(
            dir.path(),
            &TestVtt::basic(),
            ConvertConfig::default(),
            OutputFormat::Cue,
        );
        let expected = "TITLE \"Dummy\"\n\
                        FILE \"dummy.wav\" WAVE\n\
                        PERFORMER \"David Grigg & Perry Middlemiss\"\n  \
                        TRACK 01 AUDIO\n\
                        \tTITLE \"Hello world \"\n\
                        \tINDEX 01 00:01:00\n\
                        \tREM COLOR blue\n  \
                        TRACK 02 AUDIO\n\
                        \tTITLE \"Goodbye \"\n\
                        \tINDEX 01 00:05:00\n\
                        \tREM COLOR blue\n";
        assert_eq!(cue, expected);
        assert!(dir.path().join("basic.cue").exists());
    }

    #[test]
    fn test_cue_grouped_e2e() {
        let dir = tempdir().unwrap();
        let mut config = ConvertConfig::default();
        config.cue.interval_secs = 30.0;
        let cue = convert_fixture(
            dir.path(),
            &TestVtt::with_header(),
            config,
            OutputFormat::Cue,
        );

        // 0.5s and 10s stay below 30s, the cue at 40s closes the group
        assert_eq!(cue.matches("TRACK ").count(), 1);
        assert!(cue.contains(
            "\tTITLE \"Welcome back Today we talk about cue sheets <v Host>and frames \"\n"
        ));
        assert!(cue.contains("\tINDEX 01 00:40:00\n"));
    }

    #[test]
    fn test_cue_infinite_interval_writes_header_only() {
        let dir = tempdir().unwrap();
        let mut config = ConvertConfig::default();
        config.cue.interval_secs = f64::INFINITY;
        let cue = convert_fixture(
            dir.path(),
            &TestVtt::basic(),
            config,
            OutputFormat::Cue,
        );
        assert_eq!(cue.lines().count(), 3);
        assert!(!cue.contains("TRACK"));
    }

    #[test]
    fn test_cue_long_running_e2e() {
        let dir = tempdir().unwrap();
        let cue = convert_fixture(
            dir.path(),
            &TestVtt::long_running(),
            ConvertConfig::default(),
            OutputFormat::Cue,
        );
        assert!(cue.contains("\tINDEX 01 59:59:00\n"));
        assert!(cue.contains("\tINDEX 01 60:00:00\n"));
        assert!(cue.contains("\tINDEX 01 65:30:03\n"));
    }

    #[test]
    fn test_plain_e2e() {
        let dir = tempdir().unwrap();
        let plain = convert_fixture(
            dir.path(),
            &TestVtt::long_running(),
            ConvertConfig::default(),
            OutputFormat::Plain,
        );
        assert_eq!(
            plain,
            "[0h 59m 59s]\nAlmost an hour \n\n\
             [0h 60m 00s]\nExactly an hour \n\n\
             [1h 05m 30s]\nPast the hour \n\n"
        );
        assert!(dir.path().join("long_running_plain.txt").exists());
        assert!(!dir.path().join("long_running.cue").exists());
    }

    #[test]
    fn test_multi_line_keeps_first_line() {
        let dir = tempdir().unwrap();
        let srt = convert_fixture(
            dir.path(),
            &TestVtt::multi_line(),
            ConvertConfig::default(),
            OutputFormat::Srt,
        );
        assert!(srt.contains("First line\n"));
        assert!(!srt.contains("second line"));
        assert!(srt.starts_with("1\n"));
        assert!(srt.contains("\n2\n00:00:05,000 --> 00:00:06,000\nNext cue\n\n"));
    }

    #[test]
    fn test_existing_output_replaced() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("basic.srt"), "stale content that is longer").unwrap();
        let srt = convert_fixture(
            dir.path(),
            &TestVtt::basic(),
            ConvertConfig::default(),
            OutputFormat::Srt,
        );
        assert!(srt.starts_with("1\n00:00:01,000"));
        assert!(!srt.contains("stale"));
    }

    #[test]
    fn test_missing_source_writes_nothing() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("absent.vtt");
        let result = Converter::default().convert(&source, OutputFormat::Cue);
        assert!(matches!(result, Err(ConvertError::SourceNotFound(_))));
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_conversions_are_independent() {
        let dir = tempdir().unwrap();
        let converter = Converter::default();
        let first = TestVtt::basic().write_to(dir.path());
        let second = TestVtt::multi_line().write_to(dir.path());

        let a = converter.convert(&first, OutputFormat::Srt).unwrap();
        let b = converter.convert(&second, OutputFormat::Srt).unwrap();
        let again = converter.convert(&first, OutputFormat::Srt).unwrap();

        assert_eq!(a.entries, 2);
        assert_eq!(b.entries, 2);
        assert_eq!(again, a);
    }
}
