//! High-level library API: parse a release into a typed record or straight
//! into JSON, and run line-oriented batches. Prefer these entrypoints over
//! the lower-level `core::parsing` module when embedding the parser.
use std::io::{BufRead, Write};

use tracing::{debug, info, warn};

use crate::core::params::OutputParams;
use crate::core::parsing::ReleaseParser;
use crate::core::release::Release;
use crate::error::Result;
use crate::io::writers::json::{INSUFFICIENT_ARGUMENTS, render_error, render_release};

/// Parse `release` as published in `section`.
pub fn parse_release(release: &str, section: &str) -> Release {
    ReleaseParser::new(release, section).into_data()
}

/// Parse and render as a single JSON document.
pub fn parse_to_json(release: &str, section: &str, params: &OutputParams) -> Result<String> {
    render_release(&parse_release(release, section), params)
}

/// Batch processing report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub parsed: usize,
    pub insufficient: usize,
    pub skipped: usize,
}

/// Read `<release> <section>` lines from `reader` and write one JSON document
/// per line to `writer`. Blank lines are skipped; lines with a single field
/// get the insufficient-arguments record. Fields past the second are ignored.
///
/// Documents are always compact so each occupies exactly one line. Bytes that
/// are not valid UTF-8 are replaced rather than ending the batch.
pub fn process_batch<R: BufRead, W: Write>(
    mut reader: R,
    mut writer: W,
    params: &OutputParams,
) -> Result<BatchReport> {
    let params = OutputParams {
        pretty: false,
        ..*params
    };
    let mut report = BatchReport::default();
    let mut buf = Vec::new();
    let mut line_no = 0;

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        line_no += 1;
        if std::str::from_utf8(&buf).is_err() {
            warn!(line = line_no, "invalid UTF-8, replacing undecodable bytes");
        }
        let line = String::from_utf8_lossy(&buf);

        let mut fields = line.split_whitespace();
        let document = match (fields.next(), fields.next()) {
            (None, _) => {
                report.skipped += 1;
                continue;
            }
            (Some(release), None) => {
                warn!(line = line_no, release, "missing section, emitting error record");
                report.insufficient += 1;
                render_error(INSUFFICIENT_ARGUMENTS, &params)?
            }
            (Some(release), Some(section)) => {
                debug!(line = line_no, release, section, "parsing");
                report.parsed += 1;
                parse_to_json(release, section, &params)?
            }
        };
        writeln!(writer, "{document}")?;
    }
    writer.flush()?;

    info!(
        "Batch finished: parsed={} insufficient={} skipped={}",
        report.parsed, report.insufficient, report.skipped
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_release_keeps_inputs() {
        let release = parse_release("Some.Release.Name-GROUP", "movies");
        assert_eq!(release.release, "Some.Release.Name-GROUP");
        assert_eq!(release.group.as_deref(), Some("GROUP"));
    }

    #[test]
    fn test_process_batch_counts_lines() {
        let input = "Show.S01E01.720p.HDTV.x264-GRP TV\n\nLonely.Release\nMovie.2019.1080p.BluRay.x264-GRP X264 extra\n";
        let mut out = Vec::new();
        let report = process_batch(input.as_bytes(), &mut out, &OutputParams::default()).unwrap();
        assert_eq!(
            report,
            BatchReport {
                parsed: 2,
                insufficient: 1,
                skipped: 1,
            }
        );

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], r#"{"error":"Insufficient arguments provided."}"#);
        for line in lines {
            serde_json::from_str::<serde_json::Value>(line).unwrap();
        }
    }

    #[test]
    fn test_process_batch_survives_invalid_utf8() {
        let input: &[u8] = b"A.B-GRP TV\n\xff\xfe X\nC.D-GRP TV\n";
        let mut out = Vec::new();
        let report = process_batch(input, &mut out, &OutputParams::default()).unwrap();
        assert_eq!(report.parsed, 3);

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        let last: serde_json::Value = serde_json::from_str(lines[2]).unwrap();
        assert_eq!(last["release"], "C.D-GRP");
    }

    #[test]
    fn test_process_batch_ignores_pretty() {
        let params = OutputParams {
            pretty: true,
            ..OutputParams::default()
        };
        let mut out = Vec::new();
        let input = "A.B-GRP TV\nlonely\n";
        process_batch(input.as_bytes(), &mut out, &params).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 2);
        assert_eq!(text.lines().nth(1), Some(r#"{"error":"Insufficient arguments provided."}"#));
    }
}
