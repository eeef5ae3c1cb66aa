use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::DEBUG_FLAGS;
use crate::models::LightCurve;

/// Ingestion errors
#[derive(Error, Debug)]
pub enum IngestError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No valid (time, flux) rows found in {0}")]
    Empty(String),
}

/// Parses delimited text into a light curve.
///
/// - blank lines are ignored
/// - the first line is a header, and skipped, if it contains "time" (any case)
/// - fields are split on runs of commas and/or whitespace
/// - the first two fields must parse as finite numbers (time, flux); extra fields are ignored
/// - lines that fail are dropped silently
pub fn parse_delimited(content: &str) -> LightCurve {
    let mut lines = content.lines().map(str::trim).filter(|l| !l.is_empty()).peekable();

    if lines
        .peek()
        .is_some_and(|first| first.to_lowercase().contains("time"))
    {
        lines.next();
    }

    LightCurve::from_pairs(lines.filter_map(|line| {
        let parsed = parse_line(line);
        if parsed.is_none() && DEBUG_FLAGS.log_ingest {
            log::debug!("Dropping unparseable line: {:?}", line);
        }
        parsed
    }))
}

fn parse_line(line: &str) -> Option<(f64, f64)> {
    let mut fields = line
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|f| !f.is_empty());

    let time = fields.next()?.parse::<f64>().ok()?;
    let flux = fields.next()?.parse::<f64>().ok()?;
    (time.is_finite() && flux.is_finite()).then_some((time, flux))
}

/// Reads and parses a delimited text file. A file with no usable rows is an error.
pub fn read_light_curve(path: &Path) -> Result<LightCurve, IngestError> {
    let content = fs::read_to_string(path).map_err(|source| IngestError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let series = parse_delimited(&content);
    if series.is_empty() {
        return Err(IngestError::Empty(path.display().to_string()));
    }

    if let Some((first, last)) = series.time_span() {
        log::info!(
            "Loaded {} samples from {} (t = {} .. {})",
            series.len(),
            path.display(),
            first,
            last
        );
    }
    Ok(series)
}

/// Renders a light curve as `time,flux` lines under the given header.
pub fn to_delimited_text(series: &LightCurve, header: &str) -> String {
    let mut out = String::with_capacity(series.len() * 24 + header.len() + 1);
    out.push_str(header);
    out.push('\n');
    for s in series {
        out.push_str(&format!("{},{}\n", s.time, s.flux));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comma_separated_with_header() {
        let lc = parse_delimited("time,flux\n0.0,1.0\n0.5,0.99\n");
        assert_eq!(lc.times(), vec![0.0, 0.5]);
        assert_eq!(lc.fluxes(), vec![1.0, 0.99]);
    }

    #[test]
    fn test_header_match_is_case_insensitive() {
        let lc = parse_delimited("TIME FLUX\n1 2\n");
        assert_eq!(lc.len(), 1);
    }

    #[test]
    fn test_no_header_keeps_first_line() {
        let lc = parse_delimited("1.0 0.998\n2.0 1.001\n");
        assert_eq!(lc.len(), 2);
        assert_eq!(lc.samples[0].flux, 0.998);
    }

    #[test]
    fn test_mixed_separators_and_extra_columns() {
        let lc = parse_delimited("1.0, 0.99  0.001\n2.0\t\t1.01,x\n3.0 ,, 1.0\r\n");
        assert_eq!(lc.times(), vec![1.0, 2.0, 3.0]);
        assert_eq!(lc.fluxes(), vec![0.99, 1.01, 1.0]);
    }

    #[test]
    fn test_bad_lines_are_dropped() {
        let content = "time,flux\n\n1.0,abc\n2.0\nNaN,1.0\n3.0,0.97\n# comment\n";
        let lc = parse_delimited(content);
        assert_eq!(lc.times(), vec![3.0]);
    }

    #[test]
    fn test_header_only_is_empty() {
        assert!(parse_delimited("time,flux\n").is_empty());
        assert!(parse_delimited("").is_empty());
    }

    #[test]
    fn test_text_output_parses_back() {
        let lc = LightCurve::from_pairs([(0.25, 1.0005), (0.5, 0.985)]);
        let text = to_delimited_text(&lc, "time,flux");
        assert!(text.starts_with("time,flux\n"));
        assert_eq!(parse_delimited(&text), lc);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = read_light_curve(Path::new("/definitely/not/here.csv")).unwrap_err();
        assert!(matches!(err, IngestError::Io { .. }));
    }
}
