use paydist_common::{PaydistError, Result};
use serde::{Deserialize, Serialize};
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SampleFileInfo {
    pub path: PathBuf,
    pub file_size: u64,
    pub line_count: u64,
    pub sample_count: usize,
}

/// Reads every numeric token in a comma- and/or whitespace-delimited file.
pub fn load_samples(path: &Path) -> Result<(SampleFileInfo, Vec<f64>)> {
    let file = std::fs::File::open(path)?;
    let file_size = file.metadata()?.len();
    let (line_count, samples) = read_tokens(file)?;
    let info = SampleFileInfo {
        path: path.to_path_buf(),
        file_size,
        line_count,
        sample_count: samples.len(),
    };
    debug!(path = %path.display(), samples = samples.len(), lines = line_count, "loaded samples");
    Ok((info, samples))
}

pub fn load_samples_from_reader<R: Read>(rdr: R) -> Result<Vec<f64>> {
    read_tokens(rdr).map(|(_, samples)| samples)
}

fn read_tokens<R: Read>(rdr: R) -> Result<(u64, Vec<f64>)> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(rdr);
    let mut samples = Vec::new();
    let mut last_line = 0u64;
    for record in reader.records() {
        let record = record?;
        let line = record.position().map(|p| p.line()).unwrap_or(last_line + 1);
        last_line = line;
        // a single field may still hold several whitespace-separated values
        for token in record.iter().flat_map(str::split_ascii_whitespace) {
            samples.push(parse_token(token, line)?);
        }
    }
    if samples.is_empty() {
        return Err(PaydistError::EmptyInput);
    }
    Ok((last_line, samples))
}

fn parse_token(token: &str, line: u64) -> Result<f64> {
    match token.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(PaydistError::Parse {
            line,
            token: token.to_owned(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn load(s: &str) -> Result<Vec<f64>> {
        load_samples_from_reader(s.as_bytes())
    }

    #[test]
    fn one_value_per_line() {
        assert_eq!(load("1\n2.5\n-3\n").unwrap(), vec![1.0, 2.5, -3.0]);
    }

    #[test]
    fn comma_and_whitespace_mix() {
        assert_eq!(
            load("1, 2,3\n4 5\t6\n").unwrap(),
            vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]
        );
    }

    #[test]
    fn ragged_rows_and_blank_lines() {
        assert_eq!(load("1,2\n\n3\n4,5,6\n").unwrap().len(), 6);
    }

    #[test]
    fn empty_fields_are_skipped() {
        assert_eq!(load("1,,2,\n").unwrap(), vec![1.0, 2.0]);
    }

    #[test]
    fn scientific_notation() {
        assert_eq!(load("1e3,2.5E4\n").unwrap(), vec![1000.0, 25000.0]);
    }

    #[test]
    fn header_row_is_a_parse_error() {
        match load("salary\n100\n") {
            Err(PaydistError::Parse { line, token }) => {
                assert_eq!(line, 1);
                assert_eq!(token, "salary");
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn bad_token_reports_its_line() {
        match load("1\n2\nx3\n") {
            Err(PaydistError::Parse { line, .. }) => assert_eq!(line, 3),
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn non_finite_tokens_rejected() {
        assert!(matches!(load("1\nnan\n"), Err(PaydistError::Parse { .. })));
        assert!(matches!(load("inf\n"), Err(PaydistError::Parse { .. })));
    }

    #[test]
    fn empty_input() {
        assert!(matches!(load(""), Err(PaydistError::EmptyInput)));
        assert!(matches!(load("\n\n"), Err(PaydistError::EmptyInput)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_samples(&dir.path().join("nope.csv")).unwrap_err();
        assert!(matches!(err, PaydistError::Io(_)));
    }

    #[test]
    fn file_info_counts() {
        let mut tmp = tempfile::NamedTempFile::new().unwrap();
        write!(tmp, "10,20\n30\n").unwrap();
        let (info, samples) = load_samples(tmp.path()).unwrap();
        assert_eq!(samples, vec![10.0, 20.0, 30.0]);
        assert_eq!(info.sample_count, 3);
        assert_eq!(info.line_count, 2);
        assert_eq!(info.file_size, 9);
    }
}
