//! Reference fixtures: rows of `input,expected` pairs used to check a stemmer.
//!
//! Fixture files may be UTF-8 or UTF-16 with a byte-order mark. Lines whose
//! first non-whitespace character is `;` are comments.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::languages::Stemmer;

static ROW: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^\s*(?:"([^"]*)"|([^,"]*)),\s*(?:"([^"]*)"|([^,"]*))"#).unwrap()
});

#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("failed to read fixture {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("fixture is not valid text: {0}")]
    Decode(String),
    #[error("line {line}: expected an `input,expected` row")]
    MissingColumn { line: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StemPair {
    pub input: String,
    pub expected: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mismatch {
    pub input: String,
    pub expected: String,
    pub actual: String,
}

/// Decode raw fixture bytes, honouring UTF-16 and UTF-8 byte-order marks.
pub fn decode_fixture(bytes: &[u8]) -> Result<String, FixtureError> {
    match bytes {
        [0xFF, 0xFE, rest @ ..] => decode_utf16(rest, u16::from_le_bytes),
        [0xFE, 0xFF, rest @ ..] => decode_utf16(rest, u16::from_be_bytes),
        [0xEF, 0xBB, 0xBF, rest @ ..] => decode_utf8(rest),
        _ => decode_utf8(bytes),
    }
}

fn decode_utf8(bytes: &[u8]) -> Result<String, FixtureError> {
    std::str::from_utf8(bytes)
        .map(str::to_owned)
        .map_err(|e| FixtureError::Decode(e.to_string()))
}

fn decode_utf16(bytes: &[u8], unit: fn([u8; 2]) -> u16) -> Result<String, FixtureError> {
    if bytes.len() % 2 != 0 {
        return Err(FixtureError::Decode("UTF-16 input has an odd number of bytes".to_string()));
    }
    let units: Vec<u16> = bytes
        .chunks_exact(2)
        .map(|pair| unit([pair[0], pair[1]]))
        .collect();
    String::from_utf16(&units).map_err(|e| FixtureError::Decode(e.to_string()))
}

pub fn parse_fixture(text: &str) -> Result<Vec<StemPair>, FixtureError> {
    let mut pairs = Vec::new();
    let mut comments = 0;

    for (index, line) in text.lines().enumerate() {
        let trimmed = line.trim_start();
        if trimmed.is_empty() {
            continue;
        }
        if trimmed.starts_with(';') {
            comments += 1;
            continue;
        }

        let caps = ROW
            .captures(line)
            .ok_or(FixtureError::MissingColumn { line: index + 1 })?;
        let field = |quoted: usize, bare: usize| {
            caps.get(quoted)
                .map(|m| m.as_str())
                .or_else(|| caps.get(bare).map(|m| m.as_str().trim()))
                .unwrap_or_default()
                .to_string()
        };
        pairs.push(StemPair {
            input: field(1, 2),
            expected: field(3, 4),
        });
    }

    debug!(rows = pairs.len(), comments, "parsed fixture");
    Ok(pairs)
}

pub fn load_fixture(path: impl AsRef<Path>) -> Result<Vec<StemPair>, FixtureError> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|source| FixtureError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_fixture(&decode_fixture(&bytes)?)
}

/// Every pair the stemmer gets wrong.
pub fn verify<S: Stemmer + ?Sized>(stemmer: &S, pairs: &[StemPair]) -> Vec<Mismatch> {
    pairs
        .iter()
        .filter_map(|pair| {
            let actual = stemmer.stem(&pair.input);
            (actual != pair.expected).then(|| Mismatch {
                input: pair.input.clone(),
                expected: pair.expected.clone(),
                actual,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::languages::english::EnglishStemmer;
    use crate::languages::undetermined::UndeterminedStemmer;
    use std::io::Write;

    fn pair(input: &str, expected: &str) -> StemPair {
        StemPair {
            input: input.to_string(),
            expected: expected.to_string(),
        }
    }

    #[test]
    fn test_parse_rows_and_comments() {
        let text = "; header comment\nrunning,run\n  ; indented comment\n\n\"had to\",\"must\"\ncats , cat ,extra\n";
        let pairs = parse_fixture(text).unwrap();
        assert_eq!(pairs, vec![pair("running", "run"), pair("had to", "must"), pair("cats", "cat")]);
    }

    #[test]
    fn test_parse_crlf_and_quoted_comma() {
        let pairs = parse_fixture("\"a,b\",c\r\ndogs,dog\r\n").unwrap();
        assert_eq!(pairs, vec![pair("a,b", "c"), pair("dogs", "dog")]);
    }

    #[test]
    fn test_parse_empty_expected() {
        let pairs = parse_fixture("word,\n").unwrap();
        assert_eq!(pairs, vec![pair("word", "")]);
    }

    #[test]
    fn test_missing_column() {
        let err = parse_fixture("running,run\nlonely\n").unwrap_err();
        assert!(matches!(err, FixtureError::MissingColumn { line: 2 }));
        assert_eq!(err.to_string(), "line 2: expected an `input,expected` row");
    }

    #[test]
    fn test_decode_utf16le_with_bom() {
        let mut bytes = vec![0xFF, 0xFE];
        for unit in "ponies,poni".encode_utf16() {
            bytes.extend_from_slice(&unit.to_le_bytes());
        }
        assert_eq!(decode_fixture(&bytes).unwrap(), "ponies,poni");
    }

    #[test]
    fn test_decode_utf16be_with_bom() {
        let mut bytes = vec![0xFE, 0xFF];
        for unit in "i\u{2019}ll,i".encode_utf16() {
            bytes.extend_from_slice(&unit.to_be_bytes());
        }
        assert_eq!(decode_fixture(&bytes).unwrap(), "i\u{2019}ll,i");
    }

    #[test]
    fn test_decode_utf8() {
        assert_eq!(decode_fixture(b"\xEF\xBB\xBFskis,ski").unwrap(), "skis,ski");
        assert_eq!(decode_fixture(b"skis,ski").unwrap(), "skis,ski");
        assert!(matches!(decode_fixture(b"\xC3\x28"), Err(FixtureError::Decode(_))));
        assert!(matches!(decode_fixture(&[0xFF, 0xFE, 0x41]), Err(FixtureError::Decode(_))));
    }

    #[test]
    fn test_load_fixture_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "; word,stem").unwrap();
        writeln!(file, "caresses,caress").unwrap();
        let pairs = load_fixture(file.path()).unwrap();
        assert_eq!(pairs, vec![pair("caresses", "caress")]);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_fixture(dir.path().join("absent.csv")).unwrap_err();
        assert!(matches!(err, FixtureError::Io { .. }));
    }

    #[test]
    fn test_verify_reports_mismatches() {
        let pairs = vec![pair("running", "run"), pair("went", "go"), pair("cats", "cats")];
        let mismatches = verify(&EnglishStemmer::new(), &pairs);
        assert_eq!(
            mismatches,
            vec![Mismatch {
                input: "cats".to_string(),
                expected: "cats".to_string(),
                actual: "cat".to_string(),
            }]
        );

        let boxed: Box<dyn Stemmer> = Box::new(UndeterminedStemmer);
        assert_eq!(verify(boxed.as_ref(), &pairs).len(), 2);
    }
}
