//! Parser for `git log --format='%aN  -  %aE'` output.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::ParseError;

/// Separator between the author name and email in every history line.
pub const DELIMITER: &str = "  -  ";

/// One distinct (name, email) pair as recorded in the commit log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawAuthorRecord {
    pub name: String,
    pub email: String,
}

impl RawAuthorRecord {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}

/// Parse history text into records, preserving input order.
///
/// Blank lines are skipped. Each remaining line is split on the first
/// [`DELIMITER`]; a line without it is rejected so that no contributor is
/// silently dropped.
pub fn parse_author_history(text: &str) -> Result<Vec<RawAuthorRecord>, ParseError> {
    debug!("parsing author history ({} bytes)", text.len());
    let mut records = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let (name, email) = line
            .split_once(DELIMITER)
            .ok_or_else(|| ParseError::MalformedLine {
                line_number: idx + 1,
                line: line.to_string(),
            })?;
        records.push(RawAuthorRecord::new(name.trim(), email.trim()));
    }
    debug!(count = records.len(), "parsed author records");
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_lines() {
        let text = "brl  -  b@x.com\nSandy  -  s@y.com\n";
        let records = parse_author_history(text).unwrap();
        assert_eq!(
            records,
            vec![
                RawAuthorRecord::new("brl", "b@x.com"),
                RawAuthorRecord::new("Sandy", "s@y.com"),
            ]
        );
    }

    #[test]
    fn test_blank_lines_skipped() {
        let text = "\n   \nbrl  -  b@x.com\n\n";
        let records = parse_author_history(text).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "brl");
    }

    #[test]
    fn test_empty_input() {
        assert!(parse_author_history("").unwrap().is_empty());
    }

    #[test]
    fn test_empty_email() {
        let records = parse_author_history("Nobody  -  \n").unwrap();
        assert_eq!(records, vec![RawAuthorRecord::new("Nobody", "")]);
    }

    #[test]
    fn test_split_on_first_delimiter() {
        let records = parse_author_history("A  -  b  -  c\n").unwrap();
        assert_eq!(records[0].name, "A");
        assert_eq!(records[0].email, "b  -  c");
    }

    #[test]
    fn test_halves_trimmed_independently() {
        let records = parse_author_history("Name   -  e\n  Padded  -  p@x.com  \n").unwrap();
        assert_eq!(
            records,
            vec![
                RawAuthorRecord::new("Name", "e"),
                RawAuthorRecord::new("Padded", "p@x.com"),
            ]
        );
    }

    #[test]
    fn test_crlf_line_endings() {
        let records = parse_author_history("brl  -  b@x.com\r\n").unwrap();
        assert_eq!(records[0].email, "b@x.com");
    }

    #[test]
    fn test_malformed_line_is_fatal() {
        let text = "brl  -  b@x.com\n\njust a name\n";
        match parse_author_history(text) {
            Err(ParseError::MalformedLine { line_number, line }) => {
                assert_eq!(line_number, 3);
                assert_eq!(line, "just a name");
            }
            other => panic!("expected MalformedLine, got {:?}", other),
        }
    }
}
