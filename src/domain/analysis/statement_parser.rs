//! Statement Parser - Extracts situation/motivation/outcome from job statements.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::jtbd::{JobSegments, JobStatement};

/// Tolerant "When …, I want [to] …, so I can …" pattern.
///
/// Case-insensitive, `.` spans newlines, each separator accepts an optional
/// comma or plain whitespace, and a trailing period is dropped.
static STATEMENT_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?is)^when\s+(.*?)(?:,\s*|\s+)i\s+want(?:\s+to)?\s+(.*?)(?:,\s*|\s+)so\s+i\s+can\s+(.*?)\.?\s*$",
    )
    .expect("statement pattern is a valid regex")
});

/// Parser for structured job statements.
pub struct StatementParser;

impl StatementParser {
    /// Splits a statement into its three segments.
    ///
    /// Returns `None` when the text does not follow the
    /// "When …, I want …, so I can …" structure. Segments are trimmed.
    pub fn parse(raw: &str) -> Option<JobSegments> {
        let captures = STATEMENT_PATTERN.captures(raw.trim())?;
        let segment = |i: usize| {
            captures
                .get(i)
                .map(|m| m.as_str().trim().to_string())
                .unwrap_or_default()
        };
        Some(JobSegments::new(segment(1), segment(2), segment(3)))
    }

    /// Parses a stored statement.
    pub fn parse_statement(statement: &JobStatement) -> Option<JobSegments> {
        Self::parse(statement.as_str())
    }

    /// Like [`parse`](Self::parse), but unparseable text yields three empty
    /// segments so that scoring degrades instead of failing.
    pub fn parse_or_empty(raw: &str) -> JobSegments {
        Self::parse(raw).unwrap_or_default()
    }
}
