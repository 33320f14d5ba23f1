//! Positional parsing of scraped page text.
//!
//! A job card renders as one flattened text blob; fields live at fixed
//! offsets from the start and end of the newline-split lines. Two optional
//! lines shift the middle: a "more" marker after the visible skills and a
//! US-only disclaimer before the description. The offsets track Upwork's
//! current markup and nothing enforces them server-side.

use thiserror::Error;

use crate::models::JobMatch;

/// Disclaimer line that displaces the description by one index.
pub const US_ONLY_DISCLAIMER: &str =
    "Only freelancers located in the United States may apply.";

/// Marker line rendered when the card truncates its skill list.
pub const MORE_SKILLS_MARKER: &str = "more";

/// Number of fixed fields trailing the skills slice.
const TRAILING_FIELDS: usize = 8;

/// A card needs the leading fields plus the trailing block to be addressable.
const MIN_LINES: usize = 9;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("job card has {0} lines, expected at least {MIN_LINES}")]
    ShortJobCard(usize),
    #[error("no leading integer in {0:?}")]
    NoLeadingInt(String),
    #[error("no pipe-delimited employer segment in {0:?}")]
    NoEmployer(String),
}

/// Splits one job-card blob into a [`JobMatch`].
///
/// Layout, relative to the newline-split lines:
/// - title: index 0
/// - type: index 3
/// - description: index 4, or 5 when index 4 carries the US-only disclaimer
/// - skills: from index 5 (6 or 7 when a "more" line sits at 5 or 6) up to
///   the trailing fixed block
/// - proposals / verified / rating / client spend / country: indices -8, -6,
///   -4, -3, -1 from the end; client spend loses its surrounding parentheses
pub fn parse_job_card(text: &str) -> Result<JobMatch, ParseError> {
    let lines: Vec<&str> = text.split('\n').collect();
    if lines.len() < MIN_LINES {
        return Err(ParseError::ShortJobCard(lines.len()));
    }

    let description = if lines[4].contains(US_ONLY_DISCLAIMER) {
        lines[5]
    } else {
        lines[4]
    };

    let skills_start = if lines[6] == MORE_SKILLS_MARKER {
        7
    } else if lines[5] == MORE_SKILLS_MARKER {
        6
    } else {
        5
    };
    let skills_end = lines.len() - TRAILING_FIELDS;
    let skills = if skills_start < skills_end {
        lines[skills_start..skills_end]
            .iter()
            .map(|s| s.to_string())
            .collect()
    } else {
        Vec::new()
    };

    Ok(JobMatch {
        title: lines[0].to_string(),
        kind: lines[3].to_string(),
        description: description.to_string(),
        skills,
        proposals: lines[lines.len() - 8].to_string(),
        verified: lines[lines.len() - 6].to_string(),
        rating: lines[lines.len() - 4].to_string(),
        client_spend: strip_parens(lines[lines.len() - 3]),
        country: lines[lines.len() - 1].to_string(),
    })
}

/// `"($12K spent)"` -> `"$12K spent"`. Leaves unparenthesized text alone.
fn strip_parens(s: &str) -> String {
    s.strip_prefix('(')
        .and_then(|s| s.strip_suffix(')'))
        .unwrap_or(s)
        .to_string()
}

/// Trailing segment of a profile href after the last `~`, the stable
/// identifier Upwork embeds in profile URLs.
pub fn profile_hash(href: &str) -> String {
    href.rsplit('~').next().unwrap_or(href).to_string()
}

/// Leading whitespace-delimited integer, e.g. `"68 available connects"` -> 68.
pub fn leading_int(text: &str) -> Result<i64, ParseError> {
    text.split_whitespace()
        .next()
        .and_then(|tok| tok.parse().ok())
        .ok_or_else(|| ParseError::NoLeadingInt(text.to_string()))
}

/// Last line of a newline-joined label/value pair; the whole text when
/// there is no newline.
pub fn last_line(text: &str) -> String {
    text.rsplit('\n').next().unwrap_or(text).to_string()
}

/// First line only; drops trailing content after a line break.
pub fn first_line(text: &str) -> String {
    text.split('\n').next().unwrap_or(text).to_string()
}

/// Last whitespace-delimited token, used for the state abbreviation.
pub fn last_word(text: &str) -> String {
    text.split(' ').next_back().unwrap_or(text).to_string()
}

/// Second segment of a `Name | Employer` headline, trimmed.
pub fn employer_segment(headline: &str) -> Result<String, ParseError> {
    headline
        .split('|')
        .nth(1)
        .map(|s| s.trim().to_string())
        .ok_or_else(|| ParseError::NoEmployer(headline.to_string()))
}
