//! Figma URL extraction
//!
//! Two URL families are recognised:
//!
//! - team URLs: `https://www.figma.com/files/{optional numeric segment}/team/{teamId}`
//! - file URLs: `https://www.figma.com/file/{key}` or `https://www.figma.com/design/{key}`
//!
//! [`FigmaUrl::parse`] is the strict parser used by sync tables, although the
//! URL may sit inside surrounding text. Card formulas accept looser "source"
//! strings and go through [`file_key_hint`] and [`team_id_hint`], which only
//! look for the path fragment anywhere in the input.

use crate::error::{Error, Result};
use regex::Regex;
use std::sync::LazyLock;

const FIGMA_WEB_PREFIX: &str = "https://www.figma.com/";

/// Example shown to users who paste a malformed team URL
pub const TEAM_URL_EXAMPLE: &str = "https://www.figma.com/files/team/123456789";

/// Example shown to users who paste a malformed file URL
pub const FILE_URL_EXAMPLE: &str = "https://www.figma.com/file/ABC123/filename";

static FILE_HINT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/(?:file|design)/([a-zA-Z0-9]+)").unwrap());

static TEAM_HINT_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"/team/(\d+)").unwrap());

/// A parsed Figma URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FigmaUrl {
    /// `.../files/[{n}/]team/{team_id}`
    Team { team_id: String },
    /// `.../file/{file_key}` or `.../design/{file_key}`
    File { file_key: String },
    /// Anything else
    Invalid,
}

impl FigmaUrl {
    /// Parse a string claimed to be a Figma URL
    ///
    /// The URL may appear anywhere in the input; the first occurrence of
    /// `https://www.figma.com/` that yields a team or file URL wins.
    pub fn parse(input: &str) -> Self {
        candidates(input)
            .find(|url| *url != Self::Invalid)
            .unwrap_or(Self::Invalid)
    }

    fn parse_path(path: &str) -> Self {
        let segments: Vec<&str> = path.split('/').collect();

        match segments.as_slice() {
            ["file" | "design", key, ..] => match leading(key, |c| c.is_ascii_alphanumeric()) {
                Some(file_key) => Self::File { file_key },
                None => Self::Invalid,
            },
            ["files", "team", id, ..] => team_from_segment(id),
            ["files", prefix, "team", id, ..] if is_all_digits(prefix) => team_from_segment(id),
            _ => Self::Invalid,
        }
    }

    /// Team id, if this is a team URL
    pub fn team_id(&self) -> Option<&str> {
        match self {
            Self::Team { team_id } => Some(team_id),
            _ => None,
        }
    }

    /// File key, if this is a file URL
    pub fn file_key(&self) -> Option<&str> {
        match self {
            Self::File { file_key } => Some(file_key),
            _ => None,
        }
    }
}

/// Every Figma URL starting somewhere in `input`, in order of appearance
fn candidates(input: &str) -> impl Iterator<Item = FigmaUrl> + '_ {
    input
        .match_indices(FIGMA_WEB_PREFIX)
        .map(move |(start, prefix)| FigmaUrl::parse_path(&input[start + prefix.len()..]))
}

fn team_from_segment(segment: &str) -> FigmaUrl {
    match leading(segment, |c| c.is_ascii_digit()) {
        Some(team_id) => FigmaUrl::Team { team_id },
        None => FigmaUrl::Invalid,
    }
}

/// Longest non-empty prefix of `segment` whose characters satisfy `accept`
fn leading(segment: &str, accept: impl Fn(char) -> bool) -> Option<String> {
    let end = segment
        .char_indices()
        .find(|(_, c)| !accept(*c))
        .map_or(segment.len(), |(i, _)| i);
    (end > 0).then(|| segment[..end].to_string())
}

fn is_all_digits(segment: &str) -> bool {
    !segment.is_empty() && segment.chars().all(|c| c.is_ascii_digit())
}

/// Extract a team id, failing with the format example
pub fn team_id(url: &str) -> Result<String> {
    candidates(url)
        .find_map(|parsed| match parsed {
            FigmaUrl::Team { team_id } => Some(team_id),
            _ => None,
        })
        .ok_or_else(|| {
            Error::invalid_url(format!(
                "Invalid team URL format. Please provide a valid Figma team URL like: {TEAM_URL_EXAMPLE}"
            ))
        })
}

/// Extract a file key, failing with the format example
pub fn file_key(url: &str) -> Result<String> {
    candidates(url)
        .find_map(|parsed| match parsed {
            FigmaUrl::File { file_key } => Some(file_key),
            _ => None,
        })
        .ok_or_else(|| {
            Error::invalid_url(format!(
                "Invalid file URL format. Please provide a valid Figma file URL like: {FILE_URL_EXAMPLE}"
            ))
        })
}

/// Find a `/file/{key}` or `/design/{key}` fragment anywhere in `source`
pub fn file_key_hint(source: &str) -> Option<String> {
    FILE_HINT_REGEX
        .captures(source)
        .map(|caps| caps[1].to_string())
}

/// Find a `/team/{id}` fragment anywhere in `source`
pub fn team_id_hint(source: &str) -> Option<String> {
    TEAM_HINT_REGEX
        .captures(source)
        .map(|caps| caps[1].to_string())
}

/// Like [`file_key_hint`] but failing with a short format message
pub fn require_file_key_hint(source: &str) -> Result<String> {
    file_key_hint(source).ok_or_else(|| {
        Error::invalid_url("Invalid file URL format. Please provide a valid Figma file URL.")
    })
}
