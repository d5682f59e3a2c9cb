//! Minimal content URI type: `scheme://authority/segment/segment`

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum UriError {
    #[error("Missing scheme in URI: {0}")]
    MissingScheme(String),

    #[error("Missing authority in URI: {0}")]
    MissingAuthority(String),

    #[error("Empty path segment in URI: {0}")]
    EmptySegment(String),
}

pub type Result<T> = std::result::Result<T, UriError>;

/// Identifier for a resource exposed by a content provider
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContentUri {
    scheme: String,
    authority: String,
    segments: Vec<String>,
}

impl ContentUri {
    pub const SCHEME: &'static str = "content";

    /// Build a `content://{authority}` URI with no path
    pub fn with_authority(authority: impl Into<String>) -> Self {
        Self {
            scheme: Self::SCHEME.to_string(),
            authority: authority.into(),
            segments: Vec::new(),
        }
    }

    pub fn parse(input: &str) -> Result<Self> {
        let (scheme, rest) = input
            .split_once("://")
            .filter(|(scheme, _)| !scheme.is_empty())
            .ok_or_else(|| UriError::MissingScheme(input.to_string()))?;

        let (authority, path) = match rest.split_once('/') {
            Some((authority, path)) => (authority, path),
            None => (rest, ""),
        };
        if authority.is_empty() {
            return Err(UriError::MissingAuthority(input.to_string()));
        }

        // A single trailing slash is tolerated, empty segments elsewhere are not
        let path = path.strip_suffix('/').unwrap_or(path);
        let mut segments = Vec::new();
        if !path.is_empty() {
            for segment in path.split('/') {
                if segment.is_empty() {
                    return Err(UriError::EmptySegment(input.to_string()));
                }
                segments.push(segment.to_string());
            }
        }

        Ok(Self {
            scheme: scheme.to_string(),
            authority: authority.to_string(),
            segments,
        })
    }

    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    pub fn authority(&self) -> &str {
        &self.authority
    }

    pub fn path_segments(&self) -> &[String] {
        &self.segments
    }

    /// Return a copy with one more path segment
    pub fn append_path(&self, segment: impl Into<String>) -> Self {
        let mut uri = self.clone();
        uri.segments.push(segment.into());
        uri
    }

    /// Return a copy with `id` appended as the last path segment
    pub fn with_appended_id(&self, id: i64) -> Self {
        self.append_path(id.to_string())
    }

    /// Parse the last path segment as a row id
    pub fn parse_id(&self) -> Option<i64> {
        self.segments.last().and_then(|s| s.parse().ok())
    }
}

impl fmt::Display for ContentUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}://{}", self.scheme, self.authority)?;
        for segment in &self.segments {
            write!(f, "/{}", segment)?;
        }
        Ok(())
    }
}

impl FromStr for ContentUri {
    type Err = UriError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
