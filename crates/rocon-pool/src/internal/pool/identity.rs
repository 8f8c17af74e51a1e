use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt::{Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use thiserror::Error;

/// A pattern segment equal to this token matches any value at its position.
pub const WILDCARD: &str = "*";

const SCHEME_SEPARATOR: &str = "://";
const SEGMENT_SEPARATOR: char = '/';

/// Positions of a parsed identity: 0 is the scheme, 1 the authority
/// (empty for `rocon:///...`), everything after that are path segments.
const AUTHORITY_POSITION: usize = 1;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum IdentityError {
    #[error("'{0}' does not start with '<scheme>://'")]
    MissingScheme(String),
    #[error("'{0}' has no path segments")]
    NoSegments(String),
    #[error("'{uri}' has an empty segment at position {position}")]
    EmptySegment { uri: String, position: usize },
    #[error("'{0}' contains a wildcard segment, platform identities have to be concrete")]
    WildcardInIdentity(String),
}

fn split_segments(uri: &str) -> Result<Vec<&str>, IdentityError> {
    let (scheme, rest) = uri
        .split_once(SCHEME_SEPARATOR)
        .filter(|(scheme, _)| !scheme.is_empty())
        .ok_or_else(|| IdentityError::MissingScheme(uri.to_string()))?;

    let mut segments = Vec::with_capacity(8);
    segments.push(scheme);
    segments.extend(rest.split(SEGMENT_SEPARATOR));
    if segments.len() <= AUTHORITY_POSITION + 1 {
        return Err(IdentityError::NoSegments(uri.to_string()));
    }
    if let Some(position) = segments
        .iter()
        .enumerate()
        .position(|(i, s)| i != AUTHORITY_POSITION && s.is_empty())
    {
        return Err(IdentityError::EmptySegment {
            uri: uri.to_string(),
            position,
        });
    }
    Ok(segments)
}

/// Concrete identity of a platform, e.g. `rocon:///linux/precise/ros/turtlebot/roberto`.
///
/// Equality, hashing and ordering only look at the URI text, so a pool keyed
/// by identities can be queried with a plain `&str`.
#[derive(Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PlatformIdentity {
    uri: String,
    segments: Vec<String>,
}

impl PlatformIdentity {
    pub fn parse(uri: &str) -> Result<Self, IdentityError> {
        let segments = split_segments(uri)?;
        if segments.contains(&WILDCARD) {
            return Err(IdentityError::WildcardInIdentity(uri.to_string()));
        }
        Ok(PlatformIdentity {
            uri: uri.to_string(),
            segments: segments.into_iter().map(|s| s.to_string()).collect(),
        })
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.uri
    }

    #[inline]
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().map(|s| s.as_str())
    }

    #[inline]
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// The last path segment, for ROCON identities the robot name.
    pub fn name(&self) -> &str {
        self.segments.last().map(|s| s.as_str()).unwrap_or_default()
    }
}

impl PartialEq for PlatformIdentity {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.uri == other.uri
    }
}

impl Eq for PlatformIdentity {}

impl Hash for PlatformIdentity {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.uri.hash(state)
    }
}

impl PartialOrd for PlatformIdentity {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PlatformIdentity {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.uri.cmp(&other.uri)
    }
}

impl Borrow<str> for PlatformIdentity {
    #[inline]
    fn borrow(&self) -> &str {
        &self.uri
    }
}

impl FromStr for PlatformIdentity {
    type Err = IdentityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for PlatformIdentity {
    type Error = IdentityError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<PlatformIdentity> for String {
    fn from(identity: PlatformIdentity) -> Self {
        identity.uri
    }
}

impl Display for PlatformIdentity {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.uri)
    }
}

impl Debug for PlatformIdentity {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.uri)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternSegment {
    Any,
    Literal(String),
}

impl PatternSegment {
    #[inline]
    fn accepts(&self, value: &str) -> bool {
        match self {
            PatternSegment::Any => true,
            PatternSegment::Literal(literal) => literal == value,
        }
    }
}

/// Identity where any segment may be replaced by [`WILDCARD`].
///
/// Matching is a plain segment-wise comparison: both sides need the same
/// number of segments and every literal has to be byte-for-byte equal.
/// Nothing is normalized, so case and trailing separators matter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityPattern {
    pattern: String,
    segments: Vec<PatternSegment>,
}

impl IdentityPattern {
    pub fn parse(pattern: &str) -> Result<Self, IdentityError> {
        let segments = split_segments(pattern)?
            .into_iter()
            .map(|s| {
                if s == WILDCARD {
                    PatternSegment::Any
                } else {
                    PatternSegment::Literal(s.to_string())
                }
            })
            .collect();
        Ok(IdentityPattern {
            pattern: pattern.to_string(),
            segments,
        })
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.pattern
    }

    #[inline]
    pub fn segments(&self) -> &[PatternSegment] {
        &self.segments
    }

    /// True if the pattern contains no wildcard and can match a single identity only.
    pub fn is_exact(&self) -> bool {
        self.segments
            .iter()
            .all(|s| matches!(s, PatternSegment::Literal(_)))
    }

    pub fn matches(&self, identity: &PlatformIdentity) -> bool {
        self.segments.len() == identity.segment_count()
            && self
                .segments
                .iter()
                .zip(identity.segments())
                .all(|(pattern, value)| pattern.accepts(value))
    }
}

impl FromStr for IdentityPattern {
    type Err = IdentityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Display for IdentityPattern {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.pattern)
    }
}

/// Checks whether `identity` satisfies `pattern`.
///
/// A malformed pattern or identity never matches anything.
pub fn matches(pattern: &str, identity: &str) -> bool {
    match (
        IdentityPattern::parse(pattern),
        PlatformIdentity::parse(identity),
    ) {
        (Ok(pattern), Ok(identity)) => pattern.matches(&identity),
        (Err(e), _) | (_, Err(e)) => {
            log::debug!("Identity match rejected: {e}");
            false
        }
    }
}
