use crate::constants::{DEFAULT_PATTERNS, DEFAULT_PATTERN_SET_VERSION};
use crate::Error;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The named pattern classes a message can be tested for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PatternKind {
    Url,
    Date,
    Dollar,
    Emoticon,
    Email,
    Phone,
}

impl PatternKind {
    pub const ALL: [PatternKind; 6] = [
        PatternKind::Url,
        PatternKind::Date,
        PatternKind::Dollar,
        PatternKind::Emoticon,
        PatternKind::Email,
        PatternKind::Phone,
    ];

    /// The feature column this pattern populates.
    pub fn column_name(self) -> &'static str {
        match self {
            PatternKind::Url => "has_url",
            PatternKind::Date => "has_date",
            PatternKind::Dollar => "has_dollar",
            PatternKind::Emoticon => "has_emoticon",
            PatternKind::Email => "has_email",
            PatternKind::Phone => "has_phone",
        }
    }
}

impl fmt::Display for PatternKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.column_name())
    }
}

/// A compiled regular expression tagged with the pattern class it detects.
#[derive(Debug, Clone)]
pub struct PatternMatcher {
    kind: PatternKind,
    regex: Regex,
}

impl PatternMatcher {
    pub fn new(kind: PatternKind, pattern: &str) -> Result<Self, Error> {
        let regex = Regex::new(pattern).map_err(|e| {
            Error::Config(format!("Invalid {} pattern {:?}: {}", kind, pattern, e))
        })?;

        Ok(Self { kind, regex })
    }

    pub fn kind(&self) -> PatternKind {
        self.kind
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }
}

/// An immutable, versioned collection of pattern matchers.
///
/// Several matchers may share a kind; the kind is flagged when any of them matches.
/// The same set must be used for fitting and scoring.
#[derive(Debug, Clone)]
pub struct PatternSet {
    version: String,
    matchers: Vec<PatternMatcher>,
}

impl PatternSet {
    pub fn new(version: impl Into<String>, matchers: Vec<PatternMatcher>) -> Self {
        Self {
            version: version.into(),
            matchers,
        }
    }

    /// The built-in heuristics for SMS text.
    pub fn sms_defaults() -> Result<Self, Error> {
        let matchers = DEFAULT_PATTERNS
            .iter()
            .map(|(kind, pattern)| PatternMatcher::new(*kind, pattern))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::new(DEFAULT_PATTERN_SET_VERSION, matchers))
    }

    /// Returns a new set with an additional matcher appended.
    pub fn with_matcher(mut self, matcher: PatternMatcher) -> Self {
        self.matchers.push(matcher);
        self
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn matchers(&self) -> &[PatternMatcher] {
        &self.matchers
    }

    /// Yields the kinds whose matchers fire on `text`. A kind may be yielded more than
    /// once.
    pub fn matching_kinds<'a>(&'a self, text: &'a str) -> impl Iterator<Item = PatternKind> + 'a {
        self.matchers
            .iter()
            .filter(move |matcher| matcher.is_match(text))
            .map(PatternMatcher::kind)
    }
}
