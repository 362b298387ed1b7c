use crate::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The class of a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Label {
    Ham,
    Spam,
}

impl Label {
    /// The binary response used by the classifier (`Spam = 1`, `Ham = 0`).
    pub fn as_response(self) -> f64 {
        match self {
            Label::Ham => 0.0,
            Label::Spam => 1.0,
        }
    }

    pub fn is_spam(self) -> bool {
        self == Label::Spam
    }

    /// Parses a raw corpus label. Surrounding whitespace and case are ignored.
    pub fn parse_raw(raw_label: &str) -> Option<Self> {
        match raw_label.trim().to_lowercase().as_str() {
            "ham" => Some(Label::Ham),
            "spam" => Some(Label::Spam),
            _ => None,
        }
    }

    pub fn from_is_spam(is_spam: bool) -> Self {
        if is_spam {
            Label::Spam
        } else {
            Label::Ham
        }
    }
}

impl FromStr for Label {
    type Err = Error;

    fn from_str(raw_label: &str) -> Result<Self, Self::Err> {
        Label::parse_raw(raw_label).ok_or_else(|| {
            Error::Schema(format!(
                "Unknown label {:?}; expected \"spam\" or \"ham\"",
                raw_label.trim()
            ))
        })
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Ham => write!(f, "ham"),
            Label::Spam => write!(f, "spam"),
        }
    }
}
