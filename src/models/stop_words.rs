use crate::constants::{ENGLISH_STOP_WORDS, ENGLISH_STOP_WORDS_VERSION};
use crate::types::TokenRef;
use std::collections::HashSet;

/// A fixed, versioned stopword list.
///
/// Words are normalized the same way tokens are (alphanumerics only, lowercase), so
/// `"don't"` in the list removes the token `"dont"`.
#[derive(Debug, Clone)]
pub struct StopWords {
    version: String,
    words: HashSet<String>,
}

impl StopWords {
    pub fn new<I, S>(version: impl Into<String>, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            version: version.into(),
            words: words
                .into_iter()
                .map(|word| Self::normalize(word.as_ref()))
                .filter(|word| !word.is_empty())
                .collect(),
        }
    }

    pub fn english() -> Self {
        Self::new(ENGLISH_STOP_WORDS_VERSION, ENGLISH_STOP_WORDS.iter())
    }

    /// An empty list, for tokenizing without stopword removal.
    pub fn none() -> Self {
        Self::new("none", std::iter::empty::<&str>())
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Expects an already-normalized token.
    pub fn contains(&self, token: &TokenRef) -> bool {
        self.words.contains(token)
    }

    fn normalize(word: &str) -> String {
        word.chars()
            .filter(|c| c.is_alphanumeric())
            .flat_map(char::to_lowercase)
            .collect()
    }
}
