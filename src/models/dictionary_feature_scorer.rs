use crate::types::SpamWordCountMap;
use crate::{Message, SpamDictionary, Tokenizer};

/// Counts how many distinct dictionary words a message contains.
///
/// Uses the same tokenizer the dictionary was built with, so a word is matched exactly
/// when it would have been counted during building.
pub struct DictionaryFeatureScorer<'a> {
    tokenizer: &'a Tokenizer<'a>,
    dictionary: &'a SpamDictionary,
}

impl<'a> DictionaryFeatureScorer<'a> {
    pub fn new(tokenizer: &'a Tokenizer<'a>, dictionary: &'a SpamDictionary) -> Self {
        Self {
            tokenizer,
            dictionary,
        }
    }

    pub fn dictionary(&self) -> &SpamDictionary {
        self.dictionary
    }

    pub fn score_text(&self, text: &str) -> usize {
        self.tokenizer
            .tokenize_distinct(text)
            .iter()
            .filter(|token| self.dictionary.contains(token))
            .count()
    }

    pub fn score(&self, message: &Message) -> usize {
        self.score_text(&message.text)
    }

    /// Scores each message, keeping only messages with at least one match. Absent ids
    /// mean zero matches and must be filled as such by the caller.
    pub fn score_all<'m, I>(&self, messages: I) -> SpamWordCountMap
    where
        I: IntoIterator<Item = &'m Message>,
    {
        messages
            .into_iter()
            .filter_map(|message| {
                let count = self.score(message);
                (count > 0).then_some((message.id, count))
            })
            .collect()
    }
}
