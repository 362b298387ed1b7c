use crate::types::MessageId;
use crate::{Message, PatternKind, PatternSet};
use serde::{Deserialize, Serialize};

/// Deterministic, per-message features derived from the raw text alone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternFeatureRow {
    pub message_id: MessageId,
    pub char_count: usize,
    pub has_numbers: bool,
    pub numbers_count: usize,
    pub has_url: bool,
    pub has_date: bool,
    pub has_dollar: bool,
    pub has_emoticon: bool,
    pub has_email: bool,
    pub has_phone: bool,
}

impl PatternFeatureRow {
    /// An all-zero row, the value for an empty message.
    pub fn empty(message_id: MessageId) -> Self {
        Self {
            message_id,
            ..Default::default()
        }
    }

    pub fn has_pattern(&self, kind: PatternKind) -> bool {
        match kind {
            PatternKind::Url => self.has_url,
            PatternKind::Date => self.has_date,
            PatternKind::Dollar => self.has_dollar,
            PatternKind::Emoticon => self.has_emoticon,
            PatternKind::Email => self.has_email,
            PatternKind::Phone => self.has_phone,
        }
    }

    pub fn mark_pattern(&mut self, kind: PatternKind) {
        let flag = match kind {
            PatternKind::Url => &mut self.has_url,
            PatternKind::Date => &mut self.has_date,
            PatternKind::Dollar => &mut self.has_dollar,
            PatternKind::Emoticon => &mut self.has_emoticon,
            PatternKind::Email => &mut self.has_email,
            PatternKind::Phone => &mut self.has_phone,
        };

        *flag = true;
    }
}

/// Derives `PatternFeatureRow`s using a fixed `PatternSet`.
///
/// Extraction never fails: a missing pattern is a valid `false`, and empty text yields
/// an all-zero row.
pub struct PatternFeatureExtractor<'a> {
    pattern_set: &'a PatternSet,
}

impl<'a> PatternFeatureExtractor<'a> {
    pub fn new(pattern_set: &'a PatternSet) -> Self {
        Self { pattern_set }
    }

    pub fn extract_text(&self, message_id: MessageId, text: &str) -> PatternFeatureRow {
        let mut row = PatternFeatureRow::empty(message_id);

        if text.is_empty() {
            return row;
        }

        row.char_count = text.chars().count();
        row.numbers_count = text.chars().filter(|c| c.is_ascii_digit()).count();
        row.has_numbers = row.numbers_count > 0;

        for kind in self.pattern_set.matching_kinds(text) {
            row.mark_pattern(kind);
        }

        row
    }

    pub fn extract(&self, message: &Message) -> PatternFeatureRow {
        self.extract_text(message.id, &message.text)
    }

    pub fn extract_all<'m, I>(&self, messages: I) -> Vec<PatternFeatureRow>
    where
        I: IntoIterator<Item = &'m Message>,
    {
        messages
            .into_iter()
            .map(|message| self.extract(message))
            .collect()
    }
}
