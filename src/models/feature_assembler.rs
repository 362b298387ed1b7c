use crate::constants::{FEATURE_COLUMNS, FEATURE_COUNT};
use crate::types::{FeatureName, MessageId, SpamWordCountMap};
use crate::{DictionaryFeatureScorer, Label, Message, PatternFeatureExtractor, PatternFeatureRow};
use log::debug;
use serde::Serialize;

/// The model-facing feature vector of one message, plus its label.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FeatureRow {
    pub char_count: usize,
    pub has_numbers: bool,
    pub numbers_count: usize,
    pub has_url: bool,
    pub has_date: bool,
    pub has_dollar: bool,
    pub has_emoticon: bool,
    pub has_email: bool,
    pub has_phone: bool,
    pub spam_words_count: usize,
    pub label: Label,
}

impl FeatureRow {
    pub fn new(pattern_row: &PatternFeatureRow, spam_words_count: usize, label: Label) -> Self {
        Self {
            char_count: pattern_row.char_count,
            has_numbers: pattern_row.has_numbers,
            numbers_count: pattern_row.numbers_count,
            has_url: pattern_row.has_url,
            has_date: pattern_row.has_date,
            has_dollar: pattern_row.has_dollar,
            has_emoticon: pattern_row.has_emoticon,
            has_email: pattern_row.has_email,
            has_phone: pattern_row.has_phone,
            spam_words_count,
            label,
        }
    }

    /// Feature values in `FEATURE_COLUMNS` order. Booleans encode as `0.0` / `1.0`.
    pub fn values(&self) -> [f64; FEATURE_COUNT] {
        let flag = |value: bool| if value { 1.0 } else { 0.0 };

        [
            self.char_count as f64,
            flag(self.has_numbers),
            self.numbers_count as f64,
            flag(self.has_url),
            flag(self.has_date),
            flag(self.has_dollar),
            flag(self.has_emoticon),
            flag(self.has_email),
            flag(self.has_phone),
            self.spam_words_count as f64,
        ]
    }

    /// The binary response (`Spam = 1`, `Ham = 0`).
    pub fn response(&self) -> f64 {
        self.label.as_response()
    }
}

/// One split's assembled features.
///
/// `message_ids[i]` identifies the message behind `rows[i]`; ids are a join key and
/// never enter the model.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FeatureTable {
    pub message_ids: Vec<MessageId>,
    pub rows: Vec<FeatureRow>,
}

impl FeatureTable {
    pub fn column_names(&self) -> &'static [FeatureName] {
        &FEATURE_COLUMNS
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn labels(&self) -> Vec<Label> {
        self.rows.iter().map(|row| row.label).collect()
    }

    pub fn design_matrix(&self) -> Vec<[f64; FEATURE_COUNT]> {
        self.rows.iter().map(FeatureRow::values).collect()
    }

    pub fn responses(&self) -> Vec<f64> {
        self.rows.iter().map(FeatureRow::response).collect()
    }
}

/// Joins pattern features, the dictionary count and the label into `FeatureRow`s.
///
/// TRAIN and TEST are assembled by the same instance, which holds the single
/// TRAIN-derived dictionary through its scorer.
pub struct FeatureAssembler<'a> {
    pattern_extractor: PatternFeatureExtractor<'a>,
    dictionary_scorer: DictionaryFeatureScorer<'a>,
}

impl<'a> FeatureAssembler<'a> {
    pub fn new(
        pattern_extractor: PatternFeatureExtractor<'a>,
        dictionary_scorer: DictionaryFeatureScorer<'a>,
    ) -> Self {
        Self {
            pattern_extractor,
            dictionary_scorer,
        }
    }

    pub fn assemble<'m, I>(&self, messages: I) -> FeatureTable
    where
        I: IntoIterator<Item = &'m Message>,
    {
        let messages: Vec<&Message> = messages.into_iter().collect();

        let pattern_rows = self.pattern_extractor.extract_all(messages.iter().copied());
        let spam_word_counts = self.dictionary_scorer.score_all(messages.iter().copied());

        debug!(
            "Assembling {} rows ({} with dictionary matches)",
            messages.len(),
            spam_word_counts.len()
        );

        Self::join(&messages, &pattern_rows, &spam_word_counts)
    }

    /// Builds rows in message order; `pattern_rows` is positionally aligned with
    /// `messages`. Messages absent from `spam_word_counts` get a count of zero.
    fn join(
        messages: &[&Message],
        pattern_rows: &[PatternFeatureRow],
        spam_word_counts: &SpamWordCountMap,
    ) -> FeatureTable {
        let mut table = FeatureTable {
            message_ids: Vec::with_capacity(messages.len()),
            rows: Vec::with_capacity(messages.len()),
        };

        for (message, pattern_row) in messages.iter().zip(pattern_rows) {
            let spam_words_count = spam_word_counts.get(&message.id).copied().unwrap_or(0);

            table.message_ids.push(message.id);
            table
                .rows
                .push(FeatureRow::new(pattern_row, spam_words_count, message.label));
        }

        table
    }
}
