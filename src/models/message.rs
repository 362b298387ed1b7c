use crate::types::MessageId;
use crate::Label;
use serde::{Deserialize, Serialize};

/// A labeled message. Created by the corpus loader and read-only afterward.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: MessageId,
    pub label: Label,
    pub text: String,
}

impl Message {
    pub fn new(id: MessageId, label: Label, text: impl Into<String>) -> Self {
        Self {
            id,
            label,
            text: text.into(),
        }
    }

    /// Builds a corpus from `(label, text)` pairs, assigning dense ids by position.
    pub fn from_labeled_texts<I, S>(rows: I) -> Vec<Message>
    where
        I: IntoIterator<Item = (Label, S)>,
        S: Into<String>,
    {
        rows.into_iter()
            .enumerate()
            .map(|(id, (label, text))| Message::new(id, label, text))
            .collect()
    }
}

/// Per-class message counts for a corpus or split.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorpusStats {
    pub total: usize,
    pub ham: usize,
    pub spam: usize,
}

impl CorpusStats {
    pub fn from_messages<'a, I>(messages: I) -> Self
    where
        I: IntoIterator<Item = &'a Message>,
    {
        messages
            .into_iter()
            .fold(CorpusStats::default(), |mut stats, message| {
                stats.total += 1;
                match message.label {
                    Label::Ham => stats.ham += 1,
                    Label::Spam => stats.spam += 1,
                }
                stats
            })
    }

    pub fn spam_ratio(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.spam as f64 / self.total as f64
        }
    }
}
