use crate::types::{DocumentFrequencyMap, Token, TokenRef};
use crate::utils::{count_document_frequencies, sort_dictionary_entries};
use crate::{Error, Label, Message, Tokenizer};
use log::{debug, info};
use serde::Serialize;
use std::collections::HashSet;

/// A word whose per-message frequency is compared between spam and ham.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DictionaryEntry {
    pub word: Token,
    /// Share of HAM training messages containing the word, in `(0, 1]`.
    pub ham_frequency: f64,
    /// Share of SPAM training messages containing the word, in `(0, 1]`.
    pub spam_frequency: f64,
    /// `spam_frequency / ham_frequency`.
    pub lift: f64,
}

impl DictionaryEntry {
    pub fn new(word: Token, ham_frequency: f64, spam_frequency: f64) -> Self {
        Self {
            word,
            ham_frequency,
            spam_frequency,
            lift: spam_frequency / ham_frequency,
        }
    }
}

/// The top-lift words of a training split, ordered by descending lift then word.
///
/// Built once from TRAIN messages and never modified; TEST rows are scored against
/// the same instance.
#[derive(Debug, Clone, Serialize)]
pub struct SpamDictionary {
    entries: Vec<DictionaryEntry>,
    #[serde(skip)]
    words: HashSet<Token>,
}

impl SpamDictionary {
    /// Wraps already-ranked entries.
    pub fn from_entries(entries: Vec<DictionaryEntry>) -> Self {
        let words = entries.iter().map(|entry| entry.word.clone()).collect();

        Self { entries, words }
    }

    pub fn entries(&self) -> &[DictionaryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, word: &TokenRef) -> bool {
        self.words.contains(word)
    }

    pub fn words(&self) -> impl Iterator<Item = &TokenRef> {
        self.entries.iter().map(|entry| entry.word.as_str())
    }
}

/// Ranks words by how much more often they occur in spam than in ham.
///
/// Frequencies are per-document: a word repeated inside one message counts once for
/// that message. Only words seen in both classes are eligible, so every lift is
/// finite and positive.
pub struct SpamDictionaryBuilder<'a> {
    tokenizer: &'a Tokenizer<'a>,
    dictionary_size: usize,
}

impl<'a> SpamDictionaryBuilder<'a> {
    pub fn new(tokenizer: &'a Tokenizer<'a>, dictionary_size: usize) -> Self {
        Self {
            tokenizer,
            dictionary_size,
        }
    }

    /// Builds the dictionary from training messages.
    ///
    /// Must only ever receive TRAIN messages. Fails with `Error::DataInsufficiency` if
    /// either class has no messages. Returns fewer than `dictionary_size` entries when
    /// fewer words are eligible.
    pub fn build<'m, I>(&self, train_messages: I) -> Result<SpamDictionary, Error>
    where
        I: IntoIterator<Item = &'m Message>,
    {
        let mut ham_documents: Vec<Vec<Token>> = Vec::new();
        let mut spam_documents: Vec<Vec<Token>> = Vec::new();

        for message in train_messages {
            let tokens = self.tokenizer.tokenize_to_vec(&message.text);

            match message.label {
                Label::Ham => ham_documents.push(tokens),
                Label::Spam => spam_documents.push(tokens),
            }
        }

        let total_ham_docs = ham_documents.len();
        let total_spam_docs = spam_documents.len();

        if total_ham_docs == 0 || total_spam_docs == 0 {
            return Err(Error::DataInsufficiency(format!(
                "Spam dictionary needs training messages of both classes (ham: {}, spam: {})",
                total_ham_docs, total_spam_docs
            )));
        }

        info!(
            "Building spam dictionary from {} ham / {} spam training messages",
            total_ham_docs, total_spam_docs
        );

        let ham_counts = count_document_frequencies(ham_documents);
        let spam_counts = count_document_frequencies(spam_documents);

        let eligible = Self::eligible_entries(
            &ham_counts,
            total_ham_docs,
            &spam_counts,
            total_spam_docs,
        );

        debug!(
            "{} ham words, {} spam words, {} present in both",
            ham_counts.len(),
            spam_counts.len(),
            eligible.len()
        );

        let mut ranked = sort_dictionary_entries(eligible);
        ranked.truncate(self.dictionary_size);

        info!("Spam dictionary holds {} words", ranked.len());

        Ok(SpamDictionary::from_entries(ranked))
    }

    fn eligible_entries(
        ham_counts: &DocumentFrequencyMap,
        total_ham_docs: usize,
        spam_counts: &DocumentFrequencyMap,
        total_spam_docs: usize,
    ) -> Vec<DictionaryEntry> {
        spam_counts
            .iter()
            .filter_map(|(word, &spam_count)| {
                let ham_count = ham_counts.get(word).copied().unwrap_or(0);

                if ham_count == 0 || spam_count == 0 {
                    return None;
                }

                Some(DictionaryEntry::new(
                    word.clone(),
                    ham_count as f64 / total_ham_docs as f64,
                    spam_count as f64 / total_spam_docs as f64,
                ))
            })
            .collect()
    }
}
