use crate::types::Token;
use crate::StopWords;

/// Splits message text into lowercase word tokens.
///
/// Words are maximal runs of alphanumeric characters; apostrophes inside a word are
/// dropped rather than treated as boundaries (`"don't"` becomes `"dont"`). Tokens
/// shorter than `min_token_length` characters, and stopwords, are discarded.
pub struct Tokenizer<'a> {
    min_token_length: usize,
    stop_words: &'a StopWords,
}

impl<'a> Tokenizer<'a> {
    pub fn new(min_token_length: usize, stop_words: &'a StopWords) -> Self {
        Self {
            min_token_length,
            stop_words,
        }
    }

    pub fn min_token_length(&self) -> usize {
        self.min_token_length
    }

    pub fn stop_words(&self) -> &StopWords {
        self.stop_words
    }

    /// Lazily tokenizes `text`. The iterator borrows its inputs only, so calling this
    /// again on the same text yields the same tokens.
    pub fn tokenize<'t>(&'t self, text: &'t str) -> impl Iterator<Item = Token> + 't {
        let min_token_length = self.min_token_length.max(1);
        let stop_words: &'t StopWords = self.stop_words;

        text.split(|c: char| !c.is_alphanumeric() && !is_apostrophe(c))
            .map(|word| {
                word.chars()
                    .filter(|c| c.is_alphanumeric())
                    .flat_map(char::to_lowercase)
                    .collect::<Token>()
            })
            .filter(move |word| word.chars().count() >= min_token_length)
            .filter(move |word| !stop_words.contains(word))
    }

    /// Tokenizes `text` into a `Vec`, preserving order and duplicates.
    pub fn tokenize_to_vec(&self, text: &str) -> Vec<Token> {
        self.tokenize(text).collect()
    }

    /// Tokenizes `text` and removes repeated tokens, keeping first occurrences in order.
    pub fn tokenize_distinct(&self, text: &str) -> Vec<Token> {
        crate::utils::dedup_vector(&self.tokenize_to_vec(text))
    }
}

fn is_apostrophe(c: char) -> bool {
    c == '\'' || c == '\u{2019}'
}
