use std::collections::HashMap;

// Types listed here are either shared across multiple files and/or exposed via the library.

/// Represents a token as an owned `String`. Tokens are the lowercase words a message is
/// broken into before dictionary building and scoring.
pub type Token = String;

/// Represents a borrowed view of a token as a `str`. This is used when ownership is not required.
pub type TokenRef = str;

/// A dense, row-ordered identifier assigned to each message by the corpus loader.
pub type MessageId = usize;

/// The name of a model-facing feature column (e.g. `char_count`).
pub type FeatureName = &'static str;

/// A predicted probability that a message is spam, in `[0, 1]`.
pub type SpamProbability = f64;

/// The number of messages (documents) of a class which contain a given token.
pub type DocumentFrequency = usize;

/// Maps each token to the number of messages it appears in.
pub type DocumentFrequencyMap = HashMap<Token, DocumentFrequency>;

/// Maps each message to its spam dictionary match count. Messages missing from the map
/// have zero matches.
pub type SpamWordCountMap = HashMap<MessageId, usize>;
