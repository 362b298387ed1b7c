use crate::models::PatternKind;
use crate::types::FeatureName;

pub const DEFAULT_SPAM_DICTIONARY_SIZE: usize = 30;

pub const DEFAULT_MIN_TOKEN_LENGTH: usize = 3;

pub const INTERCEPT_TERM: FeatureName = "(intercept)";

pub const FEATURE_COUNT: usize = 10;

/// Model-facing columns, in the order `FeatureRow::values` emits them.
pub const FEATURE_COLUMNS: [FeatureName; FEATURE_COUNT] = [
    "char_count",
    "has_numbers",
    "numbers_count",
    "has_url",
    "has_date",
    "has_dollar",
    "has_emoticon",
    "has_email",
    "has_phone",
    "spam_words_count",
];

pub const DEFAULT_PATTERN_SET_VERSION: &str = "sms-heuristics-1";

// These are heuristics; they only need to be consistent between fitting and scoring.
pub const DEFAULT_PATTERNS: &[(PatternKind, &str)] = &[
    (
        PatternKind::Url,
        r"(?i)\b(?:https?://|www\.)\S+|\b[a-z0-9-]+\.(?:com|net|org|co|uk|biz|info)\b",
    ),
    (
        PatternKind::Date,
        r"(?i)\b\d{1,2}[/.-]\d{1,2}[/.-]\d{2,4}\b|\b\d{1,2}(?:st|nd|rd|th)?\s+(?:jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)[a-z]*\b",
    ),
    (PatternKind::Dollar, r"[$£€]\s?\d"),
    (
        PatternKind::Emoticon,
        r"[:;=]-?[)(\]\[DPpOo*|]|<3|\^_\^",
    ),
    (
        PatternKind::Email,
        r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}",
    ),
    (
        PatternKind::Phone,
        r"\+?\(?\d{2,5}\)?[\s-]?\d{3,4}[\s-]?\d{3,4}",
    ),
];

pub const ENGLISH_STOP_WORDS_VERSION: &str = "en-1";

pub const ENGLISH_STOP_WORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "ain", "all", "am", "an", "and", "any",
    "are", "aren", "aren't", "as", "at", "be", "because", "been", "before", "being", "below",
    "between", "both", "but", "by", "can", "couldn", "couldn't", "d", "did", "didn", "didn't",
    "do", "does", "doesn", "doesn't", "doing", "don", "don't", "down", "during", "each", "few",
    "for", "from", "further", "had", "hadn", "hadn't", "has", "hasn", "hasn't", "have", "haven",
    "haven't", "having", "he", "her", "here", "hers", "herself", "him", "himself", "his", "how",
    "i", "if", "in", "into", "is", "isn", "isn't", "it", "it's", "its", "itself", "just", "ll",
    "m", "ma", "me", "mightn", "mightn't", "more", "most", "mustn", "mustn't", "my", "myself",
    "needn", "needn't", "no", "nor", "not", "now", "o", "of", "off", "on", "once", "only", "or",
    "other", "our", "ours", "ourselves", "out", "over", "own", "re", "s", "same", "shan",
    "shan't", "she", "she's", "should", "should've", "shouldn", "shouldn't", "so", "some",
    "such", "t", "than", "that", "that'll", "the", "their", "theirs", "them", "themselves",
    "then", "there", "these", "they", "this", "those", "through", "to", "too", "under", "until",
    "up", "ve", "very", "was", "wasn", "wasn't", "we", "were", "weren", "weren't", "what",
    "when", "where", "which", "while", "who", "whom", "why", "will", "with", "won", "won't",
    "wouldn", "wouldn't", "y", "you", "you'd", "you'll", "you're", "you've", "your", "yours",
    "yourself", "yourselves",
];
