use crate::constants::{DEFAULT_MIN_TOKEN_LENGTH, DEFAULT_SPAM_DICTIONARY_SIZE};
use crate::models::{CorpusLoaderConfig, LogisticRegressionConfig, PipelineConfig};

pub const DEFAULT_PIPELINE_CONFIG: PipelineConfig = PipelineConfig {
    split_seed: 123,
    split_fraction: 0.5,
    stratify: true,
    dictionary_size: DEFAULT_SPAM_DICTIONARY_SIZE,
    min_token_length: DEFAULT_MIN_TOKEN_LENGTH,
    decision_threshold: 0.5,
    max_iterations: DEFAULT_LOGISTIC_REGRESSION_CONFIG.max_iterations,
    tolerance: DEFAULT_LOGISTIC_REGRESSION_CONFIG.tolerance,
};

pub const DEFAULT_LOGISTIC_REGRESSION_CONFIG: LogisticRegressionConfig =
    LogisticRegressionConfig {
        max_iterations: 25,
        tolerance: 1e-8,
    };

/// Comma-separated with a header row, label then text (`v1,v2`).
pub const DEFAULT_CORPUS_LOADER_CONFIG: CorpusLoaderConfig = CorpusLoaderConfig {
    delimiter: b',',
    has_headers: true,
    quoting: true,
    label_column: 0,
    text_column: 1,
};

/// Tab-separated, no header, unquoted (`label<TAB>text` per line).
pub const SMS_SPAM_COLLECTION_TSV_CONFIG: CorpusLoaderConfig = CorpusLoaderConfig {
    delimiter: b'\t',
    has_headers: false,
    quoting: false,
    label_column: 0,
    text_column: 1,
};
