//! Interpretable SMS spam classification.
//!
//! Messages are turned into a small, fixed feature set (character and digit counts,
//! regex pattern flags, and the number of high-lift "spam words" they contain), and a
//! logistic regression is fitted on a training split and evaluated on a held-out split.
//!
//! The spam dictionary is derived from training messages only and reused unchanged
//! when scoring the test split.

mod config;
pub use config::{
    DEFAULT_CORPUS_LOADER_CONFIG, DEFAULT_LOGISTIC_REGRESSION_CONFIG, DEFAULT_PIPELINE_CONFIG,
    SMS_SPAM_COLLECTION_TSV_CONFIG,
};
pub mod constants;
pub use constants::{FEATURE_COLUMNS, FEATURE_COUNT};
pub mod models;
pub use models::{
    CoefficientSummary, ConfusionMatrix, CorpusLoader, CorpusLoaderConfig, CorpusSplit,
    CorpusSplitter, CorpusStats, DictionaryEntry, DictionaryFeatureScorer, Error, Evaluation,
    Evaluator, FeatureAssembler, FeatureRow, FeatureTable, FittedModel, Label,
    LogisticRegression, LogisticRegressionConfig, Message, PatternFeatureExtractor,
    PatternFeatureRow, PatternKind, PatternMatcher, PatternSet, PipelineConfig, PipelineReport,
    RocPoint, SpamDictionary, SpamDictionaryBuilder, SpamPipeline, SplitName, StopWords,
    Tokenizer,
};
pub mod types;
mod utils;
pub use types::{MessageId, SpamProbability, Token, TokenRef};

#[cfg(doctest)]
doc_comment::doctest!("../README.md");

/// Runs the full split / dictionary / fit / evaluate protocol with the default
/// configuration.
pub fn classify_corpus(messages: &[Message]) -> Result<PipelineReport, Error> {
    classify_corpus_with_custom_config(messages, DEFAULT_PIPELINE_CONFIG)
}

pub fn classify_corpus_with_custom_config(
    messages: &[Message],
    config: PipelineConfig,
) -> Result<PipelineReport, Error> {
    let mut pipeline = SpamPipeline::new(config)?;

    pipeline.run(messages)
}
