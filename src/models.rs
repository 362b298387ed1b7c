pub mod corpus_loader;
pub use corpus_loader::{CorpusLoader, CorpusLoaderConfig};

pub mod corpus_split;
pub use corpus_split::{CorpusSplit, CorpusSplitter, SplitName};

pub mod dictionary_feature_scorer;
pub use dictionary_feature_scorer::DictionaryFeatureScorer;

pub mod error;
pub use error::Error;

pub mod evaluator;
pub use evaluator::{ConfusionMatrix, Evaluation, Evaluator, RocPoint};

pub mod feature_assembler;
pub use feature_assembler::{FeatureAssembler, FeatureRow, FeatureTable};

pub mod label;
pub use label::Label;

pub mod logistic_regression;
pub use logistic_regression::{
    CoefficientSummary, FittedModel, LogisticRegression, LogisticRegressionConfig,
};

pub mod message;
pub use message::{CorpusStats, Message};

pub mod pattern_feature_extractor;
pub use pattern_feature_extractor::{PatternFeatureExtractor, PatternFeatureRow};

pub mod pattern_matcher;
pub use pattern_matcher::{PatternKind, PatternMatcher, PatternSet};

pub mod spam_dictionary;
pub use spam_dictionary::{DictionaryEntry, SpamDictionary, SpamDictionaryBuilder};

pub mod spam_pipeline;
pub use spam_pipeline::{PipelineConfig, PipelineReport, SpamPipeline};

pub mod stop_words;
pub use stop_words::StopWords;

pub mod tokenizer;
pub use tokenizer::Tokenizer;
