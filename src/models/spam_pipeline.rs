use crate::types::SpamProbability;
use crate::{
    CorpusSplit, CorpusSplitter, CorpusStats, DictionaryFeatureScorer, Error, Evaluation,
    Evaluator, FeatureAssembler, FeatureTable, FittedModel, LogisticRegression,
    LogisticRegressionConfig, Message, PatternFeatureExtractor, PatternSet, SpamDictionary,
    SpamDictionaryBuilder, SplitName, StopWords, Tokenizer,
};
use log::info;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PipelineConfig {
    pub split_seed: u64,
    /// Share of the corpus placed in TRAIN, in `(0, 1)`.
    pub split_fraction: f64,
    pub stratify: bool,
    pub dictionary_size: usize,
    pub min_token_length: usize,
    pub decision_threshold: f64,
    pub max_iterations: usize,
    pub tolerance: f64,
}

impl PipelineConfig {
    pub fn validate(&self) -> Result<(), Error> {
        if !(self.split_fraction > 0.0 && self.split_fraction < 1.0) {
            return Err(Error::Config(format!(
                "split_fraction must be in (0, 1), got {}",
                self.split_fraction
            )));
        }

        if self.dictionary_size < 1 {
            return Err(Error::Config("dictionary_size must be at least 1".to_string()));
        }

        if self.min_token_length < 1 {
            return Err(Error::Config("min_token_length must be at least 1".to_string()));
        }

        if !(self.decision_threshold > 0.0 && self.decision_threshold < 1.0) {
            return Err(Error::Config(format!(
                "decision_threshold must be in (0, 1), got {}",
                self.decision_threshold
            )));
        }

        if self.max_iterations < 1 {
            return Err(Error::Config("max_iterations must be at least 1".to_string()));
        }

        if !(self.tolerance > 0.0 && self.tolerance.is_finite()) {
            return Err(Error::Config(format!(
                "tolerance must be a positive number, got {}",
                self.tolerance
            )));
        }

        Ok(())
    }

    pub fn logistic_regression_config(&self) -> LogisticRegressionConfig {
        LogisticRegressionConfig {
            max_iterations: self.max_iterations,
            tolerance: self.tolerance,
        }
    }
}

/// Everything a run produces, as plain values for reporting.
#[derive(Debug, Clone, Serialize)]
pub struct PipelineReport {
    pub config: PipelineConfig,
    pub stop_words_version: String,
    pub pattern_set_version: String,
    pub corpus: CorpusStats,
    pub train: CorpusStats,
    pub test: CorpusStats,
    pub dictionary: SpamDictionary,
    pub model: FittedModel,
    pub train_evaluation: Evaluation,
    pub test_evaluation: Evaluation,
}

impl fmt::Display for PipelineReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Corpus: {} messages ({} ham, {} spam)",
            self.corpus.total, self.corpus.ham, self.corpus.spam
        )?;
        writeln!(
            f,
            "Split (seed {}): train {} ({} spam), test {} ({} spam)",
            self.config.split_seed, self.train.total, self.train.spam, self.test.total, self.test.spam
        )?;

        writeln!(f, "\nSpam dictionary ({} words):", self.dictionary.len())?;
        writeln!(f, "{:<16} {:>8} {:>8} {:>8}", "word", "ham", "spam", "lift")?;
        for entry in self.dictionary.entries() {
            writeln!(
                f,
                "{:<16} {:>8.4} {:>8.4} {:>8.3}",
                entry.word, entry.ham_frequency, entry.spam_frequency, entry.lift
            )?;
        }

        writeln!(f, "\nModel:\n{}", self.model)?;
        writeln!(f, "\nTrain:\n{}", self.train_evaluation)?;
        write!(f, "\nTest:\n{}", self.test_evaluation)
    }
}

/// Runs the fit/evaluate protocol while holding the state each stage depends on.
///
/// The dictionary is built from TRAIN messages only, and no feature table can be
/// assembled until it exists. The classifier is fitted once, on the TRAIN table, and
/// nothing can be scored before that.
pub struct SpamPipeline {
    config: PipelineConfig,
    stop_words: StopWords,
    pattern_set: PatternSet,
    dictionary: Option<SpamDictionary>,
    model: Option<FittedModel>,
}

impl SpamPipeline {
    /// A pipeline with the English stopword list and the default SMS patterns.
    pub fn new(config: PipelineConfig) -> Result<Self, Error> {
        Self::with_components(config, StopWords::english(), PatternSet::sms_defaults()?)
    }

    pub fn with_components(
        config: PipelineConfig,
        stop_words: StopWords,
        pattern_set: PatternSet,
    ) -> Result<Self, Error> {
        config.validate()?;

        Ok(Self {
            config,
            stop_words,
            pattern_set,
            dictionary: None,
            model: None,
        })
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    pub fn dictionary(&self) -> Option<&SpamDictionary> {
        self.dictionary.as_ref()
    }

    pub fn model(&self) -> Option<&FittedModel> {
        self.model.as_ref()
    }

    pub fn tokenizer(&self) -> Tokenizer<'_> {
        Tokenizer::new(self.config.min_token_length, &self.stop_words)
    }

    pub fn split(&self, messages: &[Message]) -> Result<CorpusSplit, Error> {
        let splitter = CorpusSplitter::new(
            self.config.split_seed,
            self.config.split_fraction,
            self.config.stratify,
        )?;

        Ok(splitter.split(messages))
    }

    /// Builds and stores the spam dictionary. Pass TRAIN messages only.
    pub fn fit_dictionary<'m, I>(&mut self, train_messages: I) -> Result<&SpamDictionary, Error>
    where
        I: IntoIterator<Item = &'m Message>,
    {
        let dictionary = {
            let tokenizer = self.tokenizer();
            SpamDictionaryBuilder::new(&tokenizer, self.config.dictionary_size)
                .build(train_messages)?
        };

        // A new dictionary changes the feature space the old model was fitted on.
        self.model = None;

        Ok(self.dictionary.insert(dictionary))
    }

    /// Assembles a feature table against the stored dictionary.
    ///
    /// # Errors
    /// `Error::Ordering` if `fit_dictionary` has not run.
    pub fn assemble<'m, I>(&self, messages: I) -> Result<FeatureTable, Error>
    where
        I: IntoIterator<Item = &'m Message>,
    {
        let dictionary = self.dictionary.as_ref().ok_or_else(|| {
            Error::Ordering(
                "Dictionary features requested before the spam dictionary was built".to_string(),
            )
        })?;

        let tokenizer = self.tokenizer();
        let assembler = FeatureAssembler::new(
            PatternFeatureExtractor::new(&self.pattern_set),
            DictionaryFeatureScorer::new(&tokenizer, dictionary),
        );

        Ok(assembler.assemble(messages))
    }

    pub fn fit_classifier(&mut self, train_table: &FeatureTable) -> Result<&FittedModel, Error> {
        let model =
            LogisticRegression::new(self.config.logistic_regression_config()).fit(train_table)?;

        Ok(self.model.insert(model))
    }

    /// # Errors
    /// `Error::Ordering` if `fit_classifier` has not run.
    pub fn score(&self, table: &FeatureTable) -> Result<Vec<SpamProbability>, Error> {
        let model = self.model.as_ref().ok_or_else(|| {
            Error::Ordering("Scoring requested before the classifier was fitted".to_string())
        })?;

        Ok(model.score(table))
    }

    pub fn evaluate(&self, table: &FeatureTable) -> Result<Evaluation, Error> {
        let probabilities = self.score(table)?;

        Evaluator::new(self.config.decision_threshold)?.evaluate(&table.labels(), &probabilities)
    }

    /// Split, build the dictionary from TRAIN, assemble both splits, fit on TRAIN and
    /// evaluate on both.
    pub fn run(&mut self, messages: &[Message]) -> Result<PipelineReport, Error> {
        let split = self.split(messages)?;

        let train_messages = split.select(messages, SplitName::Train);
        let test_messages = split.select(messages, SplitName::Test);

        info!(
            "Running pipeline: {} train / {} test messages",
            train_messages.len(),
            test_messages.len()
        );

        self.fit_dictionary(train_messages.iter().copied())?;

        let train_table = self.assemble(train_messages.iter().copied())?;
        let test_table = self.assemble(test_messages.iter().copied())?;

        self.fit_classifier(&train_table)?;

        let train_evaluation = self.evaluate(&train_table)?;
        let test_evaluation = self.evaluate(&test_table)?;

        info!(
            "Train accuracy {:.4}, test accuracy {:.4}",
            train_evaluation.accuracy, test_evaluation.accuracy
        );

        let dictionary = self.dictionary.clone().ok_or_else(|| {
            Error::Ordering("Spam dictionary missing after fitting".to_string())
        })?;
        let model = self
            .model
            .clone()
            .ok_or_else(|| Error::Ordering("Model missing after fitting".to_string()))?;

        Ok(PipelineReport {
            config: self.config,
            stop_words_version: self.stop_words.version().to_string(),
            pattern_set_version: self.pattern_set.version().to_string(),
            corpus: CorpusStats::from_messages(messages),
            train: CorpusStats::from_messages(train_messages.iter().copied()),
            test: CorpusStats::from_messages(test_messages.iter().copied()),
            dictionary,
            model,
            train_evaluation,
            test_evaluation,
        })
    }
}
