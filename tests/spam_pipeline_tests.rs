mod test_utils;

use spam_lift::{
    classify_corpus_with_custom_config, Error, FeatureTable, Label, PipelineConfig, SpamPipeline,
    SplitName, DEFAULT_PIPELINE_CONFIG, FEATURE_COLUMNS,
};
use test_utils::{
    four_message_corpus, load_sms_sample, messages, sample_pipeline_config, SMS_SAMPLE_TOTAL,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_on_sample_corpus() {
        let corpus = load_sms_sample();
        let report = classify_corpus_with_custom_config(&corpus, sample_pipeline_config()).unwrap();

        assert_eq!(report.corpus.total, SMS_SAMPLE_TOTAL);
        assert_eq!(report.train.total + report.test.total, SMS_SAMPLE_TOTAL);
        assert_eq!(report.model.train_rows, report.train.total);

        assert!(!report.dictionary.is_empty());
        assert!(report.dictionary.len() <= DEFAULT_PIPELINE_CONFIG.dictionary_size);

        assert_eq!(report.model.coefficients.len(), FEATURE_COLUMNS.len());
        assert!(report.model.intercept.is_finite());
        assert!(report.model.coefficients.iter().all(|c| c.is_finite()));

        for evaluation in [&report.train_evaluation, &report.test_evaluation] {
            assert!(evaluation.accuracy >= 0.0 && evaluation.accuracy <= 1.0);
            if let Some(auc) = evaluation.auc {
                assert!((0.0..=1.0).contains(&auc));
            }
        }

        assert_eq!(
            report.test_evaluation.confusion_matrix.total(),
            report.test.total
        );
    }

    #[test]
    fn test_run_is_repeatable() {
        let corpus = load_sms_sample();

        let first = classify_corpus_with_custom_config(&corpus, sample_pipeline_config()).unwrap();
        let second = classify_corpus_with_custom_config(&corpus, sample_pipeline_config()).unwrap();

        assert_eq!(first.dictionary.entries(), second.dictionary.entries());
        assert_eq!(first.model, second.model);
        assert_eq!(first.test_evaluation, second.test_evaluation);
    }

    #[test]
    fn test_report_serializes_to_json() {
        let corpus = load_sms_sample();
        let report = classify_corpus_with_custom_config(&corpus, sample_pipeline_config()).unwrap();

        let json: serde_json::Value = serde_json::to_value(&report).unwrap();

        assert_eq!(json["corpus"]["total"], SMS_SAMPLE_TOTAL);
        assert!(json["dictionary"]["entries"].is_array());
        assert!(json["model"]["summary"].is_array());
        assert_eq!(json["stop_words_version"], "en-1");
        assert!(report.to_string().contains("Spam dictionary"));
    }

    #[test]
    fn test_dictionary_is_built_from_train_split_only() {
        let corpus = load_sms_sample();
        let mut pipeline = SpamPipeline::new(sample_pipeline_config()).unwrap();

        let split = pipeline.split(&corpus).unwrap();
        let train = split.select(&corpus, SplitName::Train);
        let test = split.select(&corpus, SplitName::Test);

        let dictionary = pipeline.fit_dictionary(train.iter().copied()).unwrap().clone();

        // Rewriting every TEST message leaves the dictionary untouched.
        let mut altered = corpus.clone();
        for message in &test {
            altered[message.id].text = "zzz unique spammy words".to_string();
        }
        let altered_train = split.select(&altered, SplitName::Train);
        let rebuilt = pipeline
            .fit_dictionary(altered_train.iter().copied())
            .unwrap();

        assert_eq!(rebuilt.entries(), dictionary.entries());
    }

    #[test]
    fn test_four_message_corpus_dictionary_and_url_flag() {
        let corpus = four_message_corpus();
        let mut pipeline = SpamPipeline::new(DEFAULT_PIPELINE_CONFIG).unwrap();

        let split = pipeline.split(&corpus).unwrap();
        let train = split.select(&corpus, SplitName::Train);
        assert_eq!(train.len(), 2);

        let tokenizer_words: Vec<String> = {
            let tokenizer = pipeline.tokenizer();
            train
                .iter()
                .flat_map(|message| tokenizer.tokenize_to_vec(&message.text))
                .collect()
        };

        pipeline.fit_dictionary(train.iter().copied()).unwrap();
        for word in pipeline.dictionary().unwrap().words() {
            assert!(tokenizer_words.iter().any(|train_word| train_word == word));
        }

        let table = pipeline.assemble(&corpus).unwrap();
        let url_flags: Vec<bool> = table.rows.iter().map(|row| row.has_url).collect();

        assert_eq!(url_flags, vec![true, false, false, false]);
    }

    #[test]
    fn test_assemble_before_dictionary_is_ordering_error() {
        let corpus = four_message_corpus();
        let pipeline = SpamPipeline::new(DEFAULT_PIPELINE_CONFIG).unwrap();

        let result = pipeline.assemble(&corpus);

        assert!(matches!(result, Err(Error::Ordering(_))));
    }

    #[test]
    fn test_score_before_fit_is_ordering_error() {
        let pipeline = SpamPipeline::new(DEFAULT_PIPELINE_CONFIG).unwrap();

        assert!(matches!(
            pipeline.score(&FeatureTable::default()),
            Err(Error::Ordering(_))
        ));
        assert!(matches!(
            pipeline.evaluate(&FeatureTable::default()),
            Err(Error::Ordering(_))
        ));
    }

    #[test]
    fn test_refitting_dictionary_drops_model() {
        let corpus = load_sms_sample();
        let mut pipeline = SpamPipeline::new(sample_pipeline_config()).unwrap();

        pipeline.run(&corpus).unwrap();
        assert!(pipeline.model().is_some());

        pipeline.fit_dictionary(&corpus).unwrap();
        assert!(pipeline.model().is_none());
    }

    #[test]
    fn test_single_class_training_is_data_insufficiency() {
        let corpus = messages(&[
            (Label::Ham, "see you at lunch"),
            (Label::Ham, "running late"),
            (Label::Ham, "call me later"),
            (Label::Ham, "thanks again"),
        ]);

        let result = classify_corpus_with_custom_config(&corpus, DEFAULT_PIPELINE_CONFIG);

        assert!(matches!(result, Err(Error::DataInsufficiency(_))));
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let bad_configs = [
            PipelineConfig {
                split_fraction: 1.0,
                ..DEFAULT_PIPELINE_CONFIG
            },
            PipelineConfig {
                dictionary_size: 0,
                ..DEFAULT_PIPELINE_CONFIG
            },
            PipelineConfig {
                decision_threshold: 0.0,
                ..DEFAULT_PIPELINE_CONFIG
            },
            PipelineConfig {
                tolerance: -1.0,
                ..DEFAULT_PIPELINE_CONFIG
            },
        ];

        for config in bad_configs {
            assert!(matches!(SpamPipeline::new(config), Err(Error::Config(_))));
        }
    }
}
