mod test_utils;

use flate2::write::GzEncoder;
use flate2::Compression;
use spam_lift::{
    CorpusLoader, CorpusLoaderConfig, CorpusStats, Error, Label, DEFAULT_CORPUS_LOADER_CONFIG,
    SMS_SPAM_COLLECTION_TSV_CONFIG,
};
use std::io::Write;
use test_utils::{load_sms_sample, SMS_SAMPLE_CSV_PATH, SMS_SAMPLE_SPAM, SMS_SAMPLE_TOTAL};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loads_sample_corpus() {
        let messages = load_sms_sample();
        let stats = CorpusStats::from_messages(&messages);

        assert_eq!(stats.total, SMS_SAMPLE_TOTAL);
        assert_eq!(stats.spam, SMS_SAMPLE_SPAM);
        assert_eq!(stats.ham, SMS_SAMPLE_TOTAL - SMS_SAMPLE_SPAM);

        let ids: Vec<usize> = messages.iter().map(|message| message.id).collect();
        assert_eq!(ids, (0..SMS_SAMPLE_TOTAL).collect::<Vec<_>>());
    }

    #[test]
    fn test_quoted_text_keeps_commas() {
        let messages = load_sms_sample();

        assert_eq!(messages[0].label, Label::Ham);
        assert_eq!(
            messages[0].text,
            "Hey, are we still meeting for lunch today? Let me know"
        );
    }

    #[test]
    fn test_labels_are_trimmed_and_case_insensitive() {
        let messages = CorpusLoader::default()
            .load_str("v1,v2\n SPAM ,win now\nHam,see you\n")
            .unwrap();

        assert_eq!(messages[0].label, Label::Spam);
        assert_eq!(messages[1].label, Label::Ham);
        assert_eq!(messages[1].text, "see you");
    }

    #[test]
    fn test_unknown_label_is_schema_error() {
        let result = CorpusLoader::default().load_str("v1,v2\nham,hello\nmaybe,what\n");

        match result {
            Err(Error::Schema(message)) => assert!(message.contains("maybe")),
            other => panic!("Expected a schema error, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_corpus_is_schema_error() {
        let result = CorpusLoader::default().load_str("v1,v2\n");

        assert!(matches!(result, Err(Error::Schema(_))));
    }

    #[test]
    fn test_missing_text_column_is_empty_text() {
        let messages = CorpusLoader::default()
            .load_str("v1,v2\nham\nspam,win\n")
            .unwrap();

        assert_eq!(messages[0].text, "");
        assert_eq!(messages[1].text, "win");
    }

    #[test]
    fn test_extra_columns_are_ignored() {
        let messages = CorpusLoader::default()
            .load_str("v1,v2,,,\nspam,win cash,,,\nham,hi,,,\n")
            .unwrap();

        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].text, "win cash");
    }

    #[test]
    fn test_invalid_utf8_is_replaced() {
        let bytes: &[u8] = b"v1,v2\nham,caf\xe9 later\n";

        let messages = CorpusLoader::default().load_reader(bytes).unwrap();

        assert_eq!(messages[0].text, "caf\u{FFFD} later");
    }

    #[test]
    fn test_tab_separated_without_header() {
        let loader = CorpusLoader::new(SMS_SPAM_COLLECTION_TSV_CONFIG);

        let messages = loader
            .load_str("ham\tGo until \"jurong\" point\nspam\tFree entry, text WIN\n")
            .unwrap();

        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].text, "Go until \"jurong\" point");
        assert_eq!(messages[1].label, Label::Spam);
        assert_eq!(messages[1].text, "Free entry, text WIN");
    }

    #[test]
    fn test_custom_column_order() {
        let loader = CorpusLoader::new(CorpusLoaderConfig {
            label_column: 1,
            text_column: 0,
            ..DEFAULT_CORPUS_LOADER_CONFIG
        });

        let messages = loader.load_str("text,label\nwin cash,spam\n").unwrap();

        assert_eq!(messages[0].label, Label::Spam);
        assert_eq!(messages[0].text, "win cash");
    }

    #[test]
    fn test_gzipped_corpus() {
        let csv = std::fs::read(SMS_SAMPLE_CSV_PATH).unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sms_sample.csv.gz");

        let file = std::fs::File::create(&path).unwrap();
        let mut encoder = GzEncoder::new(file, Compression::default());
        encoder.write_all(&csv).unwrap();
        encoder.finish().unwrap();

        let messages = CorpusLoader::default().load_path(&path).unwrap();

        assert_eq!(messages, load_sms_sample());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();

        let result = CorpusLoader::default().load_path(dir.path().join("missing.csv"));

        assert!(matches!(result, Err(Error::Io(_))));
    }
}
