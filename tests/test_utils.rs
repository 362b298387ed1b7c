#![allow(dead_code)]

use spam_lift::{
    CorpusLoader, FeatureRow, FeatureTable, Label, Message, PatternFeatureRow, PipelineConfig,
    DEFAULT_PIPELINE_CONFIG,
};

pub const SMS_SAMPLE_CSV_PATH: &str = "tests/test_data_files/sms_sample.csv";

pub const SMS_SAMPLE_TOTAL: usize = 40;
pub const SMS_SAMPLE_SPAM: usize = 16;

/// Loads the bundled 40-message sample corpus.
pub fn load_sms_sample() -> Vec<Message> {
    CorpusLoader::default()
        .load_path(SMS_SAMPLE_CSV_PATH)
        .expect("Failed to load sample corpus")
}

/// Pipeline settings for the small sample corpus. The solver gets extra room since
/// tiny training splits often separate.
pub fn sample_pipeline_config() -> PipelineConfig {
    PipelineConfig {
        max_iterations: 100,
        ..DEFAULT_PIPELINE_CONFIG
    }
}

/// The four-message corpus used for end-to-end split checks.
pub fn four_message_corpus() -> Vec<Message> {
    Message::from_labeled_texts(vec![
        (Label::Spam, "WIN cash now http://x.co"),
        (Label::Ham, "see you at lunch"),
        (Label::Spam, "free cash prize call now"),
        (Label::Ham, "lunch was fun"),
    ])
}

pub fn messages(rows: &[(Label, &str)]) -> Vec<Message> {
    Message::from_labeled_texts(rows.iter().map(|(label, text)| (*label, *text)))
}

/// A feature table whose only varying column is `char_count`.
pub fn char_count_table(rows: &[(usize, Label)]) -> FeatureTable {
    let mut table = FeatureTable::default();

    for (id, &(char_count, label)) in rows.iter().enumerate() {
        let pattern_row = PatternFeatureRow {
            char_count,
            ..PatternFeatureRow::empty(id)
        };

        table.message_ids.push(id);
        table.rows.push(FeatureRow::new(&pattern_row, 0, label));
    }

    table
}

pub fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {} to be within {} of {}",
        actual,
        tolerance,
        expected
    );
}
