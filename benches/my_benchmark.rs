use criterion::{black_box, criterion_group, criterion_main, Criterion};
use spam_lift::{classify_corpus_with_custom_config, CorpusLoader, SpamPipeline, SplitName};
use spam_lift::{PipelineConfig, DEFAULT_PIPELINE_CONFIG};

const SMS_SAMPLE_CSV_PATH: &str = "tests/test_data_files/sms_sample.csv";

fn bench_config() -> PipelineConfig {
    PipelineConfig {
        max_iterations: 100,
        ..DEFAULT_PIPELINE_CONFIG
    }
}

fn benchmark_assemble_features(c: &mut Criterion) {
    let corpus = CorpusLoader::default()
        .load_path(SMS_SAMPLE_CSV_PATH)
        .expect("Failed to load sample corpus");

    let mut pipeline = SpamPipeline::new(bench_config()).expect("Invalid pipeline config");
    let split = pipeline.split(&corpus).expect("Failed to split corpus");
    let train = split.select(&corpus, SplitName::Train);

    pipeline
        .fit_dictionary(train.iter().copied())
        .expect("Failed to build spam dictionary");

    c.bench_function("assemble_features", |b| {
        b.iter(|| pipeline.assemble(black_box(&corpus)))
    });
}

fn benchmark_classify_corpus(c: &mut Criterion) {
    let corpus = CorpusLoader::default()
        .load_path(SMS_SAMPLE_CSV_PATH)
        .expect("Failed to load sample corpus");

    c.bench_function("classify_corpus", |b| {
        b.iter(|| classify_corpus_with_custom_config(black_box(&corpus), bench_config()))
    });
}

criterion_group!(benches, benchmark_assemble_features, benchmark_classify_corpus);
criterion_main!(benches);
