use clap::Parser;
use log::error;
use spam_lift::{
    classify_corpus_with_custom_config, CorpusLoader, CorpusLoaderConfig, PipelineConfig,
    DEFAULT_CORPUS_LOADER_CONFIG, DEFAULT_PIPELINE_CONFIG,
};
use std::path::PathBuf;

/// Fit and evaluate the SMS spam classifier on a labeled corpus.
#[derive(Debug, Parser)]
#[command(name = "spam-lift-cli", version)]
struct Cli {
    /// Labeled corpus (CSV/TSV, optionally .gz); label column first, text second
    corpus: PathBuf,

    #[arg(long, default_value_t = DEFAULT_PIPELINE_CONFIG.split_seed)]
    seed: u64,

    #[arg(long, default_value_t = DEFAULT_PIPELINE_CONFIG.split_fraction)]
    train_fraction: f64,

    /// Split without preserving class proportions
    #[arg(long)]
    no_stratify: bool,

    #[arg(long, default_value_t = DEFAULT_PIPELINE_CONFIG.dictionary_size)]
    dictionary_size: usize,

    #[arg(long, default_value_t = DEFAULT_PIPELINE_CONFIG.min_token_length)]
    min_token_length: usize,

    #[arg(long, default_value_t = DEFAULT_PIPELINE_CONFIG.decision_threshold)]
    threshold: f64,

    #[arg(long, default_value_t = DEFAULT_PIPELINE_CONFIG.max_iterations)]
    max_iterations: usize,

    /// Field delimiter (a single character; use "\t" for tab-separated files)
    #[arg(long, default_value = ",")]
    delimiter: String,

    /// The first row is data, not a header
    #[arg(long)]
    no_header: bool,

    /// Treat double quotes as ordinary characters
    #[arg(long)]
    no_quoting: bool,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn pipeline_config(&self) -> PipelineConfig {
        PipelineConfig {
            split_seed: self.seed,
            split_fraction: self.train_fraction,
            stratify: !self.no_stratify,
            dictionary_size: self.dictionary_size,
            min_token_length: self.min_token_length,
            decision_threshold: self.threshold,
            max_iterations: self.max_iterations,
            ..DEFAULT_PIPELINE_CONFIG
        }
    }

    fn loader_config(&self) -> Result<CorpusLoaderConfig, String> {
        let delimiter = match self.delimiter.as_str() {
            "\\t" | "\t" | "tab" => b'\t',
            other if other.len() == 1 => other.as_bytes()[0],
            other => return Err(format!("Delimiter must be one byte, got {:?}", other)),
        };

        Ok(CorpusLoaderConfig {
            delimiter,
            has_headers: !self.no_header,
            quoting: !self.no_quoting,
            ..DEFAULT_CORPUS_LOADER_CONFIG
        })
    }
}

fn main() {
    // Initialize the logger
    env_logger::init();

    let cli = Cli::parse();

    let loader_config = match cli.loader_config() {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            std::process::exit(2);
        }
    };

    let messages = match CorpusLoader::new(loader_config).load_path(&cli.corpus) {
        Ok(messages) => messages,
        Err(e) => {
            error!("Failed to load corpus {:?}: {}", cli.corpus, e);
            std::process::exit(1);
        }
    };

    match classify_corpus_with_custom_config(&messages, cli.pipeline_config()) {
        Ok(report) => {
            if cli.json {
                match serde_json::to_string_pretty(&report) {
                    Ok(json) => println!("{}", json),
                    Err(e) => {
                        error!("Failed to serialize report: {}", e);
                        std::process::exit(1);
                    }
                }
            } else {
                println!("{}", report);
            }
        }
        Err(e) => {
            error!("Error classifying corpus: {}", e);
            std::process::exit(1);
        }
    }
}
