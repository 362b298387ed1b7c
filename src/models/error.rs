use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Schema Error: {0}")]
    Schema(String),

    #[error("Data Insufficiency Error: {0}")]
    DataInsufficiency(String),

    #[error("Ordering Error: {0}")]
    Ordering(String),

    #[error("Fit Divergence Error: {0}")]
    FitDivergence(String),

    #[error("Config Error: {0}")]
    Config(String),

    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Error: {0}")]
    Csv(#[from] csv::Error),
}
