use thiserror::Error;

#[derive(Error, Debug)]
pub enum PopError {
    #[error("Invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    #[error("No candidate satisfied the constraint set within {limit} draws")]
    IterationCeiling { limit: u64 },

    #[error("Non-finite value drawn for {context}")]
    NonFiniteDraw { context: &'static str },

    #[error("Population must be a finite, non-negative value, got {value}")]
    InvalidPopulation { value: f64 },

    #[error("Jitter multiplier must be positive and finite, got {value}")]
    InvalidJitter { value: f64 },

    #[error("Catalog lists {got} provinces, dataset has {expected}")]
    CatalogSizeMismatch { expected: usize, got: usize },

    #[error("Catalog I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Catalog parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type PopResult<T> = Result<T, PopError>;
