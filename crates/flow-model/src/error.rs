use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid model JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("unsupported model: {0}")]
    Unsupported(String),

    #[error("malformed tree {tree}: {reason}")]
    MalformedTree { tree: usize, reason: String },

    #[error("feature schema mismatch for {model}: model expects {expected:?}, caller provides {found:?}")]
    SchemaMismatch {
        model: String,
        expected: Vec<String>,
        found: Vec<String>,
    },

    #[error("feature count mismatch: expected {expected}, found {found}")]
    FeatureCount { expected: usize, found: usize },

    #[error("model returned {found} predictions for {expected} rows")]
    OutputLength { expected: usize, found: usize },
}
