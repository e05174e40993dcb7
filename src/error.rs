use std::io;

/// Errors returned by bucketkit operations.
///
/// Failures raised by collaborators (the object store, the CSV writer, the
/// config loader) are wrapped transparently so their original message reaches
/// the caller untouched.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Storage(#[from] opendal::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Config(#[from] config::ConfigError),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Logger(#[from] log::SetLoggerError),

    #[error("record {index} is not a JSON object")]
    NotARecord { index: usize },

    #[error("row {row} has {found} fields but the table has {expected} columns")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("table has {found} index labels but {expected} rows")]
    IndexLength { expected: usize, found: usize },

    #[error("invalid locator: {0}")]
    InvalidLocator(String),

    #[error("found input variables with inconsistent numbers of samples: {labels} labels, {scores} scores")]
    LengthMismatch { labels: usize, scores: usize },

    #[error("cannot compute a ROC curve from empty input")]
    EmptyInput,

    #[error("label at position {index} is not binary (expected 0 or 1)")]
    NonBinaryLabel { index: usize },

    #[error("score at position {index} is NaN or infinite")]
    NonFiniteScore { index: usize },

    #[error("x is neither increasing nor decreasing")]
    NonMonotonic,

    #[error("only one class present in labels; ROC AUC is not defined in that case")]
    SingleClass,

    #[error("failed to render figure: {0}")]
    Render(#[source] io::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
