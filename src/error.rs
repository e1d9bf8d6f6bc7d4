use thiserror::Error;

/// Errors raised while sampling a generated path or emitting markers.
#[derive(Debug, Error)]
pub enum PathError {
    #[error("path list is empty")]
    EmptyPath,

    #[error("degenerate path: {0}")]
    Degenerate(String),

    #[error("sample step must be a positive finite number, got {0}")]
    InvalidStep(f64),

    #[error("unknown path quality '{0}', expected low, medium, high or a positive divisor")]
    InvalidQuality(String),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PathError>;
