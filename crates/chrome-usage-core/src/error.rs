use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid size threshold: {0} (must be a finite, non-negative number of MB)")]
    InvalidThreshold(f64),

    #[error("Report JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
