// Error type for the fallible edges of the crate: catalog parsing, session
// import, and I/O done on behalf of callers. Validation itself never fails.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum VerseError {
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid session file: {0}")]
    InvalidSession(String),
    #[error("unknown sample poem: {0}")]
    UnknownSample(String),
}

pub type VerseResult<T> = Result<T, VerseError>;
