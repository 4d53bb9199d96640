// File: src/error.rs
use thiserror::Error;

/// Errors from the parts around the transliteration pipeline. The pipeline
/// itself cannot fail.
#[derive(Debug, Error)]
pub enum SlugError {
    #[error("slug `{0}` is already taken")]
    Duplicate(String),

    #[error("unsupported registry format version {0}")]
    UnsupportedVersion(u32),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("registry encoding error: {0}")]
    Encoding(#[from] bincode::Error),

    #[error("invalid json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("could not move registry file into place: {0}")]
    Persist(#[from] tempfile::PersistError),
}
