use thiserror::Error;

use crate::black::FormatError;

#[derive(Debug, Error)]
pub enum Error {
    #[error("black file format error")]
    Format(#[from] FormatError),
    #[error("IO error")]
    Io(#[from] std::io::Error),
    #[cfg(feature = "json")]
    #[error("error serializing json")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
