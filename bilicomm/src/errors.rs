//! Error types.
use thiserror::Error;

use crate::core::errors::Error as ClientError;

/// The result type.
pub type Result<T> = std::result::Result<T, BilicommError>;

/// The main error type.
#[derive(Debug, Error)]
pub enum BilicommError {
    #[error("client error: {0}")]
    Client(#[from] ClientError),
    #[error("http client error: {0}")]
    Http(#[from] reqwest::Error),
}
