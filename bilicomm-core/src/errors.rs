//! Error types.
use std::error::Error as StdError;
use std::fmt::{Display, Formatter};

use thiserror::Error;

/// Boxed error returned by http client implementations.
pub type BoxedError = Box<dyn StdError + Send + Sync>;

/// The result type.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// The main error type.
///
/// Every operation that touches the network or decodes a response returns one of these three
/// categories unchanged. Non-success QR login states are *not* errors, see
/// [`PollOutcome`](crate::qrcode::PollOutcome).
#[derive(Debug, Error)]
pub enum Error {
    #[error("network error: {0}")]
    Network(#[from] NetworkError),
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),
    #[error("{0}")]
    Api(#[from] ApiError),
}

impl Error {
    /// The api error carried by this error, if any.
    #[must_use]
    pub const fn as_api(&self) -> Option<&ApiError> {
        match self {
            Self::Api(e) => Some(e),
            _ => None,
        }
    }
}

/// Errors that may occur when decoding a response.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("missing `code` in response envelope")]
    MissingCode,
    #[error("invalid redirect url: {0}")]
    Url(#[from] url::ParseError),
    #[error("malformed protobuf buffer: {0}")]
    Protobuf(String),
    #[error("invalid utf-8 in field {field}: {source}")]
    Utf8 {
        field: u32,
        source: std::string::FromUtf8Error,
    },
}

/// A well-formed response envelope with a non-zero `code`.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Error)]
#[error("api error {code}: {message}")]
pub struct ApiError {
    pub code: i64,
    pub message: String,
}

/// Errors that may occur when the underlying http client fails to complete a round trip.
#[derive(Debug)]
pub struct NetworkError(pub(crate) BoxedError);

impl NetworkError {
    /// Consumes the error and returns the cause reported by the http client.
    #[must_use]
    pub fn into_inner(self) -> BoxedError {
        self.0
    }
}

impl Display for NetworkError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl StdError for NetworkError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        Some(&*self.0)
    }
}
