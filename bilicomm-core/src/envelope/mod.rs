//! Response envelope codec.
//!
//! Every JSON api wraps its payload in `{"code": <int>, "message"|"msg": <string>, "data": <any>}`.
//! This module separates "did the call succeed" from "what is the payload": a non-zero `code`
//! becomes an [`ApiError`](ApiError), a zero `code` yields the untouched bytes of `data` as a
//! [`Payload`](Payload) for endpoint specific decoding.
use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde_json::value::RawValue;

use crate::errors::{ApiError, DecodeError, Result};


/// What to hand downstream when `data` is `null` or absent in a successful envelope.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub enum NullData {
    /// Pass the literal `null` through.
    #[default]
    Keep,
    /// Substitute `[]`, for endpoints returning a collection.
    EmptyArray,
    /// Substitute `{}`, for endpoints returning an object whose fields all have defaults.
    EmptyObject,
}

impl NullData {
    const fn token(self) -> &'static [u8] {
        match self {
            Self::Keep => b"null",
            Self::EmptyArray => b"[]",
            Self::EmptyObject => b"{}",
        }
    }
}

/// Per call decoding options.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct DecodeOptions {
    null_data: NullData,
    require_code: bool,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl DecodeOptions {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            null_data: NullData::Keep,
            require_code: true,
        }
    }
    /// Shortcut for endpoints returning a collection.
    #[must_use]
    pub const fn collection() -> Self {
        Self::new().null_data(NullData::EmptyArray)
    }
    #[must_use]
    pub const fn null_data(mut self, null_data: NullData) -> Self {
        self.null_data = null_data;
        self
    }
    /// Read a missing `code` as success.
    ///
    /// Some legacy passport apis answer with `{"status": false, "data": ...}` and no `code` at all.
    #[must_use]
    pub const fn allow_missing_code(mut self) -> Self {
        self.require_code = false;
        self
    }
    #[must_use]
    pub const fn get_null_data(&self) -> NullData {
        self.null_data
    }
}

// Must stay a map: only JSON objects are envelopes.
type RawEnvelope = HashMap<String, Box<RawValue>>;

fn take_field<T: DeserializeOwned>(
    envelope: &mut RawEnvelope,
    name: &str,
) -> Result<Option<T>, DecodeError> {
    Ok(match envelope.remove(name) {
        Some(raw) => serde_json::from_str::<Option<T>>(raw.get())?,
        None => None,
    })
}

/// A decoded response envelope.
#[derive(Debug, Clone)]
pub struct Envelope {
    code: i64,
    message: String,
    data: Option<Box<RawValue>>,
}

impl Envelope {
    /// Parse the envelope of a raw response body.
    ///
    /// # Errors
    /// Returns an error if `raw` is not a JSON object, or if `code` is missing (unless allowed by
    /// `options`) or not an integer.
    pub fn parse(raw: &[u8], options: &DecodeOptions) -> Result<Self, DecodeError> {
        let mut envelope: RawEnvelope = serde_json::from_slice(raw)?;
        let code = match take_field::<i64>(&mut envelope, "code")? {
            Some(code) => code,
            None if !options.require_code => 0,
            None => return Err(DecodeError::MissingCode),
        };
        // `message` and `msg` are used interchangeably, sometimes both at once.
        let message = take_field::<String>(&mut envelope, "message")?
            .filter(|message| !message.is_empty())
            .or(take_field::<String>(&mut envelope, "msg")?)
            .unwrap_or_default();
        let data = envelope.remove("data").filter(|data| data.get() != "null");
        Ok(Self {
            code,
            message,
            data,
        })
    }

    #[must_use]
    pub const fn code(&self) -> i64 {
        self.code
    }
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.code == 0
    }

    /// Consumes the envelope and returns the payload.
    ///
    /// # Errors
    /// Returns an [`ApiError`](ApiError) if `code` is non-zero. `data` is dropped unread.
    pub fn into_payload(self, null_data: NullData) -> Result<Payload, ApiError> {
        if !self.is_success() {
            return Err(ApiError {
                code: self.code,
                message: self.message,
            });
        }
        let bytes = match self.data {
            Some(data) => data.get().as_bytes().to_vec(),
            None => null_data.token().to_vec(),
        };
        Ok(Payload(bytes))
    }
}

/// Decodes a raw response body into its payload.
///
/// # Errors
/// Returns [`Error::Decode`](crate::errors::Error::Decode) on a malformed envelope and
/// [`Error::Api`](crate::errors::Error::Api) on a non-zero `code`.
pub fn decode(raw: &[u8], options: &DecodeOptions) -> Result<Payload> {
    Ok(Envelope::parse(raw, options)?.into_payload(options.null_data)?)
}

/// The `data` field of a successful envelope, exactly as it appeared in the response.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Payload(Vec<u8>);

impl Payload {
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.0
    }
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }
    /// Whether the payload is the literal `null`.
    #[must_use]
    pub fn is_null(&self) -> bool {
        self.0 == b"null"
    }
    /// Try to parse the payload by json.
    ///
    /// # Errors
    /// It may fail if the model is incorrect.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, DecodeError> {
        serde_json::from_slice(&self.0).map_err(DecodeError::Json)
    }
}
