//! HTTP transport.
//!
//! A [`Transport`](Transport) executes exactly one request through an injected [`Requester`](Requester)
//! and hands back the raw response body. It never retries, never interprets the body and holds no
//! per-call state, so it can be shared between threads whenever the requester can.
//!
//! Concrete requesters live in downstream crates (e.g. `bilicomm` ships one backed by `reqwest`).
use std::collections::btree_map::{BTreeMap, Iter};
use std::fmt::{Display, Formatter};
use std::mem;
use std::sync::Arc;

use log::debug;
use serde::Serialize;

use crate::config::ClientConfig;
use crate::errors::{BoxedError, NetworkError, Result};


/// An HTTP client able to perform a single round trip.
///
/// Implementations must not retry. Timeouts, proxies and TLS are the implementation's business.
pub trait Requester {
    /// Performs the request and returns the raw response body.
    ///
    /// # Errors
    /// Returns an error when the round trip can't be completed.
    fn request(&self, request: Request) -> Result<Vec<u8>, BoxedError>;
}

impl<T: Requester + ?Sized> Requester for &T {
    fn request(&self, request: Request) -> Result<Vec<u8>, BoxedError> {
        (**self).request(request)
    }
}

impl<T: Requester + ?Sized> Requester for Box<T> {
    fn request(&self, request: Request) -> Result<Vec<u8>, BoxedError> {
        (**self).request(request)
    }
}

impl<T: Requester + ?Sized> Requester for Arc<T> {
    fn request(&self, request: Request) -> Result<Vec<u8>, BoxedError> {
        (**self).request(request)
    }
}

/// HTTP methods used by bilibili apis.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Method {
    Get,
    Post,
}

impl Display for Method {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Get => "GET",
            Self::Post => "POST",
        })
    }
}

/// Request parameters.
///
/// Sent as the query string of a `GET` request or the form-encoded body of a `POST` request.
/// Only inserted names are sent; an explicitly inserted empty string is sent as is.
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Params(BTreeMap<String, String>);

impl Params {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
    /// Adds a parameter, builder style.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.insert(name, value);
        self
    }
    /// Adds a parameter, replacing any previous value of the same name.
    pub fn insert(&mut self, name: impl Into<String>, value: impl ToString) {
        self.0.insert(name.into(), value.to_string());
    }
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn iter(&self) -> Iter<'_, String, String> {
        self.0.iter()
    }
}

impl<K: Into<String>, V: ToString> FromIterator<(K, V)> for Params {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut params = Self::new();
        for (name, value) in iter {
            params.insert(name, value);
        }
        params
    }
}

impl<'a> IntoIterator for &'a Params {
    type Item = (&'a String, &'a String);
    type IntoIter = Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A fully composed request handed to a [`Requester`](Requester).
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Request {
    pub method: Method,
    /// Absolute url, without query string.
    pub url: String,
    pub params: Params,
    pub headers: Vec<(String, String)>,
}

impl Request {
    /// Value of the first header with the given name (case insensitive).
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Joins `base` and `path` with exactly one separator between them.
#[must_use]
pub fn join_url(base: &str, path: &str) -> String {
    if path.is_empty() {
        return base.to_string();
    }
    match (base.ends_with('/'), path.starts_with('/')) {
        (true, true) => format!("{}{}", base, &path[1..]),
        (false, false) => format!("{}/{}", base, path),
        _ => format!("{}{}", base, path),
    }
}

/// Executes single requests through an injected http client.
#[derive(Debug, Clone)]
pub struct Transport<H> {
    http: H,
    config: ClientConfig,
}

impl<H> Transport<H> {
    #[must_use]
    pub const fn new(http: H, config: ClientConfig) -> Self {
        Self { http, config }
    }
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }
    #[must_use]
    pub const fn http(&self) -> &H {
        &self.http
    }
    /// Replace the underlying http client, e.g. to switch proxies.
    pub fn set_http(&mut self, http: H) {
        self.http = http;
    }
    pub fn set_user_agent(&mut self, user_agent: impl Into<String>) {
        self.config = mem::take(&mut self.config).user_agent(user_agent);
    }
}

impl<H: Requester> Transport<H> {
    /// Execute a request and return the raw response body.
    ///
    /// `base` is expected to end with `/`; `path` is appended verbatim.
    ///
    /// # Errors
    /// Returns [`Error::Network`](crate::errors::Error::Network) when the http client fails.
    pub fn execute(&self, base: &str, path: &str, method: Method, params: Params) -> Result<Vec<u8>> {
        let request = Request {
            method,
            url: join_url(base, path),
            params,
            headers: vec![(
                String::from("User-Agent"),
                self.config.get_user_agent().to_string(),
            )],
        };

        let debug_mode = self.config.is_debug();
        let target = self.config.get_log_target();
        if debug_mode {
            debug!(target: target, "{} {} {:?}", request.method, request.url, request.params);
        }

        let body = self.http.request(request).map_err(NetworkError)?;

        if debug_mode {
            debug!(
                target: target,
                "response ({} bytes): {}",
                body.len(),
                String::from_utf8_lossy(&body)
            );
        }
        Ok(body)
    }
}
