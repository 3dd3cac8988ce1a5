//! Typed client for bilibili's public apis.
//!
//! [`CommClient`](CommClient) is generic over the injected http client. Endpoint methods are thin
//! wrappers: they build [`Params`](crate::transport::Params), execute one request and decode the
//! envelope (or a protobuf body) into typed results.
use serde::de::DeserializeOwned;

pub use types::{Dimension, VideoPage};

use crate::config::ClientConfig;
use crate::envelope::{self, DecodeOptions, Payload};
use crate::errors::Result;
use crate::transport::{Method, Params, Requester, Transport};

mod login;
mod types;
mod video;


/// Base url of the main api host.
pub const BILI_API_URL: &str = "https://api.bilibili.com/";
/// Base url of the passport (login) host.
pub const BILI_PASSPORT_URL: &str = "https://passport.bilibili.com/";

/// Client for apis that don't require a logged in session.
#[derive(Debug, Clone)]
pub struct CommClient<H> {
    transport: Transport<H>,
}

impl<H> CommClient<H> {
    #[must_use]
    pub const fn new(http: H, config: ClientConfig) -> Self {
        Self {
            transport: Transport::new(http, config),
        }
    }
    #[must_use]
    pub const fn transport(&self) -> &Transport<H> {
        &self.transport
    }
    /// Replace the underlying http client, e.g. to switch proxies.
    pub fn set_http(&mut self, http: H) {
        self.transport.set_http(http);
    }
    pub fn set_user_agent(&mut self, user_agent: impl Into<String>) {
        self.transport.set_user_agent(user_agent);
    }
}

impl<H: Requester> CommClient<H> {
    /// Execute a request and return the raw response body.
    ///
    /// `base` must end with `/`.
    ///
    /// # Errors
    /// Returns an error when the http client fails.
    pub fn raw(&self, base: &str, path: &str, method: Method, params: Params) -> Result<Vec<u8>> {
        self.transport.execute(base, path, method, params)
    }

    /// Execute a request and decode the response envelope.
    ///
    /// # Errors
    /// Returns an error when the http client fails, the envelope is malformed or reports a failure.
    pub fn raw_parse(
        &self,
        base: &str,
        path: &str,
        method: Method,
        params: Params,
        options: &DecodeOptions,
    ) -> Result<Payload> {
        let raw = self.raw(base, path, method, params)?;
        envelope::decode(&raw, options)
    }

    /// Execute a request and decode the payload into `T`.
    ///
    /// # Errors
    /// Same as [`raw_parse`](Self::raw_parse), plus payloads not matching `T`.
    pub fn fetch<T: DeserializeOwned>(
        &self,
        base: &str,
        path: &str,
        method: Method,
        params: Params,
        options: &DecodeOptions,
    ) -> Result<T> {
        Ok(self.raw_parse(base, path, method, params, options)?.json()?)
    }

    /// Server side unix timestamp.
    ///
    /// # Errors
    /// Returns an error when the request fails.
    pub fn get_unix_now(&self) -> Result<i64> {
        #[derive(serde::Deserialize)]
        struct Now {
            now: i64,
        }

        let now: Now = self.fetch(
            BILI_API_URL,
            "x/report/click/now",
            Method::Get,
            Params::new(),
            &DecodeOptions::new(),
        )?;
        Ok(now.now)
    }
}
