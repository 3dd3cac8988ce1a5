use std::time::Duration;

use log::trace;
use reqwest::blocking::Client;

use bilicomm_core::errors::BoxedError;
use bilicomm_core::transport::{Method, Request, Requester};

use crate::errors::Result;

/// A blocking [`Requester`](Requester) backed by `reqwest`.
///
/// Cloning is cheap, the connection pool is shared.
#[derive(Debug, Clone, Default)]
pub struct ReqwestClient(Client);

impl From<Client> for ReqwestClient {
    fn from(client: Client) -> Self {
        Self(client)
    }
}

impl ReqwestClient {
    /// Create a client whose requests time out after `timeout`.
    ///
    /// # Errors
    /// Returns an error if the tls backend can't be initialized.
    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        Ok(Self(Client::builder().timeout(timeout).build()?))
    }
}

impl Requester for ReqwestClient {
    fn request(&self, request: Request) -> std::result::Result<Vec<u8>, BoxedError> {
        let builder = match request.method {
            Method::Get => self.0.get(&request.url).query(&request.params),
            Method::Post => self.0.post(&request.url).form(&request.params),
        };
        let builder = request
            .headers
            .iter()
            .fold(builder, |builder, (name, value)| {
                builder.header(name.as_str(), value.as_str())
            });

        let resp = builder.send()?;
        trace!("{} {} -> {}", request.method, request.url, resp.status());
        Ok(resp.bytes()?.to_vec())
    }
}
