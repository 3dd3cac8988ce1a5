//! A simple blocking client for bilibili public apis.
//!
//! ## Features
//!
//! - Uniform decoding of the `{code, message, data}` response envelope, with api failures
//!   surfaced as typed errors.
//! - QR code login (web and legacy flavours) yielding session cookies.
//! - Protobuf danmaku segment decoding.
//! - Pluggable http client: anything implementing [`Requester`](core::transport::Requester).
//!
//! ## Example
//!
//! ```no_run
//! use std::thread::sleep;
//! use std::time::Duration;
//!
//! use bilicomm::core::qrcode::PollOutcome;
//! use bilicomm::{ClientConfig, CommClient, ReqwestClient};
//!
//! # fn main() -> bilicomm::Result<()> {
//! let client = CommClient::new(ReqwestClient::default(), ClientConfig::new());
//! let qrcode = client.web_qrcode_generate()?;
//! println!("scan me: {}", qrcode.url);
//!
//! loop {
//!     match client.web_qrcode_poll(&qrcode.token)? {
//!         PollOutcome::Success(login) => {
//!             println!("cookie: {}", login.cookie.cookie_header());
//!             break;
//!         }
//!         outcome if outcome.is_terminal() => break,
//!         _ => sleep(Duration::from_secs(2)),
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Crate Features
//!
//! * `native-tls`(default): TLS implemented via [native-tls](https://crates.io/crates/native-tls).
//! * `rustls-tls-webpki-roots`: TLS implemented via [rustls](https://crates.io/crates/rustls) with
//! the certificates [webpki-roots](https://github.com/rustls/webpki-roots) provides.
//! * `rustls-tls-native-roots`: TLS implemented via [rustls](https://crates.io/crates/rustls) with
//! native system certificates.

#![allow(clippy::module_name_repetitions)]

pub use bilicomm_core as core;

#[doc(inline)]
pub use crate::core::config::ClientConfig;
#[doc(inline)]
pub use crate::errors::{BilicommError, Result};
#[doc(inline)]
pub use crate::http::ReqwestClient;

pub mod errors;
pub mod http;

/// [`CommClient`](core::client::CommClient) backed by `reqwest`.
pub type CommClient<H = ReqwestClient> = core::client::CommClient<H>;
