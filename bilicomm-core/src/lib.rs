//! Core types, codecs and protocols of a bilibili public api client.
//!
//! This crate contains the pieces every endpoint depends on, independent of any http stack:
//!
//! - [`transport`]: the [`Requester`](transport::Requester) trait an http client implements, and
//!   the [`Transport`](transport::Transport) executing single requests through it.
//! - [`envelope`]: decoding of the `{code, message, data}` wrapper around every JSON response.
//! - [`qrcode`]: the QR code login handshake, web and legacy flavours.
//! - [`danmaku`]: the protobuf danmaku segment decoder.
//! - [`client`]: [`CommClient`](client::CommClient) tying them together.
//!
//! If you need a batteries-included client, you may want to look at `bilicomm`.
//!
//! Everything is blocking. Retries, rate limiting and polling cadence are left to the caller.

#![allow(
    clippy::cast_lossless,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss,
    clippy::module_name_repetitions
)]

#[macro_use]
mod utils;

pub mod client;
pub mod config;
pub mod danmaku;
pub mod envelope;
pub mod errors;
pub mod qrcode;
pub mod transport;

#[cfg(test)]
mod test_helpers;
