//! QR code login protocol.
//!
//! The login is a two step handshake: `generate` returns a login url (rendered as a QR code by the
//! caller) and a token, then `poll` is called with the token until the user has scanned and
//! confirmed the code on their phone. A successful poll carries a redirect url whose query string
//! holds the session cookies.
//!
//! Two flavours exist. The *web* one (`qrcode_key`) reports its status inside `data`; the *legacy*
//! one (`oauthKey`) answers a pending poll with a bare negative integer as `data`.
//!
//! Polling holds no local state: the token is all that is needed, so polls can be repeated freely.
//! Cadence and giving up are the caller's business.
use serde::Deserialize;

pub use types::{CookieAuth, LoginInfo, PollOutcome, PollStatus, QrLoginUrl};

use crate::envelope::{DecodeOptions, Envelope, NullData};
use crate::errors::Result;

mod types;


/// Known status codes.
pub mod status {
    /// Web flavour: logged in.
    pub const WEB_SUCCESS: i64 = 0;
    /// Web flavour: the QR code has expired.
    pub const WEB_EXPIRED: i64 = 86038;
    /// Web flavour: scanned but not confirmed yet.
    pub const WEB_SCANNED: i64 = 86090;
    /// Web flavour: not scanned yet.
    pub const WEB_NOT_SCANNED: i64 = 86101;

    /// Legacy flavour: the key matches no pending login (unknown or expired).
    pub const LEGACY_MISMATCHED: i64 = -2;
    /// Legacy flavour: not scanned yet.
    pub const LEGACY_NOT_SCANNED: i64 = -4;
    /// Legacy flavour: scanned but not confirmed yet.
    pub const LEGACY_SCANNED: i64 = -5;
}

/// Decode the response of a generate call (either flavour).
///
/// # Errors
/// Returns an error if the envelope is malformed, reports a failure, or lacks the url or token.
pub fn decode_generate(raw: &[u8]) -> Result<QrLoginUrl> {
    let payload = crate::envelope::decode(raw, &DecodeOptions::new())?;
    Ok(payload.json()?)
}

#[derive(Deserialize)]
struct WebPollData {
    #[serde(default)]
    url: String,
    #[serde(default)]
    refresh_token: String,
    #[serde(default)]
    timestamp: i64,
    code: i64,
    #[serde(default)]
    message: String,
}

/// Decode the response of a web flavour poll.
///
/// # Errors
/// Returns an error if the envelope is malformed or reports a failure, or if a successful poll
/// carries a malformed redirect url.
pub fn decode_web_poll(raw: &[u8]) -> Result<PollOutcome> {
    let data: WebPollData = crate::envelope::decode(raw, &DecodeOptions::new())?.json()?;
    if data.code == status::WEB_SUCCESS {
        let cookie = CookieAuth::from_redirect_url(&data.url)?;
        return Ok(PollOutcome::Success(LoginInfo {
            url: data.url,
            refresh_token: data.refresh_token,
            timestamp: data.timestamp,
            cookie,
        }));
    }

    let poll_status = PollStatus {
        code: data.code,
        message: data.message,
    };
    Ok(match poll_status.code {
        status::WEB_NOT_SCANNED => PollOutcome::Pending(poll_status),
        status::WEB_SCANNED => PollOutcome::Scanned(poll_status),
        status::WEB_EXPIRED => PollOutcome::Expired(poll_status),
        _ => PollOutcome::Other(poll_status),
    })
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LegacyPollData {
    Status(i64),
    Login {
        url: String,
        #[serde(default)]
        refresh_token: String,
        #[serde(default)]
        timestamp: i64,
    },
}

/// Decode the response of a legacy flavour poll.
///
/// # Errors
/// Returns an error if the envelope is malformed or reports a failure, if `data` is neither a
/// status integer nor a login object, or if the redirect url is malformed.
pub fn decode_legacy_poll(raw: &[u8]) -> Result<PollOutcome> {
    let envelope = Envelope::parse(raw, &DecodeOptions::new().allow_missing_code())?;
    let message = envelope.message().to_string();
    let payload = envelope.into_payload(NullData::Keep)?;

    match payload.json::<LegacyPollData>()? {
        LegacyPollData::Status(code) => {
            let poll_status = PollStatus { code, message };
            Ok(match code {
                status::LEGACY_MISMATCHED => PollOutcome::Mismatched(poll_status),
                status::LEGACY_NOT_SCANNED => PollOutcome::Pending(poll_status),
                status::LEGACY_SCANNED => PollOutcome::Scanned(poll_status),
                _ => PollOutcome::Other(poll_status),
            })
        }
        LegacyPollData::Login {
            url,
            refresh_token,
            timestamp,
        } => {
            let cookie = CookieAuth::from_redirect_url(&url)?;
            Ok(PollOutcome::Success(LoginInfo {
                url,
                refresh_token,
                timestamp,
                cookie,
            }))
        }
    }
}
