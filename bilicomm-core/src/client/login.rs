use crate::errors::Result;
use crate::qrcode::{self, PollOutcome, QrLoginUrl};
use crate::transport::{Method, Params, Requester};

use super::{CommClient, BILI_PASSPORT_URL};

const WEB_SOURCE: &str = "main-fe-header";

impl<H: Requester> CommClient<H> {
    /// Request a QR code login url (web flavour).
    ///
    /// # Errors
    /// Returns an error when the request fails.
    pub fn web_qrcode_generate(&self) -> Result<QrLoginUrl> {
        let raw = self.raw(
            BILI_PASSPORT_URL,
            "x/passport-login/web/qrcode/generate",
            Method::Get,
            Params::new().with("source", WEB_SOURCE),
        )?;
        qrcode::decode_generate(&raw)
    }

    /// Poll the state of a web flavour QR code login.
    ///
    /// # Errors
    /// Returns an error when the request fails. Pending, scanned and expired states are not errors.
    pub fn web_qrcode_poll(&self, qrcode_key: &str) -> Result<PollOutcome> {
        let raw = self.raw(
            BILI_PASSPORT_URL,
            "x/passport-login/web/qrcode/poll",
            Method::Get,
            Params::new()
                .with("qrcode_key", qrcode_key)
                .with("source", WEB_SOURCE),
        )?;
        qrcode::decode_web_poll(&raw)
    }

    /// Request a QR code login url (legacy flavour).
    ///
    /// # Errors
    /// Returns an error when the request fails.
    pub fn qrcode_get_login_url(&self) -> Result<QrLoginUrl> {
        let raw = self.raw(
            BILI_PASSPORT_URL,
            "qrcode/getLoginUrl",
            Method::Get,
            Params::new(),
        )?;
        qrcode::decode_generate(&raw)
    }

    /// Poll the state of a legacy flavour QR code login.
    ///
    /// # Errors
    /// Returns an error when the request fails. Pending, scanned and mismatched states are not errors.
    pub fn qrcode_get_login_info(&self, oauth_key: &str) -> Result<PollOutcome> {
        let raw = self.raw(
            BILI_PASSPORT_URL,
            "qrcode/getLoginInfo",
            Method::Post,
            Params::new().with("oauthKey", oauth_key),
        )?;
        qrcode::decode_legacy_poll(&raw)
    }
}
