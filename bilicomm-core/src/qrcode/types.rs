use serde::{Deserialize, Serialize};
use url::form_urlencoded::byte_serialize;
use url::Url;

use crate::errors::DecodeError;

/// Login url and polling token returned by a generate call.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Deserialize)]
pub struct QrLoginUrl {
    /// Url to be rendered as a QR code.
    pub url: String,
    /// Token to poll with (`qrcode_key` or `oauthKey`).
    #[serde(rename = "qrcode_key", alias = "oauthKey")]
    pub token: String,
}

/// Session cookies extracted from the redirect url of a successful login.
///
/// Each field is `None` when the redirect url doesn't carry it.
#[derive(Debug, Clone, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct CookieAuth {
    #[serde(rename = "DedeUserID")]
    dede_user_id: Option<String>,
    #[serde(rename = "DedeUserID__ckMd5")]
    dede_user_id_ck_md5: Option<String>,
    #[serde(rename = "SESSDATA")]
    sessdata: Option<String>,
    #[serde(rename = "bili_jct")]
    bili_jct: Option<String>,
}

impl CookieAuth {
    /// Extract cookies from the query string of a redirect url.
    ///
    /// Unrelated query keys are ignored. If a key is repeated, the first value wins.
    ///
    /// # Errors
    /// Returns an error if `url` is not a valid absolute url.
    pub fn from_redirect_url(url: &str) -> Result<Self, DecodeError> {
        let url = Url::parse(url)?;
        let mut auth = Self::default();
        for (key, value) in url.query_pairs() {
            let slot = match &*key {
                "DedeUserID" => &mut auth.dede_user_id,
                "DedeUserID__ckMd5" => &mut auth.dede_user_id_ck_md5,
                "SESSDATA" => &mut auth.sessdata,
                "bili_jct" => &mut auth.bili_jct,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into_owned());
            }
        }
        Ok(auth)
    }

    /// `DedeUserID`, the user id.
    #[must_use]
    pub fn dede_user_id(&self) -> Option<&str> {
        self.dede_user_id.as_deref()
    }
    /// `DedeUserID__ckMd5`.
    #[must_use]
    pub fn dede_user_id_ck_md5(&self) -> Option<&str> {
        self.dede_user_id_ck_md5.as_deref()
    }
    /// `SESSDATA`, the session token.
    #[must_use]
    pub fn sessdata(&self) -> Option<&str> {
        self.sessdata.as_deref()
    }
    /// `bili_jct`, the csrf token required by write apis.
    #[must_use]
    pub fn bili_jct(&self) -> Option<&str> {
        self.bili_jct.as_deref()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.dede_user_id.is_none()
            && self.dede_user_id_ck_md5.is_none()
            && self.sessdata.is_none()
            && self.bili_jct.is_none()
    }

    /// Render the present cookies as a `Cookie` header value.
    ///
    /// Values are percent-encoded again, the way bilibili sets them.
    #[must_use]
    pub fn cookie_header(&self) -> String {
        [
            ("DedeUserID", &self.dede_user_id),
            ("DedeUserID__ckMd5", &self.dede_user_id_ck_md5),
            ("SESSDATA", &self.sessdata),
            ("bili_jct", &self.bili_jct),
        ]
        .iter()
        .filter_map(|(name, value)| {
            let value: String = byte_serialize(value.as_deref()?.as_bytes()).collect();
            Some(format!("{}={}", name, value))
        })
        .collect::<Vec<_>>()
        .join("; ")
    }
}

/// Credentials and metadata of a successful login.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct LoginInfo {
    /// The redirect url cookies were extracted from.
    pub url: String,
    /// Empty for the legacy flavour.
    pub refresh_token: String,
    /// Milliseconds since the epoch. Zero for the legacy flavour.
    pub timestamp: i64,
    pub cookie: CookieAuth,
}

/// Raw status of a non-successful poll.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct PollStatus {
    pub code: i64,
    /// Human readable status, may be empty.
    pub message: String,
}

/// The state observed by a single poll.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum PollOutcome {
    /// Confirmed. Polling is over.
    Success(LoginInfo),
    /// Not scanned yet.
    Pending(PollStatus),
    /// Scanned but not confirmed yet.
    Scanned(PollStatus),
    /// The QR code has expired.
    Expired(PollStatus),
    /// The token matches no pending login.
    Mismatched(PollStatus),
    /// A status code this crate doesn't know about.
    Other(PollStatus),
}

impl PollOutcome {
    /// The raw status code (`0` on success).
    #[must_use]
    pub const fn code(&self) -> i64 {
        match self {
            Self::Success(_) => 0,
            Self::Pending(s)
            | Self::Scanned(s)
            | Self::Expired(s)
            | Self::Mismatched(s)
            | Self::Other(s) => s.code,
        }
    }

    /// Whether polling again with the same token is pointless.
    ///
    /// Unknown statuses are considered terminal.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        !matches!(self, Self::Pending(_) | Self::Scanned(_))
    }

    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Consumes the outcome and returns the login info if it's a success.
    #[must_use]
    pub fn into_login(self) -> Option<LoginInfo> {
        match self {
            Self::Success(info) => Some(info),
            _ => None,
        }
    }
}
