//! Configuration types.

/// User agent sent when none is configured.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Log target used for debug records when none is configured.
pub const DEFAULT_LOG_TARGET: &str = "bilicomm::transport";

/// The configuration shared by every call issued through a [`Transport`](crate::transport::Transport).
///
/// # Example
///
/// ```rust
/// use bilicomm_core::config::ClientConfig;
///
/// let config = ClientConfig::new()
///     .user_agent("my-agent/1.0")
///     .debug(true);
/// assert_eq!(config.get_user_agent(), "my-agent/1.0");
/// ```
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct ClientConfig {
    user_agent: Option<String>,
    debug: bool,
    log_target: Option<String>,
}

impl ClientConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    setter_option_into!(
        /// Override the `User-Agent` header.
        user_agent,
        String
    );
    setter_copy!(
        /// Log every request and raw response body at `debug` level.
        debug,
        bool
    );
    setter_option_into!(
        /// Log target of debug records.
        log_target,
        String
    );
}

impl ClientConfig {
    /// The `User-Agent` header value attached to every request.
    #[must_use]
    pub fn get_user_agent(&self) -> &str {
        self.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT)
    }
    /// Whether debug logging is enabled.
    #[must_use]
    pub const fn is_debug(&self) -> bool {
        self.debug
    }
    #[must_use]
    pub fn get_log_target(&self) -> &str {
        self.log_target.as_deref().unwrap_or(DEFAULT_LOG_TARGET)
    }
}
