//! Run configuration loaded from environment variables.
//!
//! Everything the workflow needs is read once here. Business logic receives
//! the resulting [`Config`] by reference and never touches the environment.

use std::env;

use crate::proxy::ProxyConfig;

pub const DEFAULT_BASE_URL: &str = "https://flzt.top";
pub const DEFAULT_PUSHPLUS_URL: &str = "https://www.pushplus.plus/send";

/// Shown in notifications when the profile has no account name.
pub const UNKNOWN_ACCOUNT: &str = "未知";

/// Which set of credentials the binary expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// `USER_EMAIL` + `USER_PASSWORD`, exchanged for a token via login
    Password,
    /// `USER_TOKEN` + `USER_COOKIE` copied from a browser session
    Session,
}

#[derive(Debug, Clone)]
pub enum Credentials {
    Password { email: String, password: String },
    Session { token: String, cookie: String },
}

impl Credentials {
    /// Label shown on notification cards.
    pub fn account_label(&self) -> &str {
        match self {
            Credentials::Password { email, .. } => email,
            Credentials::Session { .. } => UNKNOWN_ACCOUNT,
        }
    }
}

/// Configuration for one check-in run.
#[derive(Debug, Clone)]
pub struct Config {
    pub credentials: Credentials,
    /// PushPlus token; notifications are skipped when absent
    pub pushplus_token: Option<String>,
    /// Airport panel origin, without trailing slash
    pub base_url: String,
    pub pushplus_url: String,
    pub proxy: Option<ProxyConfig>,
}

impl Config {
    /// Load configuration from the process environment.
    ///
    /// A `.env` file in the working directory is honoured when present.
    pub fn from_env(profile: Profile) -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(profile, |key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// Blank values are treated as unset. Credentials are passed through
    /// untouched; every other value is trimmed.
    pub fn from_lookup<F>(profile: Profile, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let require = |key: &'static str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .ok_or(ConfigError::Missing(key))
        };

        let credentials = match profile {
            Profile::Password => Credentials::Password {
                email: require("USER_EMAIL")?,
                password: require("USER_PASSWORD")?,
            },
            Profile::Session => Credentials::Session {
                token: require("USER_TOKEN")?,
                cookie: require("USER_COOKIE")?,
            },
        };

        let proxy = match get("CHECKIN_PROXY") {
            Some(raw) => Some(ProxyConfig::parse(&raw).ok_or(ConfigError::InvalidProxy(raw))?),
            None => None,
        };

        Ok(Self {
            credentials,
            pushplus_token: get("PUSHPLUS_TOKEN"),
            base_url: get("AIRPORT_BASE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            pushplus_url: get("PUSHPLUS_URL").unwrap_or_else(|| DEFAULT_PUSHPLUS_URL.to_string()),
            proxy,
        })
    }

    pub fn account_label(&self) -> &str {
        self.credentials.account_label()
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid CHECKIN_PROXY value: {0}")]
    InvalidProxy(String),
}
