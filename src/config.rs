//! Contact form configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

use reqwest::Url;

pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:3000/api/contact";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid endpoint URL '{0}'")]
    InvalidEndpoint(String),
    #[error("invalid value for {var}: '{value}'")]
    InvalidValue { var: &'static str, value: String },
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

impl Default for SubmitTimeouts {
    fn default() -> Self {
        Self { request_secs: DEFAULT_REQUEST_TIMEOUT_SECS, connect_secs: DEFAULT_CONNECT_TIMEOUT_SECS }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactConfig {
    pub endpoint: Url,
    pub timeouts: SubmitTimeouts,
}

impl ContactConfig {
    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `CONTACT_ENDPOINT`: submission URL, default [`DEFAULT_ENDPOINT`]
    /// - `CONTACT_REQUEST_TIMEOUT_SECS`: default 30
    /// - `CONTACT_CONNECT_TIMEOUT_SECS`: default 10
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint is not an http(s) URL or a timeout is
    /// not a positive integer.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ContactConfig::from_env`] but reading through `lookup`.
    ///
    /// # Errors
    ///
    /// See [`ContactConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let endpoint = parse_endpoint(lookup("CONTACT_ENDPOINT").as_deref().unwrap_or(DEFAULT_ENDPOINT))?;
        let timeouts = SubmitTimeouts {
            request_secs: parse_secs(
                "CONTACT_REQUEST_TIMEOUT_SECS",
                lookup("CONTACT_REQUEST_TIMEOUT_SECS"),
                DEFAULT_REQUEST_TIMEOUT_SECS,
            )?,
            connect_secs: parse_secs(
                "CONTACT_CONNECT_TIMEOUT_SECS",
                lookup("CONTACT_CONNECT_TIMEOUT_SECS"),
                DEFAULT_CONNECT_TIMEOUT_SECS,
            )?,
        };
        Ok(Self { endpoint, timeouts })
    }
}

/// Parse an endpoint URL, accepting only `http` and `https`.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidEndpoint`] for anything else.
pub fn parse_endpoint(raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw.trim()).map_err(|_| ConfigError::InvalidEndpoint(raw.to_owned()))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        _ => Err(ConfigError::InvalidEndpoint(raw.to_owned())),
    }
}

fn parse_secs(var: &'static str, raw: Option<String>, default: u64) -> Result<u64, ConfigError> {
    let Some(raw) = raw else {
        return Ok(default);
    };
    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(secs),
        _ => Err(ConfigError::InvalidValue { var, value: raw }),
    }
}
