//! Submission endpoint client.
//!
//! DESIGN
//! ======
//! `InquirySink` is the seam between the controller and the network. The
//! production `HttpSink` is a thin reqwest wrapper: one `POST` with the
//! inquiry as JSON, success decided by status class alone. The response body
//! is never read.
//!
//! ERROR HANDLING
//! ==============
//! Every failure mode (non-2xx, timeout, transport, request build) maps to a
//! `SubmissionError`, which the controller turns into one generic
//! notification. Nothing here retries.

#[cfg(test)]
#[path = "submit_test.rs"]
mod tests;

use std::time::Duration;

use reqwest::Url;
use tracing::debug;

use crate::config::{ConfigError, ContactConfig, SubmitTimeouts};
use crate::inquiry::ContactInquiry;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmissionError {
    /// The endpoint answered with a non-2xx status.
    #[error("endpoint rejected inquiry: status {status}")]
    Rejected { status: u16 },

    /// No response within the configured request timeout.
    #[error("request timed out")]
    Timeout,

    /// Connection, TLS, or protocol failure before a status arrived.
    #[error("request failed: {0}")]
    Transport(String),

    /// Any other fault while preparing or sending the request.
    #[error("unexpected failure: {0}")]
    Internal(String),
}

impl From<reqwest::Error> for SubmissionError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            Self::Timeout
        } else if e.is_builder() || e.is_body() {
            Self::Internal(e.to_string())
        } else {
            Self::Transport(e.to_string())
        }
    }
}

// =============================================================================
// SINK TRAIT
// =============================================================================

/// Destination for a validated inquiry. Enables mocking in tests.
#[async_trait::async_trait]
pub trait InquirySink: Send + Sync {
    /// Deliver one inquiry.
    ///
    /// # Errors
    ///
    /// Returns a [`SubmissionError`] if the endpoint does not accept it.
    async fn submit(&self, inquiry: &ContactInquiry) -> Result<(), SubmissionError>;
}

// =============================================================================
// HTTP SINK
// =============================================================================

pub struct HttpSink {
    http: reqwest::Client,
    endpoint: Url,
}

impl HttpSink {
    /// Build a sink posting to `endpoint`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn new(endpoint: Url, timeouts: SubmitTimeouts) -> Result<Self, ConfigError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeouts.request_secs))
            .connect_timeout(Duration::from_secs(timeouts.connect_secs))
            .build()
            .map_err(|e| ConfigError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, endpoint })
    }

    /// Build a sink from parsed config.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn from_config(config: &ContactConfig) -> Result<Self, ConfigError> {
        Self::new(config.endpoint.clone(), config.timeouts)
    }

    #[must_use]
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait::async_trait]
impl InquirySink for HttpSink {
    async fn submit(&self, inquiry: &ContactInquiry) -> Result<(), SubmissionError> {
        let response = self
            .http
            .post(self.endpoint.clone())
            .json(inquiry)
            .send()
            .await?;

        let status = response.status();
        debug!(%status, endpoint = %self.endpoint, "submission endpoint responded");

        if status.is_success() {
            Ok(())
        } else {
            Err(SubmissionError::Rejected { status: status.as_u16() })
        }
    }
}
