//! Blocking HTTP client for a running oracle.

use reqwest::header::CONTENT_TYPE;

use super::error::ClientError;
use crate::oracle::{ErrorResponse, SynthesisResult};
use crate::synth::SynthesisRequest;

/// Sends synthesis requests to an oracle and decodes its results.
pub struct OracleClient {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl OracleClient {
    /// Create a client for the oracle at `host:port`.
    pub fn new(host: &str, port: u16) -> Self {
        Self {
            base_url: format!("http://{host}:{port}"),
            client: reqwest::blocking::Client::new(),
        }
    }

    /// Get the base URL for this oracle.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Run one synthesis request.
    pub fn synthesize(&self, request: &SynthesisRequest) -> Result<SynthesisResult, ClientError> {
        let body = serde_json::to_string(request)?;
        self.post_raw(body)
    }

    /// Post an arbitrary body, bypassing request serialization.
    pub fn post_raw(&self, body: impl Into<String>) -> Result<SynthesisResult, ClientError> {
        let url = format!("{}/", self.base_url);

        let response = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .body(body.into())
            .send()
            .map_err(|e| ClientError::ConnectionFailed(e.to_string()))?;

        let status = response.status();

        if !status.is_success() {
            let rejection: ErrorResponse = response
                .json()
                .map_err(|e| ClientError::InvalidResponse(format!("status {status}: {e}")))?;

            return Err(ClientError::Rejected {
                status: status.as_u16(),
                kind: rejection.error.kind,
                message: rejection.error.message,
            });
        }

        response
            .json()
            .map_err(|e| ClientError::InvalidResponse(e.to_string()))
    }
}
