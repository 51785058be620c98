//! Wire types for the oracle request/response exchange.

use serde::{Deserialize, Serialize};

use crate::synth::PhoneticToken;

/// Line written to stdout once the listener is bound.
pub const READY_TOKEN: &str = "ready";

/// Successful response body.
///
/// `input` is absent in direct-runner output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SynthesisResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input: Option<serde_json::Value>,
    pub recited: Vec<PhoneticToken>,
    pub rendered: Vec<u8>,
}

/// Error response body: `{"error": {"kind": ..., "message": ...}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub kind: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(kind: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: ErrorDetail {
                kind: kind.into(),
                message: message.into(),
            },
        }
    }
}
