//! Synthesizer parameter, request and output types.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors reported by a synthesizer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SynthError {
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Unsupported character {0:?} at index {1}")]
    UnsupportedCharacter(char, usize),

    #[error("Synthesizer error: {0}")]
    Engine(String),
}

/// Tuning parameters used to construct a synthesizer instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SynthesisParams {
    /// Treat the text as already-phonetic input.
    pub phonetic: bool,
    pub sing_mode: bool,
    pub pitch: u8,
    pub speed: u8,
    pub mouth: u8,
    pub throat: u8,
}

impl Default for SynthesisParams {
    fn default() -> Self {
        Self {
            phonetic: false,
            sing_mode: false,
            pitch: 64,
            speed: 72,
            mouth: 128,
            throat: 128,
        }
    }
}

/// A single request to the oracle: text plus optional tuning parameters.
///
/// Missing tuning fields fall back to [`SynthesisParams::default`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SynthesisRequest {
    pub text: String,
    #[serde(flatten)]
    pub params: SynthesisParams,
}

impl SynthesisRequest {
    /// Create a request with default parameters.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            params: SynthesisParams::default(),
        }
    }

    /// Replace all tuning parameters.
    pub fn with_params(mut self, params: SynthesisParams) -> Self {
        self.params = params;
        self
    }

    /// Set the pitch.
    pub fn with_pitch(mut self, pitch: u8) -> Self {
        self.params.pitch = pitch;
        self
    }

    /// Set the speed.
    pub fn with_speed(mut self, speed: u8) -> Self {
        self.params.speed = speed;
        self
    }

    /// Enable or disable sing mode.
    pub fn with_sing_mode(mut self, sing_mode: bool) -> Self {
        self.params.sing_mode = sing_mode;
        self
    }
}

/// One symbol of the phonetic sequence, either a numeric code or a short string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PhoneticToken {
    Code(u8),
    Symbol(String),
}

impl PhoneticToken {
    /// Build a symbol token.
    pub fn symbol(symbol: impl Into<String>) -> Self {
        PhoneticToken::Symbol(symbol.into())
    }

    pub fn as_symbol(&self) -> Option<&str> {
        match self {
            PhoneticToken::Symbol(symbol) => Some(symbol),
            PhoneticToken::Code(_) => None,
        }
    }
}
