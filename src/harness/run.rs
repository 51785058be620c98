//! Run pipeline: reset, synthesize, record.

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::collector::{Collector, artifact};
use crate::synth::{SynthError, SynthesisParams, SynthesisRequest, SynthesizerFactory};

/// Text used by the direct runner.
pub const DIRECT_TEXT: &str = "FC ";

/// Errors that can occur during a run.
#[derive(Error, Debug)]
pub enum HarnessError {
    #[error("Malformed request: {0}")]
    MalformedRequest(String),

    #[error("Synthesis failed: {0}")]
    Synthesis(#[from] SynthError),
}

impl HarnessError {
    /// Stable machine-readable error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            HarnessError::MalformedRequest(_) => "malformed_request",
            HarnessError::Synthesis(_) => "synthesis_failed",
        }
    }
}

/// Drives a synthesizer and captures its artifacts into a [`Collector`].
pub struct Harness<F: SynthesizerFactory> {
    factory: F,
}

impl<F: SynthesizerFactory> Harness<F> {
    /// Create a harness around a synthesizer factory.
    pub fn new(factory: F) -> Self {
        Self { factory }
    }

    /// Synthesize `text` and record `recited` and `rendered`.
    ///
    /// The collector is reset first, so it only ever holds this run's artifacts.
    pub fn run(
        &self,
        collector: &mut Collector,
        text: &str,
        params: &SynthesisParams,
    ) -> Result<(), HarnessError> {
        collector.reset();

        let synthesizer = self.factory.create(params)?;

        let recited = synthesizer.recite(text)?;
        let recited_len = recited.len();
        collector.record(artifact::RECITED, recited);

        let rendered = synthesizer.render(text)?;
        let rendered_len = rendered.len();
        collector.record(artifact::RENDERED, rendered);

        debug!(recited = recited_len, rendered = rendered_len, "run complete");
        Ok(())
    }

    /// Decode a request body and run it, echoing the decoded object as `input`.
    pub fn run_request(&self, collector: &mut Collector, body: &[u8]) -> Result<(), HarnessError> {
        let input: serde_json::Value = serde_json::from_slice(body)
            .map_err(|e| HarnessError::MalformedRequest(e.to_string()))?;

        if !input.is_object() {
            return Err(HarnessError::MalformedRequest(
                "request body must be a JSON object".to_string(),
            ));
        }

        let request = SynthesisRequest::deserialize(&input)
            .map_err(|e| HarnessError::MalformedRequest(e.to_string()))?;

        self.run(collector, &request.text, &request.params)?;
        collector.record(artifact::INPUT, input);

        Ok(())
    }

    /// The fixed single-shot run: [`DIRECT_TEXT`] with default parameters.
    pub fn run_direct(&self, collector: &mut Collector) -> Result<(), HarnessError> {
        self.run(collector, DIRECT_TEXT, &SynthesisParams::default())
    }
}
