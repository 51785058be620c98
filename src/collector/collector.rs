//! Result accumulator for a single synthesis run.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::synth::PhoneticToken;

/// Names of the artifacts recorded during a run.
pub mod artifact {
    /// Echo of the decoded request object (oracle runs only).
    pub const INPUT: &str = "input";
    /// Phonetic symbol sequence derived from the text.
    pub const RECITED: &str = "recited";
    /// Rendered audio samples.
    pub const RENDERED: &str = "rendered";
}

/// A captured artifact value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ArtifactValue {
    /// Structured object, such as the request parameters.
    Object(serde_json::Value),
    /// Phonetic symbol sequence.
    Phonetic(Vec<PhoneticToken>),
    /// Unsigned 8-bit audio samples, serialized as an array of integers.
    Samples(Vec<u8>),
}

impl From<serde_json::Value> for ArtifactValue {
    fn from(value: serde_json::Value) -> Self {
        ArtifactValue::Object(value)
    }
}

impl From<Vec<PhoneticToken>> for ArtifactValue {
    fn from(tokens: Vec<PhoneticToken>) -> Self {
        ArtifactValue::Phonetic(tokens)
    }
}

impl From<Vec<u8>> for ArtifactValue {
    fn from(samples: Vec<u8>) -> Self {
        ArtifactValue::Samples(samples)
    }
}

/// Accumulates named artifacts for the current run.
///
/// Serializes as a flat JSON object mapping artifact names to values.
///
/// # Examples
/// ```
/// use synth_oracle::collector::{artifact, Collector};
///
/// let mut collector = Collector::new();
/// collector.record(artifact::RENDERED, vec![128u8, 130]);
/// assert_eq!(serde_json::to_string(&collector).unwrap(), r#"{"rendered":[128,130]}"#);
///
/// collector.reset();
/// assert!(collector.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Collector {
    artifacts: BTreeMap<String, ArtifactValue>,
}

impl Collector {
    /// Create an empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `value` under `name`, replacing any previous value.
    pub fn record(&mut self, name: impl Into<String>, value: impl Into<ArtifactValue>) {
        self.artifacts.insert(name.into(), value.into());
    }

    /// Remove every artifact.
    pub fn reset(&mut self) {
        self.artifacts.clear();
    }

    /// Current contents, for serialization.
    pub fn snapshot(&self) -> &BTreeMap<String, ArtifactValue> {
        &self.artifacts
    }

    /// Look up a single artifact.
    pub fn get(&self, name: &str) -> Option<&ArtifactValue> {
        self.artifacts.get(name)
    }

    pub fn len(&self) -> usize {
        self.artifacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artifacts.is_empty()
    }
}
