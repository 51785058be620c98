//! Synthesis run orchestration.
//!
//! This module ties a [`SynthesizerFactory`](crate::synth::SynthesizerFactory)
//! to a [`Collector`](crate::collector::Collector). Both the oracle server and
//! the direct runner go through [`Harness`].

mod run;

pub use run::{DIRECT_TEXT, Harness, HarnessError};
