//! synth-oracle: capture harness and HTTP test oracle for a speech synthesizer.
//!
//! A run drives a synthesizer over one text, capturing the phonetic sequence
//! (`recited`) and audio samples (`rendered`) into a collector. The oracle
//! server exposes runs over HTTP so external test drivers can compare results
//! across implementations; the direct runner performs a single fixed run.

pub mod cli;
pub mod client;
pub mod collector;
pub mod harness;
pub mod oracle;
pub mod synth;
