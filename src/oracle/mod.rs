//! Network-facing test oracle.
//!
//! Exposes the [`Harness`](crate::harness::Harness) over plain HTTP: the
//! request body is a JSON [`SynthesisRequest`](crate::synth::SynthesisRequest),
//! the response body is the collector snapshot.

mod protocol;
mod server;

pub use protocol::{ErrorDetail, ErrorResponse, READY_TOKEN, SynthesisResult};
pub use server::{AppState, MAX_BODY_BYTES, OracleError, bind, router, serve, signal_ready};
