//! HTTP oracle server.
//!
//! Every request, on any path, is one synthesis run. Runs are serialized
//! through a single process-wide [`Collector`] guarded by a fair mutex, so
//! requests are answered in the order their bodies finished arriving.

use std::io::{self, Write};
use std::net::{Ipv4Addr, SocketAddr};
use std::sync::Arc;

use axum::{
    Json, Router,
    body::Bytes,
    extract::{DefaultBodyLimit, State, rejection::BytesRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tokio::net::TcpListener;
use tokio::sync::Mutex;
use tracing::{debug, error, info, warn};

use super::protocol::{ErrorResponse, READY_TOKEN};
use crate::collector::Collector;
use crate::harness::{Harness, HarnessError};
use crate::synth::SynthesizerFactory;

/// Largest request body the oracle buffers. Larger bodies get a 413.
pub const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

/// State shared by all requests.
pub struct AppState<F: SynthesizerFactory> {
    harness: Arc<Harness<F>>,
    collector: Arc<Mutex<Collector>>,
}

impl<F: SynthesizerFactory> AppState<F> {
    /// Create the state with an empty collector.
    pub fn new(harness: Harness<F>) -> Self {
        Self {
            harness: Arc::new(harness),
            collector: Arc::new(Mutex::new(Collector::new())),
        }
    }
}

impl<F: SynthesizerFactory> Clone for AppState<F> {
    fn clone(&self) -> Self {
        Self {
            harness: Arc::clone(&self.harness),
            collector: Arc::clone(&self.collector),
        }
    }
}

/// Errors turned into error responses at the handler boundary.
#[derive(Error, Debug)]
pub enum OracleError {
    #[error(transparent)]
    Harness(#[from] HarnessError),

    #[error("Request body rejected: {0}")]
    Body(#[from] BytesRejection),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl OracleError {
    pub fn status(&self) -> StatusCode {
        match self {
            OracleError::Harness(HarnessError::MalformedRequest(_)) => StatusCode::BAD_REQUEST,
            OracleError::Harness(HarnessError::Synthesis(_)) => StatusCode::UNPROCESSABLE_ENTITY,
            OracleError::Body(rejection) => rejection.status(),
            OracleError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            OracleError::Harness(err) => err.kind(),
            OracleError::Body(_) if self.status() == StatusCode::PAYLOAD_TOO_LARGE => {
                "payload_too_large"
            }
            OracleError::Body(_) => "malformed_request",
            OracleError::Internal(_) => "internal",
        }
    }
}

impl IntoResponse for OracleError {
    fn into_response(self) -> Response {
        let status = self.status();

        match &self {
            OracleError::Internal(_) => error!(kind = self.kind(), error = %self, "request failed"),
            OracleError::Harness(_) | OracleError::Body(_) => {
                warn!(kind = self.kind(), error = %self, "request rejected")
            }
        }

        (status, Json(ErrorResponse::new(self.kind(), self.to_string()))).into_response()
    }
}

/// Build the router. A single fallback handler serves every method and path.
pub fn router<F: SynthesizerFactory + 'static>(state: AppState<F>) -> Router {
    Router::new()
        .fallback(synthesize::<F>)
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .with_state(state)
}

/// Bind the listener on the loopback interface.
pub async fn bind(port: u16) -> io::Result<TcpListener> {
    TcpListener::bind(SocketAddr::from((Ipv4Addr::LOCALHOST, port))).await
}

/// Write the readiness token and flush.
///
/// Call only after [`bind`] has returned, so a driver that waits for the token
/// never races the listener.
pub fn signal_ready<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{READY_TOKEN}")?;
    out.flush()
}

/// Serve requests on an already-bound listener until the process exits.
pub async fn serve<F: SynthesizerFactory + 'static>(
    listener: TcpListener,
    state: AppState<F>,
) -> io::Result<()> {
    info!(addr = %listener.local_addr()?, "oracle serving");
    axum::serve(listener, router(state)).await
}

async fn synthesize<F: SynthesizerFactory + 'static>(
    State(state): State<AppState<F>>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Response, OracleError> {
    let body = body?;

    // Held from reset through serialization of the snapshot.
    let mut collector = Arc::clone(&state.collector).lock_owned().await;
    let harness = Arc::clone(&state.harness);
    debug!(bytes = body.len(), "request body buffered");

    let json = tokio::task::spawn_blocking(move || -> Result<Vec<u8>, OracleError> {
        harness.run_request(&mut collector, &body)?;
        serde_json::to_vec(&*collector).map_err(|e| OracleError::Internal(e.to_string()))
    })
    .await
    .map_err(|e| OracleError::Internal(format!("synthesis task failed: {e}")))??;

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        json,
    )
        .into_response())
}
