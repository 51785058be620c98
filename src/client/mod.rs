//! Driver-side access to an oracle.
//!
//! [`OracleProcess`] spawns an oracle binary and waits for its readiness
//! token; [`OracleClient`] sends requests to it over blocking HTTP.

mod error;
mod http;
mod process;

pub use error::ClientError;
pub use http::OracleClient;
pub use process::OracleProcess;
