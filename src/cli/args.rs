//! CLI argument definitions and parsing.

use clap::Parser;
use thiserror::Error;

/// HTTP test oracle for the speech synthesizer.
///
/// Prints "ready" on stdout once listening, then answers one JSON synthesis
/// request per HTTP exchange.
#[derive(Parser, Debug)]
#[command(name = "synth-oracle")]
#[command(version)]
pub struct OracleArgs {
    /// Positional arguments; the last one is the TCP port to listen on
    #[arg(required = true, num_args = 1..)]
    pub args: Vec<String>,
}

/// Errors that can occur when interpreting the oracle arguments.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ArgsError {
    #[error("Invalid port: {0:?}. Expected an integer between 0 and 65535")]
    InvalidPort(String),

    #[error("Missing port argument")]
    MissingPort,
}

impl OracleArgs {
    /// Parse the final positional argument as the listening port.
    ///
    /// # Examples
    /// ```
    /// use clap::Parser;
    /// use synth_oracle::cli::OracleArgs;
    ///
    /// let args = OracleArgs::parse_from(["synth-oracle", "--", "6100"]);
    /// assert_eq!(args.port(), Ok(6100));
    /// ```
    pub fn port(&self) -> Result<u16, ArgsError> {
        let last = self.args.last().ok_or(ArgsError::MissingPort)?;

        last.trim()
            .parse()
            .map_err(|_| ArgsError::InvalidPort(last.clone()))
    }
}

/// Single-shot synthesizer run printing the captured artifacts as JSON.
#[derive(Parser, Debug)]
#[command(name = "synth-direct")]
#[command(version)]
pub struct DirectArgs {}
