//! Oracle child-process supervision.

use std::io::{BufRead, BufReader};
use std::path::Path;
use std::process::{Child, Command, Stdio};
use std::sync::mpsc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use tracing::{debug, warn};

use super::error::ClientError;
use super::http::OracleClient;
use crate::oracle::READY_TOKEN;

/// A spawned oracle that has signalled readiness.
///
/// The child is killed and reaped on drop.
pub struct OracleProcess {
    child: Child,
    port: u16,
    stdout_handle: Option<JoinHandle<()>>,
}

impl OracleProcess {
    /// Spawn `program -- <port>` and wait up to `timeout` for the readiness token.
    pub fn spawn(
        program: impl AsRef<Path>,
        port: u16,
        timeout: Duration,
    ) -> Result<Self, ClientError> {
        let mut child = Command::new(program.as_ref())
            .arg("--")
            .arg(port.to_string())
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()?;

        let stdout = child.stdout.take();
        let (tx, rx) = mpsc::channel();

        let stdout_handle = stdout.map(|stdout| {
            thread::spawn(move || {
                let mut lines = BufReader::new(stdout).lines();
                let _ = tx.send(lines.next().map(|line| line.map_err(|e| e.to_string())));

                // Keep draining so the child never blocks on a full pipe.
                for line in lines.map_while(Result::ok) {
                    debug!(line = %line, "oracle stdout");
                }
            })
        });

        let process = Self {
            child,
            port,
            stdout_handle,
        };

        match rx.recv_timeout(timeout) {
            Ok(Some(Ok(line))) if line.trim() == READY_TOKEN => Ok(process),
            Ok(Some(Ok(line))) => Err(ClientError::NotReady(format!(
                "unexpected stdout line {line:?}"
            ))),
            Ok(Some(Err(e))) => Err(ClientError::NotReady(e)),
            Ok(None) => Err(ClientError::NotReady(
                "oracle exited before signalling readiness".to_string(),
            )),
            Err(_) => Err(ClientError::NotReady(format!(
                "no readiness token within {timeout:?}"
            ))),
        }
    }

    /// Port the oracle was started on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// A client connected to this oracle.
    pub fn client(&self) -> OracleClient {
        OracleClient::new("127.0.0.1", self.port)
    }
}

impl Drop for OracleProcess {
    fn drop(&mut self) {
        match self.child.kill() {
            Err(err) if err.kind() == std::io::ErrorKind::InvalidInput => {
                warn!("oracle was not running when shut down");
            }
            Err(err) => warn!(error = %err, "could not kill oracle"),
            Ok(()) => {}
        }

        if let Err(err) = self.child.wait() {
            warn!(error = %err, "could not reap oracle");
        }

        if let Some(handle) = self.stdout_handle.take()
            && handle.join().is_err()
        {
            warn!("oracle stdout reader panicked");
        }
    }
}
