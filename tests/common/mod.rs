//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::time::Duration;

use synth_oracle::client::{ClientError, OracleProcess};

/// How long a freshly spawned oracle gets to print its readiness token.
pub const READY_TIMEOUT: Duration = Duration::from_secs(20);

/// Spawn attempts before giving up; a probed port can be taken by a parallel test.
const SPAWN_ATTEMPTS: usize = 3;

/// A port nothing is listening on right now.
pub fn unused_port() -> u16 {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind probe listener");
    listener.local_addr().expect("probe local addr").port()
}

/// Spawn the oracle binary built for this test run.
///
/// Retries on a fresh port when the child never becomes ready.
pub fn spawn_oracle() -> OracleProcess {
    let mut last_error = None;

    for _ in 0..SPAWN_ATTEMPTS {
        let port = unused_port();
        match OracleProcess::spawn(env!("CARGO_BIN_EXE_synth-oracle"), port, READY_TIMEOUT) {
            Ok(oracle) => {
                assert_eq!(oracle.port(), port);
                return oracle;
            }
            Err(err @ ClientError::NotReady(_)) => last_error = Some(err),
            Err(err) => panic!("oracle failed to start: {err}"),
        }
    }

    panic!("oracle failed to become ready: {last_error:?}");
}
