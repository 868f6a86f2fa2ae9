//! Mock TCP server for transport-level testing.
//!
//! [`MockTcpServer`] listens on a random localhost port, accepts one
//! connection and walks through scripted request/response pairs, so the
//! TCP transport can be tested without a network bridge.
//!
//! # Example
//!
//! ```
//! use rigwire_test_harness::MockTcpServer;
//!
//! # async fn example() -> rigwire_core::Result<()> {
//! let mut server = MockTcpServer::new().await?;
//! server.expect(b"FA;", b"FA014074000;");
//! let addr = server.addr().to_string();
//! server.start();
//! // ... connect a TcpTransport to `addr` ...
//! # Ok(())
//! # }
//! ```

use std::collections::VecDeque;
use std::time::Duration;

use rigwire_core::error::{Error, Result};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

#[derive(Debug, Clone)]
struct TcpExpectation {
    request: Vec<u8>,
    response: Vec<u8>,
}

/// A single-connection scripted TCP peer.
///
/// Expectations are processed in order. A mismatch ends the session and
/// is reported by [`wait`](MockTcpServer::wait).
pub struct MockTcpServer {
    addr: String,
    listener: Option<TcpListener>,
    greeting: Vec<u8>,
    hold: Duration,
    expectations: VecDeque<TcpExpectation>,
    handle: Option<JoinHandle<std::result::Result<(), String>>>,
}

impl MockTcpServer {
    /// Bind a listener on a random localhost port.
    pub async fn new() -> Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .map_err(|e| Error::Transport(format!("failed to bind mock TCP server: {e}")))?;
        let addr = listener.local_addr().map_err(Error::Io)?.to_string();
        Ok(Self {
            addr,
            listener: Some(listener),
            greeting: Vec::new(),
            hold: Duration::ZERO,
            expectations: VecDeque::new(),
            handle: None,
        })
    }

    /// Add a request/response pair.
    pub fn expect(&mut self, request: &[u8], response: &[u8]) {
        self.expectations.push_back(TcpExpectation {
            request: request.to_vec(),
            response: response.to_vec(),
        });
    }

    /// Bytes to send unprompted as soon as the client connects.
    pub fn greeting(&mut self, bytes: &[u8]) {
        self.greeting = bytes.to_vec();
    }

    /// Keep the connection open this long after the script finishes.
    pub fn hold_open(&mut self, duration: Duration) {
        self.hold = duration;
    }

    /// The `host:port` the server listens on.
    pub fn addr(&self) -> &str {
        &self.addr
    }

    /// Start serving in a background task. Calling it twice has no effect.
    pub fn start(&mut self) {
        let Some(listener) = self.listener.take() else {
            return;
        };
        let expectations: Vec<TcpExpectation> = self.expectations.drain(..).collect();
        let greeting = std::mem::take(&mut self.greeting);
        let hold = self.hold;

        self.handle = Some(tokio::spawn(async move {
            let (mut stream, _) = listener
                .accept()
                .await
                .map_err(|e| format!("failed to accept connection: {e}"))?;

            if !greeting.is_empty() {
                stream
                    .write_all(&greeting)
                    .await
                    .map_err(|e| format!("greeting write error: {e}"))?;
            }

            for (i, expectation) in expectations.iter().enumerate() {
                let mut buf = vec![0u8; expectation.request.len()];
                stream
                    .read_exact(&mut buf)
                    .await
                    .map_err(|e| format!("expectation {i}: read error: {e}"))?;
                if buf != expectation.request {
                    return Err(format!(
                        "expectation {i}: request mismatch: expected {:02X?}, got {buf:02X?}",
                        expectation.request
                    ));
                }
                stream
                    .write_all(&expectation.response)
                    .await
                    .map_err(|e| format!("expectation {i}: write error: {e}"))?;
                stream
                    .flush()
                    .await
                    .map_err(|e| format!("expectation {i}: flush error: {e}"))?;
            }

            if !hold.is_zero() {
                tokio::time::sleep(hold).await;
            }
            Ok(())
        }));
    }

    /// Wait for the script to finish and report any mismatch.
    pub async fn wait(self) -> std::result::Result<(), String> {
        match self.handle {
            Some(handle) => handle
                .await
                .map_err(|e| format!("server task panicked: {e}"))?,
            None => Ok(()),
        }
    }
}
