//! Scripted mock transport for deterministic testing.
//!
//! [`MockTransport`] implements [`Transport`] with pre-loaded
//! request/response pairs. Requests are matched on the accumulated byte
//! stream, so a request paced out one byte per `send()` call matches the
//! same expectation as one written in a single call.
//!
//! Clones share state: keep a clone to inspect what was written after the
//! original has been moved into a session.
//!
//! # Example
//!
//! ```
//! use rigwire_test_harness::MockTransport;
//!
//! let mock = MockTransport::new();
//! mock.expect(b"FA;", b"FA014074000;");
//! mock.expect_silent(b"FA007000000;");
//! ```

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use async_trait::async_trait;
use rigwire_core::error::{Error, Result};
use rigwire_core::transport::Transport;
use tracing::trace;

#[derive(Debug, Clone)]
struct Expectation {
    request: Vec<u8>,
    response: Vec<u8>,
}

#[derive(Debug, Default)]
struct State {
    expectations: VecDeque<Expectation>,
    /// Bytes written since the last matched request.
    partial: Vec<u8>,
    /// Reply bytes waiting to be read.
    rx: VecDeque<u8>,
    connected: bool,
    always_silent: bool,
    sent_log: Vec<Vec<u8>>,
    requests: Vec<Vec<u8>>,
    flushes: usize,
}

/// A mock [`Transport`] driven by ordered expectations.
#[derive(Debug, Clone)]
pub struct MockTransport {
    state: Arc<Mutex<State>>,
}

impl MockTransport {
    /// Create a connected mock with no expectations.
    pub fn new() -> Self {
        MockTransport {
            state: Arc::new(Mutex::new(State {
                connected: true,
                ..Default::default()
            })),
        }
    }

    /// Create a connected mock that accepts any write and never answers.
    pub fn silent() -> Self {
        let mock = Self::new();
        mock.lock().always_silent = true;
        mock
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        // A panicking test thread poisons the lock; the state is still usable.
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// When `request` is written, queue `response` for reading.
    pub fn expect(&self, request: &[u8], response: &[u8]) {
        self.lock().expectations.push_back(Expectation {
            request: request.to_vec(),
            response: response.to_vec(),
        });
    }

    /// Expect `request` and answer nothing.
    pub fn expect_silent(&self, request: &[u8]) {
        self.expect(request, &[]);
    }

    /// Queue unsolicited bytes, as if the device had sent them on its own.
    pub fn inject(&self, bytes: &[u8]) {
        self.lock().rx.extend(bytes.iter().copied());
    }

    /// Every `send()` payload, in order.
    pub fn sent_data(&self) -> Vec<Vec<u8>> {
        self.lock().sent_log.clone()
    }

    /// Every complete request matched against an expectation, in order.
    pub fn requests(&self) -> Vec<Vec<u8>> {
        self.lock().requests.clone()
    }

    /// All bytes written, concatenated.
    pub fn sent_bytes(&self) -> Vec<u8> {
        self.lock().sent_log.concat()
    }

    /// Number of `send()` calls.
    pub fn write_count(&self) -> usize {
        self.lock().sent_log.len()
    }

    /// Number of `flush_input()` calls.
    pub fn flush_count(&self) -> usize {
        self.lock().flushes
    }

    /// Expectations not yet consumed.
    pub fn remaining_expectations(&self) -> usize {
        self.lock().expectations.len()
    }

    /// Force the connected state.
    pub fn set_connected(&self, connected: bool) {
        self.lock().connected = connected;
    }
}

impl Default for MockTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&mut self, data: &[u8]) -> Result<()> {
        let mut state = self.lock();
        if !state.connected {
            return Err(Error::NotConnected);
        }
        state.sent_log.push(data.to_vec());
        if state.always_silent {
            return Ok(());
        }

        state.partial.extend_from_slice(data);
        let Some(next) = state.expectations.front() else {
            return Err(Error::Transport(format!(
                "no more expectations in mock transport, got {:02X?}",
                state.partial
            )));
        };
        let want = next.request.len();
        if state.partial.len() < want {
            if !next.request.starts_with(&state.partial) {
                return Err(Error::Transport(format!(
                    "unexpected send data: expected {:02X?}, got {:02X?}",
                    next.request, state.partial
                )));
            }
            return Ok(());
        }
        if state.partial != next.request {
            return Err(Error::Transport(format!(
                "unexpected send data: expected {:02X?}, got {:02X?}",
                next.request, state.partial
            )));
        }
        if let Some(matched) = state.expectations.pop_front() {
            trace!(
                request = ?matched.request,
                reply_len = matched.response.len(),
                "scripted exchange matched"
            );
            state.partial.clear();
            state.requests.push(matched.request);
            state.rx.extend(matched.response);
        }
        Ok(())
    }

    async fn receive(&mut self, buf: &mut [u8], timeout: Duration) -> Result<usize> {
        {
            let mut state = self.lock();
            if !state.connected {
                return Err(Error::NotConnected);
            }
            if !state.rx.is_empty() {
                let n = buf.len().min(state.rx.len());
                for slot in buf.iter_mut().take(n) {
                    if let Some(b) = state.rx.pop_front() {
                        *slot = b;
                    }
                }
                return Ok(n);
            }
        }
        tokio::time::sleep(timeout).await;
        Err(Error::Timeout)
    }

    async fn flush_input(&mut self) -> Result<()> {
        let mut state = self.lock();
        if !state.connected {
            return Err(Error::NotConnected);
        }
        state.flushes += 1;
        state.rx.clear();
        Ok(())
    }

    async fn close(&mut self) -> Result<()> {
        let mut state = self.lock();
        state.connected = false;
        state.rx.clear();
        Ok(())
    }

    fn is_connected(&self) -> bool {
        self.lock().connected
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rigwire_core::transport::ReadUntil;

    #[tokio::test]
    async fn basic_send_receive() {
        let mut mock = MockTransport::new();
        mock.expect(b"FA;", b"FA014074000;");
        mock.send(b"FA;").await.unwrap();

        let mut buf = [0u8; 64];
        let n = mock
            .receive(&mut buf, Duration::from_millis(100))
            .await
            .unwrap();
        assert_eq!(&buf[..n], b"FA014074000;");
    }

    #[tokio::test]
    async fn byte_paced_writes_match_one_request() {
        let mut mock = MockTransport::new();
        mock.expect(b"FA;", b"FA014074000;");
        for b in b"FA;" {
            mock.send(&[*b]).await.unwrap();
        }
        assert_eq!(mock.write_count(), 3);
        assert_eq!(mock.requests(), vec![b"FA;".to_vec()]);
        assert_eq!(mock.sent_bytes(), b"FA;");
    }

    #[tokio::test]
    async fn clones_share_state() {
        let mock = MockTransport::new();
        let observer = mock.clone();
        mock.expect(b"ID;", b"ID0840;");
        let mut moved = mock;
        moved.send(b"ID;").await.unwrap();
        assert_eq!(observer.write_count(), 1);
        assert_eq!(observer.remaining_expectations(), 0);
    }

    #[tokio::test]
    async fn wrong_data_errors() {
        let mut mock = MockTransport::new();
        mock.expect(b"FA;", b"FA014074000;");
        assert!(matches!(mock.send(b"FB;").await, Err(Error::Transport(_))));
    }

    #[tokio::test]
    async fn no_expectations_errors() {
        let mut mock = MockTransport::new();
        assert!(matches!(mock.send(b"FA;").await, Err(Error::Transport(_))));
    }

    #[tokio::test(start_paused = true)]
    async fn receive_without_reply_waits_then_times_out() {
        let mut mock = MockTransport::new();
        let start = tokio::time::Instant::now();
        let mut buf = [0u8; 8];
        let result = mock.receive(&mut buf, Duration::from_millis(300)).await;
        assert!(matches!(result, Err(Error::Timeout)));
        assert!(start.elapsed() >= Duration::from_millis(300));
    }

    #[tokio::test(start_paused = true)]
    async fn silent_mode_accepts_everything() {
        let mut mock = MockTransport::silent();
        mock.send(b"FA014074000;").await.unwrap();
        mock.send(b"anything").await.unwrap();
        assert_eq!(mock.write_count(), 2);
        let err = mock
            .read_until(&ReadUntil::Stop(vec![b';']), 64, Duration::from_millis(50))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Timeout));
    }

    #[tokio::test]
    async fn flush_discards_and_counts() {
        let mut mock = MockTransport::new();
        mock.inject(b"?;");
        mock.flush_input().await.unwrap();
        assert_eq!(mock.flush_count(), 1);
        let mut buf = [0u8; 8];
        let result = mock.receive(&mut buf, Duration::ZERO).await;
        assert!(matches!(result, Err(Error::Timeout)));
    }

    #[tokio::test]
    async fn closed_transport_refuses_io() {
        let mut mock = MockTransport::new();
        mock.close().await.unwrap();
        assert!(!mock.is_connected());
        assert!(matches!(mock.send(b"FA;").await, Err(Error::NotConnected)));
        let mut buf = [0u8; 8];
        assert!(matches!(
            mock.receive(&mut buf, Duration::ZERO).await,
            Err(Error::NotConnected)
        ));
    }
}
