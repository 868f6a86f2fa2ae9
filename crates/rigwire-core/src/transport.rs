//! Transport trait for device communication.
//!
//! The [`Transport`] trait abstracts over the physical link to a transceiver.
//! Implementations exist for serial ports, TCP sockets, and mock transports
//! for testing.
//!
//! The transaction engine operates on a `Transport` rather than directly on a
//! serial port, enabling both real hardware control and deterministic unit
//! testing with `MockTransport` from the `rigwire-test-harness` crate.

use async_trait::async_trait;
use std::time::Duration;
use tokio::time::Instant;

use crate::error::{Error, Result};

/// How [`Transport::read_until`] decides that one response is complete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadUntil {
    /// Stop after the first byte that appears in the set (inclusive).
    Stop(Vec<u8>),
    /// Stop after exactly this many bytes.
    Length(usize),
}

/// Asynchronous byte-level transport to a device.
///
/// A transport is used by one logical operation at a time; sessions wrap it
/// in a mutex so concurrent callers are serialized.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send raw bytes to the device.
    ///
    /// Implementations should block until all bytes have been written to
    /// the underlying transport (serial TX buffer, TCP socket, etc.).
    async fn send(&mut self, data: &[u8]) -> Result<()>;

    /// Receive bytes from the device into the provided buffer.
    ///
    /// Returns the number of bytes actually read. Will wait up to `timeout`
    /// for data to arrive; returns [`Error::Timeout`] if no data is received
    /// within the deadline.
    async fn receive(&mut self, buf: &mut [u8], timeout: Duration) -> Result<usize>;

    /// Close the transport connection.
    ///
    /// After calling `close()`, subsequent `send()` and `receive()` calls
    /// should return [`Error::NotConnected`].
    async fn close(&mut self) -> Result<()>;

    /// Check whether the transport is currently connected.
    fn is_connected(&self) -> bool;

    /// Discard anything the peer has already queued.
    ///
    /// The default drains with zero-timeout reads until nothing is left.
    async fn flush_input(&mut self) -> Result<()> {
        let mut scratch = [0u8; 64];
        loop {
            match self.receive(&mut scratch, Duration::ZERO).await {
                Ok(0) | Err(Error::Timeout) => return Ok(()),
                Ok(n) => tracing::trace!(bytes = n, "flushed stale input"),
                Err(e) => return Err(e),
            }
        }
    }

    /// Read one response, byte by byte, until `until` is satisfied.
    ///
    /// The whole read shares one `timeout` budget. Returns
    /// [`Error::Timeout`] if nothing arrived, and [`Error::Garbled`] if a
    /// partial response arrived or `max_len` bytes were read without
    /// completing.
    async fn read_until(
        &mut self,
        until: &ReadUntil,
        max_len: usize,
        timeout: Duration,
    ) -> Result<Vec<u8>> {
        let deadline = Instant::now() + timeout;
        let mut out = Vec::new();
        let mut byte = [0u8; 1];

        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            let received = match self.receive(&mut byte, remaining).await {
                Ok(0) if remaining.is_zero() => Err(Error::Timeout),
                other => other,
            };
            match received {
                Ok(0) => continue,
                Ok(_) => {}
                Err(Error::Timeout) if out.is_empty() => return Err(Error::Timeout),
                Err(Error::Timeout) => {
                    return Err(Error::Garbled(format!(
                        "short read: {} bytes before timeout",
                        out.len()
                    )));
                }
                Err(e) => return Err(e),
            }

            out.push(byte[0]);
            let done = match until {
                ReadUntil::Stop(set) => set.contains(&byte[0]),
                ReadUntil::Length(n) => out.len() >= *n,
            };
            if done {
                return Ok(out);
            }
            if out.len() >= max_len {
                return Err(Error::Garbled(format!(
                    "no terminator within {max_len} bytes"
                )));
            }
        }
    }
}
