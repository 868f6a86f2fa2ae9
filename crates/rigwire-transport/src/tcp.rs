//! TCP transport for network-attached CAT links.
//!
//! [`TcpTransport`] implements [`Transport`] for rigs and serial-to-network
//! bridges that expose their command port over TCP (ser2net, remote rig
//! servers, Ethernet-equipped transceivers speaking text CAT).
//!
//! # Example
//!
//! ```no_run
//! use rigwire_core::Transport;
//! use rigwire_transport::TcpTransport;
//! use std::time::Duration;
//!
//! # async fn example() -> rigwire_core::Result<()> {
//! let mut transport = TcpTransport::connect("192.168.1.50:4532").await?;
//! transport.send(b"FA;").await?;
//! let mut buf = [0u8; 64];
//! let n = transport.receive(&mut buf, Duration::from_millis(500)).await?;
//! # Ok(())
//! # }
//! ```

use std::io;
use std::time::Duration;

use async_trait::async_trait;
use rigwire_core::error::{Error, Result};
use rigwire_core::transport::Transport;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tracing::{debug, error, info, trace, warn};

/// Connection timeout used by [`TcpTransport::connect`].
const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// TCP transport.
#[derive(Debug)]
pub struct TcpTransport {
    stream: Option<TcpStream>,
    addr: String,
}

impl TcpTransport {
    /// Connect to a `host:port` endpoint with the default timeout.
    pub async fn connect(addr: &str) -> Result<Self> {
        Self::connect_with_timeout(addr, DEFAULT_CONNECT_TIMEOUT).await
    }

    /// Connect to a `host:port` endpoint, giving up after `timeout`.
    pub async fn connect_with_timeout(addr: &str, timeout: Duration) -> Result<Self> {
        if addr.is_empty() {
            return Err(Error::Config("TCP address is empty".into()));
        }
        debug!(addr, ?timeout, "connecting");

        let stream = match tokio::time::timeout(timeout, TcpStream::connect(addr)).await {
            Ok(Ok(stream)) => stream,
            Ok(Err(e)) => {
                error!(addr, error = %e, "connect failed");
                return Err(connect_error(e, addr));
            }
            Err(_) => {
                error!(addr, "connect timed out");
                return Err(Error::Timeout);
            }
        };

        // Requests are a handful of bytes and latency-sensitive.
        if let Err(e) = stream.set_nodelay(true) {
            warn!(addr, error = %e, "TCP_NODELAY not applied");
        }

        info!(addr, "connected");
        Ok(Self::from_stream(stream, addr.to_string()))
    }

    /// Wrap an already connected stream.
    pub fn from_stream(stream: TcpStream, addr: String) -> Self {
        Self {
            stream: Some(stream),
            addr,
        }
    }

    /// The address this transport was connected to.
    pub fn addr(&self) -> &str {
        &self.addr
    }
}

#[async_trait]
impl Transport for TcpTransport {
    async fn send(&mut self, data: &[u8]) -> Result<()> {
        trace!(addr = %self.addr, data = ?data, "tx");
        let stream = self.stream.as_mut().ok_or(Error::NotConnected)?;
        stream.write_all(data).await.map_err(link_error)?;
        stream.flush().await.map_err(link_error)
    }

    async fn receive(&mut self, buf: &mut [u8], timeout: Duration) -> Result<usize> {
        let stream = self.stream.as_mut().ok_or(Error::NotConnected)?;

        let n = tokio::time::timeout(timeout, stream.read(buf))
            .await
            .map_err(|_| Error::Timeout)?
            .map_err(link_error)?;
        if n == 0 {
            warn!(addr = %self.addr, "peer hung up");
            return Err(Error::ConnectionLost);
        }
        trace!(addr = %self.addr, data = ?&buf[..n], "rx");
        Ok(n)
    }

    async fn flush_input(&mut self) -> Result<()> {
        let stream = self.stream.as_mut().ok_or(Error::NotConnected)?;
        let mut scratch = [0u8; 256];
        loop {
            match stream.try_read(&mut scratch) {
                Ok(0) => return Err(Error::ConnectionLost),
                Ok(n) => trace!(addr = %self.addr, n, "discarded stale bytes"),
                Err(e) if e.kind() == io::ErrorKind::WouldBlock => return Ok(()),
                Err(e) => return Err(link_error(e)),
            }
        }
    }

    async fn close(&mut self) -> Result<()> {
        if let Some(mut stream) = self.stream.take() {
            if let Err(e) = stream.shutdown().await {
                warn!(addr = %self.addr, error = %e, "shutdown failed");
            }
            info!(addr = %self.addr, "disconnected");
        }
        Ok(())
    }

    fn is_connected(&self) -> bool {
        self.stream.is_some()
    }
}

impl Drop for TcpTransport {
    fn drop(&mut self) {
        if self.stream.is_some() {
            debug!(addr = %self.addr, "dropped without close");
        }
    }
}

fn connect_error(e: io::Error, addr: &str) -> Error {
    if e.kind() == io::ErrorKind::ConnectionRefused {
        Error::Transport(format!("connection refused: {addr}"))
    } else {
        Error::Io(e)
    }
}

/// Errors meaning the peer is gone map to `ConnectionLost`.
fn link_error(e: io::Error) -> Error {
    use io::ErrorKind::*;
    match e.kind() {
        ConnectionReset | BrokenPipe | NotConnected | ConnectionAborted => Error::ConnectionLost,
        _ => Error::Io(e),
    }
}
