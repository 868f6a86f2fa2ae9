//! Stateful simulated device peer.
//!
//! [`SimTransport`] splits written bytes into requests at a delimiter and
//! hands each one to a closure together with mutable device state. Whatever
//! the closure returns is queued as the device's reply. Unlike
//! [`MockTransport`](crate::MockTransport) the order of requests is not
//! scripted, which makes it suitable for probes and retry logic whose exact
//! request sequence is the thing under test.
//!
//! # Example
//!
//! ```
//! use rigwire_test_harness::SimTransport;
//!
//! // A device holding one power setting.
//! let sim = SimTransport::new(b";", 10u32, |power: &mut u32, req: &[u8]| match req {
//!     b"PC;" => Some(format!("PC{:03};", power).into_bytes()),
//!     _ => Some(b"?;".to_vec()),
//! });
//! assert_eq!(sim.with_state(|p| *p), 10);
//! ```

use std::collections::VecDeque;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use async_trait::async_trait;
use rigwire_core::error::{Error, Result};
use rigwire_core::transport::Transport;
use tracing::trace;

type Handler<S> = Box<dyn FnMut(&mut S, &[u8]) -> Option<Vec<u8>> + Send>;

struct Inner<S> {
    device: S,
    handler: Handler<S>,
    delimiters: Vec<u8>,
    partial: Vec<u8>,
    rx: VecDeque<u8>,
    requests: Vec<Vec<u8>>,
    writes: usize,
    connected: bool,
}

/// A transport whose peer is a closure over device state.
///
/// Clones share the same device.
pub struct SimTransport<S> {
    inner: Arc<Mutex<Inner<S>>>,
}

impl<S> Clone for SimTransport<S> {
    fn clone(&self) -> Self {
        SimTransport {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S> fmt::Debug for SimTransport<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SimTransport").finish_non_exhaustive()
    }
}

impl<S: Send + 'static> SimTransport<S> {
    /// Create a simulated device.
    ///
    /// Any byte in `delimiters` ends a request. `handler` returns the reply
    /// to queue, or `None` to stay silent.
    pub fn new<F>(delimiters: &[u8], device: S, handler: F) -> Self
    where
        F: FnMut(&mut S, &[u8]) -> Option<Vec<u8>> + Send + 'static,
    {
        SimTransport {
            inner: Arc::new(Mutex::new(Inner {
                device,
                handler: Box::new(handler),
                delimiters: delimiters.to_vec(),
                partial: Vec::new(),
                rx: VecDeque::new(),
                requests: Vec::new(),
                writes: 0,
                connected: true,
            })),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner<S>> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Inspect or modify the device state.
    pub fn with_state<R>(&self, f: impl FnOnce(&mut S) -> R) -> R {
        f(&mut self.lock().device)
    }

    /// Complete requests received so far.
    pub fn requests(&self) -> Vec<Vec<u8>> {
        self.lock().requests.clone()
    }

    /// Complete requests received so far, as text.
    pub fn requests_text(&self) -> Vec<String> {
        self.lock()
            .requests
            .iter()
            .map(|r| String::from_utf8_lossy(r).into_owned())
            .collect()
    }

    /// Number of `send()` calls.
    pub fn write_count(&self) -> usize {
        self.lock().writes
    }
}

#[async_trait]
impl<S: Send + 'static> Transport for SimTransport<S> {
    async fn send(&mut self, data: &[u8]) -> Result<()> {
        let mut guard = self.lock();
        let inner = &mut *guard;
        if !inner.connected {
            return Err(Error::NotConnected);
        }
        inner.writes += 1;
        for &b in data {
            inner.partial.push(b);
            if inner.delimiters.contains(&b) {
                let request = std::mem::take(&mut inner.partial);
                let reply = (inner.handler)(&mut inner.device, &request);
                trace!(request = ?request, reply = ?reply, "simulated exchange");
                if let Some(reply) = reply {
                    inner.rx.extend(reply);
                }
                inner.requests.push(request);
            }
        }
        Ok(())
    }

    async fn receive(&mut self, buf: &mut [u8], timeout: Duration) -> Result<usize> {
        {
            let mut inner = self.lock();
            if !inner.connected {
                return Err(Error::NotConnected);
            }
            if !inner.rx.is_empty() {
                let n = buf.len().min(inner.rx.len());
                for slot in buf.iter_mut().take(n) {
                    if let Some(b) = inner.rx.pop_front() {
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
        self.lock().rx.clear();
        Ok(())
    }

    async fn close(&mut self) -> Result<()> {
        let mut inner = self.lock();
        inner.connected = false;
        inner.rx.clear();
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

    fn power_device(power: u32) -> SimTransport<u32> {
        SimTransport::new(b";", power, |power: &mut u32, req: &[u8]| {
            let text = std::str::from_utf8(req).ok()?;
            if text == "PC;" {
                return Some(format!("PC{:03};", power).into_bytes());
            }
            match text.strip_prefix("PC").and_then(|v| v.strip_suffix(';')) {
                Some(v) => match v.parse::<u32>() {
                    Ok(n) if n <= 10 => {
                        *power = n;
                        None
                    }
                    _ => Some(b"?;".to_vec()),
                },
                None => Some(b"?;".to_vec()),
            }
        })
    }

    #[tokio::test]
    async fn handler_sees_whole_requests() {
        let mut sim = power_device(5);
        for b in b"PC008;" {
            sim.send(&[*b]).await.unwrap();
        }
        assert_eq!(sim.requests_text(), vec!["PC008;"]);
        assert_eq!(sim.write_count(), 6);
        assert_eq!(sim.with_state(|p| *p), 8);
    }

    #[tokio::test]
    async fn replies_are_readable() {
        let mut sim = power_device(5);
        sim.send(b"PC;").await.unwrap();
        let reply = sim
            .read_until(&ReadUntil::Stop(vec![b';']), 16, Duration::from_millis(50))
            .await
            .unwrap();
        assert_eq!(reply, b"PC005;");
    }

    #[tokio::test(start_paused = true)]
    async fn rejected_value_leaves_state() {
        let mut sim = power_device(5);
        sim.send(b"PC050;").await.unwrap();
        let reply = sim
            .read_until(&ReadUntil::Stop(vec![b';']), 16, Duration::from_millis(50))
            .await
            .unwrap();
        assert_eq!(reply, b"?;");
        assert_eq!(sim.with_state(|p| *p), 5);
    }

    #[tokio::test]
    async fn flush_drops_pending_reply() {
        let mut sim = power_device(5);
        sim.send(b"PC;").await.unwrap();
        sim.flush_input().await.unwrap();
        let mut buf = [0u8; 8];
        assert!(matches!(
            sim.receive(&mut buf, Duration::ZERO).await,
            Err(Error::Timeout)
        ));
    }
}
