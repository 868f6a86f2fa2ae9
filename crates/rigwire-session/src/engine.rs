//! Transaction engine: one request/response exchange with bounded retry.
//!
//! Each attempt flushes stale input, writes the request (paced byte by byte
//! when a write delay is configured), waits the post-write settle time and
//! then reads whatever the [`Expect`] of the exchange asks for. Timeouts,
//! garbled frames and rejections are retried up to `retry` more times with
//! a linear backoff; everything else propagates at once. When retries run
//! out the last failure is returned unchanged.
//!
//! The engine is family-agnostic: framing comes from the [`FrameCodec`]
//! passed to each call.

use std::time::Duration;

use tracing::{debug, trace, warn};

use rigwire_core::codec::{Exchange, Expect, FrameCodec};
use rigwire_core::error::{Error, Result};
use rigwire_core::port::PortConfig;
use rigwire_core::transport::Transport;

/// Backoff step between attempts; attempt `n` waits `n` steps.
const RETRY_BACKOFF: Duration = Duration::from_millis(20);

/// Owns the transport of one session and drives exchanges over it.
pub struct Engine {
    transport: Box<dyn Transport>,
    config: PortConfig,
}

impl std::fmt::Debug for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine")
            .field("config", &self.config)
            .field("connected", &self.transport.is_connected())
            .finish()
    }
}

impl Engine {
    /// Wrap an open transport.
    pub fn new(transport: Box<dyn Transport>, config: PortConfig) -> Self {
        Engine { transport, config }
    }

    /// Timing and retry settings.
    pub fn config(&self) -> &PortConfig {
        &self.config
    }

    /// Whether the transport is still open.
    pub fn is_connected(&self) -> bool {
        self.transport.is_connected()
    }

    /// Run `exchange` and return the validated reply frame, if the
    /// exchange expects one.
    pub async fn execute<C: FrameCodec>(
        &mut self,
        codec: &C,
        exchange: &Exchange,
    ) -> Result<Option<C::Frame>> {
        Ok(self.run(codec, exchange).await?.map(|(_, frame)| frame))
    }

    /// Like [`execute`](Self::execute) but returns the reply as raw bytes.
    pub async fn execute_raw<C: FrameCodec>(
        &mut self,
        codec: &C,
        exchange: &Exchange,
    ) -> Result<Option<Vec<u8>>> {
        Ok(self.run(codec, exchange).await?.map(|(raw, _)| raw))
    }

    /// Pause without touching the link.
    pub async fn settle(&self, delay: Duration) {
        tokio::time::sleep(delay).await;
    }

    /// Close the transport.
    pub async fn close(&mut self) -> Result<()> {
        self.transport.close().await
    }

    async fn run<C: FrameCodec>(
        &mut self,
        codec: &C,
        exchange: &Exchange,
    ) -> Result<Option<(Vec<u8>, C::Frame)>> {
        let retries = self.config.retry;
        let mut last_err = Error::Timeout;
        for attempt in 0..=retries {
            if attempt > 0 {
                debug!(attempt, "retrying exchange");
                tokio::time::sleep(RETRY_BACKOFF * attempt).await;
            }
            match self.attempt(codec, exchange).await {
                Ok(reply) => return Ok(reply),
                Err(e) if e.is_retryable() => {
                    debug!(attempt, error = %e, "exchange failed");
                    last_err = e;
                }
                Err(e) => return Err(e),
            }
        }
        debug!(attempts = retries + 1, error = %last_err, "retries exhausted");
        Err(last_err)
    }

    async fn attempt<C: FrameCodec>(
        &mut self,
        codec: &C,
        exchange: &Exchange,
    ) -> Result<Option<(Vec<u8>, C::Frame)>> {
        let request = &exchange.request;
        self.transport.flush_input().await?;
        self.write(request).await?;

        match &exchange.expect {
            Expect::Reply(prefix) => {
                let (raw, frame) = self.read_frame(codec, request, self.config.timeout).await?;
                if codec.matches(prefix, &frame) {
                    Ok(Some((raw, frame)))
                } else {
                    Err(Error::Garbled(format!(
                        "unexpected reply {frame:?}, wanted {prefix:02X?}"
                    )))
                }
            }
            Expect::Echo => {
                let raw = self.read_raw(codec, self.config.timeout).await?;
                if raw == *request {
                    return Ok(None);
                }
                let frame = codec.decode_frame(&raw)?;
                Err(Error::Garbled(format!("expected echo, got {frame:?}")))
            }
            Expect::Ack => {
                let (_, frame) = self.read_frame(codec, request, self.config.timeout).await?;
                if codec.is_ack(&frame) {
                    Ok(None)
                } else {
                    Err(Error::Garbled(format!("expected acknowledgement, got {frame:?}")))
                }
            }
            Expect::Verify(query) => {
                self.write(query).await?;
                let (_, frame) = self.read_frame(codec, query, self.config.timeout).await?;
                trace!(?frame, "set verified");
                Ok(None)
            }
            Expect::Silent => match self.read_raw(codec, self.config.set_drain).await {
                Err(Error::Timeout) => Ok(None),
                Err(e) => Err(e),
                Ok(raw) => {
                    let frame = codec.decode_frame(&raw)?;
                    warn!(?frame, "unsolicited frame after set");
                    Ok(None)
                }
            },
        }
    }

    async fn write(&mut self, bytes: &[u8]) -> Result<()> {
        trace!(bytes = ?bytes, "write");
        if self.config.write_delay.is_zero() {
            self.transport.send(bytes).await?;
        } else {
            for (i, byte) in bytes.iter().enumerate() {
                if i > 0 {
                    tokio::time::sleep(self.config.write_delay).await;
                }
                self.transport.send(std::slice::from_ref(byte)).await?;
            }
        }
        if !self.config.post_write_delay.is_zero() {
            tokio::time::sleep(self.config.post_write_delay).await;
        }
        Ok(())
    }

    async fn read_raw<C: FrameCodec>(&mut self, codec: &C, timeout: Duration) -> Result<Vec<u8>> {
        let raw = self
            .transport
            .read_until(&codec.read_rule(), codec.max_frame(), timeout)
            .await?;
        trace!(bytes = ?raw, "read");
        Ok(raw)
    }

    /// Read one validated frame, skipping a single bus echo of `sent`.
    async fn read_frame<C: FrameCodec>(
        &mut self,
        codec: &C,
        sent: &[u8],
        timeout: Duration,
    ) -> Result<(Vec<u8>, C::Frame)> {
        let mut raw = self.read_raw(codec, timeout).await?;
        if codec.echoes_requests() && raw == sent {
            trace!("skipping bus echo");
            raw = self.read_raw(codec, timeout).await?;
        }
        let frame = codec.decode_frame(&raw)?;
        Ok((raw, frame))
    }
}

#[cfg(all(test, feature = "text", feature = "civ"))]
mod tests {
    use super::*;
    use rigwire_civ::{CivCodec, CivDialect};
    use rigwire_core::Protocol;
    use rigwire_test_harness::MockTransport;
    use rigwire_text::TextCodec;

    fn config() -> PortConfig {
        PortConfig {
            timeout: Duration::from_millis(100),
            retry: 2,
            ..PortConfig::default()
        }
    }

    fn engine(mock: &MockTransport, config: PortConfig) -> Engine {
        Engine::new(Box::new(mock.clone()), config)
    }

    fn text() -> TextCodec {
        TextCodec::semicolon(64)
    }

    fn civ() -> CivCodec {
        match rigwire_civ::ic7300().protocol {
            Protocol::Binary(spec) => CivDialect::new(spec).codec().clone(),
            Protocol::Text(_) => unreachable!(),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn reply_is_returned() {
        let mock = MockTransport::new();
        mock.expect(b"FA;", b"FA014074000;");
        let mut e = engine(&mock, config());
        let frame = e.execute(&text(), &Exchange::reply(b"FA;".to_vec(), "FA")).await.unwrap();
        assert_eq!(frame.unwrap().body(), "FA014074000");
        assert_eq!(mock.flush_count(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn always_silent_writes_retry_plus_one_times() {
        let mock = MockTransport::silent();
        let mut e = engine(&mock, config());
        let err = e
            .execute(&text(), &Exchange::reply(b"FA;".to_vec(), "FA"))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Timeout));
        assert_eq!(mock.write_count(), 3);
        assert_eq!(mock.flush_count(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn rejection_is_retried_then_returned() {
        let mock = MockTransport::new();
        for _ in 0..3 {
            mock.expect(b"FA;", b"?;");
        }
        let mut e = engine(&mock, config());
        let err = e
            .execute(&text(), &Exchange::reply(b"FA;".to_vec(), "FA"))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Rejected(_)));
        assert_eq!(mock.remaining_expectations(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn garbled_then_good_succeeds() {
        let mock = MockTransport::new();
        mock.expect(b"FA;", b"FB007000000;");
        mock.expect(b"FA;", b"FA014074000;");
        let mut e = engine(&mock, config());
        let frame = e.execute(&text(), &Exchange::reply(b"FA;".to_vec(), "FA")).await.unwrap();
        assert_eq!(frame.unwrap().body(), "FA014074000");
        assert_eq!(mock.write_count(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn transport_errors_are_not_retried() {
        let mock = MockTransport::new();
        mock.set_connected(false);
        let mut e = engine(&mock, config());
        let err = e
            .execute(&text(), &Exchange::reply(b"FA;".to_vec(), "FA"))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::NotConnected));
    }

    #[tokio::test(start_paused = true)]
    async fn silent_set_succeeds_on_quiet_line() {
        let mock = MockTransport::new();
        mock.expect_silent(b"FA014074000;");
        let mut e = engine(&mock, config());
        let frame = e.execute(&text(), &Exchange::silent(b"FA014074000;".to_vec())).await.unwrap();
        assert!(frame.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn silent_set_notices_rejection() {
        let mock = MockTransport::new();
        mock.expect(b"FA014074000;", b"?;");
        let mut e = engine(
            &mock,
            PortConfig {
                retry: 0,
                ..config()
            },
        );
        let err = e
            .execute(&text(), &Exchange::silent(b"FA014074000;".to_vec()))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Rejected(_)));
    }

    #[tokio::test(start_paused = true)]
    async fn verify_writes_follow_up_query() {
        let mock = MockTransport::new();
        mock.expect_silent(b"FA014074000;");
        mock.expect(b"ID;", b"ID0840;");
        let mut e = engine(&mock, config());
        let ex = Exchange::verify(b"FA014074000;".to_vec(), b"ID;".to_vec());
        assert!(e.execute(&text(), &ex).await.unwrap().is_none());
        assert_eq!(mock.requests(), vec![b"FA014074000;".to_vec(), b"ID;".to_vec()]);
    }

    #[tokio::test(start_paused = true)]
    async fn echo_must_match() {
        let mock = MockTransport::new();
        mock.expect(b"FA014074000;", b"FA014074000;");
        let mut e = engine(&mock, config());
        let ex = Exchange::echo(b"FA014074000;".to_vec());
        assert!(e.execute(&text(), &ex).await.unwrap().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn bus_echo_is_skipped_before_ack() {
        let request = [0xFE, 0xFE, 0x94, 0xE0, 0x1C, 0x00, 0x01, 0xFD];
        let mut response = request.to_vec();
        response.extend([0xFE, 0xFE, 0xE0, 0x94, 0xFB, 0xFD]);
        let mock = MockTransport::new();
        mock.expect(&request, &response);
        let mut e = engine(&mock, config());
        assert!(e.execute(&civ(), &Exchange::ack(request.to_vec())).await.unwrap().is_none());
        assert_eq!(mock.write_count(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn nak_is_rejected() {
        let request = [0xFE, 0xFE, 0x94, 0xE0, 0x1C, 0x00, 0x01, 0xFD];
        let mock = MockTransport::new();
        mock.expect(&request, &[0xFE, 0xFE, 0xE0, 0x94, 0xFA, 0xFD]);
        let mut e = engine(
            &mock,
            PortConfig {
                retry: 0,
                ..config()
            },
        );
        let err = e.execute(&civ(), &Exchange::ack(request.to_vec())).await.unwrap_err();
        assert!(matches!(err, Error::Rejected(_)));
    }

    #[tokio::test(start_paused = true)]
    async fn write_delay_paces_bytes() {
        let mock = MockTransport::new();
        mock.expect(b"FA;", b"FA014074000;");
        let mut e = engine(
            &mock,
            PortConfig {
                write_delay: Duration::from_millis(5),
                ..config()
            },
        );
        let start = tokio::time::Instant::now();
        e.execute(&text(), &Exchange::reply(b"FA;".to_vec(), "FA")).await.unwrap();
        assert_eq!(mock.sent_data(), vec![b"F".to_vec(), b"A".to_vec(), b";".to_vec()]);
        assert!(start.elapsed() >= Duration::from_millis(10));
    }

    #[tokio::test(start_paused = true)]
    async fn backoff_grows_linearly() {
        let mock = MockTransport::silent();
        let mut e = engine(&mock, config());
        let start = tokio::time::Instant::now();
        let _ = e.execute(&text(), &Exchange::reply(b"FA;".to_vec(), "FA")).await;
        // Three 100 ms timeouts plus 20 ms and 40 ms of backoff.
        assert!(start.elapsed() >= Duration::from_millis(360));
        assert!(start.elapsed() < Duration::from_millis(400));
    }
}
