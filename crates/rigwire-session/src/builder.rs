//! SessionBuilder -- fluent builder for opening a [`Session`].
//!
//! Separates configuration from construction: the model's descriptor
//! supplies every default, individual settings can be overridden, and the
//! whole configuration is validated before the endpoint is opened.
//!
//! # Example
//!
//! ```no_run
//! use rigwire_session::SessionBuilder;
//! use std::time::Duration;
//!
//! # async fn example() -> rigwire_core::Result<()> {
//! let session = SessionBuilder::for_model("ftx1")?
//!     .serial_port("/dev/ttyUSB0")
//!     .timeout(Duration::from_millis(800))
//!     .auto_detect(true)
//!     .build()
//!     .await?;
//! let freq = session.get_frequency(rigwire_core::Vfo::Main).await?;
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

use rigwire_core::caps::CapabilityDescriptor;
use rigwire_core::error::{Error, Result};
use rigwire_core::port::PortConfig;
use rigwire_core::transport::Transport;
use rigwire_transport::{SerialTransport, TcpTransport};

use crate::registry;
use crate::session::Session;

#[derive(Debug, Clone)]
enum Endpoint {
    Serial(String),
    Tcp(String),
}

/// Fluent builder for [`Session`].
#[derive(Debug, Clone)]
pub struct SessionBuilder {
    caps: Arc<CapabilityDescriptor>,
    endpoint: Option<Endpoint>,
    port: PortConfig,
    cache_ttl: Duration,
    auto_detect: bool,
}

impl SessionBuilder {
    /// Start from a descriptor.
    ///
    /// Port settings and the cache TTL default to the descriptor's values;
    /// hardware detection is off.
    pub fn new(caps: impl Into<Arc<CapabilityDescriptor>>) -> Self {
        let caps = caps.into();
        SessionBuilder {
            port: caps.port.clone(),
            cache_ttl: caps.cache_ttl,
            caps,
            endpoint: None,
            auto_detect: false,
        }
    }

    /// Start from a registered model id, e.g. `"ic7300"`.
    pub fn for_model(model_id: &str) -> Result<Self> {
        Ok(Self::new(registry::lookup(model_id)?))
    }

    /// Connect over a serial port (e.g. `/dev/ttyUSB0` or `COM3`).
    pub fn serial_port(mut self, path: &str) -> Self {
        self.endpoint = Some(Endpoint::Serial(path.to_string()));
        self
    }

    /// Connect over TCP to `host:port`, e.g. a network serial bridge.
    pub fn tcp(mut self, addr: &str) -> Self {
        self.endpoint = Some(Endpoint::Tcp(addr.to_string()));
        self
    }

    /// Override the model's baud rate.
    pub fn baud_rate(mut self, rate: u32) -> Self {
        self.port.baud_rate = rate;
        self
    }

    /// Response timeout per attempt.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.port.timeout = timeout;
        self
    }

    /// Additional attempts after the first.
    pub fn retry(mut self, n: u32) -> Self {
        self.port.retry = n;
        self
    }

    /// Pause between request bytes.
    pub fn write_delay(mut self, delay: Duration) -> Self {
        self.port.write_delay = delay;
        self
    }

    /// Settle time after each write.
    pub fn post_write_delay(mut self, delay: Duration) -> Self {
        self.port.post_write_delay = delay;
        self
    }

    /// State cache freshness window. Zero disables caching.
    pub fn cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache_ttl = ttl;
        self
    }

    /// Run the model's hardware probe right after opening.
    pub fn auto_detect(mut self, enable: bool) -> Self {
        self.auto_detect = enable;
        self
    }

    /// The port settings the session will use.
    pub fn port_config(&self) -> &PortConfig {
        &self.port
    }

    /// Open the configured endpoint and build the session.
    pub async fn build(self) -> Result<Session> {
        self.port.validate()?;
        let endpoint = self
            .endpoint
            .clone()
            .ok_or_else(|| Error::Config("serial_port or tcp is required for build()".into()))?;
        let transport: Box<dyn Transport> = match endpoint {
            Endpoint::Serial(path) => Box::new(SerialTransport::open(&path, &self.port).await?),
            Endpoint::Tcp(addr) => {
                Box::new(TcpTransport::connect_with_timeout(&addr, self.port.timeout).await?)
            }
        };
        self.build_with_transport(transport).await
    }

    /// Build the session over a caller-provided transport.
    ///
    /// This is the entry point for tests (pass a `MockTransport` from
    /// `rigwire-test-harness`) and for links the caller manages itself.
    pub async fn build_with_transport(self, transport: Box<dyn Transport>) -> Result<Session> {
        self.port.validate()?;
        debug!(
            model = self.caps.model_id,
            baud = self.port.baud_rate,
            timeout = ?self.port.timeout,
            retry = self.port.retry,
            "building session"
        );
        let session = Session::new(self.caps, transport, self.port, self.cache_ttl)?;
        if self.auto_detect {
            session.detect_hardware().await?;
        }
        Ok(session)
    }
}

#[cfg(all(test, feature = "text", feature = "civ"))]
mod tests {
    use super::*;
    use rigwire_core::Vfo;
    use rigwire_test_harness::MockTransport;

    #[tokio::test]
    async fn defaults_follow_descriptor() {
        let builder = SessionBuilder::for_model("ftx1").unwrap();
        assert_eq!(builder.port_config().baud_rate, 38_400);
        let session = builder
            .build_with_transport(Box::new(MockTransport::new()))
            .await
            .unwrap();
        assert_eq!(session.capabilities().model_id, "ftx1");
        assert!(!session.detected_hardware().await.probed);
    }

    #[tokio::test]
    async fn overrides_apply() {
        let builder = SessionBuilder::new(rigwire_civ::ic7300())
            .baud_rate(19_200)
            .timeout(Duration::from_millis(250))
            .retry(1)
            .write_delay(Duration::from_millis(2))
            .post_write_delay(Duration::from_millis(10));
        let port = builder.port_config();
        assert_eq!(port.baud_rate, 19_200);
        assert_eq!(port.timeout, Duration::from_millis(250));
        assert_eq!(port.retry, 1);
        assert_eq!(port.write_delay, Duration::from_millis(2));
        assert_eq!(port.post_write_delay, Duration::from_millis(10));
    }

    #[tokio::test]
    async fn missing_endpoint_is_config_error() {
        let result = SessionBuilder::for_model("ic7300").unwrap().build().await;
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[tokio::test]
    async fn bad_port_config_fails_before_io() {
        let mock = MockTransport::new();
        let result = SessionBuilder::for_model("ic7300")
            .unwrap()
            .baud_rate(0)
            .build_with_transport(Box::new(mock.clone()))
            .await;
        assert!(matches!(result, Err(Error::Config(_))));
        assert_eq!(mock.write_count(), 0);

        let result = SessionBuilder::for_model("ic7300")
            .unwrap()
            .timeout(Duration::ZERO)
            .serial_port("/dev/null-rig")
            .build()
            .await;
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[tokio::test]
    async fn unknown_model_is_config_error() {
        assert!(matches!(SessionBuilder::for_model("nope"), Err(Error::Config(_))));
    }

    #[tokio::test(start_paused = true)]
    async fn zero_ttl_disables_cache() {
        let mock = MockTransport::new();
        let request = [0xFE, 0xFE, 0x94, 0xE0, 0x25, 0x00, 0xFD];
        let mut reply = request.to_vec();
        reply.extend([0xFE, 0xFE, 0xE0, 0x94, 0x25, 0x00, 0x00, 0x40, 0x07, 0x14, 0x00, 0xFD]);
        mock.expect(&request, &reply);
        mock.expect(&request, &reply);
        let session = SessionBuilder::for_model("ic7300")
            .unwrap()
            .cache_ttl(Duration::ZERO)
            .build_with_transport(Box::new(mock.clone()))
            .await
            .unwrap();
        assert_eq!(session.get_frequency(Vfo::A).await.unwrap(), 14_074_000);
        assert_eq!(session.get_frequency(Vfo::A).await.unwrap(), 14_074_000);
        assert_eq!(mock.remaining_expectations(), 0);
    }
}
