//! Family dispatch.
//!
//! A session holds one [`Backend`], chosen from the descriptor's protocol
//! tag when the session is opened. Each arm wraps the family's dialect;
//! the transaction itself is the same generic encode/execute/decode run
//! for every family.

use rigwire_core::codec::{Dialect, Exchange};
use rigwire_core::command::Command;
use rigwire_core::dialect::Protocol;
use rigwire_core::error::{Error, Result};
use rigwire_core::hardware::DetectedHardware;
use rigwire_core::types::{Value, Vfo};

#[cfg(feature = "civ")]
use rigwire_civ::CivDialect;
#[cfg(feature = "text")]
use rigwire_text::TextDialect;

use crate::engine::Engine;

#[cfg(not(any(feature = "text", feature = "civ")))]
compile_error!("rigwire-session needs at least one of the `text` or `civ` features");

/// The dialect a session talks through.
#[derive(Debug, Clone)]
pub enum Backend {
    #[cfg(feature = "text")]
    Text(TextDialect),
    #[cfg(feature = "civ")]
    Civ(CivDialect),
}

impl Backend {
    /// Pick the dialect for a protocol tag.
    pub fn for_protocol(protocol: &Protocol) -> Result<Self> {
        match protocol {
            #[cfg(feature = "text")]
            Protocol::Text(spec) => Ok(Backend::Text(TextDialect::new(spec.clone()))),
            #[cfg(feature = "civ")]
            Protocol::Binary(spec) => Ok(Backend::Civ(CivDialect::new(spec.clone()))),
            #[allow(unreachable_patterns)]
            other => Err(Error::Config(format!(
                "framing family of {other:?} is not compiled in"
            ))),
        }
    }

    /// Encode `cmd` for the hardware in `hw`, run it, decode the result.
    pub async fn transact(
        &self,
        engine: &mut Engine,
        cmd: &Command,
        current: Vfo,
        hw: &DetectedHardware,
    ) -> Result<Value> {
        match self {
            #[cfg(feature = "text")]
            Backend::Text(d) => run(d, engine, cmd, current, hw).await,
            #[cfg(feature = "civ")]
            Backend::Civ(d) => run(d, engine, cmd, current, hw).await,
        }
    }

    /// Send a raw query and return the whole reply.
    pub async fn raw_query(&self, engine: &mut Engine, request: &[u8]) -> Result<Vec<u8>> {
        let reply = match self {
            #[cfg(feature = "text")]
            Backend::Text(d) => {
                let body = request.strip_suffix(&[d.codec().terminator()]).unwrap_or(request);
                let exchange = Exchange::reply(request.to_vec(), body.to_vec());
                engine.execute_raw(d.codec(), &exchange).await?
            }
            #[cfg(feature = "civ")]
            Backend::Civ(d) => {
                // Command and sub-command sit between the addresses and the end marker.
                let prefix = request
                    .get(4..request.len().saturating_sub(1))
                    .unwrap_or_default()
                    .to_vec();
                let exchange = Exchange::reply(request.to_vec(), prefix);
                engine.execute_raw(d.codec(), &exchange).await?
            }
        };
        reply.ok_or_else(|| Error::Garbled("query produced no reply".into()))
    }

    /// Send a raw set, confirmed the way the model confirms sets.
    pub async fn raw_command(&self, engine: &mut Engine, request: &[u8]) -> Result<()> {
        match self {
            #[cfg(feature = "text")]
            Backend::Text(d) => {
                engine.execute(d.codec(), &d.set_exchange(request.to_vec())).await?;
            }
            #[cfg(feature = "civ")]
            Backend::Civ(d) => {
                engine.execute(d.codec(), &Exchange::ack(request.to_vec())).await?;
            }
        }
        Ok(())
    }
}

async fn run<D: Dialect>(
    dialect: &D,
    engine: &mut Engine,
    cmd: &Command,
    current: Vfo,
    hw: &DetectedHardware,
) -> Result<Value> {
    let exchange = dialect.encode_for(cmd, current, hw)?;
    let frame = engine.execute(dialect, &exchange).await?;
    dialect.decode(cmd, frame.as_ref())
}

#[cfg(all(test, feature = "text", feature = "civ"))]
mod tests {
    use super::*;
    use std::time::Duration;

    use rigwire_core::port::PortConfig;
    use rigwire_test_harness::MockTransport;

    fn engine(mock: &MockTransport) -> Engine {
        let config = PortConfig {
            timeout: Duration::from_millis(100),
            retry: 0,
            ..PortConfig::default()
        };
        Engine::new(Box::new(mock.clone()), config)
    }

    fn unknown() -> DetectedHardware {
        DetectedHardware::default()
    }

    #[test]
    fn protocol_picks_family() {
        let text = Backend::for_protocol(&rigwire_text::ftx1().protocol).unwrap();
        assert!(matches!(text, Backend::Text(_)));
        let civ = Backend::for_protocol(&rigwire_civ::ic7300().protocol).unwrap();
        assert!(matches!(civ, Backend::Civ(_)));
    }

    #[tokio::test(start_paused = true)]
    async fn text_transaction_decodes() {
        let backend = Backend::for_protocol(&rigwire_text::ftx1().protocol).unwrap();
        let mock = MockTransport::new();
        mock.expect(b"FA;", b"FA014074000;");
        let value = backend
            .transact(&mut engine(&mock), &Command::GetFrequency(Vfo::Main), Vfo::Main, &unknown())
            .await
            .unwrap();
        assert_eq!(value, Value::Frequency(14_074_000));
    }

    #[tokio::test(start_paused = true)]
    async fn civ_transaction_decodes() {
        let backend = Backend::for_protocol(&rigwire_civ::ic7300().protocol).unwrap();
        let mock = MockTransport::new();
        let request = [0xFE, 0xFE, 0x94, 0xE0, 0x1C, 0x00, 0xFD];
        let mut response = request.to_vec();
        response.extend([0xFE, 0xFE, 0xE0, 0x94, 0x1C, 0x00, 0x01, 0xFD]);
        mock.expect(&request, &response);
        let value = backend
            .transact(&mut engine(&mock), &Command::GetPtt, Vfo::A, &unknown())
            .await
            .unwrap();
        assert_eq!(value, Value::Bool(true));
    }

    #[tokio::test(start_paused = true)]
    async fn encode_failure_writes_nothing() {
        let backend = Backend::for_protocol(&rigwire_civ::ic7300().protocol).unwrap();
        let mock = MockTransport::new();
        let err = backend
            .transact(&mut engine(&mock), &Command::GetXit(Vfo::A), Vfo::A, &unknown())
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Unavailable(_)));
        assert_eq!(mock.write_count(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn raw_query_returns_whole_reply() {
        let backend = Backend::for_protocol(&rigwire_text::ftx1().protocol).unwrap();
        let mock = MockTransport::new();
        mock.expect(b"PC;", b"PC1005;");
        let reply = backend.raw_query(&mut engine(&mock), b"PC;").await.unwrap();
        assert_eq!(reply, b"PC1005;");
    }

    #[tokio::test(start_paused = true)]
    async fn raw_command_uses_set_reply_rule() {
        let backend = Backend::for_protocol(&rigwire_text::ftx1().protocol).unwrap();
        let mock = MockTransport::new();
        mock.expect_silent(b"PC1008;");
        mock.expect(b"ID;", b"ID0840;");
        backend.raw_command(&mut engine(&mock), b"PC1008;").await.unwrap();
        assert_eq!(mock.remaining_expectations(), 0);
    }
}
