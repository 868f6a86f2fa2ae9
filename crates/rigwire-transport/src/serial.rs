//! Serial port transport.
//!
//! [`SerialTransport`] implements [`Transport`] for USB virtual COM ports and
//! RS-232 lines. Line settings come from the model's [`PortConfig`]:
//!
//! - Yaesu text CAT: typically 38400 baud, sometimes two stop bits
//! - Kenwood text CAT: typically 9600 or 115200 baud, often RTS/CTS
//! - Icom CI-V: typically 19200 or 115200 baud, no handshake
//!
//! # Example
//!
//! ```no_run
//! use rigwire_core::{PortConfig, Transport};
//! use rigwire_transport::SerialTransport;
//!
//! # async fn example() -> rigwire_core::Result<()> {
//! let config = PortConfig {
//!     baud_rate: 38400,
//!     ..Default::default()
//! };
//! let mut transport = SerialTransport::open("/dev/ttyUSB0", &config).await?;
//! transport.send(b"FA;").await?;
//! # Ok(())
//! # }
//! ```

use std::time::Duration;

use async_trait::async_trait;
use rigwire_core::error::{Error, Result};
use rigwire_core::port::{DataBits, Handshake, Parity, PortConfig, StopBits};
use rigwire_core::transport::Transport;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio_serial::{ClearBuffer, SerialPort, SerialPortBuilderExt, SerialStream};

fn data_bits(bits: DataBits) -> tokio_serial::DataBits {
    match bits {
        DataBits::Five => tokio_serial::DataBits::Five,
        DataBits::Six => tokio_serial::DataBits::Six,
        DataBits::Seven => tokio_serial::DataBits::Seven,
        DataBits::Eight => tokio_serial::DataBits::Eight,
    }
}

fn stop_bits(bits: StopBits) -> tokio_serial::StopBits {
    match bits {
        StopBits::One => tokio_serial::StopBits::One,
        StopBits::Two => tokio_serial::StopBits::Two,
    }
}

fn parity(parity: Parity) -> tokio_serial::Parity {
    match parity {
        Parity::None => tokio_serial::Parity::None,
        Parity::Odd => tokio_serial::Parity::Odd,
        Parity::Even => tokio_serial::Parity::Even,
    }
}

fn flow_control(handshake: Handshake) -> tokio_serial::FlowControl {
    match handshake {
        Handshake::None => tokio_serial::FlowControl::None,
        Handshake::Software => tokio_serial::FlowControl::Software,
        Handshake::Hardware => tokio_serial::FlowControl::Hardware,
    }
}

fn io_error(e: std::io::Error) -> Error {
    if e.kind() == std::io::ErrorKind::BrokenPipe || e.kind() == std::io::ErrorKind::NotConnected {
        Error::ConnectionLost
    } else {
        Error::Io(e)
    }
}

/// Serial port transport.
///
/// The port is closed when the transport is closed or dropped, whichever
/// comes first.
pub struct SerialTransport {
    port: Option<SerialStream>,
    port_name: String,
}

impl SerialTransport {
    /// Open `path` with the line settings in `config`.
    ///
    /// Fails with [`Error::Config`] for settings that cannot work and with
    /// [`Error::Transport`] if the OS refuses the port.
    pub async fn open(path: &str, config: &PortConfig) -> Result<Self> {
        if path.is_empty() {
            return Err(Error::Config("serial port path is empty".into()));
        }
        config.validate()?;

        tracing::debug!(
            port = %path,
            baud_rate = config.baud_rate,
            data_bits = ?config.data_bits,
            stop_bits = ?config.stop_bits,
            parity = ?config.parity,
            handshake = ?config.handshake,
            "opening serial port"
        );

        let mut stream = tokio_serial::new(path, config.baud_rate)
            .data_bits(data_bits(config.data_bits))
            .stop_bits(stop_bits(config.stop_bits))
            .parity(parity(config.parity))
            .flow_control(flow_control(config.handshake))
            .open_native_async()
            .map_err(|e| {
                tracing::error!(port = %path, error = %e, "failed to open serial port");
                Error::Transport(format!("failed to open serial port {path}: {e}"))
            })?;

        // DTR/RTS are often wired to PTT or CW key inputs.
        if config.handshake != Handshake::Hardware {
            if let Err(e) = stream.write_data_terminal_ready(false) {
                tracing::warn!(port = %path, error = %e, "failed to de-assert DTR");
            }
            if let Err(e) = stream.write_request_to_send(false) {
                tracing::warn!(port = %path, error = %e, "failed to de-assert RTS");
            }
        }

        tracing::info!(port = %path, baud_rate = config.baud_rate, "serial port opened");

        Ok(Self {
            port: Some(stream),
            port_name: path.to_string(),
        })
    }

    /// Name of the serial port.
    pub fn port_name(&self) -> &str {
        &self.port_name
    }
}

#[async_trait]
impl Transport for SerialTransport {
    async fn send(&mut self, data: &[u8]) -> Result<()> {
        let port = self.port.as_mut().ok_or(Error::NotConnected)?;
        tracing::trace!(port = %self.port_name, bytes = data.len(), data = ?data, "send");

        port.write_all(data).await.map_err(|e| {
            tracing::error!(port = %self.port_name, error = %e, "serial write failed");
            io_error(e)
        })?;
        port.flush().await.map_err(Error::Io)?;
        Ok(())
    }

    async fn receive(&mut self, buf: &mut [u8], timeout: Duration) -> Result<usize> {
        let port = self.port.as_mut().ok_or(Error::NotConnected)?;

        match tokio::time::timeout(timeout, port.read(buf)).await {
            Ok(Ok(n)) => {
                tracing::trace!(port = %self.port_name, bytes = n, data = ?&buf[..n], "receive");
                Ok(n)
            }
            Ok(Err(e)) => {
                tracing::error!(port = %self.port_name, error = %e, "serial read failed");
                Err(io_error(e))
            }
            Err(_) => Err(Error::Timeout),
        }
    }

    async fn flush_input(&mut self) -> Result<()> {
        let port = self.port.as_mut().ok_or(Error::NotConnected)?;
        port.clear(ClearBuffer::Input)
            .map_err(|e| Error::Transport(format!("failed to clear input buffer: {e}")))
    }

    async fn close(&mut self) -> Result<()> {
        if let Some(mut port) = self.port.take() {
            if let Err(e) = port.flush().await {
                tracing::warn!(port = %self.port_name, error = %e, "flush before close failed");
            }
            tracing::info!(port = %self.port_name, "serial port closed");
        }
        Ok(())
    }

    fn is_connected(&self) -> bool {
        self.port.is_some()
    }
}

impl Drop for SerialTransport {
    fn drop(&mut self) {
        if self.port.is_some() {
            tracing::debug!(port = %self.port_name, "serial transport dropped while open");
        }
    }
}
