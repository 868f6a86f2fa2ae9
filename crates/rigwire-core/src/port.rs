//! Link parameters and transaction timing.
//!
//! [`PortConfig`] carries everything a session needs to talk to a device:
//! line settings for serial links and the pacing, timeout and retry
//! tunables the transaction engine applies to every exchange. Each model
//! descriptor ships defaults; callers override individual fields.

use std::time::Duration;

use crate::error::{Error, Result};

/// Number of data bits per character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataBits {
    Five,
    Six,
    Seven,
    Eight,
}

/// Number of stop bits per character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopBits {
    One,
    Two,
}

/// Parity checking mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parity {
    None,
    Odd,
    Even,
}

/// Handshake (flow control) mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handshake {
    None,
    Software,
    Hardware,
}

/// Line settings plus transaction timing for one device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortConfig {
    /// Baud rate (e.g., 4800, 9600, 19200, 38400, 115200).
    pub baud_rate: u32,
    /// Data bits per character.
    pub data_bits: DataBits,
    /// Stop bits per character.
    pub stop_bits: StopBits,
    /// Parity checking.
    pub parity: Parity,
    /// Handshake mode.
    pub handshake: Handshake,
    /// Pause between consecutive bytes of one request. Zero writes the
    /// request in a single call.
    pub write_delay: Duration,
    /// Settle time after a request is written, before reading.
    pub post_write_delay: Duration,
    /// Budget for one response.
    pub timeout: Duration,
    /// Additional attempts after the first; an exchange writes at most
    /// `retry + 1` times.
    pub retry: u32,
    /// How long a set that expects no reply waits for a rejection marker.
    pub set_drain: Duration,
}

impl Default for PortConfig {
    fn default() -> Self {
        Self {
            baud_rate: 9600,
            data_bits: DataBits::Eight,
            stop_bits: StopBits::One,
            parity: Parity::None,
            handshake: Handshake::None,
            write_delay: Duration::ZERO,
            post_write_delay: Duration::ZERO,
            timeout: Duration::from_millis(500),
            retry: 3,
            set_drain: Duration::from_millis(50),
        }
    }
}

impl PortConfig {
    /// Reject settings no device could work with, before any I/O.
    pub fn validate(&self) -> Result<()> {
        if self.baud_rate == 0 {
            return Err(Error::Config("baud rate must be non-zero".into()));
        }
        if self.timeout.is_zero() {
            return Err(Error::Config("response timeout must be non-zero".into()));
        }
        if self.retry > 10 {
            return Err(Error::Config(format!(
                "retry count {} exceeds the limit of 10",
                self.retry
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_8n1_without_pacing() {
        let config = PortConfig::default();
        assert_eq!(config.baud_rate, 9600);
        assert_eq!(config.data_bits, DataBits::Eight);
        assert_eq!(config.stop_bits, StopBits::One);
        assert_eq!(config.parity, Parity::None);
        assert_eq!(config.handshake, Handshake::None);
        assert_eq!(config.write_delay, Duration::ZERO);
        assert_eq!(config.post_write_delay, Duration::ZERO);
        assert_eq!(config.timeout, Duration::from_millis(500));
        assert_eq!(config.retry, 3);
    }

    #[test]
    fn default_validates() {
        assert!(PortConfig::default().validate().is_ok());
    }

    #[test]
    fn zero_baud_rejected() {
        let config = PortConfig {
            baud_rate: 0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(Error::Config(_))));
    }

    #[test]
    fn zero_timeout_rejected() {
        let config = PortConfig {
            timeout: Duration::ZERO,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(Error::Config(_))));
    }

    #[test]
    fn excessive_retry_rejected() {
        let config = PortConfig {
            retry: 11,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(Error::Config(_))));
    }
}
