//! Error types for rigwire.
//!
//! Every fallible call in the workspace returns [`Result<T>`]. Configuration, transport, framing and
//! device-level failures are all captured here so that every public
//! operation yields a typed outcome.

/// The error type for all rigwire operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Bad endpoint or parameters. Raised before any transaction is attempted.
    #[error("configuration error: {0}")]
    Config(String),

    /// Nothing arrived within the response timeout. Usually a powered-off
    /// device, a wrong baud rate or a wrong bus address.
    #[error("no response within timeout")]
    Timeout,

    /// A response arrived but failed framing or length validation.
    #[error("garbled response: {0}")]
    Garbled(String),

    /// The device explicitly signalled an invalid command or value.
    #[error("rejected by device: {0}")]
    Rejected(String),

    /// The operation is gated off by the capability descriptor or by
    /// optional hardware that was not detected.
    #[error("not available: {0}")]
    Unavailable(String),

    /// A caller-supplied value lies outside the declared bounds.
    #[error("{what} value {value} out of range {min}..={max}")]
    OutOfRange {
        /// Name of the setting being validated.
        what: String,
        /// The rejected value.
        value: i64,
        /// Inclusive lower bound.
        min: i64,
        /// Inclusive upper bound.
        max: i64,
    },

    /// A transport-level error (serial port, TCP socket).
    #[error("transport: {0}")]
    Transport(String),

    /// No connection to the device has been established.
    #[error("not connected")]
    NotConnected,

    /// The connection to the device was lost unexpectedly.
    #[error("connection lost")]
    ConnectionLost,

    /// An underlying I/O failure.
    #[error("i/o: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Build an [`Error::OutOfRange`] for `what`.
    pub fn out_of_range(what: impl Into<String>, value: i64, min: i64, max: i64) -> Self {
        Error::OutOfRange {
            what: what.into(),
            value,
            min,
            max,
        }
    }

    /// Whether the transaction engine may turn this failure into another
    /// attempt. Everything else propagates on first occurrence.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Error::Timeout | Error::Garbled(_) | Error::Rejected(_))
    }
}

/// `Result` with [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
