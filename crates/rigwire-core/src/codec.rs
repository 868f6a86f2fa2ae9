//! Frame codec and dialect contracts.
//!
//! A [`FrameCodec`] knows how one framing family delimits and validates
//! responses; a [`Dialect`] adds the per-model mapping between abstract
//! [`Command`]s and wire exchanges. The transaction engine drives an
//! [`Exchange`] using only the `FrameCodec` half, so it never needs to know
//! which family it is talking to.

use std::fmt;

use crate::command::Command;
use crate::error::Result;
use crate::hardware::DetectedHardware;
use crate::transport::ReadUntil;
use crate::types::{Value, Vfo};

/// The response shape one request expects. The engine is told, never
/// guesses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expect {
    /// A data frame that starts with (text) or carries (binary) this
    /// prefix.
    Reply(Vec<u8>),
    /// The request echoed back verbatim.
    Echo,
    /// A positive acknowledgement frame.
    Ack,
    /// No reply to the request itself; write this follow-up query and read
    /// its answer. A rejection marker read in its place means the request
    /// was refused.
    Verify(Vec<u8>),
    /// No reply at all. The engine drains briefly so that a rejection
    /// marker is still noticed.
    Silent,
}

impl Expect {
    /// Whether a successful exchange yields a frame for the decoder.
    pub fn yields_frame(&self) -> bool {
        matches!(self, Expect::Reply(_))
    }
}

/// One encoded request together with its expected response shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exchange {
    /// Complete wire bytes, terminator included.
    pub request: Vec<u8>,
    /// What must come back.
    pub expect: Expect,
}

impl Exchange {
    /// A query answered by a frame carrying `prefix`.
    pub fn reply(request: Vec<u8>, prefix: impl Into<Vec<u8>>) -> Self {
        Exchange {
            request,
            expect: Expect::Reply(prefix.into()),
        }
    }

    /// A set answered by an echo of itself.
    pub fn echo(request: Vec<u8>) -> Self {
        Exchange {
            request,
            expect: Expect::Echo,
        }
    }

    /// A set answered by an acknowledgement.
    pub fn ack(request: Vec<u8>) -> Self {
        Exchange {
            request,
            expect: Expect::Ack,
        }
    }

    /// A set confirmed by a follow-up query.
    pub fn verify(request: Vec<u8>, query: impl Into<Vec<u8>>) -> Self {
        Exchange {
            request,
            expect: Expect::Verify(query.into()),
        }
    }

    /// A set with no reply.
    pub fn silent(request: Vec<u8>) -> Self {
        Exchange {
            request,
            expect: Expect::Silent,
        }
    }
}

/// Framing rules of one family.
///
/// `decode_frame` is the single validation point: it checks markers,
/// length and addresses before anything indexes into the payload, returns
/// [`Error::Rejected`](crate::Error::Rejected) for the device's
/// invalid-command signal and [`Error::Garbled`](crate::Error::Garbled) for
/// anything malformed.
pub trait FrameCodec: Send + Sync {
    /// A validated response.
    type Frame: fmt::Debug + Send;

    /// How the transport finds the end of one response.
    fn read_rule(&self) -> ReadUntil;

    /// Upper bound on a single response, in bytes.
    fn max_frame(&self) -> usize;

    /// Validate raw bytes as one complete frame.
    fn decode_frame(&self, raw: &[u8]) -> Result<Self::Frame>;

    /// Whether the link echoes every request back before the reply.
    fn echoes_requests(&self) -> bool {
        false
    }

    /// Whether `frame` is the reply an [`Expect::Reply`] prefix asks for.
    fn matches(&self, prefix: &[u8], frame: &Self::Frame) -> bool;

    /// Whether `frame` is a positive acknowledgement.
    fn is_ack(&self, frame: &Self::Frame) -> bool;
}

/// A model's command mapping on top of its framing.
pub trait Dialect: FrameCodec {
    /// Encode `cmd` into one exchange. `current` is the session's selected
    /// VFO, for dialects that address VFOs relative to the selection.
    ///
    /// Fails with [`Error::Unavailable`](crate::Error::Unavailable) when the
    /// dialect has no wire form for the command and with
    /// [`Error::OutOfRange`](crate::Error::OutOfRange) when an argument
    /// cannot be represented, before anything is written.
    fn encode(&self, cmd: &Command, current: Vfo) -> Result<Exchange>;

    /// [`encode`](Self::encode) for the hardware found by detection.
    /// Dialects whose wire forms never depend on it keep this default.
    fn encode_for(&self, cmd: &Command, current: Vfo, _hw: &DetectedHardware) -> Result<Exchange> {
        self.encode(cmd, current)
    }

    /// Decode the result of a completed exchange. `frame` is `Some` exactly
    /// when the exchange expected a reply.
    fn decode(&self, cmd: &Command, frame: Option<&Self::Frame>) -> Result<Value>;
}
