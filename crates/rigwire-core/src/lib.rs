//! rigwire-core: Core types, contracts and error definitions for rigwire.
//!
//! This crate defines the family-agnostic pieces every dialect plugs into.
//! Dialect crates (`rigwire-text`, `rigwire-civ`) depend on it for the
//! codec contracts and descriptor types; the session crate composes them.
//!
//! # Key types
//!
//! - [`CapabilityDescriptor`] -- immutable per-model metadata and dispatch
//! - [`FrameCodec`] / [`Dialect`] -- framing and command mapping contracts
//! - [`Transport`] -- byte-level communication channel
//! - [`MenuTable`] -- extended menu items keyed by [`MenuToken`]
//! - [`StateCache`] -- freshness-bounded device state
//! - [`HardwareProbe`] -- optional-module detection hook
//! - [`Error`] / [`Result`] -- error handling

pub mod cache;
pub mod caps;
pub mod codec;
pub mod command;
pub mod dialect;
pub mod error;
pub mod hardware;
pub mod menu;
pub mod port;
pub mod probe;
pub mod transport;
pub mod types;

// Re-export key types at crate root for ergonomic `use rigwire_core::*`.
pub use cache::StateCache;
pub use caps::{CapabilityDescriptor, DEFAULT_CACHE_TTL, GainRange, MaxPowerItem};
pub use codec::{Dialect, Exchange, Expect, FrameCodec};
pub use command::{Command, Operation, OperationSet};
pub use dialect::{BinarySpec, DigitOrder, Field, MemoryLayout, Protocol, SetReply, TextSpec};
pub use error::{Error, Result};
pub use hardware::{DetectedHardware, OptionalHardware, PowerClass, Presence};
pub use menu::{MenuItem, MenuKind, MenuTable, MenuToken, MenuValue};
pub use port::{DataBits, Handshake, Parity, PortConfig, StopBits};
pub use probe::{HardwareProbe, PerturbOutcome, PerturbRestore, ProbeIo};
pub use transport::{ReadUntil, Transport};
pub use types::*;
