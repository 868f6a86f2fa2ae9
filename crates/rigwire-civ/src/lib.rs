//! rigwire-civ: Marker-delimited binary framing family (Icom CI-V).
//!
//! CI-V frames open with `FE FE`, carry the destination and source bus
//! addresses, a command byte and a packed-decimal payload, and close with
//! `FD`. The transceiver answers sets with `FB` (accepted) or `FA`
//! (refused), and on a shared bus every request is echoed back to its
//! sender.
//!
//! # Architecture
//!
//! - [`civ`] -- frame encode/validate and packed-decimal helpers
//! - [`commands`] -- [`CivDialect`], the table-driven encoder/decoder
//! - [`models`] -- per-model descriptors

pub mod civ;
pub mod commands;
pub mod models;

pub use civ::{CivCodec, CivFrame};
pub use commands::CivDialect;
pub use models::{all_civ_models, ic705, ic7300};
