//! rigwire-text: Delimiter-terminated ASCII framing family.
//!
//! Text-family rigs (Yaesu, Kenwood) speak short mnemonics
//! followed by fixed-width decimal fields and a terminator, typically `;`.
//! A lone `?;` in place of a reply means the command was refused.
//!
//! # Architecture
//!
//! - [`protocol`] -- frame validation and fixed-width field helpers
//! - [`commands`] -- [`TextDialect`], the table-driven encoder/decoder
//! - [`models`] -- per-model descriptors
//! - [`menus`] -- extended menu tables
//! - [`probe`] -- head and amplifier detection

pub mod commands;
pub mod menus;
pub mod models;
pub mod probe;
pub mod protocol;

pub use commands::TextDialect;
pub use models::{all_text_models, ftx1, ts590sg};
pub use probe::Ftx1HeadProbe;
pub use protocol::{TextCodec, TextFrame};
