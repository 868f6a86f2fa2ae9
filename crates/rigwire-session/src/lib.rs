//! rigwire-session: Transaction engine and session composition.
//!
//! This crate turns a [`CapabilityDescriptor`](rigwire_core::CapabilityDescriptor)
//! and a [`Transport`](rigwire_core::Transport) into a [`Session`]: the
//! abstract operation surface (frequency, mode, split, levels, menus, ...)
//! with selector resolution, descriptor validation, a freshness-bounded
//! state cache and optional-hardware detection.
//!
//! # Architecture
//!
//! - [`engine`] -- one request/response exchange with flush, pacing,
//!   timeout and bounded retry
//! - [`backend`] -- picks the framing family from the descriptor
//! - [`registry`] -- shared descriptors by model id
//! - [`session`] -- [`Session`], serialized behind one async mutex
//! - [`builder`] -- [`SessionBuilder`], configuration and opening
//!
//! The `text` and `civ` features (both default) select which framing
//! families are compiled in.

pub mod backend;
pub mod builder;
pub mod engine;
pub mod registry;
pub mod session;

pub use backend::Backend;
pub use builder::SessionBuilder;
pub use engine::Engine;
pub use registry::{lookup, supported_models};
pub use session::Session;
