//! Transport implementations for rigwire.
//!
//! Concrete implementations of the [`Transport`](rigwire_core::Transport)
//! trait from `rigwire-core`:
//!
//! - [`SerialTransport`]: USB virtual COM ports and RS-232 lines
//! - [`TcpTransport`]: network CAT bridges and Ethernet-equipped rigs
//!
//! Both close their endpoint on [`close`](rigwire_core::Transport::close)
//! and again, implicitly, when dropped.

pub mod serial;
pub mod tcp;

pub use serial::SerialTransport;
pub use tcp::TcpTransport;
