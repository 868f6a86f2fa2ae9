//! rigwire-test-harness: Mock transports and simulated device peers for
//! rigwire.
//!
//! - [`MockTransport`] -- ordered request/response expectations with a
//!   sent-data log and write/flush counters
//! - [`SimTransport`] -- a closure-driven device with mutable state
//! - [`MockTcpServer`] -- a scripted TCP peer for transport tests

pub mod mock_serial;
pub mod mock_tcp;
pub mod sim;

pub use mock_serial::MockTransport;
pub use mock_tcp::MockTcpServer;
pub use sim::SimTransport;
