//! # rigwire -- protocol-client core for transceiver control
//!
//! `rigwire` drives amateur radio transceivers over their control links.
//! One abstract operation surface (frequency, mode, passband, split,
//! clarifier, levels, functions, memory, scan and extended menus) is
//! expressed in two wire families: semicolon-terminated ASCII commands and
//! addressed binary frames with BCD payloads. Each model is described by an
//! immutable capability descriptor, and every request is validated against
//! it before anything reaches the wire.
//!
//! ## Quick Start
//!
//! ```toml
//! [dependencies]
//! rigwire = "0.1"
//! tokio = { version = "1", features = ["full"] }
//! ```
//!
//! ```no_run
//! use rigwire::{Mode, SessionBuilder, Vfo, VfoSelector};
//!
//! #[tokio::main]
//! async fn main() -> rigwire::Result<()> {
//!     let rig = SessionBuilder::for_model("ic7300")?
//!         .serial_port("/dev/ttyUSB0")
//!         .build()
//!         .await?;
//!
//!     rig.set_frequency(Vfo::A, 14_074_000).await?;
//!     rig.set_mode(VfoSelector::Current, Mode::USB).await?;
//!     println!("VFO-A: {} Hz", rig.get_frequency(Vfo::A).await?);
//!     rig.close().await
//! }
//! ```
//!
//! ## Architecture
//!
//! | Crate               | Purpose                                             |
//! |---------------------|-----------------------------------------------------|
//! | `rigwire-core`      | Types, errors, descriptors, cache, codec traits     |
//! | `rigwire-transport` | Serial and TCP byte links                           |
//! | `rigwire-text`      | ASCII command family and its models                 |
//! | `rigwire-civ`       | Addressed binary family and its models              |
//! | `rigwire-session`   | Transaction engine, [`Session`], [`SessionBuilder`] |
//! | **`rigwire`**       | This facade crate -- re-exports everything          |
//!
//! ## Feature Flags
//!
//! | Feature | Enables                                  | Default |
//! |---------|------------------------------------------|---------|
//! | `text`  | [`text`] module and its models           | yes     |
//! | `civ`   | [`civ`] module and its models            | yes     |
//! | `full`  | Both wire families                       | no      |
//!
//! ## Optional hardware
//!
//! Some menu items only exist when an accessory is fitted. They stay
//! unavailable until [`Session::detect_hardware`] confirms it, either on
//! demand or through [`SessionBuilder::auto_detect`].

pub use rigwire_core::*;

pub use rigwire_session::{Session, SessionBuilder, lookup, supported_models};

/// Byte links: [`SerialTransport`](transport::SerialTransport) and
/// [`TcpTransport`](transport::TcpTransport).
pub mod transport {
    pub use rigwire_core::transport::{ReadUntil, Transport};
    pub use rigwire_transport::*;
}

/// Semicolon-terminated ASCII command family.
///
/// Provides [`TextDialect`](text::TextDialect), the framing codec and the
/// model descriptors, including the hardware probe for the FTX-1 head.
#[cfg(feature = "text")]
pub mod text {
    pub use rigwire_text::*;
}

/// Addressed binary frame family.
///
/// Provides [`CivDialect`](civ::CivDialect), the bus codec with echo
/// handling and the model descriptors.
#[cfg(feature = "civ")]
pub mod civ {
    pub use rigwire_civ::*;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_matches_enabled_families() {
        let ids: Vec<_> = supported_models().iter().map(|m| m.model_id).collect();
        #[cfg(feature = "text")]
        assert!(ids.contains(&"ftx1"));
        #[cfg(feature = "civ")]
        assert!(ids.contains(&"ic7300"));
        assert!(!ids.is_empty());
    }

    #[cfg(feature = "civ")]
    #[tokio::test(start_paused = true)]
    async fn facade_opens_a_session() {
        use rigwire_test_harness::MockTransport;

        let mock = MockTransport::new();
        let session = SessionBuilder::new(civ::ic7300())
            .build_with_transport(Box::new(mock.clone()))
            .await
            .unwrap();
        assert_eq!(session.capabilities().model_id, "ic7300");
        assert_eq!(session.get_vfo().await.unwrap(), Vfo::A);
        assert_eq!(mock.write_count(), 0);
    }
}
