//! Property tests for the engine's retry bound.

#![cfg(feature = "text")]

use std::time::Duration;

use proptest::prelude::*;
use rigwire_core::{Error, Exchange, PortConfig};
use rigwire_session::Engine;
use rigwire_test_harness::MockTransport;
use rigwire_text::TextCodec;

fn paused_runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .start_paused(true)
        .build()
        .unwrap()
}

fn config(retry: u32) -> PortConfig {
    PortConfig {
        retry,
        timeout: Duration::from_millis(100),
        ..PortConfig::default()
    }
}

#[test]
fn prop_silent_device_sees_retry_plus_one_writes() {
    proptest!(|(retry in 0u32..=10)| {
        let mock = MockTransport::silent();
        let codec = TextCodec::semicolon(64);
        let result = paused_runtime().block_on(async {
            let mut engine = Engine::new(Box::new(mock.clone()), config(retry));
            engine
                .execute(&codec, &Exchange::reply(codec.frame("FA"), b"FA".to_vec()))
                .await
        });
        prop_assert!(matches!(result, Err(Error::Timeout)));
        prop_assert_eq!(mock.write_count(), retry as usize + 1);
    });
}

#[test]
fn prop_rejections_exhaust_the_same_bound() {
    proptest!(|(retry in 0u32..=10)| {
        let mock = MockTransport::new();
        let request = b"FA014074000;".to_vec();
        for _ in 0..=retry {
            mock.expect(&request, b"?;");
        }
        let codec = TextCodec::semicolon(64);
        let result = paused_runtime().block_on(async {
            let mut engine = Engine::new(Box::new(mock.clone()), config(retry));
            engine.execute(&codec, &Exchange::reply(request.clone(), b"FA".to_vec())).await
        });
        prop_assert!(matches!(result, Err(Error::Rejected(_))));
        prop_assert_eq!(mock.write_count(), retry as usize + 1);
        prop_assert_eq!(mock.remaining_expectations(), 0);
    });
}

#[test]
fn prop_disconnected_transport_is_never_retried() {
    proptest!(|(retry in 0u32..=10)| {
        let mock = MockTransport::new();
        mock.set_connected(false);
        let codec = TextCodec::semicolon(64);
        let result = paused_runtime().block_on(async {
            let mut engine = Engine::new(Box::new(mock.clone()), config(retry));
            engine
                .execute(&codec, &Exchange::reply(codec.frame("FA"), b"FA".to_vec()))
                .await
        });
        prop_assert!(matches!(result, Err(Error::NotConnected)));
        prop_assert_eq!(mock.write_count(), 0);
    });
}
