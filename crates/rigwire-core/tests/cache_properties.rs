//! Property tests for state cache freshness and invalidation.

use std::time::Duration;

use proptest::prelude::*;
use rigwire_core::{Quantity, StateCache, Value, Vfo};
use tokio::time::Instant;

fn vfo_strategy() -> impl Strategy<Value = Vfo> {
    prop_oneof![Just(Vfo::A), Just(Vfo::B), Just(Vfo::Main), Just(Vfo::Sub)]
}

#[test]
fn prop_fresh_iff_elapsed_within_ttl() {
    proptest!(|(ttl_ms in 1u64..=10_000, elapsed_ms in 0u64..=20_000, freq in 1u64..=470_000_000)| {
        let ttl = Duration::from_millis(ttl_ms);
        let mut cache = StateCache::new(ttl);
        let t0 = Instant::now();
        cache.write_at(Vfo::A, Quantity::Frequency, Value::Frequency(freq), t0);

        let (value, fresh) =
            cache.read_at(Vfo::A, Quantity::Frequency, t0 + Duration::from_millis(elapsed_ms));
        prop_assert_eq!(fresh, elapsed_ms <= ttl_ms);
        prop_assert_eq!(value.is_some(), fresh);
    });
}

#[test]
fn prop_stale_regardless_of_value_change() {
    proptest!(|(ttl_ms in 1u64..=1_000, first in 1u64..=60_000_000, second in 1u64..=60_000_000)| {
        let ttl = Duration::from_millis(ttl_ms);
        let mut cache = StateCache::new(ttl);
        let t0 = Instant::now();
        cache.write_at(Vfo::B, Quantity::Frequency, Value::Frequency(first), t0);
        // A later write to another key never refreshes this one.
        cache.write_at(Vfo::A, Quantity::Frequency, Value::Frequency(second), t0 + ttl);
        let later = t0 + ttl + Duration::from_millis(1);
        prop_assert_eq!(cache.read_at(Vfo::B, Quantity::Frequency, later), (None, false));
    });
}

#[test]
fn prop_invalidate_vfo_only_touches_that_vfo() {
    proptest!(|(target in vfo_strategy(), other in vfo_strategy(), freq in 1u64..=60_000_000)| {
        prop_assume!(target != other);
        let mut cache = StateCache::new(Duration::from_secs(10));
        cache.write(target, Quantity::Frequency, Value::Frequency(freq));
        cache.write(other, Quantity::Frequency, Value::Frequency(freq));
        cache.invalidate_vfo(target);
        prop_assert!(!cache.read(target, Quantity::Frequency).1);
        prop_assert!(cache.read(other, Quantity::Frequency).1);
    });
}
