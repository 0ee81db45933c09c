/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

use prism3_sync::AtomicCounter;
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_dec_never_below_floor(default in -1_000i64..1_000, delta in 0i64..10_000) {
        let counter = AtomicCounter::with_floor(default);
        prop_assert!(counter.dec_by(delta) >= default);
        prop_assert!(counter.get() >= default);
    }

    #[test]
    fn prop_floor_holds_over_any_sequence(
        default in -100i64..100,
        deltas in prop::collection::vec(-50i64..50, 0..64),
    ) {
        let counter = AtomicCounter::with_floor(default);
        for delta in deltas {
            counter.inc_by(delta);
            prop_assert!(counter.get() >= default);
        }
    }

    #[test]
    fn prop_unfloored_dec_is_exact(default in -1_000i64..1_000, delta in 0i64..10_000) {
        let counter = AtomicCounter::new(default);
        prop_assert_eq!(counter.dec_by(delta), default - delta);
    }

    #[test]
    fn prop_reset_is_idempotent(default in any::<i32>(), delta in any::<i32>()) {
        let counter = AtomicCounter::new(default);
        counter.inc_by(delta);
        let once = counter.reset();
        let twice = counter.reset();
        prop_assert_eq!(once, twice);
        prop_assert_eq!(twice, default);
    }
}
