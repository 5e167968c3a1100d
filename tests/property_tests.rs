//! Property-based tests for dispatch semantics.
//!
//! These tests use proptest to compare the machine against a plain map model
//! across many randomly generated transition tables and event sequences.

use lockstep::{event_enum, state_enum, Fsm};
use proptest::prelude::*;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

state_enum! {
    enum Gear {
        Off,
        First,
        Second,
        Third,
    }
}

event_enum! {
    enum Button {
        PressOff,
        PressFirst,
        PressSecond,
        PressThird,
    }
}

prop_compose! {
    fn arbitrary_gear()(variant in 0..4u8) -> Gear {
        match variant {
            0 => Gear::Off,
            1 => Gear::First,
            2 => Gear::Second,
            _ => Gear::Third,
        }
    }
}

prop_compose! {
    fn arbitrary_button()(variant in 0..4u8) -> Button {
        match variant {
            0 => Button::PressOff,
            1 => Button::PressFirst,
            2 => Button::PressSecond,
            _ => Button::PressThird,
        }
    }
}

fn arbitrary_registrations() -> impl Strategy<Value = Vec<(Gear, Button, Gear)>> {
    prop::collection::vec((arbitrary_gear(), arbitrary_button(), arbitrary_gear()), 0..24)
}

proptest! {
    #[test]
    fn dispatch_matches_first_wins_model(
        initial in arbitrary_gear(),
        registrations in arbitrary_registrations(),
        events in prop::collection::vec(arbitrary_button(), 0..32),
    ) {
        let mut fsm = Fsm::new(initial);
        let mut model: HashMap<(Gear, Button), Gear> = HashMap::new();

        for (state, event, target) in registrations {
            fsm.add_handler(state, event, move || target);
            model.entry((state, event)).or_insert(target);
        }

        let mut expected = initial;
        for event in events {
            if let Some(target) = model.get(&(expected, event)) {
                expected = *target;
            }
            prop_assert_eq!(fsm.call(event), expected);
            prop_assert_eq!(fsm.current_state(), expected);
        }
    }

    #[test]
    fn unregistered_event_is_identity(
        initial in arbitrary_gear(),
        event in arbitrary_button(),
    ) {
        let fsm: Fsm<Gear, Button> = Fsm::new(initial);
        prop_assert_eq!(fsm.call(event), initial);
        prop_assert_eq!(fsm.current_state(), initial);
    }

    #[test]
    fn self_loop_runs_once_per_dispatch(
        state in arbitrary_gear(),
        event in arbitrary_button(),
        repeats in 1..20usize,
    ) {
        let runs = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&runs);
        let mut fsm = Fsm::new(state);
        fsm.add_handler(state, event, move || {
            seen.fetch_add(1, Ordering::SeqCst);
            state
        });

        for _ in 0..repeats {
            prop_assert_eq!(fsm.call(event), state);
        }
        prop_assert_eq!(runs.load(Ordering::SeqCst), repeats);
    }

    #[test]
    fn try_add_handler_rejects_exactly_the_taken_pairs(
        registrations in arbitrary_registrations(),
    ) {
        let mut fsm = Fsm::new(Gear::Off);
        let mut taken = std::collections::HashSet::new();

        for (state, event, target) in registrations {
            let accepted = fsm.try_add_handler(state, event, move || target).is_ok();
            prop_assert_eq!(accepted, taken.insert((state, event)));
        }
    }
}
