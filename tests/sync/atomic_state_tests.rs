/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

use prism3_sync::{
    AtomicError,
    AtomicState,
    StateCode,
};
use std::thread;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    A = 0,
    B = 1,
    C = 2,
}

impl StateCode for State {
    fn to_code(self) -> Option<i64> {
        Some(self as i64)
    }

    fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(State::A),
            1 => Some(State::B),
            2 => Some(State::C),
            _ => None,
        }
    }
}

// Projects to a code it does not accept back.
#[derive(Debug, Clone, Copy)]
struct Lossy;

impl StateCode for Lossy {
    fn to_code(self) -> Option<i64> {
        Some(7)
    }

    fn from_code(_code: i64) -> Option<Self> {
        None
    }
}

#[derive(Debug, Clone, Copy)]
struct Uncodable;

impl StateCode for Uncodable {
    fn to_code(self) -> Option<i64> {
        None
    }

    fn from_code(_code: i64) -> Option<Self> {
        Some(Uncodable)
    }
}

#[test]
fn test_basics() {
    let state = AtomicState::new(State::A).unwrap();
    assert_eq!(state.state(), State::A);
    assert_eq!(state.default_state(), State::A);
    assert_eq!(state.code(), 0);

    assert_eq!(state.set(State::B).unwrap(), State::B);
    assert_eq!(state.state(), State::B);
    assert_eq!(state.code(), 1);
}

#[test]
fn test_reset() {
    let state = AtomicState::new(State::B).unwrap();
    state.set(State::C).unwrap();
    assert_eq!(state.reset(), State::B);
    assert_eq!(state.reset(), State::B);
    assert_eq!(state.state(), State::B);
}

#[test]
fn test_any_transition_allowed() {
    let state = AtomicState::new(State::A).unwrap();
    assert_eq!(state.set(State::C).unwrap(), State::C);
    assert_eq!(state.set(State::A).unwrap(), State::A);
    assert_eq!(state.set(State::A).unwrap(), State::A);
}

#[test]
fn test_set_code() {
    let state = AtomicState::new(State::A).unwrap();
    assert_eq!(state.set_code(2).unwrap(), State::C);
    assert_eq!(
        state.set_code(3),
        Err(AtomicError::InvalidState {
            code: 3,
            type_name: std::any::type_name::<State>(),
        })
    );
    assert_eq!(state.state(), State::C);
}

#[test]
fn test_invalid_round_trip_is_rejected() {
    assert!(matches!(
        AtomicState::new(Lossy),
        Err(AtomicError::InvalidState { code: 7, .. })
    ));
}

#[test]
fn test_uncodable_default_is_rejected() {
    assert!(matches!(
        AtomicState::new(Uncodable),
        Err(AtomicError::InvalidArgument { .. })
    ));
}

#[test]
fn test_error_messages() {
    let err = AtomicState::new(State::A).unwrap().set_code(-1).unwrap_err();
    assert!(err.to_string().contains("code -1 is not a valid state"));
}

#[test]
fn test_primitive_state_type() {
    let state = AtomicState::new(3u8).unwrap();
    assert_eq!(state.set(200).unwrap(), 200);
    assert!(matches!(
        state.set_code(256),
        Err(AtomicError::InvalidState { code: 256, .. })
    ));
    assert!(matches!(
        AtomicState::new(u64::MAX),
        Err(AtomicError::InvalidArgument { .. })
    ));
}

#[test]
fn test_comparisons() {
    let state = AtomicState::new(State::A).unwrap();
    assert!(state == State::A);
    assert!(state < State::B);
    state.set(State::B).unwrap();
    assert!(state > State::A);
    assert!(state < State::C);
}

#[test]
fn test_display_debug() {
    let state = AtomicState::new(State::A).unwrap();
    assert_eq!(format!("{}", state), "A");
    assert_eq!(format!("{:?}", state), "AtomicState(A)");
}

#[test]
fn test_tracker() {
    let state = AtomicState::new(State::A).unwrap();
    let tracker = state.tracker();
    assert_eq!(tracker.state(), State::A);
    assert_eq!(format!("{}", tracker), "A");
    assert_eq!(format!("{:?}", tracker), "AtomicStateTracker(A)");

    state.set(State::B).unwrap();
    assert_eq!(tracker.state(), State::B);
    assert_eq!(tracker.code(), 1);
    assert!(tracker == State::B);
    assert!(tracker > State::A);

    let copy = tracker;
    state.reset();
    assert_eq!(copy.state(), State::A);
}

#[test]
fn test_wait_state() {
    let state = AtomicState::new(State::A).unwrap();
    assert!(state.wait_state(State::A, None));
    assert!(!state.wait_state(State::C, Some(Duration::from_millis(1))));
    assert!(!state.wait_state(State::C, Some(Duration::ZERO)));
}

#[test]
fn test_tracker_waits_for_other_thread() {
    let state = AtomicState::new(State::A).unwrap();
    thread::scope(|s| {
        let tracker = state.tracker();
        let observer = s.spawn(move || tracker.wait_state(State::C, Some(Duration::from_secs(10))));
        state.set(State::B).unwrap();
        state.set(State::C).unwrap();
        assert!(observer.join().unwrap());
    });
}
