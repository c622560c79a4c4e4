use std::time::Duration;

use spark_rs::interaction::{
    GestureState, ScrubGestureConfig, ScrubGestureDetector, ScrubSignal, TouchEvent,
};

fn detector() -> ScrubGestureDetector {
    ScrubGestureDetector::default()
}

#[test]
fn movement_within_slop_stays_armed() {
    let mut detector = detector();

    let down = detector.on_touch(TouchEvent::down(10.0, 10.0));
    assert!(down.consumed);
    assert!(down.signal.is_none());

    // Exactly the slop is not past it.
    let small = detector.on_touch(TouchEvent::moved(18.0, 2.0));
    assert!(small.consumed);
    assert!(!small.claim_gesture);
    assert!(small.signal.is_none());
    assert!(matches!(detector.state(), GestureState::Armed { .. }));
}

#[test]
fn crossing_slop_starts_scrubbing_and_claims_the_gesture() {
    let mut detector = detector();
    detector.on_touch(TouchEvent::down(10.0, 10.0));

    let start = detector.on_touch(TouchEvent::moved(19.0, 10.0));
    assert!(start.claim_gesture);
    assert_eq!(start.signal, Some(ScrubSignal::Scrubbed { x: 19.0, y: 10.0 }));
    assert!(detector.is_scrubbing());

    let drag = detector.on_touch(TouchEvent::moved(30.0, 40.0));
    assert_eq!(drag.signal, Some(ScrubSignal::Scrubbed { x: 30.0, y: 40.0 }));

    let up = detector.on_touch(TouchEvent::up(30.0, 40.0));
    assert_eq!(up.signal, Some(ScrubSignal::Ended));
    assert_eq!(detector.state(), GestureState::Idle);

    let after = detector.on_touch(TouchEvent::moved(50.0, 40.0));
    assert!(!after.consumed);
    assert!(after.signal.is_none());
}

#[test]
fn vertical_travel_also_counts_toward_slop() {
    let mut detector = detector();
    detector.on_touch(TouchEvent::down(10.0, 10.0));

    let outcome = detector.on_touch(TouchEvent::moved(10.0, 25.0));
    assert_eq!(outcome.signal, Some(ScrubSignal::Scrubbed { x: 10.0, y: 25.0 }));
}

#[test]
fn tap_never_scrubs() {
    let mut detector = detector();
    detector.on_touch(TouchEvent::down(10.0, 10.0));
    let up = detector.on_touch(TouchEvent::up(11.0, 10.0));

    assert!(up.signal.is_none());
    assert_eq!(detector.state(), GestureState::Idle);
}

#[test]
fn cancel_while_scrubbing_ends_once() {
    let mut detector = detector();
    detector.on_touch(TouchEvent::down(0.0, 0.0));
    detector.on_touch(TouchEvent::moved(50.0, 0.0));

    let cancel = detector.on_touch(TouchEvent::cancel(50.0, 0.0));
    assert_eq!(cancel.signal, Some(ScrubSignal::Ended));
    let again = detector.on_touch(TouchEvent::cancel(50.0, 0.0));
    assert!(again.signal.is_none());
}

#[test]
fn new_down_while_scrubbing_ends_the_old_scrub() {
    let mut detector = detector();
    detector.on_touch(TouchEvent::down(0.0, 0.0));
    detector.on_touch(TouchEvent::moved(50.0, 0.0));

    let down = detector.on_touch(TouchEvent::down(70.0, 5.0));
    assert_eq!(down.signal, Some(ScrubSignal::Ended));
    assert!(matches!(
        detector.state(),
        GestureState::Armed {
            down_x,
            down_y,
            ..
        } if down_x == 70.0 && down_y == 5.0
    ));
}

#[test]
fn disabling_aborts_silently_and_ignores_input() {
    let mut detector = detector();
    detector.on_touch(TouchEvent::down(0.0, 0.0));
    detector.on_touch(TouchEvent::moved(50.0, 0.0));

    detector.set_enabled(false);
    assert_eq!(detector.state(), GestureState::Idle);

    let ignored = detector.on_touch(TouchEvent::down(0.0, 0.0));
    assert!(!ignored.consumed);
    assert_eq!(detector.state(), GestureState::Idle);

    detector.set_enabled(true);
    assert!(detector.on_touch(TouchEvent::down(0.0, 0.0)).consumed);
}

#[test]
fn long_press_starts_scrub_at_the_down_point() {
    let mut detector = ScrubGestureDetector::new(ScrubGestureConfig {
        long_press_timeout_ms: Some(250),
        ..ScrubGestureConfig::default()
    });
    detector.on_touch(TouchEvent::down(12.0, 34.0));

    assert!(detector.advance_clock(Duration::from_millis(100)).signal.is_none());
    let pressed = detector.advance_clock(Duration::from_millis(200));
    assert_eq!(pressed.signal, Some(ScrubSignal::Scrubbed { x: 12.0, y: 34.0 }));
    assert!(pressed.claim_gesture);
    assert!(detector.is_scrubbing());
}

#[test]
fn clock_is_ignored_without_long_press() {
    let mut detector = detector();
    detector.on_touch(TouchEvent::down(12.0, 34.0));

    assert!(detector.advance_clock(Duration::from_secs(10)).signal.is_none());
    assert!(matches!(detector.state(), GestureState::Armed { .. }));
}

#[test]
fn config_validation_rejects_bad_slop() {
    let config = ScrubGestureConfig {
        touch_slop_px: 0.0,
        ..ScrubGestureConfig::default()
    };
    assert!(config.validate().is_err());

    let config = ScrubGestureConfig {
        long_press_timeout_ms: Some(0),
        ..ScrubGestureConfig::default()
    };
    assert!(config.validate().is_err());
    assert!(ScrubGestureConfig::default().validate().is_ok());
}
