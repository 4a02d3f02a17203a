//! Property-based tests for interpolation and press animation
//!
//! Uses proptest to verify invariants of the clamped header mappings and
//! the press state machine.

use std::time::Duration;

use proptest::prelude::*;
use pulseboard_core::{
    Interpolation, PressPhase, PressScale, HEADER_HEIGHT, HEADER_OPACITY, PRESSED_SCALE,
    REST_SCALE,
};

// ============================================================================
// Strategy Generators
// ============================================================================

/// Scroll offsets including overscroll on both ends
fn scroll_strategy() -> impl Strategy<Value = f64> {
    -500.0f64..5_000.0
}

/// Input ranges with a non-zero span
fn range_strategy() -> impl Strategy<Value = (f64, f64)> {
    (-1_000.0f64..1_000.0, 1.0f64..1_000.0).prop_map(|(start, span)| (start, start + span))
}

/// Gesture events a card can receive
#[derive(Debug, Clone, Copy)]
enum Gesture {
    PressIn,
    PressOut,
    Frames(u8),
}

fn gestures_strategy(max: usize) -> impl Strategy<Value = Vec<Gesture>> {
    prop::collection::vec(
        prop_oneof![
            2 => Just(Gesture::PressIn),
            2 => Just(Gesture::PressOut),
            1 => (1u8..30).prop_map(Gesture::Frames),
        ],
        0..max,
    )
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Header height never leaves [80, 200]
    #[test]
    fn header_height_bounded(scroll in scroll_strategy()) {
        let h = HEADER_HEIGHT.map(scroll);
        prop_assert!((80.0..=200.0).contains(&h));
    }

    /// Header opacity never leaves [0.8, 1.0]
    #[test]
    fn header_opacity_bounded(scroll in scroll_strategy()) {
        let o = HEADER_OPACITY.map(scroll);
        prop_assert!((0.8..=1.0).contains(&o));
    }

    /// Scrolling further never grows the header
    #[test]
    fn header_height_monotone(a in scroll_strategy(), b in scroll_strategy()) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(HEADER_HEIGHT.map(hi) <= HEADER_HEIGHT.map(lo));
    }

    /// Clamped interpolation stays between the two outputs
    #[test]
    fn clamped_output_between_endpoints(
        input in range_strategy(),
        out_a in -100.0f64..100.0,
        out_b in -100.0f64..100.0,
        x in -5_000.0f64..5_000.0,
    ) {
        let interp = Interpolation::new(input, (out_a, out_b)).unwrap();
        let y = interp.map(x);
        prop_assert!(y >= out_a.min(out_b) - 1e-9);
        prop_assert!(y <= out_a.max(out_b) + 1e-9);
    }

    /// Endpoints of the input range map exactly onto the output endpoints
    #[test]
    fn endpoints_map_exactly(input in range_strategy(), out in (-100.0f64..100.0, -100.0f64..100.0)) {
        let interp = Interpolation::new(input, out).unwrap();
        prop_assert_eq!(interp.map(input.0), out.0);
        prop_assert_eq!(interp.map(input.1), out.1);
    }

    /// Whatever the gesture sequence, the target is always one of the two
    /// endpoints and releases only count after a press
    #[test]
    fn press_targets_stay_on_endpoints(gestures in gestures_strategy(60)) {
        let mut press = PressScale::new();
        let mut held = false;
        let mut releases = 0u32;
        let mut expected_releases = 0u32;

        for gesture in gestures {
            match gesture {
                Gesture::PressIn => {
                    press.press_in();
                    held = true;
                }
                Gesture::PressOut => {
                    if held {
                        expected_releases += 1;
                    }
                    press.press_out_then(Some(|| releases += 1));
                    held = false;
                }
                Gesture::Frames(n) => {
                    for _ in 0..n {
                        press.tick(Duration::from_millis(16));
                    }
                }
            }
            let target = press.target();
            prop_assert!(target == PRESSED_SCALE || target == REST_SCALE);
            prop_assert_eq!(press.phase() == PressPhase::Pressed, held);
        }
        prop_assert_eq!(releases, expected_releases);
    }
}
