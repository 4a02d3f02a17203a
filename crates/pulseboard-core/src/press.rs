//! Press feedback for cards.
//!
//! A card rests at scale 1.0 and springs to 0.95 while held. Transitions are
//! edge-triggered by press-start and press-end; the release callback runs
//! after the release spring has been started, never on press-start.

use std::time::Duration;

use crate::animated::{AnimatedValue, SpringAnimation, SpringConfig};

/// Scale of a card at rest
pub const REST_SCALE: f64 = 1.0;
/// Scale of a card while held
pub const PRESSED_SCALE: f64 = 0.95;
/// Content opacity while held
pub const PRESSED_OPACITY: f64 = 0.8;

/// Which endpoint the card is heading to
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PressPhase {
    #[default]
    Rest,
    Pressed,
}

impl PressPhase {
    pub fn target_scale(&self) -> f64 {
        match self {
            PressPhase::Rest => REST_SCALE,
            PressPhase::Pressed => PRESSED_SCALE,
        }
    }

    pub fn content_opacity(&self) -> f64 {
        match self {
            PressPhase::Rest => 1.0,
            PressPhase::Pressed => PRESSED_OPACITY,
        }
    }
}

/// Spring used on press-start
pub fn press_in_spring() -> SpringConfig {
    SpringConfig::default()
}

/// Spring used on press-end: friction 3, tension 40
pub fn press_out_spring() -> SpringConfig {
    SpringConfig::from_origami(3.0, 40.0)
}

/// Press state machine owning one card's scale value.
///
/// Create once per card instance and mutate in place; rebuilding it would
/// reset a running animation.
#[derive(Debug)]
pub struct PressScale {
    scale: AnimatedValue,
    phase: PressPhase,
    animation: Option<SpringAnimation>,
    generation: u64,
}

impl PressScale {
    pub fn new() -> Self {
        Self {
            scale: AnimatedValue::new(REST_SCALE),
            phase: PressPhase::Rest,
            animation: None,
            generation: 0,
        }
    }

    pub fn phase(&self) -> PressPhase {
        self.phase
    }

    /// Current (possibly mid-spring) scale
    pub fn scale(&self) -> f64 {
        self.scale.value()
    }

    pub fn scale_value_mut(&mut self) -> &mut AnimatedValue {
        &mut self.scale
    }

    /// Endpoint the running spring is heading to
    pub fn target(&self) -> f64 {
        self.phase.target_scale()
    }

    /// Bumped on every retarget; a frame driver holding an older value
    /// should stop.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_animating(&self) -> bool {
        self.animation.as_ref().is_some_and(|a| !a.is_finished())
    }

    /// Press-start edge. Returns the new generation, or `None` when the
    /// card was already held.
    pub fn press_in(&mut self) -> Option<u64> {
        if self.phase == PressPhase::Pressed {
            return None;
        }
        self.phase = PressPhase::Pressed;
        Some(self.start_spring(PRESSED_SCALE, press_in_spring()))
    }

    /// Press-end edge. Returns the new generation, or `None` when the card
    /// was not held.
    pub fn press_out(&mut self) -> Option<u64> {
        if self.phase == PressPhase::Rest {
            return None;
        }
        self.phase = PressPhase::Rest;
        Some(self.start_spring(REST_SCALE, press_out_spring()))
    }

    /// Press-end edge followed by `on_release`, which runs exactly once per
    /// accepted press-end.
    pub fn press_out_then<F: FnOnce()>(&mut self, on_release: Option<F>) -> Option<u64> {
        let generation = self.press_out()?;
        if let Some(callback) = on_release {
            callback();
        }
        Some(generation)
    }

    /// Advance the running spring by `dt`. Returns whether it is still
    /// moving.
    pub fn tick(&mut self, dt: Duration) -> bool {
        let Some(animation) = self.animation.as_mut() else {
            return false;
        };
        let position = animation.advance(dt);
        let finished = animation.is_finished();
        self.scale.set_value(position);
        if finished {
            self.animation = None;
        }
        !finished
    }

    fn start_spring(&mut self, to: f64, config: SpringConfig) -> u64 {
        let next = match &self.animation {
            Some(running) => SpringAnimation::retarget(running, to, config),
            None => SpringAnimation::new(self.scale.value(), to, 0.0, config),
        };
        self.animation = Some(next);
        self.generation += 1;
        self.generation
    }
}

impl Default for PressScale {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    const FRAME: Duration = Duration::from_millis(16);

    fn settle(press: &mut PressScale) {
        for _ in 0..10_000 {
            if !press.tick(FRAME) {
                return;
            }
        }
        panic!("spring never settled");
    }

    #[test]
    fn starts_at_rest() {
        let press = PressScale::new();
        assert_eq!(press.phase(), PressPhase::Rest);
        assert_eq!(press.scale(), REST_SCALE);
        assert!(!press.is_animating());
    }

    #[test]
    fn press_in_targets_pressed_scale() {
        let mut press = PressScale::new();
        assert!(press.press_in().is_some());
        assert_eq!(press.target(), PRESSED_SCALE);
        assert!(press.is_animating());

        settle(&mut press);
        assert_eq!(press.scale(), PRESSED_SCALE);
    }

    #[test]
    fn press_out_returns_to_rest() {
        let mut press = PressScale::new();
        press.press_in();
        settle(&mut press);
        press.press_out();
        assert_eq!(press.target(), REST_SCALE);

        settle(&mut press);
        assert_eq!(press.scale(), REST_SCALE);
    }

    #[test]
    fn callback_fires_only_on_release() {
        let fired = Cell::new(0);
        let mut press = PressScale::new();

        press.press_in();
        assert_eq!(fired.get(), 0);

        press.press_out_then(Some(|| fired.set(fired.get() + 1)));
        assert_eq!(fired.get(), 1);
    }

    #[test]
    fn release_without_press_is_ignored() {
        let fired = Cell::new(0);
        let mut press = PressScale::new();
        assert!(press
            .press_out_then(Some(|| fired.set(fired.get() + 1)))
            .is_none());
        assert_eq!(fired.get(), 0);
    }

    #[test]
    fn repeated_press_in_is_ignored() {
        let mut press = PressScale::new();
        let first = press.press_in();
        assert!(first.is_some());
        assert!(press.press_in().is_none());
        assert_eq!(press.generation(), first.unwrap());
    }

    #[test]
    fn quick_tap_retargets_mid_flight() {
        let mut press = PressScale::new();
        press.press_in();
        press.tick(FRAME);
        let mid = press.scale();
        assert!(mid < REST_SCALE && mid > PRESSED_SCALE);

        let generation = press.press_out().unwrap();
        assert_eq!(generation, 2);
        settle(&mut press);
        assert_eq!(press.scale(), REST_SCALE);
    }

    #[test]
    fn missing_callback_is_a_no_op() {
        let mut press = PressScale::new();
        press.press_in();
        assert!(press.press_out_then(None::<fn()>).is_some());
        assert_eq!(press.phase(), PressPhase::Rest);
    }

    #[test]
    fn content_opacity_follows_phase() {
        assert_eq!(PressPhase::Rest.content_opacity(), 1.0);
        assert_eq!(PressPhase::Pressed.content_opacity(), PRESSED_OPACITY);
    }
}
