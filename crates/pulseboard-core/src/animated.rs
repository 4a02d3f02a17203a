//! Animated scalars and spring physics.
//!
//! An [`AnimatedValue`] is a mutable `f64` cell with listeners. It is owned
//! by exactly one component instance and mutated in place for the lifetime
//! of that instance.
//!
//! [`SpringAnimation`] is the closed-form solution of a damped harmonic
//! oscillator, sampled by elapsed time rather than integrated per frame, so
//! frame jitter never accumulates into drift.

use std::fmt;
use std::time::Duration;

use crate::interpolate::Interpolation;

/// Handle returned by [`AnimatedValue::add_listener`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener = Box<dyn FnMut(f64) + Send>;

/// Mutable numeric cell with change listeners
pub struct AnimatedValue {
    value: f64,
    next_listener: u64,
    listeners: Vec<(ListenerId, Listener)>,
}

impl AnimatedValue {
    pub fn new(value: f64) -> Self {
        Self {
            value,
            next_listener: 0,
            listeners: Vec::new(),
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// Store a new value and notify listeners in registration order.
    ///
    /// Listeners are only called when the value actually changes.
    pub fn set_value(&mut self, value: f64) {
        if value == self.value {
            return;
        }
        self.value = value;
        for (_, listener) in self.listeners.iter_mut() {
            listener(value);
        }
    }

    pub fn add_listener(&mut self, listener: impl FnMut(f64) + Send + 'static) -> ListenerId {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns false when the id was never registered or already removed
    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(lid, _)| *lid != id);
        self.listeners.len() != before
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Current value mapped through `interpolation`
    pub fn interpolate(&self, interpolation: &Interpolation) -> f64 {
        interpolation.map(self.value)
    }
}

impl Default for AnimatedValue {
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl fmt::Debug for AnimatedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnimatedValue")
            .field("value", &self.value)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

/// Spring parameters
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
    pub rest_speed_threshold: f64,
    pub rest_displacement_threshold: f64,
    pub overshoot_clamping: bool,
}

impl SpringConfig {
    /// Convert Origami-style friction/tension into stiffness/damping.
    pub fn from_origami(friction: f64, tension: f64) -> Self {
        Self {
            stiffness: (tension - 30.0) * 3.62 + 194.0,
            damping: (friction - 8.0) * 3.0 + 25.0,
            ..Self::base()
        }
    }

    fn base() -> Self {
        Self {
            stiffness: 0.0,
            damping: 0.0,
            mass: 1.0,
            rest_speed_threshold: 0.001,
            rest_displacement_threshold: 0.001,
            overshoot_clamping: false,
        }
    }

    /// Damping ratio; below 1.0 the spring overshoots
    pub fn damping_ratio(&self) -> f64 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }
}

impl Default for SpringConfig {
    /// Friction 7, tension 40
    fn default() -> Self {
        Self::from_origami(7.0, 40.0)
    }
}

/// Position and velocity of a spring at one instant
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringState {
    pub position: f64,
    pub velocity: f64,
}

/// A spring driving one value from `from` toward `to`
#[derive(Clone, Debug)]
pub struct SpringAnimation {
    from: f64,
    to: f64,
    initial_velocity: f64,
    config: SpringConfig,
    elapsed: Duration,
    state: SpringState,
    finished: bool,
}

impl SpringAnimation {
    pub fn new(from: f64, to: f64, initial_velocity: f64, config: SpringConfig) -> Self {
        Self {
            from,
            to,
            initial_velocity,
            config,
            elapsed: Duration::ZERO,
            state: SpringState {
                position: from,
                velocity: initial_velocity,
            },
            finished: from == to && initial_velocity == 0.0,
        }
    }

    /// Start toward `to` from wherever `previous` currently is, keeping its
    /// velocity.
    pub fn retarget(previous: &SpringAnimation, to: f64, config: SpringConfig) -> Self {
        let state = previous.state();
        Self::new(state.position, to, state.velocity, config)
    }

    pub fn to(&self) -> f64 {
        self.to
    }

    pub fn config(&self) -> &SpringConfig {
        &self.config
    }

    pub fn state(&self) -> SpringState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Advance by `dt` and return the new position.
    pub fn advance(&mut self, dt: Duration) -> f64 {
        if self.finished {
            return self.state.position;
        }
        self.elapsed += dt;
        self.state = self.sample(self.elapsed.as_secs_f64());

        let overshot = self.config.overshoot_clamping
            && self.config.stiffness != 0.0
            && if self.from < self.to {
                self.state.position > self.to
            } else {
                self.state.position < self.to
            };
        let at_rest_speed = self.state.velocity.abs() <= self.config.rest_speed_threshold;
        let at_rest_position = self.config.stiffness == 0.0
            || (self.to - self.state.position).abs() <= self.config.rest_displacement_threshold;

        if overshot || (at_rest_speed && at_rest_position) {
            self.state = SpringState {
                position: self.to,
                velocity: 0.0,
            };
            self.finished = true;
        }
        self.state.position
    }

    fn sample(&self, t: f64) -> SpringState {
        let SpringConfig {
            stiffness: k,
            damping: c,
            mass: m,
            ..
        } = self.config;
        let v0 = -self.initial_velocity;
        let x0 = self.to - self.from;

        let zeta = c / (2.0 * (k * m).sqrt());
        let omega0 = (k / m).sqrt();

        if zeta < 1.0 {
            // Under-damped
            let omega1 = omega0 * (1.0 - zeta * zeta).sqrt();
            let envelope = (-zeta * omega0 * t).exp();
            let a = (v0 + zeta * omega0 * x0) / omega1;
            let (sin, cos) = (omega1 * t).sin_cos();
            let position = self.to - envelope * (a * sin + x0 * cos);
            let velocity = zeta * omega0 * envelope * (sin * a + x0 * cos)
                - envelope * (cos * (v0 + zeta * omega0 * x0) - omega1 * x0 * sin);
            SpringState { position, velocity }
        } else {
            // Critically damped or over-damped
            let envelope = (-omega0 * t).exp();
            let position = self.to - envelope * (x0 + (v0 + omega0 * x0) * t);
            let velocity = envelope * (v0 * (t * omega0 - 1.0) + t * x0 * omega0 * omega0);
            SpringState { position, velocity }
        }
    }
}
