//! Range interpolation for scroll-driven and animation-driven styles.
//!
//! Maps an input range linearly onto an output range. With
//! [`Extrapolate::Clamp`] inputs outside the input range hold the nearest
//! boundary output.

use crate::error::{DashboardError, DashboardResult};

/// Behaviour for inputs outside the input range
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Extrapolate {
    /// Hold the nearest boundary output
    #[default]
    Clamp,
    /// Continue the linear mapping
    Extend,
}

/// Linear mapping from an input range to an output range
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Interpolation {
    input: (f64, f64),
    output: (f64, f64),
    extrapolate: Extrapolate,
}

/// Header height: scroll 0..100 collapses the header from 200 to 80.
pub const HEADER_HEIGHT: Interpolation = Interpolation {
    input: (0.0, 100.0),
    output: (200.0, 80.0),
    extrapolate: Extrapolate::Clamp,
};

/// Header opacity: scroll 0..50 fades the header from 1.0 to 0.8.
pub const HEADER_OPACITY: Interpolation = Interpolation {
    input: (0.0, 50.0),
    output: (1.0, 0.8),
    extrapolate: Extrapolate::Clamp,
};

impl Interpolation {
    /// Create a clamped interpolation.
    ///
    /// Fails when the input range is empty or contains a non-finite bound.
    pub fn new(input: (f64, f64), output: (f64, f64)) -> DashboardResult<Self> {
        let bounds = [input.0, input.1, output.0, output.1];
        if bounds.iter().any(|b| !b.is_finite()) {
            return Err(DashboardError::InvalidRange(format!(
                "non-finite bound in {:?} -> {:?}",
                input, output
            )));
        }
        if input.0 == input.1 {
            return Err(DashboardError::InvalidRange(format!(
                "empty input range {:?}",
                input
            )));
        }
        Ok(Self {
            input,
            output,
            extrapolate: Extrapolate::Clamp,
        })
    }

    /// Replace the extrapolation mode
    pub fn with_extrapolate(mut self, extrapolate: Extrapolate) -> Self {
        self.extrapolate = extrapolate;
        self
    }

    pub fn input(&self) -> (f64, f64) {
        self.input
    }

    pub fn output(&self) -> (f64, f64) {
        self.output
    }

    pub fn extrapolate(&self) -> Extrapolate {
        self.extrapolate
    }

    /// Map `x` from the input range onto the output range
    pub fn map(&self, x: f64) -> f64 {
        let (in_a, in_b) = self.input;
        let (out_a, out_b) = self.output;

        let mut t = (x - in_a) / (in_b - in_a);
        if self.extrapolate == Extrapolate::Clamp {
            t = t.clamp(0.0, 1.0);
        }

        // Exact endpoints avoid drift like 0.8000000000000002
        if t == 0.0 {
            out_a
        } else if t == 1.0 {
            out_b
        } else {
            out_a + (out_b - out_a) * t
        }
    }
}
