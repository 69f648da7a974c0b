//! The real-number field over `f64`

use std::cell::RefCell;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::errors::{EvalError, NumericError};

use super::defaults;
use super::field::Field;

/// Approximate real arithmetic with an absolute equality tolerance.
///
/// Random samples come from an owned [`StdRng`], so a seeded field makes every
/// `Random` and `Different` scalar reproducible.
#[derive(Debug)]
pub struct Decimal {
    tolerance: f64,
    rng: RefCell<StdRng>,
}

impl Decimal {
    /// A field seeded from system entropy.
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_entropy())
    }

    /// A field whose random source is seeded for reproducible evaluation.
    pub fn seeded(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(rng: StdRng) -> Self {
        Decimal {
            tolerance: defaults::DEFAULT_TOLERANCE,
            rng: RefCell::new(rng),
        }
    }

    /// Replace the equality tolerance (rejects NaN, infinite, negative)
    pub fn with_tolerance(mut self, tolerance: f64) -> Result<Self, NumericError> {
        if tolerance.is_nan() {
            Err(NumericError::NaN)
        } else if tolerance.is_infinite() {
            Err(NumericError::Infinite)
        } else if tolerance < 0.0 {
            Err(NumericError::Negative)
        } else {
            self.tolerance = tolerance;
            Ok(self)
        }
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }
}

impl Default for Decimal {
    fn default() -> Self {
        Self::new()
    }
}

impl Field<f64> for Decimal {
    fn add(&self, first: &f64, second: &f64) -> f64 {
        first + second
    }

    fn multiply(&self, first: &f64, second: &f64) -> f64 {
        first * second
    }

    fn additive_identity(&self) -> f64 {
        0.0
    }

    fn multiplicative_identity(&self) -> f64 {
        1.0
    }

    fn additive_inverse(&self, value: &f64) -> f64 {
        -value
    }

    fn multiplicative_inverse(&self, value: &f64) -> Result<f64, EvalError> {
        if *value == 0.0 {
            return Err(EvalError::arithmetic("division by zero"));
        }
        Ok(1.0 / value)
    }

    fn equal(&self, first: &f64, second: &f64) -> bool {
        (first - second).abs() <= self.tolerance
    }

    fn random(&self) -> f64 {
        self.rng
            .borrow_mut()
            .gen_range(-defaults::RANDOM_BOUND..defaults::RANDOM_BOUND)
    }
}
