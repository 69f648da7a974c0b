//! Shared helpers for integration tests
#![allow(dead_code)]

use std::cell::Cell;

use lazygeo::EvalError;
use lazygeo::algebra::{Decimal, Field, Scalar, Vect};

pub const TOLERANCE: f64 = 1e-6;

/// Route engine events to the test writer (`RUST_LOG=debug` with `--features tracing`)
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn point(x: f64, y: f64) -> Vect<f64> {
    Vect::fixed([Scalar::literal(x), Scalar::literal(y)])
}

pub fn assert_close(actual: &[f64], expected: &[f64]) {
    assert_eq!(actual.len(), expected.len(), "{:?} vs {:?}", actual, expected);
    for (a, e) in actual.iter().zip(expected) {
        assert!((a - e).abs() < TOLERANCE, "{:?} vs {:?}", actual, expected);
    }
}

/// Exact arithmetic modulo 7, with a deterministic cycling random source
#[derive(Debug, Default)]
pub struct Mod7 {
    next: Cell<u64>,
}

pub const MODULUS: u64 = 7;

impl Field<u64> for Mod7 {
    fn add(&self, first: &u64, second: &u64) -> u64 {
        (first + second) % MODULUS
    }

    fn multiply(&self, first: &u64, second: &u64) -> u64 {
        (first * second) % MODULUS
    }

    fn additive_identity(&self) -> u64 {
        0
    }

    fn multiplicative_identity(&self) -> u64 {
        1
    }

    fn additive_inverse(&self, value: &u64) -> u64 {
        (MODULUS - value % MODULUS) % MODULUS
    }

    fn multiplicative_inverse(&self, value: &u64) -> Result<u64, EvalError> {
        let value = value % MODULUS;
        if value == 0 {
            return Err(EvalError::arithmetic("zero has no inverse modulo 7"));
        }
        // Fermat: value^(p - 2)
        Ok((0..MODULUS - 2).fold(1, |acc, _| (acc * value) % MODULUS))
    }

    fn equal(&self, first: &u64, second: &u64) -> bool {
        first % MODULUS == second % MODULUS
    }

    fn random(&self) -> u64 {
        let value = self.next.get();
        self.next.set((value + 1) % MODULUS);
        value
    }

    fn max_sampling_attempts(&self) -> usize {
        16
    }
}

/// A one-element sample space: every draw is the same value
#[derive(Debug, Default)]
pub struct Constant;

impl Field<f64> for Constant {
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
        Ok(1.0 / value)
    }

    fn equal(&self, first: &f64, second: &f64) -> bool {
        first == second
    }

    fn random(&self) -> f64 {
        1.0
    }

    fn max_sampling_attempts(&self) -> usize {
        5
    }
}

/// Counts calls into a wrapped real field
#[derive(Debug)]
pub struct Spy {
    inner: Decimal,
    pub adds: Cell<usize>,
    pub multiplies: Cell<usize>,
    pub randoms: Cell<usize>,
}

impl Spy {
    pub fn new(seed: u64) -> Self {
        Spy {
            inner: Decimal::seeded(seed),
            adds: Cell::new(0),
            multiplies: Cell::new(0),
            randoms: Cell::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.adds.get() + self.multiplies.get() + self.randoms.get()
    }
}

fn bump(counter: &Cell<usize>) {
    counter.set(counter.get() + 1);
}

impl Field<f64> for Spy {
    fn add(&self, first: &f64, second: &f64) -> f64 {
        bump(&self.adds);
        self.inner.add(first, second)
    }

    fn multiply(&self, first: &f64, second: &f64) -> f64 {
        bump(&self.multiplies);
        self.inner.multiply(first, second)
    }

    fn additive_identity(&self) -> f64 {
        self.inner.additive_identity()
    }

    fn multiplicative_identity(&self) -> f64 {
        self.inner.multiplicative_identity()
    }

    fn additive_inverse(&self, value: &f64) -> f64 {
        self.inner.additive_inverse(value)
    }

    fn multiplicative_inverse(&self, value: &f64) -> Result<f64, EvalError> {
        self.inner.multiplicative_inverse(value)
    }

    fn equal(&self, first: &f64, second: &f64) -> bool {
        self.inner.equal(first, second)
    }

    fn random(&self) -> f64 {
        bump(&self.randoms);
        self.inner.random()
    }
}
