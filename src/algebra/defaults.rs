//! Default evaluation settings

/// Absolute tolerance used by the real-number field's equality test.
pub const DEFAULT_TOLERANCE: f64 = 1e-6;

/// How many samples a `Different` scalar draws before giving up.
pub const DIFFERENT_MAX_ATTEMPTS: usize = 1000;

/// The real-number field samples uniformly from `[-RANDOM_BOUND, RANDOM_BOUND)`.
pub const RANDOM_BOUND: f64 = 10.0;
