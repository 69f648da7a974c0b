//! Error types with diagnostic codes using miette
//!
//! Evaluation never fails while a graph is being built. These errors surface
//! only when a concrete value along an invalid path is demanded.

use miette::Diagnostic;
use thiserror::Error;

// ============================================================================
// Evaluation Errors
// ============================================================================

/// Errors that occur while evaluating an expression against a field
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum EvalError {
    #[error("arithmetic error: {message}")]
    #[diagnostic(code(lazygeo::eval::arithmetic))]
    Arithmetic { message: String },

    #[error("construction error: {message}")]
    #[diagnostic(
        code(lazygeo::eval::construction),
        help("the construction is legal to build but its precondition does not hold")
    )]
    Construction { message: String },

    #[error("state error: {message}")]
    #[diagnostic(code(lazygeo::eval::state))]
    State { message: String },

    #[error("no coordinate on axis {axis} of a {dimension}-dimensional vector")]
    #[diagnostic(code(lazygeo::eval::dimension))]
    Dimension { axis: usize, dimension: usize },

    #[error("no distinct sample found after {attempts} attempts")]
    #[diagnostic(
        code(lazygeo::eval::sampling_exhausted),
        help("the field's random source may only produce a single value")
    )]
    SamplingExhausted { attempts: usize },
}

impl EvalError {
    /// Create an arithmetic error
    pub fn arithmetic(message: impl Into<String>) -> Self {
        EvalError::Arithmetic {
            message: message.into(),
        }
    }

    /// Create a construction error
    pub fn construction(message: impl Into<String>) -> Self {
        EvalError::Construction {
            message: message.into(),
        }
    }

    /// Create a state error
    pub fn state(message: impl Into<String>) -> Self {
        EvalError::State {
            message: message.into(),
        }
    }
}

// ============================================================================
// Construction-time Errors
// ============================================================================

/// A matrix was given the wrong number of coordinates for its shape
#[derive(Error, Diagnostic, Debug, Clone, Copy, PartialEq, Eq)]
#[error("expected {expected} scalars for a matrix with {lines} lines and {columns} columns, got {got}")]
#[diagnostic(code(lazygeo::matrix::shape))]
pub struct ShapeError {
    pub lines: usize,
    pub columns: usize,
    pub expected: usize,
    pub got: usize,
}

/// Error type for invalid numeric configuration values
#[derive(Error, Diagnostic, Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericError {
    /// Value is NaN
    #[error("value is NaN")]
    #[diagnostic(code(lazygeo::config::nan))]
    NaN,
    /// Value is infinite
    #[error("value is infinite")]
    #[diagnostic(code(lazygeo::config::infinite))]
    Infinite,
    /// Value is negative when non-negative required
    #[error("value is negative")]
    #[diagnostic(code(lazygeo::config::negative))]
    Negative,
}
