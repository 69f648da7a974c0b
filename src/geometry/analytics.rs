//! Analytic quantities of lines: slope, intercept and ordinate
//!
//! Each is a [`Scalar`] guarded by a [`Predicate::Vertical`] check, so a
//! vertical line only fails when the undefined quantity is evaluated.

use crate::algebra::{Predicate, Scalar};
use crate::errors::EvalError;

use super::line::Line;
use super::point::{abscissa, ordinate};

fn vertical<T: Clone + PartialEq>(line: &Line<T>) -> Predicate<T> {
    Predicate::Vertical(line.direction().clone())
}

/// `dy / dx` of the line's direction
pub fn slope<T: Clone + PartialEq>(line: &Line<T>) -> Scalar<T> {
    let direction = line.direction();
    Scalar::ternary(
        vertical(line),
        Scalar::throwing(EvalError::state("vertical line has infinite slope")),
        Scalar::division(ordinate(direction), abscissa(direction)),
    )
}

/// Ordinate where the line crosses the second axis
pub fn intercept<T: Clone + PartialEq>(line: &Line<T>) -> Scalar<T> {
    let point = line.point();
    Scalar::ternary(
        vertical(line),
        Scalar::throwing(EvalError::state("vertical line has no intercept")),
        Scalar::minus(
            ordinate(point),
            Scalar::product([slope(line), abscissa(point)]),
        ),
    )
}

/// Ordinate of the line's point at `x`.
///
/// On a vertical line this is any value when `x` is the line's own abscissa,
/// and a state error otherwise.
pub fn line_point_ordinate<T: Clone + PartialEq>(line: &Line<T>, x: Scalar<T>) -> Scalar<T> {
    Scalar::ternary(
        vertical(line),
        Scalar::ternary(
            Predicate::Equals(abscissa(line.point()), x.clone()),
            Scalar::Random,
            Scalar::throwing(EvalError::state(
                "vertical line could not pass by a point with this abscissa",
            )),
        ),
        Scalar::sum([Scalar::product([slope(line), x]), intercept(line)]),
    )
}
