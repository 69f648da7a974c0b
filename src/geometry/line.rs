//! Infinite lines: a point and a direction

use std::fmt;

use crate::algebra::{Scalar, Vect};

use super::point::{abscissa, line_reflection_point, ordinate, random_point};
use super::ray::Ray;
use super::segment::Segment;

/// A line through `point` along `direction`.
///
/// Derived lines (parallel, perpendicular, reflected) are built from their
/// operands' expressions and follow them lazily.
#[derive(Clone, Debug, PartialEq)]
pub struct Line<T> {
    point: Vect<T>,
    direction: Vect<T>,
}

impl<T: Clone + PartialEq> Line<T> {
    pub fn new(point: Vect<T>, direction: Vect<T>) -> Self {
        Line { point, direction }
    }

    /// The line through two points
    pub fn through(first: Vect<T>, second: Vect<T>) -> Self {
        let direction = Vect::minus(second, first.clone());
        Line::new(first, direction)
    }

    /// The vertical line through `point`
    pub fn vertical(point: Vect<T>) -> Self {
        Line::new(point, Vect::fixed([Scalar::AddIdentity, Scalar::MultIdentity]))
    }

    /// The horizontal line through `point`
    pub fn horizontal(point: Vect<T>) -> Self {
        Line::new(point, Vect::fixed([Scalar::MultIdentity, Scalar::AddIdentity]))
    }

    /// A line through a random point along a random direction, both
    /// re-sampled on every evaluation
    pub fn random() -> Self {
        Line::new(random_point(), random_point())
    }

    /// The line parallel to `line`, passing by `point`
    pub fn parallel(line: &Line<T>, point: Vect<T>) -> Self {
        Line::new(point, line.direction.clone())
    }

    /// The line perpendicular to `line`, passing by `point`
    pub fn perpendicular(line: &Line<T>, point: Vect<T>) -> Self {
        Line::new(point, quarter_turn(&line.direction))
    }

    /// The mirror image of `line` across `axis`
    pub fn reflection(axis: &Line<T>, line: &Line<T>) -> Self {
        let start = line_reflection_point(axis, line.point.clone());
        let ahead = line_reflection_point(
            axis,
            Vect::sum([line.point.clone(), line.direction.clone()]),
        );
        Line::through(start, ahead)
    }

    pub fn point(&self) -> &Vect<T> {
        &self.point
    }

    pub fn direction(&self) -> &Vect<T> {
        &self.direction
    }
}

/// `(-y, x)`: the direction turned a quarter counterclockwise
fn quarter_turn<T: Clone + PartialEq>(direction: &Vect<T>) -> Vect<T> {
    Vect::fixed([Scalar::negate(ordinate(direction)), abscissa(direction)])
}

impl<T: Clone + PartialEq> From<&Ray<T>> for Line<T> {
    fn from(ray: &Ray<T>) -> Self {
        Line::new(ray.origin().clone(), ray.direction().clone())
    }
}

impl<T: Clone + PartialEq> From<&Segment<T>> for Line<T> {
    fn from(segment: &Segment<T>) -> Self {
        Line::through(segment.start().clone(), segment.end().clone())
    }
}

impl<T: fmt::Display> fmt::Display for Line<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line({}, {})", self.point, self.direction)
    }
}
