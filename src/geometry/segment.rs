//! Line segments, including diameters guarded to lie on their circle

use std::fmt;

use crate::algebra::{Scalar, Vect};
use crate::errors::EvalError;

use super::circle::Circle;
use super::point::{in_circle_point, point_reflection};

/// A segment between two endpoints
#[derive(Clone, Debug, PartialEq)]
pub struct Segment<T> {
    start: Vect<T>,
    end: Vect<T>,
}

impl<T: Clone + PartialEq> Segment<T> {
    pub fn new(start: Vect<T>, end: Vect<T>) -> Self {
        Segment { start, end }
    }

    /// The diameter of `circle` starting at `point`.
    ///
    /// Building never fails. If `point` is off the circle, evaluating either
    /// endpoint fails with a construction error.
    pub fn circle_diameter(circle: &Circle<T>, point: Vect<T>) -> Self {
        let on_circle = circle.contains(point.clone());
        let error = EvalError::construction("diameter point is not on the circle");
        let guarded = Vect::fixed(point.coords().into_iter().map(|coord| {
            Scalar::ternary(on_circle.clone(), coord, Scalar::throwing(error.clone()))
        }));
        let end = point_reflection(circle.center().clone(), guarded.clone());
        Segment::new(guarded, end)
    }

    /// A diameter of `circle`, starting at [`in_circle_point`]
    pub fn circle_diameter_of(circle: &Circle<T>) -> Self {
        Segment::circle_diameter(circle, in_circle_point(circle))
    }

    pub fn start(&self) -> &Vect<T> {
        &self.start
    }

    pub fn end(&self) -> &Vect<T> {
        &self.end
    }
}

impl<T: fmt::Display> fmt::Display for Segment<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "segment({}, {})", self.start, self.end)
    }
}
