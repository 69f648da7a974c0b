//! Half-lines and angle bisectors

use std::fmt;
use std::rc::Rc;

use crate::algebra::{InnerProduct, Vect};

use super::angle::Angle;

/// A half-line from `origin` along `direction`
#[derive(Clone, Debug, PartialEq)]
pub struct Ray<T> {
    origin: Vect<T>,
    direction: Vect<T>,
}

impl<T: Clone + PartialEq> Ray<T> {
    pub fn new(origin: Vect<T>, direction: Vect<T>) -> Self {
        Ray { origin, direction }
    }

    /// The ray from `origin` passing by `point`
    pub fn through(origin: Vect<T>, point: Vect<T>) -> Self {
        let direction = Vect::minus(point, origin.clone());
        Ray::new(origin, direction)
    }

    /// The ray splitting `angle` in two halves.
    ///
    /// Follows the angle's origin slot, so it moves when the origin is rebound.
    pub fn bisector(angle: &Angle<T>, metric: Rc<dyn InnerProduct<T>>) -> Self {
        Ray::new(
            angle.origin(),
            Vect::bisector(angle.start(), angle.end(), metric),
        )
    }

    pub fn origin(&self) -> &Vect<T> {
        &self.origin
    }

    pub fn direction(&self) -> &Vect<T> {
        &self.direction
    }
}

impl<T: fmt::Display> fmt::Display for Ray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ray({}, {})", self.origin, self.direction)
    }
}
