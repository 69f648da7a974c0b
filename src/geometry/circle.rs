//! Circles and the on-circle predicate

use std::fmt;

use crate::algebra::{InnerProduct, Predicate, Scalar, Vect};

/// A circle from a center and a radius expression
#[derive(Clone, Debug, PartialEq)]
pub struct Circle<T> {
    center: Vect<T>,
    radius: Scalar<T>,
}

impl<T: Clone + PartialEq> Circle<T> {
    pub fn new(center: Vect<T>, radius: Scalar<T>) -> Self {
        Circle { center, radius }
    }

    /// The circle around `center` passing by `point`
    pub fn through(center: Vect<T>, point: Vect<T>, metric: &dyn InnerProduct<T>) -> Self {
        let radius = metric.norm(&Vect::minus(point, center.clone()));
        Circle::new(center, radius)
    }

    pub fn center(&self) -> &Vect<T> {
        &self.center
    }

    pub fn radius(&self) -> &Scalar<T> {
        &self.radius
    }

    /// Holds when `point` lies on the circle
    pub fn contains(&self, point: Vect<T>) -> Predicate<T> {
        Predicate::PointInCircle {
            point,
            center: self.center.clone(),
            radius: self.radius.clone(),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Circle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "circle({}, {})", self.center, self.radius)
    }
}
