//! Angles with a rebindable origin

use std::fmt;

use crate::algebra::{Degrees, InnerProduct, Vect, VectCell};
use crate::log::debug;

#[derive(Clone, Debug, PartialEq)]
enum Sides<T> {
    /// Points the sides pass by; directions follow the origin
    Points(Vect<T>, Vect<T>),
    /// Directions independent of the origin
    Directions(Vect<T>, Vect<T>),
}

/// An angle between two sides sharing an origin.
///
/// The origin sits in a [`VectCell`]: [`Angle::set_origin`] rebinds it and
/// every expression built from this angle (or from a clone of it) sees the
/// new origin on its next evaluation.
#[derive(Clone, Debug, PartialEq)]
pub struct Angle<T> {
    origin: VectCell<T>,
    sides: Sides<T>,
}

impl<T: Clone + PartialEq> Angle<T> {
    /// The angle at `origin` from the side through `first` to the side
    /// through `second`
    pub fn three_points(origin: Vect<T>, first: Vect<T>, second: Vect<T>) -> Self {
        Angle {
            origin: VectCell::new(origin),
            sides: Sides::Points(first, second),
        }
    }

    /// The angle at `origin` between two side directions
    pub fn from_directions(origin: Vect<T>, start: Vect<T>, end: Vect<T>) -> Self {
        Angle {
            origin: VectCell::new(origin),
            sides: Sides::Directions(start, end),
        }
    }

    /// The origin, read through the slot
    pub fn origin(&self) -> Vect<T> {
        self.origin.vect()
    }

    /// Rebind the origin, returning the previous one
    pub fn set_origin(&self, origin: Vect<T>) -> Vect<T> {
        debug!("Rebinding angle origin");
        self.origin.replace(origin)
    }

    /// Direction of the first side
    pub fn start(&self) -> Vect<T> {
        match &self.sides {
            Sides::Points(first, _) => Vect::minus(first.clone(), self.origin()),
            Sides::Directions(start, _) => start.clone(),
        }
    }

    /// Direction of the second side
    pub fn end(&self) -> Vect<T> {
        match &self.sides {
            Sides::Points(_, second) => Vect::minus(second.clone(), self.origin()),
            Sides::Directions(_, end) => end.clone(),
        }
    }

    /// The signed opening from start to end
    pub fn measure(&self, metric: &dyn InnerProduct<T>) -> Degrees<T> {
        metric.angle(&self.start(), &self.end())
    }
}

impl<T: Clone + PartialEq + fmt::Display> fmt::Display for Angle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "angle({}; {}, {})", self.origin.get(), self.start(), self.end())
    }
}
