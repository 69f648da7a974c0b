//! Open point chains and their reflections

use std::fmt;

use crate::algebra::Vect;

use super::point::{origin_reflection, point_reflection};

/// An open chain of points
#[derive(Clone, Debug, PartialEq)]
pub struct Polyline<T> {
    points: Vec<Vect<T>>,
}

impl<T: Clone + PartialEq> Polyline<T> {
    pub fn new(points: impl IntoIterator<Item = Vect<T>>) -> Self {
        Polyline {
            points: points.into_iter().collect(),
        }
    }

    /// Every point of `polyline` reflected through `center`
    pub fn reflection(center: &Vect<T>, polyline: &Polyline<T>) -> Self {
        Polyline::new(
            polyline
                .points
                .iter()
                .map(|point| point_reflection(center.clone(), point.clone())),
        )
    }

    /// Every point of `polyline` reflected through the origin
    pub fn origin_reflection(polyline: &Polyline<T>) -> Self {
        Polyline::new(polyline.points.iter().cloned().map(origin_reflection))
    }

    pub fn points(&self) -> &[Vect<T>] {
        &self.points
    }
}

impl<T: fmt::Display> fmt::Display for Polyline<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "polyline[")?;
        for (idx, point) in self.points.iter().enumerate() {
            if idx > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", point)?;
        }
        write!(f, "]")
    }
}
