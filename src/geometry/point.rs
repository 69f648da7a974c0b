//! Point constructions
//!
//! Points are plain [`Vect`]s. Everything here returns an expression that
//! follows its operands; nothing is evaluated at construction.

use crate::algebra::{Scalar, Vect, dot};

use super::circle::Circle;
use super::line::Line;

/// A planar point from two literal coordinates
pub fn xy<T: Clone + PartialEq>(x: T, y: T) -> Vect<T> {
    Vect::fixed([Scalar::literal(x), Scalar::literal(y)])
}

/// The first coordinate of `point`
pub fn abscissa<T: Clone + PartialEq>(point: &Vect<T>) -> Scalar<T> {
    Scalar::coord(point.clone(), 0)
}

/// The second coordinate of `point`
pub fn ordinate<T: Clone + PartialEq>(point: &Vect<T>) -> Scalar<T> {
    Scalar::coord(point.clone(), 1)
}

/// A planar point re-sampled on every evaluation
pub fn random_point<T: Clone + PartialEq>() -> Vect<T> {
    Vect::fixed([Scalar::Random, Scalar::Random])
}

/// A point whose every coordinate differs from the matching one of `point`
pub fn different_point<T: Clone + PartialEq>(point: &Vect<T>) -> Vect<T> {
    Vect::fixed(
        point
            .coords()
            .into_iter()
            .map(Scalar::different),
    )
}

/// `2 * center - point`
pub fn point_reflection<T: Clone + PartialEq>(center: Vect<T>, point: Vect<T>) -> Vect<T> {
    Vect::sum([center.clone(), Vect::minus(center, point)])
}

/// Reflection of `point` through the origin
pub fn origin_reflection<T: Clone + PartialEq>(point: Vect<T>) -> Vect<T> {
    Vect::opposite(point)
}

/// Mirror image of `point` across `axis`.
///
/// Fails on evaluation when the axis direction is the zero vector.
pub fn line_reflection_point<T: Clone + PartialEq>(axis: &Line<T>, point: Vect<T>) -> Vect<T> {
    let direction = axis.direction().coords();
    let offset = Vect::minus(point.clone(), axis.point().clone()).coords();
    let ratio = Scalar::division(dot(&offset, &direction), dot(&direction, &direction));
    let foot = Vect::sum([
        axis.point().clone(),
        Vect::times(axis.direction().clone(), ratio),
    ]);
    Vect::sum([foot.clone(), foot, Vect::opposite(point)])
}

/// The point of `circle` straight along the first axis from its center
pub fn in_circle_point<T: Clone + PartialEq>(circle: &Circle<T>) -> Vect<T> {
    Vect::sum([
        circle.center().clone(),
        Vect::fixed([circle.radius().clone(), Scalar::AddIdentity]),
    ])
}
