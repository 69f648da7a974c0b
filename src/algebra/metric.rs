//! Inner products: dot product, norm, signed angle and rotation
//!
//! The dot product is generic over any field. Norms, angles and rotations
//! need square roots and trigonometry, so they live behind [`InnerProduct`]
//! and are provided per field; [`Dot`] covers the real numbers.

use std::fmt;
use std::rc::Rc;

use glam::DVec2;

use crate::errors::EvalError;

use super::field::Field;
use super::matrix::Matrix;
use super::scalar::{Evaluate, Scalar};
use super::vect::Vect;

/// Sum of pairwise coordinate products, unevaluated.
///
/// Coordinates beyond the shorter operand are ignored.
pub fn dot<T: Clone + PartialEq>(first: &[Scalar<T>], second: &[Scalar<T>]) -> Scalar<T> {
    Scalar::sum(
        first
            .iter()
            .zip(second)
            .map(|(a, b)| Scalar::product([a.clone(), b.clone()])),
    )
}

/// An angle expression, in degrees
#[derive(Clone, Debug, PartialEq)]
pub enum Degrees<T> {
    Fixed(f64),
    /// Signed angle from the first vector to the second
    Between(Rc<Vect<T>>, Rc<Vect<T>>),
    Times(Rc<Degrees<T>>, f64),
    Sum(Rc<Degrees<T>>, Rc<Degrees<T>>),
    Opposite(Rc<Degrees<T>>),
}

impl<T: Clone + PartialEq> Degrees<T> {
    pub fn between(first: Vect<T>, second: Vect<T>) -> Self {
        Degrees::Between(Rc::new(first), Rc::new(second))
    }

    pub fn times(angle: Degrees<T>, factor: f64) -> Self {
        Degrees::Times(Rc::new(angle), factor)
    }

    pub fn sum(first: Degrees<T>, second: Degrees<T>) -> Self {
        Degrees::Sum(Rc::new(first), Rc::new(second))
    }

    pub fn opposite(angle: Degrees<T>) -> Self {
        Degrees::Opposite(Rc::new(angle))
    }

    /// Resolve to a number of degrees.
    pub fn resolve(
        &self,
        metric: &dyn InnerProduct<T>,
        field: &dyn Field<T>,
    ) -> Result<f64, EvalError> {
        match self {
            Degrees::Fixed(degrees) => Ok(*degrees),
            Degrees::Between(first, second) => metric.signed_angle(first, second, field),
            Degrees::Times(angle, factor) => Ok(angle.resolve(metric, field)? * factor),
            Degrees::Sum(first, second) => {
                Ok(first.resolve(metric, field)? + second.resolve(metric, field)?)
            }
            Degrees::Opposite(angle) => Ok(-angle.resolve(metric, field)?),
        }
    }
}

impl<T> From<f64> for Degrees<T> {
    fn from(degrees: f64) -> Self {
        Degrees::Fixed(degrees)
    }
}

impl<T: fmt::Display> fmt::Display for Degrees<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Degrees::Fixed(degrees) => write!(f, "{}°", degrees),
            Degrees::Between(first, second) => write!(f, "angle({}, {})", first, second),
            Degrees::Times(angle, factor) => write!(f, "{} * {}", angle, factor),
            Degrees::Sum(first, second) => write!(f, "({} + {})", first, second),
            Degrees::Opposite(angle) => write!(f, "-{}", angle),
        }
    }
}

/// Metric operations over a field
pub trait InnerProduct<T>: fmt::Debug {
    /// Inner product of two vectors, unevaluated
    fn product(&self, first: &Vect<T>, second: &Vect<T>) -> Scalar<T>
    where
        T: Clone + PartialEq,
    {
        dot(&first.coords(), &second.coords())
    }

    /// Length of a vector, unevaluated
    fn norm(&self, vect: &Vect<T>) -> Scalar<T>;

    /// The angle from `first` to `second`, unevaluated
    fn angle(&self, first: &Vect<T>, second: &Vect<T>) -> Degrees<T>
    where
        T: Clone,
    {
        Degrees::Between(Rc::new(first.clone()), Rc::new(second.clone()))
    }

    /// Resolve the signed angle from `first` to `second`, in `(-180, 180]`.
    ///
    /// Zero when either vector has zero norm.
    fn signed_angle(
        &self,
        first: &Vect<T>,
        second: &Vect<T>,
        field: &dyn Field<T>,
    ) -> Result<f64, EvalError>;

    /// `vect` rotated by `angle`, unevaluated
    fn rot(&self, vect: &Vect<T>, angle: &Degrees<T>) -> Vect<T>;
}

/// The Euclidean inner product over the real numbers.
///
/// Angles and rotations assume a two-dimensional space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Dot;

impl Dot {
    /// A shareable handle, for rotating and bisecting vector nodes
    pub fn shared() -> Rc<dyn InnerProduct<f64>> {
        Rc::new(Dot)
    }
}

impl InnerProduct<f64> for Dot {
    fn norm(&self, vect: &Vect<f64>) -> Scalar<f64> {
        Scalar::custom(Norm {
            squared: self.product(vect, vect),
        })
    }

    fn signed_angle(
        &self,
        first: &Vect<f64>,
        second: &Vect<f64>,
        field: &dyn Field<f64>,
    ) -> Result<f64, EvalError> {
        let first = first.to_dvec2(field)?;
        let second = second.to_dvec2(field)?;
        Ok(signed_degrees(first, second))
    }

    fn rot(&self, vect: &Vect<f64>, angle: &Degrees<f64>) -> Vect<f64> {
        let trig = |kind| {
            Scalar::custom(Trig {
                angle: angle.clone(),
                kind,
            })
        };
        // column-major: columns (cos, -sin) and (sin, cos) turn counterclockwise
        let rotation = Matrix::new(
            2,
            2,
            vec![
                trig(TrigKind::Cos),
                trig(TrigKind::NegSin),
                trig(TrigKind::Sin),
                trig(TrigKind::Cos),
            ],
        );
        rotation.apply(vect)
    }
}

fn signed_degrees(first: DVec2, second: DVec2) -> f64 {
    if first.length_squared() == 0.0 || second.length_squared() == 0.0 {
        return 0.0;
    }
    let degrees = first.perp_dot(second).atan2(first.dot(second)).to_degrees();
    if degrees <= -180.0 { degrees + 360.0 } else { degrees }
}

/// Square root of an inner product
#[derive(Debug)]
struct Norm {
    squared: Scalar<f64>,
}

impl Evaluate<f64> for Norm {
    fn evaluate(&self, field: &dyn Field<f64>) -> Result<f64, EvalError> {
        Ok(self.squared.value(field)?.sqrt())
    }
}

impl fmt::Display for Norm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sqrt{}", self.squared)
    }
}

#[derive(Clone, Copy, Debug)]
enum TrigKind {
    Cos,
    Sin,
    NegSin,
}

/// A rotation matrix entry, resolved from its angle on evaluation
#[derive(Debug)]
struct Trig {
    angle: Degrees<f64>,
    kind: TrigKind,
}

impl Evaluate<f64> for Trig {
    fn evaluate(&self, field: &dyn Field<f64>) -> Result<f64, EvalError> {
        let radians = self.angle.resolve(&Dot, field)?.to_radians();
        Ok(match self.kind {
            TrigKind::Cos => radians.cos(),
            TrigKind::Sin => radians.sin(),
            TrigKind::NegSin => -radians.sin(),
        })
    }
}

impl fmt::Display for Trig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TrigKind::Cos => write!(f, "cos({})", self.angle),
            TrigKind::Sin => write!(f, "sin({})", self.angle),
            TrigKind::NegSin => write!(f, "-sin({})", self.angle),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algebra::Decimal;

    const TOLERANCE: f64 = 1e-6;

    fn point(x: f64, y: f64) -> Vect<f64> {
        Vect::fixed([Scalar::literal(x), Scalar::literal(y)])
    }

    #[test]
    fn product_sums_pairwise_products() {
        let field = Decimal::seeded(11);
        let product = Dot.product(&point(1.0, 2.0), &point(3.0, -4.0));
        assert_eq!(product.value(&field), Ok(-5.0));
    }

    #[test]
    fn norm_of_three_four_is_five() {
        let field = Decimal::seeded(11);
        let norm = Dot.norm(&point(3.0, 4.0)).value(&field).unwrap();
        assert!((norm - 5.0).abs() < TOLERANCE);
    }

    #[test]
    fn signed_angle_quadrants() {
        let field = Decimal::seeded(11);
        let east = point(1.0, 0.0);
        let cases = [
            (point(0.0, 1.0), 90.0),
            (point(0.0, -1.0), -90.0),
            (point(-1.0, 1.0), 135.0),
            (point(-1.0, -1.0), -135.0),
            (point(-1.0, 0.0), 180.0),
            (point(2.0, 0.0), 0.0),
        ];
        for (other, expected) in cases {
            let angle = Dot.signed_angle(&east, &other, &field).unwrap();
            assert!((angle - expected).abs() < TOLERANCE, "{} vs {}", angle, expected);
        }
    }

    #[test]
    fn angle_of_zero_vector_is_zero() {
        let field = Decimal::seeded(11);
        let angle = Dot.signed_angle(&point(0.0, 0.0), &point(1.0, 1.0), &field);
        assert_eq!(angle, Ok(0.0));
    }

    #[test]
    fn half_turn_stays_in_range() {
        assert_eq!(signed_degrees(DVec2::X, DVec2::new(-1.0, -0.0)), 180.0);
    }

    #[test]
    fn rot_turns_counterclockwise() {
        let field = Decimal::seeded(11);
        let rotated = Dot.rot(&point(1.0, 0.0), &Degrees::Fixed(90.0));
        let coords = rotated.resolve(&field).unwrap();
        assert!(coords[0].abs() < TOLERANCE);
        assert!((coords[1] - 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn degrees_compose() {
        let field = Decimal::seeded(11);
        let angle = Degrees::sum(
            Degrees::times(Degrees::between(point(1.0, 0.0), point(0.0, 1.0)), 0.5),
            Degrees::opposite(Degrees::Fixed(15.0)),
        );
        let degrees = angle.resolve(&Dot, &field).unwrap();
        assert!((degrees - 30.0).abs() < TOLERANCE);
    }

    #[test]
    fn displays_rotation_entry() {
        let entry = Scalar::custom(Trig {
            angle: Degrees::Fixed(30.0),
            kind: TrigKind::NegSin,
        });
        insta::assert_snapshot!(entry.to_string(), @"-sin(30°)");
    }
}
