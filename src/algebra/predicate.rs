//! Boolean conditions over a field
//!
//! Predicates are pure. They back conditional scalars ([`Scalar::Ternary`])
//! and serve as consistency checks for callers.

use std::fmt;
use std::rc::Rc;

use crate::errors::EvalError;

use super::field::Field;
use super::metric::dot;
use super::scalar::Scalar;
use super::vect::Vect;

/// A boolean-valued expression
#[derive(Clone, Debug, PartialEq)]
pub enum Predicate<T> {
    Equals(Scalar<T>, Scalar<T>),
    /// Same dimension and field-equal on every axis
    VectEquals(Vect<T>, Vect<T>),
    /// The direction's first coordinate is the additive identity
    Vertical(Vect<T>),
    /// Squared distance to the center equals the squared radius
    PointInCircle {
        point: Vect<T>,
        center: Vect<T>,
        radius: Scalar<T>,
    },
    /// The point sits on the line through `line_point` along `direction`
    PointInLine {
        point: Vect<T>,
        line_point: Vect<T>,
        direction: Vect<T>,
    },
    Not(Rc<Predicate<T>>),
    And(Rc<Predicate<T>>, Rc<Predicate<T>>),
    Or(Rc<Predicate<T>>, Rc<Predicate<T>>),
    /// Resolves the second predicate if the first holds, the third otherwise
    Ternary(Rc<Predicate<T>>, Rc<Predicate<T>>, Rc<Predicate<T>>),
}

impl<T: Clone + PartialEq> Predicate<T> {
    pub fn not(predicate: Predicate<T>) -> Self {
        Predicate::Not(Rc::new(predicate))
    }

    pub fn and(first: Predicate<T>, second: Predicate<T>) -> Self {
        Predicate::And(Rc::new(first), Rc::new(second))
    }

    pub fn or(first: Predicate<T>, second: Predicate<T>) -> Self {
        Predicate::Or(Rc::new(first), Rc::new(second))
    }

    pub fn ternary(condition: Predicate<T>, then: Predicate<T>, otherwise: Predicate<T>) -> Self {
        Predicate::Ternary(Rc::new(condition), Rc::new(then), Rc::new(otherwise))
    }

    /// Evaluate the condition against `field`.
    pub fn resolve(&self, field: &dyn Field<T>) -> Result<bool, EvalError> {
        match self {
            Predicate::Equals(first, second) => equal(field, first, second),
            Predicate::VectEquals(first, second) => {
                let first = first.coords();
                let second = second.coords();
                if first.len() != second.len() {
                    return Ok(false);
                }
                for (a, b) in first.iter().zip(&second) {
                    if !equal(field, a, b)? {
                        return Ok(false);
                    }
                }
                Ok(true)
            }
            Predicate::Vertical(direction) => equal(
                field,
                &Scalar::coord(direction.clone(), 0),
                &Scalar::AddIdentity,
            ),
            Predicate::PointInCircle {
                point,
                center,
                radius,
            } => {
                let offset = Vect::minus(point.clone(), center.clone()).coords();
                let squared = dot(&offset, &offset);
                equal(field, &squared, &Scalar::product([radius.clone(), radius.clone()]))
            }
            Predicate::PointInLine {
                point,
                line_point,
                direction,
            } => {
                // planar cross product of (point - line_point) and direction
                let offset = Vect::minus(point.clone(), line_point.clone());
                let lhs = Scalar::product([
                    Scalar::coord(offset.clone(), 0),
                    Scalar::coord(direction.clone(), 1),
                ]);
                let rhs = Scalar::product([
                    Scalar::coord(offset, 1),
                    Scalar::coord(direction.clone(), 0),
                ]);
                equal(field, &lhs, &rhs)
            }
            Predicate::Not(predicate) => Ok(!predicate.resolve(field)?),
            Predicate::And(first, second) => Ok(first.resolve(field)? && second.resolve(field)?),
            Predicate::Or(first, second) => Ok(first.resolve(field)? || second.resolve(field)?),
            Predicate::Ternary(condition, then, otherwise) => {
                if condition.resolve(field)? {
                    then.resolve(field)
                } else {
                    otherwise.resolve(field)
                }
            }
        }
    }
}

fn equal<T: Clone + PartialEq>(
    field: &dyn Field<T>,
    first: &Scalar<T>,
    second: &Scalar<T>,
) -> Result<bool, EvalError> {
    let first = first.value(field)?;
    let second = second.value(field)?;
    Ok(field.equal(&first, &second))
}

impl<T: fmt::Display> fmt::Display for Predicate<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Predicate::Equals(first, second) => write!(f, "{} == {}", first, second),
            Predicate::VectEquals(first, second) => write!(f, "{} == {}", first, second),
            Predicate::Vertical(direction) => write!(f, "vertical({})", direction),
            Predicate::PointInCircle {
                point,
                center,
                radius,
            } => write!(f, "{} in circle({}, {})", point, center, radius),
            Predicate::PointInLine {
                point,
                line_point,
                direction,
            } => write!(f, "{} in line({}, {})", point, line_point, direction),
            Predicate::Not(predicate) => write!(f, "!({})", predicate),
            Predicate::And(first, second) => write!(f, "({} && {})", first, second),
            Predicate::Or(first, second) => write!(f, "({} || {})", first, second),
            Predicate::Ternary(condition, then, otherwise) => {
                write!(f, "({} ? {} : {})", condition, then, otherwise)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algebra::Decimal;

    fn lit(value: f64) -> Scalar<f64> {
        Scalar::literal(value)
    }

    fn point(x: f64, y: f64) -> Vect<f64> {
        Vect::fixed([lit(x), lit(y)])
    }

    #[test]
    fn equals_resolves_both_sides() {
        let field = Decimal::seeded(2);
        assert_eq!(Predicate::Equals(lit(2.0), Scalar::sum([lit(1.0), lit(1.0)])).resolve(&field), Ok(true));
        assert_eq!(Predicate::Equals(lit(2.0), lit(3.0)).resolve(&field), Ok(false));
    }

    #[test]
    fn vertical_checks_first_direction_coordinate() {
        let field = Decimal::seeded(2);
        assert_eq!(Predicate::Vertical(point(0.0, 3.0)).resolve(&field), Ok(true));
        assert_eq!(Predicate::Vertical(point(0.5, 3.0)).resolve(&field), Ok(false));
    }

    #[test]
    fn point_in_circle() {
        let field = Decimal::seeded(2);
        let on = Predicate::PointInCircle {
            point: point(3.0, 4.0),
            center: point(0.0, 0.0),
            radius: lit(5.0),
        };
        let off = Predicate::PointInCircle {
            point: point(3.0, 4.1),
            center: point(0.0, 0.0),
            radius: lit(5.0),
        };
        assert_eq!(on.resolve(&field), Ok(true));
        assert_eq!(off.resolve(&field), Ok(false));
    }

    #[test]
    fn point_in_line() {
        let field = Decimal::seeded(2);
        let on = Predicate::PointInLine {
            point: point(3.0, 7.0),
            line_point: point(1.0, 3.0),
            direction: point(1.0, 2.0),
        };
        let off = Predicate::PointInLine {
            point: point(3.0, 6.0),
            line_point: point(1.0, 3.0),
            direction: point(1.0, 2.0),
        };
        assert_eq!(on.resolve(&field), Ok(true));
        assert_eq!(off.resolve(&field), Ok(false));
    }

    #[test]
    fn vect_equals_requires_matching_dimension() {
        let field = Decimal::seeded(2);
        let short = Vect::fixed([lit(1.0)]);
        assert_eq!(Predicate::VectEquals(short, point(1.0, 0.0)).resolve(&field), Ok(false));
        let sum = Vect::sum([point(1.0, 1.0), point(0.0, 1.0)]);
        assert_eq!(Predicate::VectEquals(sum, point(1.0, 2.0)).resolve(&field), Ok(true));
    }

    #[test]
    fn connectives_short_circuit() {
        let field = Decimal::seeded(2);
        let boom = Predicate::Equals(Scalar::throwing(EvalError::state("unreachable")), lit(0.0));
        let yes = Predicate::Equals(lit(1.0), lit(1.0));
        let no = Predicate::not(yes.clone());
        assert_eq!(Predicate::and(no.clone(), boom.clone()).resolve(&field), Ok(false));
        assert_eq!(Predicate::or(yes.clone(), boom.clone()).resolve(&field), Ok(true));
        assert_eq!(Predicate::ternary(no, boom.clone(), yes.clone()).resolve(&field), Ok(true));
        assert!(Predicate::and(yes, boom).resolve(&field).is_err());
    }
}
