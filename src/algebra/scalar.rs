//! Scalar expressions: deferred numeric computations
//!
//! A [`Scalar`] is an immutable node; building one never evaluates anything.
//! [`Scalar::value`] walks the graph from scratch on every call, so randomness
//! is re-sampled and upstream slots are re-read each time.

use std::fmt;
use std::rc::Rc;

use crate::errors::EvalError;
use crate::log::{debug, warn};

use super::field::Field;
use super::multiset::Multiset;
use super::predicate::Predicate;
use super::vect::Vect;

/// Extension point for field-specific scalar nodes.
///
/// Nodes that need more than the generic [`Field`] contract (square roots,
/// trigonometry) implement this and are wrapped in [`Scalar::Custom`].
pub trait Evaluate<T>: fmt::Debug + fmt::Display {
    fn evaluate(&self, field: &dyn Field<T>) -> Result<T, EvalError>;
}

/// A node in a scalar expression tree
#[derive(Clone, Debug)]
pub enum Scalar<T> {
    /// A concrete value
    Literal(T),
    /// The field's additive identity, resolved at evaluation
    AddIdentity,
    /// The field's multiplicative identity, resolved at evaluation
    MultIdentity,
    /// Sum of all operands
    Add(Multiset<Scalar<T>>),
    /// Product of all operands
    Multiplication(Multiset<Scalar<T>>),
    AddInverse(Rc<Scalar<T>>),
    /// Fails when the field has no inverse for the operand's value
    MultInverse(Rc<Scalar<T>>),
    /// Numerator times the inverse of the denominator
    Division(Rc<Scalar<T>>, Rc<Scalar<T>>),
    /// A fresh field sample on every evaluation
    Random,
    /// A sample guaranteed unequal to the operand's value
    Different(Rc<Scalar<T>>),
    /// Fails with the embedded error once evaluation reaches it
    Throwing(Rc<EvalError>),
    /// Evaluates only the branch selected by the predicate
    Ternary(Rc<Predicate<T>>, Rc<Scalar<T>>, Rc<Scalar<T>>),
    /// Lazy projection of a vector coordinate
    Coord(Rc<Vect<T>>, usize),
    Custom(Rc<dyn Evaluate<T>>),
}

impl<T: Clone + PartialEq> Scalar<T> {
    pub fn literal(value: T) -> Self {
        Scalar::Literal(value)
    }

    pub fn sum(operands: impl IntoIterator<Item = Scalar<T>>) -> Self {
        Scalar::Add(operands.into_iter().collect())
    }

    pub fn product(operands: impl IntoIterator<Item = Scalar<T>>) -> Self {
        Scalar::Multiplication(operands.into_iter().collect())
    }

    pub fn negate(operand: Scalar<T>) -> Self {
        Scalar::AddInverse(Rc::new(operand))
    }

    pub fn inverse(operand: Scalar<T>) -> Self {
        Scalar::MultInverse(Rc::new(operand))
    }

    pub fn division(numerator: Scalar<T>, denominator: Scalar<T>) -> Self {
        Scalar::Division(Rc::new(numerator), Rc::new(denominator))
    }

    /// `first - second`
    pub fn minus(first: Scalar<T>, second: Scalar<T>) -> Self {
        Scalar::sum([first, Scalar::negate(second)])
    }

    pub fn different(operand: Scalar<T>) -> Self {
        Scalar::Different(Rc::new(operand))
    }

    pub fn throwing(error: EvalError) -> Self {
        Scalar::Throwing(Rc::new(error))
    }

    pub fn ternary(predicate: Predicate<T>, then: Scalar<T>, otherwise: Scalar<T>) -> Self {
        Scalar::Ternary(Rc::new(predicate), Rc::new(then), Rc::new(otherwise))
    }

    /// Coordinate `axis` (0-based) of `vect`
    pub fn coord(vect: Vect<T>, axis: usize) -> Self {
        Scalar::Coord(Rc::new(vect), axis)
    }

    pub fn custom(node: impl Evaluate<T> + 'static) -> Self {
        Scalar::Custom(Rc::new(node))
    }

    /// Evaluate against `field`.
    pub fn value(&self, field: &dyn Field<T>) -> Result<T, EvalError> {
        match self {
            Scalar::Literal(value) => Ok(value.clone()),
            Scalar::AddIdentity => Ok(field.additive_identity()),
            Scalar::MultIdentity => Ok(field.multiplicative_identity()),
            Scalar::Add(operands) => {
                operands
                    .iter()
                    .try_fold(field.additive_identity(), |acc, operand| -> Result<T, EvalError> {
                        Ok(field.add(&acc, &operand.value(field)?))
                    })
            }
            Scalar::Multiplication(operands) => {
                operands
                    .iter()
                    .try_fold(field.multiplicative_identity(), |acc, operand| -> Result<T, EvalError> {
                        Ok(field.multiply(&acc, &operand.value(field)?))
                    })
            }
            Scalar::AddInverse(operand) => Ok(field.additive_inverse(&operand.value(field)?)),
            Scalar::MultInverse(operand) => field.multiplicative_inverse(&operand.value(field)?),
            Scalar::Division(numerator, denominator) => {
                let numerator = numerator.value(field)?;
                let inverse = field.multiplicative_inverse(&denominator.value(field)?)?;
                Ok(field.multiply(&numerator, &inverse))
            }
            Scalar::Random => Ok(field.random()),
            Scalar::Different(operand) => sample_different(field, &operand.value(field)?),
            Scalar::Throwing(error) => Err(error.as_ref().clone()),
            Scalar::Ternary(predicate, then, otherwise) => {
                if predicate.resolve(field)? {
                    then.value(field)
                } else {
                    otherwise.value(field)
                }
            }
            Scalar::Coord(vect, axis) => {
                // a slot's own coords are projections of itself; read its target
                let coords = match vect.as_ref() {
                    Vect::Slot(cell) => cell.get().coords(),
                    other => other.coords(),
                };
                match coords.get(*axis) {
                    Some(coord) => coord.value(field),
                    None => Err(EvalError::Dimension {
                        axis: *axis,
                        dimension: coords.len(),
                    }),
                }
            }
            Scalar::Custom(node) => node.evaluate(field),
        }
    }
}

fn sample_different<T>(field: &dyn Field<T>, avoided: &T) -> Result<T, EvalError> {
    let attempts = field.max_sampling_attempts();
    for _ in 0..attempts {
        let candidate = field.random();
        if !field.equal(&candidate, avoided) {
            debug!("Different: found distinct sample");
            return Ok(candidate);
        }
    }
    warn!(attempts, "Different: sampling exhausted");
    Err(EvalError::SamplingExhausted { attempts })
}

impl<T> From<T> for Scalar<T> {
    fn from(value: T) -> Self {
        Scalar::Literal(value)
    }
}

impl<T: PartialEq> PartialEq for Scalar<T> {
    fn eq(&self, other: &Self) -> bool {
        use Scalar::*;
        match (self, other) {
            (Literal(a), Literal(b)) => a == b,
            (AddIdentity, AddIdentity) | (MultIdentity, MultIdentity) | (Random, Random) => true,
            (Add(a), Add(b)) | (Multiplication(a), Multiplication(b)) => a == b,
            (AddInverse(a), AddInverse(b))
            | (MultInverse(a), MultInverse(b))
            | (Different(a), Different(b)) => a == b,
            (Division(n1, d1), Division(n2, d2)) => n1 == n2 && d1 == d2,
            (Throwing(a), Throwing(b)) => Rc::ptr_eq(a, b),
            (Ternary(p1, a1, b1), Ternary(p2, a2, b2)) => p1 == p2 && a1 == a2 && b1 == b2,
            (Coord(v1, i1), Coord(v2, i2)) => i1 == i2 && v1 == v2,
            (Custom(a), Custom(b)) => std::ptr::addr_eq(Rc::as_ptr(a), Rc::as_ptr(b)),
            _ => false,
        }
    }
}

impl<T: fmt::Display> fmt::Display for Scalar<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Literal(value) => write!(f, "{}", value),
            Scalar::AddIdentity => write!(f, "0"),
            Scalar::MultIdentity => write!(f, "1"),
            Scalar::Add(operands) => write_joined(f, operands, " + "),
            Scalar::Multiplication(operands) => write_joined(f, operands, " * "),
            Scalar::AddInverse(operand) => write!(f, "-{}", operand),
            Scalar::MultInverse(operand) => write!(f, "1/{}", operand),
            Scalar::Division(numerator, denominator) => {
                write!(f, "({} / {})", numerator, denominator)
            }
            Scalar::Random => write!(f, "random"),
            Scalar::Different(operand) => write!(f, "different({})", operand),
            Scalar::Throwing(error) => write!(f, "throwing({})", error),
            Scalar::Ternary(predicate, then, otherwise) => {
                write!(f, "({} ? {} : {})", predicate, then, otherwise)
            }
            Scalar::Coord(vect, axis) => write!(f, "{}[{}]", vect, axis),
            Scalar::Custom(node) => write!(f, "{}", node),
        }
    }
}

fn write_joined<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    operands: &Multiset<Scalar<T>>,
    separator: &str,
) -> fmt::Result {
    write!(f, "(")?;
    for (idx, operand) in operands.iter().enumerate() {
        if idx > 0 {
            write!(f, "{}", separator)?;
        }
        write!(f, "{}", operand)?;
    }
    write!(f, ")")
}
