//! Vector expressions: fixed-length tuples of scalar expressions
//!
//! [`Vect::coords`] builds coordinate expressions without calling the field.
//! Composite vectors derive their coordinates from their operands' each time.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use glam::DVec2;

use crate::errors::EvalError;

use super::field::Field;
use super::metric::{Degrees, InnerProduct};
use super::multiset::Multiset;
use super::scalar::Scalar;

/// A node producing an ordered coordinate tuple
#[derive(Clone, Debug)]
pub enum Vect<T> {
    /// Explicit coordinates
    Fixed(Rc<[Scalar<T>]>),
    /// Coordinate-wise sum of every operand
    Sum(Multiset<Vect<T>>),
    Opposite(Rc<Vect<T>>),
    /// First operand minus the second
    Minus(Rc<Vect<T>>, Rc<Vect<T>>),
    /// Every coordinate multiplied by a scalar
    Times(Rc<Vect<T>>, Scalar<T>),
    /// Rotation by an angle, through a metric
    Rotate {
        vect: Rc<Vect<T>>,
        angle: Degrees<T>,
        metric: Rc<dyn InnerProduct<T>>,
    },
    /// First operand rotated by half the angle towards the second
    Bisector {
        first: Rc<Vect<T>>,
        second: Rc<Vect<T>>,
        metric: Rc<dyn InnerProduct<T>>,
    },
    /// Whatever vector the cell currently holds.
    ///
    /// Its coordinates are [`Scalar::Coord`] projections that read the cell's
    /// target when evaluated. The dimension is the target's at the time
    /// `coords` is called.
    Slot(VectCell<T>),
}

impl<T: Clone + PartialEq> Vect<T> {
    pub fn fixed(coords: impl IntoIterator<Item = Scalar<T>>) -> Self {
        Vect::Fixed(coords.into_iter().collect())
    }

    /// A vector whose coordinates are all the additive identity
    pub fn zero(dimension: usize) -> Self {
        Vect::fixed(std::iter::repeat_n(Scalar::AddIdentity, dimension))
    }

    pub fn sum(operands: impl IntoIterator<Item = Vect<T>>) -> Self {
        Vect::Sum(operands.into_iter().collect())
    }

    pub fn opposite(vect: Vect<T>) -> Self {
        Vect::Opposite(Rc::new(vect))
    }

    pub fn minus(first: Vect<T>, second: Vect<T>) -> Self {
        Vect::Minus(Rc::new(first), Rc::new(second))
    }

    pub fn times(vect: Vect<T>, factor: Scalar<T>) -> Self {
        Vect::Times(Rc::new(vect), factor)
    }

    pub fn rotate(vect: Vect<T>, angle: Degrees<T>, metric: Rc<dyn InnerProduct<T>>) -> Self {
        Vect::Rotate {
            vect: Rc::new(vect),
            angle,
            metric,
        }
    }

    pub fn bisector(first: Vect<T>, second: Vect<T>, metric: Rc<dyn InnerProduct<T>>) -> Self {
        Vect::Bisector {
            first: Rc::new(first),
            second: Rc::new(second),
            metric,
        }
    }

    /// Coordinate expressions, one per axis.
    ///
    /// Operands of a sum or difference are assumed to share a dimension;
    /// extra axes of longer operands are ignored.
    pub fn coords(&self) -> Vec<Scalar<T>> {
        match self {
            Vect::Fixed(coords) => coords.to_vec(),
            Vect::Sum(operands) => {
                let columns: Vec<Vec<Scalar<T>>> = operands.iter().map(Vect::coords).collect();
                let dimension = columns.first().map_or(0, Vec::len);
                (0..dimension)
                    .map(|axis| {
                        Scalar::sum(columns.iter().filter_map(|coords| coords.get(axis).cloned()))
                    })
                    .collect()
            }
            Vect::Opposite(vect) => vect.coords().into_iter().map(Scalar::negate).collect(),
            Vect::Minus(first, second) => {
                Vect::sum([first.as_ref().clone(), Vect::opposite(second.as_ref().clone())])
                    .coords()
            }
            Vect::Times(vect, factor) => vect
                .coords()
                .into_iter()
                .map(|coord| Scalar::product([coord, factor.clone()]))
                .collect(),
            Vect::Rotate {
                vect,
                angle,
                metric,
            } => metric.rot(vect, angle).coords(),
            Vect::Bisector {
                first,
                second,
                metric,
            } => {
                let half = Degrees::times(metric.angle(first, second), 0.5);
                metric.rot(first, &half).coords()
            }
            Vect::Slot(cell) => {
                let dimension = cell.get().coords().len();
                (0..dimension)
                    .map(|axis| Scalar::coord(Vect::Slot(cell.clone()), axis))
                    .collect()
            }
        }
    }

    /// Number of axes
    pub fn dimension(&self) -> usize {
        self.coords().len()
    }

    /// Evaluate every coordinate
    pub fn resolve(&self, field: &dyn Field<T>) -> Result<Vec<T>, EvalError> {
        self.coords().iter().map(|coord| coord.value(field)).collect()
    }
}

impl Vect<f64> {
    /// Resolve a planar vector into drawable numbers.
    pub fn to_dvec2(&self, field: &dyn Field<f64>) -> Result<DVec2, EvalError> {
        let x = Scalar::coord(self.clone(), 0).value(field)?;
        let y = Scalar::coord(self.clone(), 1).value(field)?;
        Ok(DVec2::new(x, y))
    }
}

impl<T: PartialEq> PartialEq for Vect<T> {
    fn eq(&self, other: &Self) -> bool {
        use Vect::*;
        match (self, other) {
            (Fixed(a), Fixed(b)) => a == b,
            (Sum(a), Sum(b)) => a == b,
            (Opposite(a), Opposite(b)) => a == b,
            (Minus(a1, b1), Minus(a2, b2)) => a1 == a2 && b1 == b2,
            (Times(v1, s1), Times(v2, s2)) => v1 == v2 && s1 == s2,
            (
                Rotate {
                    vect: v1,
                    angle: a1,
                    metric: m1,
                },
                Rotate {
                    vect: v2,
                    angle: a2,
                    metric: m2,
                },
            ) => v1 == v2 && a1 == a2 && same_metric(m1, m2),
            (
                Bisector {
                    first: f1,
                    second: s1,
                    metric: m1,
                },
                Bisector {
                    first: f2,
                    second: s2,
                    metric: m2,
                },
            ) => f1 == f2 && s1 == s2 && same_metric(m1, m2),
            (Slot(a), Slot(b)) => a == b,
            _ => false,
        }
    }
}

fn same_metric<T>(first: &Rc<dyn InnerProduct<T>>, second: &Rc<dyn InnerProduct<T>>) -> bool {
    std::ptr::addr_eq(Rc::as_ptr(first), Rc::as_ptr(second))
}

impl<T: fmt::Display> fmt::Display for Vect<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Vect::Fixed(coords) => {
                write!(f, "(")?;
                for (idx, coord) in coords.iter().enumerate() {
                    if idx > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", coord)?;
                }
                write!(f, ")")
            }
            Vect::Sum(operands) => {
                write!(f, "sum[")?;
                for (idx, operand) in operands.iter().enumerate() {
                    if idx > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", operand)?;
                }
                write!(f, "]")
            }
            Vect::Opposite(vect) => write!(f, "-{}", vect),
            Vect::Minus(first, second) => write!(f, "({} - {})", first, second),
            Vect::Times(vect, factor) => write!(f, "{} * {}", vect, factor),
            Vect::Rotate { vect, angle, .. } => write!(f, "rot({}, {})", vect, angle),
            Vect::Bisector { first, second, .. } => write!(f, "bisector({}, {})", first, second),
            Vect::Slot(cell) => write!(f, "slot{}", cell.0.borrow()),
        }
    }
}

/// A swappable reference to a vector.
///
/// This is the only mutable piece of an expression graph. Clones share the
/// same target, and every [`Vect::Slot`] built from the cell sees a rebind on
/// its next evaluation. Rebinding a cell to a vector that reads the same cell
/// makes evaluation recurse without end.
#[derive(Clone, Debug)]
pub struct VectCell<T>(Rc<RefCell<Vect<T>>>);

impl<T: Clone> VectCell<T> {
    pub fn new(target: Vect<T>) -> Self {
        VectCell(Rc::new(RefCell::new(target)))
    }

    /// The current target
    pub fn get(&self) -> Vect<T> {
        self.0.borrow().clone()
    }

    /// Rebind to `target`, returning the previous one
    pub fn replace(&self, target: Vect<T>) -> Vect<T> {
        self.0.replace(target)
    }

    /// A vector expression reading this cell
    pub fn vect(&self) -> Vect<T> {
        Vect::Slot(self.clone())
    }
}

impl<T> PartialEq for VectCell<T> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}
