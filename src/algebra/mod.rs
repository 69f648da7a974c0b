//! The field-generic expression engine
//!
//! This module is organized into submodules:
//! - `field`: the `Field` capability trait every evaluation goes through
//! - `decimal`: the real-number field over `f64`
//! - `scalar`: deferred numeric expressions
//! - `vect`: coordinate-tuple expressions and the mutable `VectCell` slot
//! - `matrix`: fixed linear maps
//! - `predicate`: boolean conditions
//! - `metric`: dot product, norm, signed angle and rotation
//! - `multiset`: order-independent operand bags
//! - `defaults`: tolerance and sampling settings

pub mod decimal;
pub mod defaults;
pub mod field;
pub mod matrix;
pub mod metric;
pub mod multiset;
pub mod predicate;
pub mod scalar;
pub mod vect;

pub use decimal::Decimal;
pub use field::Field;
pub use matrix::Matrix;
pub use metric::{Degrees, Dot, InnerProduct, dot};
pub use multiset::Multiset;
pub use predicate::Predicate;
pub use scalar::{Evaluate, Scalar};
pub use vect::{Vect, VectCell};
