//! Declarative geometry over deferred, field-generic expressions.
//!
//! Points, lines, circles and angles are expression graphs rather than
//! coordinates. Nothing is computed until a value is asked for against a
//! [`Field`](algebra::Field), and every evaluation starts from scratch, so
//! rebinding an angle's origin moves every construction built on it.
//!
//! ```
//! use lazygeo::algebra::{Decimal, Scalar};
//! use lazygeo::geometry::{Circle, Segment, xy};
//!
//! let field = Decimal::seeded(1);
//! let circle = Circle::new(xy(0.0, 0.0), Scalar::literal(2.0));
//! let diameter = Segment::circle_diameter(&circle, xy(2.0, 0.0));
//! assert_eq!(diameter.end().resolve(&field)?, vec![-2.0, 0.0]);
//!
//! // building an impossible diameter is fine; evaluating it is not
//! let broken = Segment::circle_diameter(&circle, xy(1.0, 0.0));
//! assert!(broken.end().resolve(&field).is_err());
//! # Ok::<(), lazygeo::errors::EvalError>(())
//! ```

pub mod algebra;
pub mod errors;
pub mod geometry;
mod log;

pub use errors::{EvalError, NumericError, ShapeError};
