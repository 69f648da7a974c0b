//! Geometric constructions over the expression engine
//!
//! Each entity holds [`Vect`](crate::algebra::Vect) and
//! [`Scalar`](crate::algebra::Scalar) expressions. Derived entities
//! (perpendiculars, reflections, diameters, bisectors) are built from their
//! operands' expressions, so changing a defining slot moves everything that
//! depends on it.
//!
//! - `point`: point constructions and reflections
//! - `line`, `circle`, `ray`, `segment`, `polyline`: the entities
//! - `angle`: angles with a rebindable origin
//! - `analytics`: slope, intercept and ordinate of lines
//! - `figure`: shape collections handed to a drawing surface

pub mod analytics;
pub mod angle;
pub mod circle;
pub mod figure;
pub mod line;
pub mod point;
pub mod polyline;
pub mod ray;
pub mod segment;

pub use analytics::{intercept, line_point_ordinate, slope};
pub use angle::Angle;
pub use circle::Circle;
pub use figure::{Figure, Painter, Shape};
pub use line::Line;
pub use point::xy;
pub use polyline::Polyline;
pub use ray::Ray;
pub use segment::Segment;
