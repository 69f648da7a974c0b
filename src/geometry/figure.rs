//! The boundary with drawing surfaces
//!
//! A [`Figure`] is an ordered list of [`Shape`]s. Rendering hands each shape,
//! read-only, to a [`Painter`] together with the field to evaluate it in.
//! Converting resolved coordinates into a display space is the painter's job.

use glam::DVec2;

use crate::algebra::{Field, Scalar, Vect};
use crate::errors::EvalError;
use crate::log::debug;

use super::angle::Angle;
use super::circle::Circle;
use super::line::Line;
use super::polyline::Polyline;
use super::ray::Ray;
use super::segment::Segment;

/// Any drawable geometric entity
#[derive(Clone, Debug, PartialEq)]
pub enum Shape<T> {
    Point(Vect<T>),
    Line(Line<T>),
    Circle(Circle<T>),
    Ray(Ray<T>),
    Segment(Segment<T>),
    Polyline(Polyline<T>),
    Angle(Angle<T>),
}

impl<T> Shape<T> {
    pub fn kind(&self) -> &'static str {
        match self {
            Shape::Point(_) => "point",
            Shape::Line(_) => "line",
            Shape::Circle(_) => "circle",
            Shape::Ray(_) => "ray",
            Shape::Segment(_) => "segment",
            Shape::Polyline(_) => "polyline",
            Shape::Angle(_) => "angle",
        }
    }
}

impl Shape<f64> {
    /// Key points of the shape, resolved for drawing.
    ///
    /// Lines and rays give their point and one step along the direction,
    /// circles their center and [`in_circle_point`](super::point::in_circle_point),
    /// angles their origin and one step along each side.
    pub fn anchors(&self, field: &dyn Field<f64>) -> Result<Vec<DVec2>, EvalError> {
        let ahead = |from: &Vect<f64>, direction: Vect<f64>| Vect::sum([from.clone(), direction]);
        let points = match self {
            Shape::Point(point) => vec![point.clone()],
            Shape::Line(line) => vec![
                line.point().clone(),
                ahead(line.point(), line.direction().clone()),
            ],
            Shape::Circle(circle) => vec![
                circle.center().clone(),
                ahead(
                    circle.center(),
                    Vect::fixed([circle.radius().clone(), Scalar::AddIdentity]),
                ),
            ],
            Shape::Ray(ray) => vec![
                ray.origin().clone(),
                ahead(ray.origin(), ray.direction().clone()),
            ],
            Shape::Segment(segment) => vec![segment.start().clone(), segment.end().clone()],
            Shape::Polyline(polyline) => polyline.points().to_vec(),
            Shape::Angle(angle) => {
                let origin = angle.origin();
                vec![
                    origin.clone(),
                    ahead(&origin, angle.start()),
                    ahead(&origin, angle.end()),
                ]
            }
        };
        points.iter().map(|point| point.to_dvec2(field)).collect()
    }
}

macro_rules! shape_from {
    ($($variant:ident),*) => {
        $(
            impl<T> From<$variant<T>> for Shape<T> {
                fn from(shape: $variant<T>) -> Self {
                    Shape::$variant(shape)
                }
            }
        )*
    };
}

shape_from!(Line, Circle, Ray, Segment, Polyline, Angle);

impl<T> From<Vect<T>> for Shape<T> {
    fn from(point: Vect<T>) -> Self {
        Shape::Point(point)
    }
}

/// A drawing surface.
///
/// Implementors evaluate whatever they need from the shape through `field`
/// and report evaluation failures back to the caller.
pub trait Painter<T> {
    fn paint(&mut self, shape: &Shape<T>, field: &dyn Field<T>) -> Result<(), EvalError>;
}

/// An ordered collection of shapes
#[derive(Clone, Debug, PartialEq)]
pub struct Figure<T> {
    shapes: Vec<Shape<T>>,
}

impl<T> Default for Figure<T> {
    fn default() -> Self {
        Figure { shapes: Vec::new() }
    }
}

impl<T> Figure<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a shape, returning its index
    pub fn add(&mut self, shape: impl Into<Shape<T>>) -> usize {
        self.shapes.push(shape.into());
        self.shapes.len() - 1
    }

    pub fn shapes(&self) -> &[Shape<T>] {
        &self.shapes
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Paint every shape in insertion order, stopping at the first failure.
    pub fn render(
        &self,
        painter: &mut dyn Painter<T>,
        field: &dyn Field<T>,
    ) -> Result<(), EvalError> {
        for shape in &self.shapes {
            debug!(kind = shape.kind(), "Painting shape");
            painter.paint(shape, field)?;
        }
        Ok(())
    }
}

impl<T> FromIterator<Shape<T>> for Figure<T> {
    fn from_iter<I: IntoIterator<Item = Shape<T>>>(iter: I) -> Self {
        Figure {
            shapes: iter.into_iter().collect(),
        }
    }
}
