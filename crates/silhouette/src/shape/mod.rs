use std::fmt::Display;

use crate::{
    error::{GeometryError, Result},
    math::{vector::Vector, FloatNum},
};

pub mod aabb;
pub mod circle;
pub mod flat;
pub mod line;
pub mod path;
pub mod polygon;
pub mod segment;
pub(crate) mod utils;

pub use aabb::{BoundingBox, BoundingBoxArgs};
pub use circle::Circle;
pub use flat::Flat;
pub use line::{Line, Ray};
pub use path::{Circuit, Path};
pub use polygon::{ConvexPolygon, Polygon};
pub use segment::Segment;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ShapeKind {
    Circle,
    Aabb,
    Segment,
    Polygon,
    ConvexPolygon,
    Line,
    Ray,
    Path,
    Circuit,
}

impl Display for ShapeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ShapeKind::Circle => "circle",
            ShapeKind::Aabb => "aabb",
            ShapeKind::Segment => "segment",
            ShapeKind::Polygon => "polygon",
            ShapeKind::ConvexPolygon => "convex polygon",
            ShapeKind::Line => "line",
            ShapeKind::Ray => "ray",
            ShapeKind::Path => "path",
            ShapeKind::Circuit => "circuit",
        };
        f.write_str(name)
    }
}

pub trait CenterPoint {
    fn center_point(&self) -> Vector;
}

/// axis aligned extent, unbounded directions report infinities
pub trait Bounds {
    fn xmin(&self) -> FloatNum;

    fn xmax(&self) -> FloatNum;

    fn ymin(&self) -> FloatNum;

    fn ymax(&self) -> FloatNum;

    fn width(&self) -> FloatNum {
        self.xmax() - self.xmin()
    }

    fn height(&self) -> FloatNum {
        self.ymax() - self.ymin()
    }

    fn is_bounded(&self) -> bool {
        [self.xmin(), self.xmax(), self.ymin(), self.ymax()]
            .iter()
            .all(|v| v.is_finite())
    }

    fn bottom_left(&self) -> Vector {
        Vector::new(self.xmin(), self.ymin())
    }

    fn bottom_right(&self) -> Vector {
        Vector::new(self.xmax(), self.ymin())
    }

    fn top_left(&self) -> Vector {
        Vector::new(self.xmin(), self.ymax())
    }

    fn top_right(&self) -> Vector {
        Vector::new(self.xmax(), self.ymax())
    }
}

/// shapes with a finite, positive area
pub trait Solid {
    fn area(&self) -> FloatNum;

    /// squared radius of gyration about `axis`, or about the centroid when `None`
    fn rog_squared(&self, axis: Option<Vector>) -> Result<FloatNum>;

    fn rog(&self, axis: Option<Vector>) -> Result<FloatNum> {
        self.rog_squared(axis).map(FloatNum::sqrt)
    }
}

pub trait Translate {
    fn translate(&mut self, vector: &Vector);

    fn moved(&self, vector: &Vector) -> Self
    where
        Self: Sized + Clone,
    {
        let mut shape = self.clone();
        shape.translate(vector);
        shape
    }

    /// copy whose center point sits at `position`
    fn moved_to(&self, position: &Vector) -> Self
    where
        Self: Sized + Clone + CenterPoint,
    {
        self.moved(&(*position - self.center_point()))
    }
}

pub trait VerticesIter {
    fn vertices_iter(&self) -> impl Iterator<Item = Vector> + '_;
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", content = "data", rename_all = "snake_case"))]
pub enum Shape {
    Circle(Circle),
    Aabb(BoundingBox),
    Segment(Segment),
    Polygon(Polygon),
    ConvexPolygon(ConvexPolygon),
    Line(Line),
    Ray(Ray),
    Path(Path),
    Circuit(Circuit),
}

macro_rules! dispatch_shape {
    ($shape:expr, $inner:ident => $body:expr) => {
        match $shape {
            $crate::shape::Shape::Circle($inner) => $body,
            $crate::shape::Shape::Aabb($inner) => $body,
            $crate::shape::Shape::Segment($inner) => $body,
            $crate::shape::Shape::Polygon($inner) => $body,
            $crate::shape::Shape::ConvexPolygon($inner) => $body,
            $crate::shape::Shape::Line($inner) => $body,
            $crate::shape::Shape::Ray($inner) => $body,
            $crate::shape::Shape::Path($inner) => $body,
            $crate::shape::Shape::Circuit($inner) => $body,
        }
    };
}

pub(crate) use dispatch_shape;

macro_rules! impl_from_for_shape {
    ($($variant:ident => $ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Shape {
                fn from(value: $ty) -> Self {
                    Shape::$variant(value)
                }
            }
        )*
    };
}

impl_from_for_shape!(
    Circle => Circle,
    Aabb => BoundingBox,
    Segment => Segment,
    Polygon => Polygon,
    ConvexPolygon => ConvexPolygon,
    Line => Line,
    Ray => Ray,
    Path => Path,
    Circuit => Circuit,
);

impl Shape {
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Circle(_) => ShapeKind::Circle,
            Shape::Aabb(_) => ShapeKind::Aabb,
            Shape::Segment(_) => ShapeKind::Segment,
            Shape::Polygon(_) => ShapeKind::Polygon,
            Shape::ConvexPolygon(_) => ShapeKind::ConvexPolygon,
            Shape::Line(_) => ShapeKind::Line,
            Shape::Ray(_) => ShapeKind::Ray,
            Shape::Path(_) => ShapeKind::Path,
            Shape::Circuit(_) => ShapeKind::Circuit,
        }
    }

    pub fn as_solid(&self) -> Option<&dyn Solid> {
        match self {
            Shape::Circle(circle) => Some(circle),
            Shape::Aabb(bounding_box) => Some(bounding_box),
            Shape::Polygon(polygon) => Some(polygon),
            Shape::ConvexPolygon(polygon) => Some(polygon),
            Shape::Segment(_)
            | Shape::Line(_)
            | Shape::Ray(_)
            | Shape::Path(_)
            | Shape::Circuit(_) => None,
        }
    }

    pub fn area(&self) -> Result<FloatNum> {
        self.as_solid()
            .map(|solid| solid.area())
            .ok_or(GeometryError::Unsupported {
                operation: "area",
                shape: self.kind(),
            })
    }

    pub fn rog_squared(&self, axis: Option<Vector>) -> Result<FloatNum> {
        self.as_solid()
            .ok_or(GeometryError::Unsupported {
                operation: "rog_squared",
                shape: self.kind(),
            })?
            .rog_squared(axis)
    }

    /// vertices of polygonal variants and paths, `None` for circles and infinite shapes
    pub fn vertices(&self) -> Option<Vec<Vector>> {
        match self {
            Shape::Aabb(bounding_box) => Some(bounding_box.vertices_iter().collect()),
            Shape::Segment(segment) => Some(segment.vertices_iter().collect()),
            Shape::Polygon(polygon) => Some(polygon.vertices().to_vec()),
            Shape::ConvexPolygon(polygon) => Some(polygon.vertices().to_vec()),
            Shape::Path(path) => Some(path.vertices().to_vec()),
            Shape::Circuit(circuit) => Some(circuit.vertices().to_vec()),
            Shape::Circle(_) | Shape::Line(_) | Shape::Ray(_) => None,
        }
    }

    pub fn to_flat(&self) -> Vec<FloatNum> {
        dispatch_shape!(self, shape => shape.to_flat())
    }

    pub fn from_flat(kind: ShapeKind, data: &[FloatNum]) -> Result<Self> {
        Ok(match kind {
            ShapeKind::Circle => Circle::from_flat(data)?.into(),
            ShapeKind::Aabb => BoundingBox::from_flat(data)?.into(),
            ShapeKind::Segment => Segment::from_flat(data)?.into(),
            ShapeKind::Polygon => Polygon::from_flat(data)?.into(),
            ShapeKind::ConvexPolygon => ConvexPolygon::from_flat(data)?.into(),
            ShapeKind::Line => Line::from_flat(data)?.into(),
            ShapeKind::Ray => Ray::from_flat(data)?.into(),
            ShapeKind::Path => Path::from_flat(data)?.into(),
            ShapeKind::Circuit => Circuit::from_flat(data)?.into(),
        })
    }

    /// 0 when `point` lies in a solid shape or on an open one
    pub fn distance_point(&self, point: &Vector) -> FloatNum {
        dispatch_shape!(self, shape => shape.distance_point(point))
    }
}

impl CenterPoint for Shape {
    fn center_point(&self) -> Vector {
        dispatch_shape!(self, shape => shape.center_point())
    }
}

impl Bounds for Shape {
    fn xmin(&self) -> FloatNum {
        dispatch_shape!(self, shape => Bounds::xmin(shape))
    }

    fn xmax(&self) -> FloatNum {
        dispatch_shape!(self, shape => Bounds::xmax(shape))
    }

    fn ymin(&self) -> FloatNum {
        dispatch_shape!(self, shape => Bounds::ymin(shape))
    }

    fn ymax(&self) -> FloatNum {
        dispatch_shape!(self, shape => Bounds::ymax(shape))
    }
}

impl Translate for Shape {
    fn translate(&mut self, vector: &Vector) {
        dispatch_shape!(self, shape => shape.translate(vector))
    }
}
