//! axis aligned and circular bounding volumes

use silhouette_macro_tools::Fields;
use tracing::debug;

use crate::{
    collision::Projector,
    error::{GeometryError, Result},
    math::{axis::AxisDirection, vector::Vector, FloatNum},
    shape::{BoundingBox, Bounds, CenterPoint, Circle, Segment, Shape},
};

/// enclosing circle, cheap and usually larger than the minimal one
#[derive(Clone, Copy, Debug, PartialEq, Fields)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[r]
pub struct BoundingCircle {
    radius: FloatNum,
    #[r(copy)]
    center: Vector,
}

impl BoundingCircle {
    pub(crate) fn new(radius: FloatNum, center: Vector) -> Self {
        Self { radius, center }
    }

    pub fn is_bounded(&self) -> bool {
        self.radius.is_finite()
    }

    pub fn contains_point(&self, point: &Vector) -> bool {
        self.center.distance(point) <= self.radius
    }
}

impl TryFrom<BoundingCircle> for Circle {
    type Error = GeometryError;

    fn try_from(bounding_circle: BoundingCircle) -> Result<Self> {
        Circle::new(bounding_circle.radius, bounding_circle.center)
    }
}

pub fn make_aabb(xmin: FloatNum, xmax: FloatNum, ymin: FloatNum, ymax: FloatNum) -> Result<BoundingBox> {
    BoundingBox::new(xmin, xmax, ymin, ymax)
}

fn box_from_bounds(bounds: &impl Bounds) -> Option<BoundingBox> {
    bounds.is_bounded().then(|| {
        BoundingBox::new_unchecked(bounds.xmin(), bounds.xmax(), bounds.ymin(), bounds.ymax())
    })
}

/// box built from the shadows on both world axes, `None` when one of them is unbounded
pub fn aabb_of<T: Projector + ?Sized>(shape: &T) -> Option<BoundingBox> {
    let x = shape.projection_on_axis(AxisDirection::X);
    let y = shape.projection_on_axis(AxisDirection::Y);
    [x.min(), x.max(), y.min(), y.max()]
        .iter()
        .all(|v| v.is_finite())
        .then(|| BoundingBox::new_unchecked(x.min(), x.max(), y.min(), y.max()))
}

/// circle around the shadow based box of `shape`, see [`aabb_of`]
pub fn cbb_of<T: Projector + ?Sized>(shape: &T) -> Option<BoundingCircle> {
    aabb_of(shape).map(|bounding_box| box_cbb(&bounding_box))
}

pub fn aabb(shape: &Shape) -> Result<BoundingBox> {
    let bounding_box = match shape {
        Shape::Aabb(bounding_box) => Some(*bounding_box),
        Shape::Circle(circle) => box_from_bounds(circle),
        Shape::Polygon(polygon) => box_from_bounds(polygon),
        Shape::ConvexPolygon(polygon) => box_from_bounds(polygon),
        Shape::Line(line) => box_from_bounds(line),
        Shape::Path(path) => box_from_bounds(path),
        Shape::Circuit(circuit) => box_from_bounds(circuit),
        Shape::Segment(segment) => aabb_of(segment),
        Shape::Ray(ray) => aabb_of(ray),
    };
    bounding_box.ok_or(GeometryError::Unbounded { shape: shape.kind() })
}

fn box_cbb(bounding_box: &BoundingBox) -> BoundingCircle {
    let (width, height) = bounding_box.shape();
    BoundingCircle::new(width.hypot(height) * 0.5, bounding_box.center())
}

fn segment_cbb(segment: &Segment) -> BoundingCircle {
    BoundingCircle::new(segment.length() * 0.5, segment.center_point())
}

// circle at `center` reaching the farthest vertex
fn vertices_cbb(center: Vector, vertices: &[Vector]) -> BoundingCircle {
    let radius = vertices
        .iter()
        .map(|vertex| vertex.distance(&center))
        .fold(0., FloatNum::max);
    BoundingCircle::new(radius, center)
}

pub fn cbb(shape: &Shape) -> Result<BoundingCircle> {
    Ok(match shape {
        Shape::Circle(circle) => BoundingCircle::new(circle.radius(), circle.center()),
        Shape::Aabb(bounding_box) => box_cbb(bounding_box),
        Shape::Segment(segment) => segment_cbb(segment),
        Shape::Polygon(polygon) => vertices_cbb(polygon.center_point(), polygon.vertices()),
        Shape::ConvexPolygon(polygon) => vertices_cbb(polygon.center_point(), polygon.vertices()),
        Shape::Path(path) => vertices_cbb(path.center_point(), path.vertices()),
        Shape::Circuit(circuit) => vertices_cbb(circuit.center_point(), circuit.vertices()),
        Shape::Line(line) => BoundingCircle::new(FloatNum::INFINITY, line.point()),
        Shape::Ray(_) => {
            debug!(shape = %shape.kind(), "no dedicated cbb rule, wrapping the aabb");
            let bounding_box = aabb(shape).map_err(|_| GeometryError::Unsupported {
                operation: "cbb",
                shape: shape.kind(),
            })?;
            box_cbb(&bounding_box)
        }
    })
}
