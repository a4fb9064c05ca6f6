use silhouette_macro_tools::Fields;
use tracing::{debug, trace};

use crate::{
    context::Context,
    error::{GeometryError, Result},
    math::{axis::AxisDirection, vector::Vector, FloatNum},
    shape::{dispatch_shape, utils::nearest_vertex, CenterPoint, Circle, Shape, VerticesIter},
};

/// closed interval a shape covers along an axis, unbounded sides are infinite
#[derive(Clone, Copy, Debug, Default, PartialEq, Fields)]
#[r]
pub struct Shadow {
    min: FloatNum,
    max: FloatNum,
}

impl Shadow {
    #[inline]
    pub const fn new(min: FloatNum, max: FloatNum) -> Self {
        Self { min, max }
    }

    /// length of the common part, negative when the intervals are apart
    #[inline]
    pub fn overlap(&self, other: &Shadow) -> FloatNum {
        self.max.min(other.max) - self.min.max(other.min)
    }

    /// twice the midpoint, compared to tell which side a shape is on
    #[inline]
    pub fn mid_sum(&self) -> FloatNum {
        self.min + self.max
    }

    /// whether this interval sits further along the axis than `other`, `None` when
    /// either one is infinite on both sides
    pub fn is_ahead_of(&self, other: &Shadow) -> Option<bool> {
        let (this, other) = (self.mid_sum(), other.mid_sum());
        (!this.is_nan() && !other.is_nan()).then(|| this > other)
    }
}

pub trait Projector {
    /// `axis` must be unit length
    fn shadow_with_context(&self, axis: &Vector, context: &Context) -> Shadow;

    fn shadow(&self, axis: &Vector) -> Shadow {
        self.shadow_with_context(axis, &Context::default())
    }

    fn projection_on_axis(&self, axis: AxisDirection) -> Shadow {
        self.shadow(&axis.unit())
    }
}

impl Projector for Shape {
    fn shadow_with_context(&self, axis: &Vector, context: &Context) -> Shadow {
        dispatch_shape!(self, shape => shape.shadow_with_context(axis, context))
    }

    fn projection_on_axis(&self, axis: AxisDirection) -> Shadow {
        match self {
            Shape::Aabb(bounding_box) => bounding_box.shadow_on_axis(axis),
            shape => shape.shadow(&axis.unit()),
        }
    }
}

fn world_axes() -> [Vector; 2] {
    AxisDirection::ALL.map(AxisDirection::unit)
}

// from the vertex nearest to the circle center towards the center
fn nearest_vertex_axis(
    circle: &Circle,
    vertices: impl IntoIterator<Item = Vector>,
) -> Option<Vector> {
    let center = circle.center();
    let vertex = nearest_vertex(vertices, &center)?;
    (center - vertex).normalize().ok()
}

/// axes a single shape contributes when no pair rule applies
pub fn sat_normals(shape: &Shape, context: &Context) -> Vec<Vector> {
    match shape {
        Shape::Circle(_) => Vec::new(),
        Shape::Aabb(_) => world_axes().to_vec(),
        Shape::Segment(segment) => segment
            .normal()
            .ok()
            .into_iter()
            .chain(segment.tangent().ok())
            .collect(),
        Shape::Polygon(polygon) => polygon.normals(context.min_edge_length()),
        Shape::ConvexPolygon(polygon) => polygon.normals(context.min_edge_length()),
        Shape::Line(line) => vec![line.tangent(), line.tangent().perp()],
        Shape::Ray(ray) => vec![ray.tangent(), ray.tangent().perp()],
        Shape::Path(path) => path.axes(context.min_edge_length()),
        Shape::Circuit(circuit) => circuit.normals(context.min_edge_length()),
    }
}

// points a circle may be nearest to when it is off every edge
fn corner_points(shape: &Shape) -> Option<Vec<Vector>> {
    match shape {
        Shape::Ray(ray) => Some(vec![ray.start()]),
        shape => shape.vertices(),
    }
}

/// candidate separating axes for the pair, every axis is unit length
pub fn sat_axes(a: &Shape, b: &Shape, context: &Context) -> Vec<Vector> {
    match (a, b) {
        (Shape::Circle(a), Shape::Circle(b)) => match (b.center() - a.center()).normalize() {
            Ok(axis) => vec![axis],
            Err(_) => vec![AxisDirection::X.unit()],
        },
        (Shape::Aabb(_), Shape::Aabb(_)) => world_axes().to_vec(),
        (Shape::Aabb(bounding_box), Shape::Circle(circle))
        | (Shape::Circle(circle), Shape::Aabb(bounding_box)) => {
            nearest_vertex_axis(circle, bounding_box.vertices_iter())
                .into_iter()
                .chain(world_axes())
                .collect()
        }
        (Shape::Circle(circle), other) | (other, Shape::Circle(circle)) => {
            let mut axes = sat_normals(other, context);
            if let Some(corners) = corner_points(other) {
                axes.extend(nearest_vertex_axis(circle, corners));
            }
            axes
        }
        _ => {
            let mut axes = sat_normals(a, context);
            axes.extend(sat_normals(b, context));
            axes
        }
    }
}

/// minimum translation vector of `a` against `b`, `None` when they are apart
///
/// The vector points from `a` towards `b`. When a shadow is infinite on both sides the
/// center points decide the side instead.
pub fn sat(a: &Shape, b: &Shape) -> Result<Option<Vector>> {
    sat_with_context(a, b, &Context::default())
}

pub fn sat_with_context(a: &Shape, b: &Shape, context: &Context) -> Result<Option<Vector>> {
    if let (Shape::Circle(circle_a), Shape::Circle(circle_b)) = (a, b) {
        if circle_a.center().distance(&circle_b.center()) < context.coincident_tolerance() {
            debug!("coincident circle centers, reporting maximum penetration");
            return Ok(Some(
                AxisDirection::X.unit() * (circle_a.radius() + circle_b.radius()),
            ));
        }
    }

    let axes = sat_axes(a, b, context);
    if axes.is_empty() {
        return Err(GeometryError::NoSeparatingAxisData {
            a: a.kind(),
            b: b.kind(),
        });
    }

    let mut penetration: Option<(FloatNum, Vector)> = None;

    for axis in axes {
        let shadow_a = a.shadow_with_context(&axis, context);
        let shadow_b = b.shadow_with_context(&axis, context);
        let overlap = shadow_a.overlap(&shadow_b);

        trace!(%axis, overlap, "sat axis");

        if overlap < 0. {
            trace!(%axis, "separating axis found");
            return Ok(None);
        }

        let is_smaller = match penetration {
            Some((depth, _)) => overlap < depth,
            None => true,
        };

        if is_smaller {
            let a_is_ahead = shadow_a
                .is_ahead_of(&shadow_b)
                .unwrap_or_else(|| a.center_point() * axis > b.center_point() * axis);
            let direction = if a_is_ahead { -axis } else { axis };
            penetration = Some((overlap, direction));
        }
    }

    Ok(penetration.map(|(depth, direction)| direction * depth))
}

pub fn overlaps(a: &Shape, b: &Shape) -> Result<bool> {
    sat(a, b).map(|penetration| penetration.is_some())
}
