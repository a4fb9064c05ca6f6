pub mod algo;
pub mod bounding;
pub mod collision;
pub mod context;
pub mod error;
pub mod math;
pub mod shape;

pub use algo::{clip, convex_hull, polygon_area, polygon_center_of_mass, polygon_rog_squared};
pub use bounding::{aabb, cbb, make_aabb};
pub use collision::{overlaps, sat, sat_with_context};
pub use error::{GeometryError, Result};

pub mod prelude {
    pub use super::bounding::{aabb, aabb_of, cbb, cbb_of, make_aabb, BoundingCircle};
    pub use super::collision::{overlaps, sat, sat_axes, sat_with_context, Projector, Shadow};
    pub use super::context::Context;
    pub use super::error::{GeometryError, Result};
    pub use super::math::{axis::AxisDirection, vector::Vector, FloatNum};
    pub use super::shape::{
        BoundingBox, BoundingBoxArgs, Bounds, CenterPoint, Circle, Circuit, ConvexPolygon, Flat,
        Line, Path, Polygon, Ray, Segment, Shape, ShapeKind, Solid, Translate, VerticesIter,
    };
}
