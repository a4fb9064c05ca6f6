use once_cell::sync::OnceCell;
use silhouette_macro_tools::Deref;

use crate::{
    algo::{clip, convex_hull, polygon_area, polygon_center_of_mass, polygon_rog_squared},
    collision::{Projector, Shadow},
    context::Context,
    error::{GeometryError, Result},
    math::{tau, vector::Vector, FloatNum},
};

use super::{
    utils::{
        edge_normals, edges_distance, projection_polygon_on_vector, rotate_polygon,
        translate_polygon, VerticesToEdgeIter,
    },
    BoundingBox, Bounds, CenterPoint, Segment, Solid, Translate, VerticesIter,
};

/// closed ring of at least three vertices, counter-clockwise rings have positive area
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "Vec<Vector>", into = "Vec<Vector>")
)]
pub struct Polygon {
    vertices: Vec<Vector>,
    area: OnceCell<FloatNum>,
    center_point: OnceCell<Vector>,
}

impl PartialEq for Polygon {
    fn eq(&self, other: &Self) -> bool {
        self.vertices == other.vertices
    }
}

impl Polygon {
    pub fn new(vertices: impl Into<Vec<Vector>>) -> Result<Self> {
        let vertices = vertices.into();
        if vertices.len() < 3 {
            return Err(GeometryError::DegenerateInput(format!(
                "polygon needs at least 3 vertices, got {}",
                vertices.len()
            )));
        }
        if let Some(vertex) = vertices.iter().find(|v| !v.is_finite()) {
            return Err(GeometryError::InvalidConstructionArgs(format!(
                "polygon vertex must be finite, got {vertex}"
            )));
        }
        Ok(Self {
            vertices,
            area: OnceCell::new(),
            center_point: OnceCell::new(),
        })
    }

    #[inline]
    pub fn vertices(&self) -> &[Vector] {
        &self.vertices
    }

    pub fn into_vertices(self) -> Vec<Vector> {
        self.vertices
    }

    #[inline]
    pub fn edge_count(&self) -> usize {
        self.vertices.len()
    }

    /// `(start, end)` of every edge, including the closing one
    pub fn edges(&self) -> impl ExactSizeIterator<Item = (Vector, Vector)> + '_ {
        VerticesToEdgeIter::new(&self.vertices)
    }

    /// outward unit normals of a counter-clockwise ring, edges shorter than `min_edge_length` are skipped
    pub fn normals(&self, min_edge_length: FloatNum) -> Vec<Vector> {
        edge_normals(self.edges(), min_edge_length)
    }

    /// even-odd rule, points on the boundary may land on either side
    pub fn contains_point(&self, point: &Vector) -> bool {
        self.edges().fold(false, |inside, (start, end)| {
            if (start.y() > point.y()) == (end.y() > point.y()) {
                return inside;
            }
            let x = start.x()
                + (point.y() - start.y()) / (end.y() - start.y()) * (end.x() - start.x());
            if point.x() < x {
                !inside
            } else {
                inside
            }
        })
    }

    /// 0 inside the polygon, otherwise the distance to the closest edge
    pub fn distance_point(&self, point: &Vector) -> FloatNum {
        if self.contains_point(point) {
            0.
        } else {
            edges_distance(self.edges(), point)
        }
    }

    /// every turn goes the same way, collinear turns are ignored
    pub fn is_convex(&self) -> bool {
        let len = self.vertices.len();
        let mut winding: FloatNum = 0.;
        for i in 0..len {
            let a = self.vertices[i];
            let b = self.vertices[(i + 1) % len];
            let c = self.vertices[(i + 2) % len];
            let turn = (b - a) ^ (c - b);
            if turn == 0. {
                continue;
            }
            if winding == 0. {
                winding = turn.signum();
            } else if turn.signum() != winding {
                return false;
            }
        }
        true
    }

    pub fn convex_hull(&self) -> Result<ConvexPolygon> {
        ConvexPolygon::from_hull(&self.vertices)
    }

    /// part of this polygon inside `other`
    pub fn clip(&self, other: &ConvexPolygon) -> Result<Polygon> {
        Polygon::new(clip(&self.vertices, other.vertices())?)
    }

    fn reset_cache(&mut self) {
        self.area = OnceCell::new();
        self.center_point = OnceCell::new();
    }
}

impl TryFrom<Vec<Vector>> for Polygon {
    type Error = GeometryError;

    fn try_from(vertices: Vec<Vector>) -> Result<Self> {
        Polygon::new(vertices)
    }
}

impl From<Polygon> for Vec<Vector> {
    fn from(polygon: Polygon) -> Self {
        polygon.vertices
    }
}

impl CenterPoint for Polygon {
    fn center_point(&self) -> Vector {
        *self
            .center_point
            .get_or_init(|| polygon_center_of_mass(&self.vertices))
    }
}

impl Bounds for Polygon {
    fn xmin(&self) -> FloatNum {
        self.vertices.iter().map(Vector::x).fold(FloatNum::INFINITY, FloatNum::min)
    }

    fn xmax(&self) -> FloatNum {
        self.vertices.iter().map(Vector::x).fold(FloatNum::NEG_INFINITY, FloatNum::max)
    }

    fn ymin(&self) -> FloatNum {
        self.vertices.iter().map(Vector::y).fold(FloatNum::INFINITY, FloatNum::min)
    }

    fn ymax(&self) -> FloatNum {
        self.vertices.iter().map(Vector::y).fold(FloatNum::NEG_INFINITY, FloatNum::max)
    }
}

impl Solid for Polygon {
    fn area(&self) -> FloatNum {
        *self.area.get_or_init(|| polygon_area(&self.vertices))
    }

    fn rog_squared(&self, axis: Option<Vector>) -> Result<FloatNum> {
        polygon_rog_squared(&self.vertices, axis)
    }
}

impl Translate for Polygon {
    fn translate(&mut self, vector: &Vector) {
        translate_polygon(self.vertices.iter_mut(), vector);
        self.reset_cache();
    }
}

impl VerticesIter for Polygon {
    fn vertices_iter(&self) -> impl Iterator<Item = Vector> + '_ {
        self.vertices.iter().copied()
    }
}

impl Projector for Polygon {
    fn shadow_with_context(&self, axis: &Vector, _context: &Context) -> Shadow {
        projection_polygon_on_vector(self.vertices_iter(), axis)
    }
}

/// polygon known to be convex, the kernel trusts the caller and never re-validates
#[derive(Clone, Debug, PartialEq, Deref)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "Vec<Vector>", into = "Vec<Vector>")
)]
pub struct ConvexPolygon(Polygon);

impl ConvexPolygon {
    pub fn new(vertices: impl Into<Vec<Vector>>) -> Result<Self> {
        Polygon::new(vertices).map(Self)
    }

    pub fn from_polygon(polygon: Polygon) -> Self {
        Self(polygon)
    }

    pub fn into_polygon(self) -> Polygon {
        self.0
    }

    /// counter-clockwise regular polygon with `n` sides of `side_length`, first vertex on the +x axis
    pub fn regular(n: usize, side_length: FloatNum, center: impl Into<Vector>) -> Result<Self> {
        if n < 3 {
            return Err(GeometryError::DegenerateInput(format!(
                "regular polygon needs at least 3 sides, got {n}"
            )));
        }
        if !side_length.is_finite() || side_length <= 0. {
            return Err(GeometryError::InvalidConstructionArgs(format!(
                "side length must be positive and finite, got {side_length}"
            )));
        }

        let step = tau() / n as FloatNum;
        let radius = side_length / (2. * (step * 0.5).sin());
        let center = center.into();

        let mut vertices: Vec<Vector> = (0..n)
            .map(|i| Vector::new(radius, 0.).rotate(step * i as FloatNum))
            .collect();
        translate_polygon(vertices.iter_mut(), &center);

        Self::new(vertices)
    }

    pub fn rectangle(bounding_box: &BoundingBox) -> Self {
        Self(Polygon {
            vertices: bounding_box.vertices().to_vec(),
            area: OnceCell::new(),
            center_point: OnceCell::new(),
        })
    }

    /// convex hull of `points`, fails when the hull has less than 3 vertices
    pub fn from_hull(points: &[Vector]) -> Result<Self> {
        Self::new(convex_hull(points))
    }

    /// boundary points count as inside, either winding works
    pub fn contains_point(&self, point: &Vector) -> bool {
        let mut winding: FloatNum = 0.;
        for (start, end) in self.edges() {
            let side = (end - start) ^ (*point - start);
            if side == 0. {
                continue;
            }
            if winding == 0. {
                winding = side.signum();
            } else if side.signum() != winding {
                return false;
            }
        }
        true
    }

    pub fn contains_segment(&self, segment: &Segment) -> bool {
        self.contains_point(&segment.start()) && self.contains_point(&segment.end())
    }

    pub fn distance_point(&self, point: &Vector) -> FloatNum {
        if self.contains_point(point) {
            0.
        } else {
            edges_distance(self.edges(), point)
        }
    }

    pub fn rotate(&mut self, rad: FloatNum) {
        let center = self.center_point();
        rotate_polygon(center, self.0.vertices.iter_mut(), rad);
        self.0.reset_cache();
    }
}

impl TryFrom<Vec<Vector>> for ConvexPolygon {
    type Error = GeometryError;

    fn try_from(vertices: Vec<Vector>) -> Result<Self> {
        ConvexPolygon::new(vertices)
    }
}

impl From<ConvexPolygon> for Vec<Vector> {
    fn from(polygon: ConvexPolygon) -> Self {
        polygon.0.vertices
    }
}

macro_rules! impl_shape_traits_use_deref {
    ($struct_name:ty) => {
        impl CenterPoint for $struct_name {
            fn center_point(&self) -> Vector {
                self.0.center_point()
            }
        }

        impl Bounds for $struct_name {
            fn xmin(&self) -> FloatNum {
                self.0.xmin()
            }

            fn xmax(&self) -> FloatNum {
                self.0.xmax()
            }

            fn ymin(&self) -> FloatNum {
                self.0.ymin()
            }

            fn ymax(&self) -> FloatNum {
                self.0.ymax()
            }
        }

        impl Solid for $struct_name {
            fn area(&self) -> FloatNum {
                self.0.area()
            }

            fn rog_squared(&self, axis: Option<Vector>) -> Result<FloatNum> {
                self.0.rog_squared(axis)
            }
        }

        impl Translate for $struct_name {
            fn translate(&mut self, vector: &Vector) {
                self.0.translate(vector)
            }
        }

        impl VerticesIter for $struct_name {
            fn vertices_iter(&self) -> impl Iterator<Item = Vector> + '_ {
                self.0.vertices_iter()
            }
        }

        impl Projector for $struct_name {
            fn shadow_with_context(&self, axis: &Vector, context: &Context) -> Shadow {
                self.0.shadow_with_context(axis, context)
            }
        }
    };
}

impl_shape_traits_use_deref!(ConvexPolygon);
