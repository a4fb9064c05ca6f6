use tracing::debug;

use crate::{
    algo::polygon_center_of_mass,
    collision::{Projector, Shadow},
    context::Context,
    error::{GeometryError, Result},
    math::{vector::Vector, FloatNum},
};

use super::{
    utils::{
        edge_normals, edges_distance, projection_polygon_on_vector, translate_polygon,
        VerticesToEdgeIter,
    },
    Bounds, CenterPoint, Translate, VerticesIter,
};

fn checked_vertices(name: &str, vertices: Vec<Vector>, min: usize) -> Result<Vec<Vector>> {
    if vertices.len() < min {
        return Err(GeometryError::DegenerateInput(format!(
            "{name} needs at least {min} vertices, got {}",
            vertices.len()
        )));
    }
    if let Some(vertex) = vertices.iter().find(|v| !v.is_finite()) {
        return Err(GeometryError::InvalidConstructionArgs(format!(
            "{name} vertex must be finite, got {vertex}"
        )));
    }
    Ok(vertices)
}

// midpoints of the ring edges weighted by their length, the closing edge included
fn ring_length_center(vertices: &[Vector]) -> Vector {
    let (weighted, length) = VerticesToEdgeIter::new(vertices).fold(
        (Vector::ZERO, 0.),
        |(weighted, length), (start, end)| {
            let edge_length = start.distance(&end);
            (weighted + start.middle(&end) * edge_length, length + edge_length)
        },
    );
    if length == 0. {
        debug!("path has no length, using its first vertex as center");
        return vertices.first().copied().unwrap_or_default();
    }
    weighted / length
}

macro_rules! impl_vertex_shape_traits {
    ($struct_name:ty) => {
        impl Bounds for $struct_name {
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

        impl Translate for $struct_name {
            fn translate(&mut self, vector: &Vector) {
                translate_polygon(self.vertices.iter_mut(), vector);
            }
        }

        impl VerticesIter for $struct_name {
            fn vertices_iter(&self) -> impl Iterator<Item = Vector> + '_ {
                self.vertices.iter().copied()
            }
        }

        impl Projector for $struct_name {
            fn shadow_with_context(&self, axis: &Vector, _context: &Context) -> Shadow {
                projection_polygon_on_vector(self.vertices_iter(), axis)
            }
        }

        impl TryFrom<Vec<Vector>> for $struct_name {
            type Error = GeometryError;

            fn try_from(vertices: Vec<Vector>) -> Result<Self> {
                Self::new(vertices)
            }
        }

        impl From<$struct_name> for Vec<Vector> {
            fn from(shape: $struct_name) -> Self {
                shape.vertices
            }
        }
    };
}

/// open polyline through at least two vertices
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "Vec<Vector>", into = "Vec<Vector>")
)]
pub struct Path {
    vertices: Vec<Vector>,
}

impl Path {
    pub fn new(vertices: impl Into<Vec<Vector>>) -> Result<Self> {
        checked_vertices("path", vertices.into(), 2).map(|vertices| Self { vertices })
    }

    #[inline]
    pub fn vertices(&self) -> &[Vector] {
        &self.vertices
    }

    pub fn into_vertices(self) -> Vec<Vector> {
        self.vertices
    }

    /// consecutive `(start, end)` pairs, there is no closing edge
    pub fn edges(&self) -> impl ExactSizeIterator<Item = (Vector, Vector)> + '_ {
        self.vertices.windows(2).map(|pair| (pair[0], pair[1]))
    }

    pub fn length(&self) -> FloatNum {
        self.edges().map(|(start, end)| start.distance(&end)).sum()
    }

    /// unit normal and unit tangent of every edge long enough to have a direction
    pub fn axes(&self, min_edge_length: FloatNum) -> Vec<Vector> {
        edge_normals(self.edges(), min_edge_length)
            .into_iter()
            .flat_map(|normal| [normal, normal.perp()])
            .collect()
    }

    pub fn distance_point(&self, point: &Vector) -> FloatNum {
        edges_distance(self.edges(), point)
    }
}

impl CenterPoint for Path {
    fn center_point(&self) -> Vector {
        ring_length_center(&self.vertices)
    }
}

impl_vertex_shape_traits!(Path);

/// closed path, unlike a polygon its edges may cross each other
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "Vec<Vector>", into = "Vec<Vector>")
)]
pub struct Circuit {
    vertices: Vec<Vector>,
}

impl Circuit {
    pub fn new(vertices: impl Into<Vec<Vector>>) -> Result<Self> {
        checked_vertices("circuit", vertices.into(), 3).map(|vertices| Self { vertices })
    }

    #[inline]
    pub fn vertices(&self) -> &[Vector] {
        &self.vertices
    }

    pub fn into_vertices(self) -> Vec<Vector> {
        self.vertices
    }

    /// `(start, end)` of every edge, including the closing one
    pub fn edges(&self) -> impl ExactSizeIterator<Item = (Vector, Vector)> + '_ {
        VerticesToEdgeIter::new(&self.vertices)
    }

    pub fn length(&self) -> FloatNum {
        self.edges().map(|(start, end)| start.distance(&end)).sum()
    }

    pub fn normals(&self, min_edge_length: FloatNum) -> Vec<Vector> {
        edge_normals(self.edges(), min_edge_length)
    }

    /// distance to the curve itself, the enclosed region does not count as inside
    pub fn distance_point(&self, point: &Vector) -> FloatNum {
        edges_distance(self.edges(), point)
    }
}

impl CenterPoint for Circuit {
    /// area weighted, the first vertex when the enclosed area cancels out
    fn center_point(&self) -> Vector {
        polygon_center_of_mass(&self.vertices)
    }
}

impl_vertex_shape_traits!(Circuit);

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn test_path_needs_two_vertices() {
        assert!(matches!(
            Path::new(vec![Vector::new(1., 1.)]),
            Err(GeometryError::DegenerateInput(_))
        ));
        assert!(matches!(
            Circuit::new(vec![Vector::new(0., 0.), Vector::new(1., 1.)]),
            Err(GeometryError::DegenerateInput(_))
        ));
        assert!(matches!(
            Path::new(vec![Vector::new(0., 0.), Vector::new(FloatNum::NAN, 1.)]),
            Err(GeometryError::InvalidConstructionArgs(_))
        ));
    }

    #[test]
    fn test_path_center_weights_ring_edges_by_length() {
        let path = Path::new(vec![
            Vector::new(0., 0.),
            Vector::new(1., 1.),
            Vector::new(2., 0.),
        ])
        .unwrap();

        assert_relative_eq!(
            path.center_point(),
            Vector::new(1., 1. - 0.5f64.sqrt()),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_path_without_length_falls_back_to_first_vertex() {
        let path = Path::new(vec![Vector::new(3., 4.), Vector::new(3., 4.)]).unwrap();
        assert_eq!(path.center_point(), Vector::new(3., 4.));
    }

    #[test]
    fn test_path_is_open() {
        let path = Path::new(vec![
            Vector::new(0., 0.),
            Vector::new(3., 0.),
            Vector::new(3., 4.),
        ])
        .unwrap();

        assert_eq!(path.edges().len(), 2);
        assert_relative_eq!(path.length(), 7.);
        assert_relative_eq!(path.distance_point(&Vector::new(0., 4.)), 3.);
        assert_eq!(path.axes(1e-12).len(), 4);
        assert_eq!(path.xmax(), 3.);
        assert_eq!(path.ymax(), 4.);
    }

    #[test]
    fn test_circuit_center_is_area_weighted() {
        let circuit = Circuit::new(vec![
            Vector::new(0., 0.),
            Vector::new(2., 0.),
            Vector::new(1., 0.5),
            Vector::new(0., 2.),
        ])
        .unwrap();

        assert_relative_eq!(
            circuit.center_point(),
            Vector::new(5. / 9., 11. / 18.),
            epsilon = 1e-12
        );
        assert_eq!(circuit.edges().len(), 4);
        assert_eq!(circuit.normals(1e-12).len(), 4);
    }

    #[test]
    fn test_circuit_distance_ignores_enclosed_region() {
        let circuit = Circuit::new(vec![
            Vector::new(0., 0.),
            Vector::new(4., 0.),
            Vector::new(4., 4.),
            Vector::new(0., 4.),
        ])
        .unwrap();

        assert_relative_eq!(circuit.distance_point(&Vector::new(1., 2.)), 1.);
        assert_relative_eq!(circuit.length(), 16.);
    }

    #[test]
    fn test_translate() {
        let mut path = Path::new(vec![Vector::new(0., 0.), Vector::new(1., 0.)]).unwrap();
        path.translate(&Vector::new(1., 2.));

        assert_eq!(path.vertices(), &[Vector::new(1., 2.), Vector::new(2., 2.)]);
        assert_eq!(path.bottom_left(), Vector::new(1., 2.));
    }
}
