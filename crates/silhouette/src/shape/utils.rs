use crate::{
    collision::Shadow,
    math::{num::min_max, vector::Vector, FloatNum},
};

/// walks a closed vertex ring as `(start, end)` pairs, the last edge wraps to the first vertex
pub(crate) struct VerticesToEdgeIter<'a> {
    vertices: &'a [Vector],
    index: usize,
}

impl<'a> VerticesToEdgeIter<'a> {
    pub(crate) fn new(vertices: &'a [Vector]) -> Self {
        Self { vertices, index: 0 }
    }
}

impl Iterator for VerticesToEdgeIter<'_> {
    type Item = (Vector, Vector);

    fn next(&mut self) -> Option<Self::Item> {
        let len = self.vertices.len();
        if self.index >= len {
            return None;
        }
        let start = self.vertices[self.index];
        let end = self.vertices[(self.index + 1) % len];
        self.index += 1;
        Some((start, end))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let rest = self.vertices.len().saturating_sub(self.index);
        (rest, Some(rest))
    }
}

impl ExactSizeIterator for VerticesToEdgeIter<'_> {}

pub(crate) fn projection_polygon_on_vector(
    vertices: impl IntoIterator<Item = Vector>,
    axis: &Vector,
) -> Shadow {
    min_max(vertices.into_iter().map(|vertex| vertex * *axis))
        .map(|(min, max)| Shadow::new(min, max))
        .unwrap_or_default()
}

pub(crate) fn translate_polygon<'a>(
    vertices: impl Iterator<Item = &'a mut Vector>,
    vector: &Vector,
) {
    vertices.for_each(|vertex| *vertex += vector);
}

pub(crate) fn rotate_polygon<'a>(
    center_point: Vector,
    vertices: impl Iterator<Item = &'a mut Vector>,
    rad: FloatNum,
) {
    vertices.for_each(|vertex| {
        *vertex = center_point + (*vertex - center_point).rotate(rad);
    });
}

/// unit normals on the clockwise side of each edge, edges shorter than `min_edge_length` are skipped
pub(crate) fn edge_normals(
    edges: impl Iterator<Item = (Vector, Vector)>,
    min_edge_length: FloatNum,
) -> Vec<Vector> {
    edges
        .filter_map(|(start, end)| {
            let edge = end - start;
            let length = edge.abs();
            (length >= min_edge_length && length > 0.).then(|| !edge / length)
        })
        .collect()
}

pub(crate) fn point_segment_distance(point: &Vector, start: Vector, end: Vector) -> FloatNum {
    let edge = end - start;
    let length_sqr = edge.abs_sqr();
    if length_sqr == 0. {
        return point.distance(&start);
    }
    let t = ((*point - start) * edge / length_sqr).clamp(0., 1.);
    point.distance(&(start + edge * t))
}

/// smallest distance from `point` to any of `edges`, infinite when there are none
pub(crate) fn edges_distance(
    edges: impl Iterator<Item = (Vector, Vector)>,
    point: &Vector,
) -> FloatNum {
    edges
        .map(|(start, end)| point_segment_distance(point, start, end))
        .fold(FloatNum::INFINITY, FloatNum::min)
}

/// closest vertex to `point`, the first one wins ties
pub(crate) fn nearest_vertex(
    vertices: impl IntoIterator<Item = Vector>,
    point: &Vector,
) -> Option<Vector> {
    vertices.into_iter().fold(None, |nearest: Option<(Vector, FloatNum)>, vertex| {
        let distance = (vertex - *point).abs_sqr();
        match nearest {
            Some((_, best)) if best <= distance => nearest,
            _ => Some((vertex, distance)),
        }
    })
    .map(|(vertex, _)| vertex)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges_wrap_around() {
        let vertices = [
            Vector::new(0., 0.),
            Vector::new(1., 0.),
            Vector::new(0., 1.),
        ];
        let edges: Vec<_> = VerticesToEdgeIter::new(&vertices).collect();

        assert_eq!(edges.len(), 3);
        assert_eq!(edges[2], (Vector::new(0., 1.), Vector::new(0., 0.)));
    }

    #[test]
    fn test_nearest_vertex_prefers_first() {
        let vertices = [Vector::new(1., 0.), Vector::new(-1., 0.), Vector::new(5., 5.)];
        assert_eq!(
            nearest_vertex(vertices, &Vector::ZERO),
            Some(Vector::new(1., 0.))
        );
        assert_eq!(nearest_vertex([], &Vector::ZERO), None);
    }

    #[test]
    fn test_point_segment_distance() {
        let (start, end) = (Vector::new(0., 0.), Vector::new(4., 0.));

        assert_eq!(point_segment_distance(&Vector::new(2., 3.), start, end), 3.);
        assert_eq!(point_segment_distance(&Vector::new(7., 4.), start, end), 5.);
        assert_eq!(point_segment_distance(&Vector::new(-3., 0.), start, end), 3.);
        assert_eq!(point_segment_distance(&Vector::new(1., 1.), start, start), 2f64.sqrt());
    }

    #[test]
    fn test_edge_normals_skip_short_edges() {
        let vertices = [Vector::new(0., 0.), Vector::new(2., 0.), Vector::new(2., 0.)];
        let normals = edge_normals(VerticesToEdgeIter::new(&vertices), 1e-12);

        assert_eq!(normals, vec![Vector::new(0., -1.), Vector::new(0., 1.)]);
    }

    #[test]
    fn test_projection_on_vector() {
        let vertices = [Vector::new(0., 0.), Vector::new(2., 1.), Vector::new(-1., 3.)];
        let shadow = projection_polygon_on_vector(vertices, &Vector::new(1., 0.));
        assert_eq!(shadow, Shadow::new(-1., 2.));
    }
}
