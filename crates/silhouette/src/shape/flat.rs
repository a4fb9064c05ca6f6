use crate::{
    error::{GeometryError, Result},
    math::{vector::Vector, FloatNum},
};

use super::{
    BoundingBox, Circle, Circuit, ConvexPolygon, Line, Path, Polygon, Ray, Segment, ShapeKind,
};

/// flat scalar view of a shape, in a fixed field order per kind
pub trait Flat: Sized {
    const KIND: ShapeKind;

    fn to_flat(&self) -> Vec<FloatNum>;

    fn from_flat(data: &[FloatNum]) -> Result<Self>;
}

fn fixed<const N: usize>(kind: ShapeKind, data: &[FloatNum]) -> Result<[FloatNum; N]> {
    data.try_into().map_err(|_| GeometryError::InvalidFlatData {
        kind,
        expected: N.to_string(),
        found: data.len(),
    })
}

fn vertices_from_flat(
    kind: ShapeKind,
    data: &[FloatNum],
    min_vertices: usize,
) -> Result<Vec<Vector>> {
    if data.len() % 2 != 0 || data.len() < min_vertices * 2 {
        return Err(GeometryError::InvalidFlatData {
            kind,
            expected: format!("an even count of at least {}", min_vertices * 2),
            found: data.len(),
        });
    }
    Ok(data
        .chunks_exact(2)
        .map(|pair| Vector::new(pair[0], pair[1]))
        .collect())
}

fn vertices_to_flat(vertices: &[Vector]) -> Vec<FloatNum> {
    vertices.iter().flat_map(|v| [v.x(), v.y()]).collect()
}

macro_rules! impl_fixed_flat {
    ($struct_name:ty, $kind:expr, $n:literal) => {
        impl Flat for $struct_name {
            const KIND: ShapeKind = $kind;

            fn to_flat(&self) -> Vec<FloatNum> {
                <[FloatNum; $n]>::from(self.clone()).to_vec()
            }

            fn from_flat(data: &[FloatNum]) -> Result<Self> {
                fixed::<$n>(Self::KIND, data)?.try_into()
            }
        }
    };
}

impl TryFrom<[FloatNum; 3]> for Circle {
    type Error = GeometryError;

    fn try_from([radius, x, y]: [FloatNum; 3]) -> Result<Self> {
        Circle::new(radius, (x, y))
    }
}

impl From<Circle> for [FloatNum; 3] {
    fn from(circle: Circle) -> Self {
        let center = circle.center();
        [circle.radius(), center.x(), center.y()]
    }
}

impl TryFrom<[FloatNum; 4]> for BoundingBox {
    type Error = GeometryError;

    fn try_from([xmin, xmax, ymin, ymax]: [FloatNum; 4]) -> Result<Self> {
        BoundingBox::new(xmin, xmax, ymin, ymax)
    }
}

impl From<BoundingBox> for [FloatNum; 4] {
    fn from(bounding_box: BoundingBox) -> Self {
        [
            bounding_box.xmin(),
            bounding_box.xmax(),
            bounding_box.ymin(),
            bounding_box.ymax(),
        ]
    }
}

impl From<[FloatNum; 4]> for Segment {
    fn from([x0, y0, x1, y1]: [FloatNum; 4]) -> Self {
        Segment::new((x0, y0), (x1, y1))
    }
}

impl From<Segment> for [FloatNum; 4] {
    fn from(segment: Segment) -> Self {
        let (start, end) = (segment.start(), segment.end());
        [start.x(), start.y(), end.x(), end.y()]
    }
}

impl TryFrom<[FloatNum; 4]> for Line {
    type Error = GeometryError;

    fn try_from([x, y, tx, ty]: [FloatNum; 4]) -> Result<Self> {
        Line::new((x, y), (tx, ty))
    }
}

impl From<Line> for [FloatNum; 4] {
    fn from(line: Line) -> Self {
        let (point, tangent) = (line.point(), line.tangent());
        [point.x(), point.y(), tangent.x(), tangent.y()]
    }
}

impl TryFrom<[FloatNum; 4]> for Ray {
    type Error = GeometryError;

    fn try_from([x, y, tx, ty]: [FloatNum; 4]) -> Result<Self> {
        Ray::new((x, y), (tx, ty))
    }
}

impl From<Ray> for [FloatNum; 4] {
    fn from(ray: Ray) -> Self {
        let (start, tangent) = (ray.start(), ray.tangent());
        [start.x(), start.y(), tangent.x(), tangent.y()]
    }
}

impl_fixed_flat!(Circle, ShapeKind::Circle, 3);
impl_fixed_flat!(BoundingBox, ShapeKind::Aabb, 4);
impl_fixed_flat!(Line, ShapeKind::Line, 4);
impl_fixed_flat!(Ray, ShapeKind::Ray, 4);

impl Flat for Segment {
    const KIND: ShapeKind = ShapeKind::Segment;

    fn to_flat(&self) -> Vec<FloatNum> {
        <[FloatNum; 4]>::from(self.clone()).to_vec()
    }

    fn from_flat(data: &[FloatNum]) -> Result<Self> {
        fixed::<4>(Self::KIND, data).map(Segment::from)
    }
}

impl Flat for Polygon {
    const KIND: ShapeKind = ShapeKind::Polygon;

    fn to_flat(&self) -> Vec<FloatNum> {
        vertices_to_flat(self.vertices())
    }

    fn from_flat(data: &[FloatNum]) -> Result<Self> {
        Polygon::new(vertices_from_flat(Self::KIND, data, 3)?)
    }
}

impl Flat for ConvexPolygon {
    const KIND: ShapeKind = ShapeKind::ConvexPolygon;

    fn to_flat(&self) -> Vec<FloatNum> {
        vertices_to_flat(self.vertices())
    }

    fn from_flat(data: &[FloatNum]) -> Result<Self> {
        ConvexPolygon::new(vertices_from_flat(Self::KIND, data, 3)?)
    }
}

impl Flat for Path {
    const KIND: ShapeKind = ShapeKind::Path;

    fn to_flat(&self) -> Vec<FloatNum> {
        vertices_to_flat(self.vertices())
    }

    fn from_flat(data: &[FloatNum]) -> Result<Self> {
        Path::new(vertices_from_flat(Self::KIND, data, 2)?)
    }
}

impl Flat for Circuit {
    const KIND: ShapeKind = ShapeKind::Circuit;

    fn to_flat(&self) -> Vec<FloatNum> {
        vertices_to_flat(self.vertices())
    }

    fn from_flat(data: &[FloatNum]) -> Result<Self> {
        Circuit::new(vertices_from_flat(Self::KIND, data, 3)?)
    }
}
