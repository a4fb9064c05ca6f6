use silhouette_macro_tools::Fields;

use crate::{
    collision::{Projector, Shadow},
    context::Context,
    error::{GeometryError, Result},
    math::{num::is_nearly_zero, vector::Vector, FloatNum},
};

use super::{Bounds, CenterPoint, Translate};

fn anchor_and_tangent(
    anchor: impl Into<Vector>,
    direction: impl Into<Vector>,
) -> Result<(Vector, Vector)> {
    let anchor = anchor.into();
    if !anchor.is_finite() {
        return Err(GeometryError::InvalidConstructionArgs(format!(
            "anchor point must be finite, got {anchor}"
        )));
    }
    Ok((anchor, direction.into().normalize()?))
}

// extent of a half line starting at `start` along one world axis
fn half_line_range(start: FloatNum, tangent: FloatNum) -> (FloatNum, FloatNum) {
    if tangent > 0. {
        (start, FloatNum::INFINITY)
    } else if tangent < 0. {
        (FloatNum::NEG_INFINITY, start)
    } else {
        (start, start)
    }
}

fn line_range(start: FloatNum, tangent: FloatNum) -> (FloatNum, FloatNum) {
    if tangent == 0. {
        (start, start)
    } else {
        (FloatNum::NEG_INFINITY, FloatNum::INFINITY)
    }
}

/// infinite line through `point`, `tangent` is unit length
#[derive(Clone, Debug, PartialEq, Fields)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "[FloatNum; 4]", into = "[FloatNum; 4]")
)]
#[r(copy)]
pub struct Line {
    point: Vector,
    tangent: Vector,
}

impl Line {
    pub fn new(point: impl Into<Vector>, direction: impl Into<Vector>) -> Result<Self> {
        let (point, tangent) = anchor_and_tangent(point, direction)?;
        Ok(Self { point, tangent })
    }

    pub fn through(a: impl Into<Vector>, b: impl Into<Vector>) -> Result<Self> {
        let a = a.into();
        Self::new(a, b.into() - a)
    }

    /// perpendicular distance between `point` and the line
    pub fn distance_point(&self, point: &Vector) -> FloatNum {
        (self.tangent ^ (*point - self.point)).abs()
    }

    pub fn contains_point(&self, point: &Vector, tolerance: FloatNum) -> bool {
        self.distance_point(point) <= tolerance
    }
}

impl CenterPoint for Line {
    fn center_point(&self) -> Vector {
        self.point
    }
}

impl Bounds for Line {
    fn xmin(&self) -> FloatNum {
        line_range(self.point.x(), self.tangent.x()).0
    }

    fn xmax(&self) -> FloatNum {
        line_range(self.point.x(), self.tangent.x()).1
    }

    fn ymin(&self) -> FloatNum {
        line_range(self.point.y(), self.tangent.y()).0
    }

    fn ymax(&self) -> FloatNum {
        line_range(self.point.y(), self.tangent.y()).1
    }
}

impl Translate for Line {
    fn translate(&mut self, vector: &Vector) {
        self.point += vector;
    }
}

impl Projector for Line {
    fn shadow_with_context(&self, axis: &Vector, context: &Context) -> Shadow {
        if is_nearly_zero(self.tangent * *axis, context.parallel_tolerance()) {
            let position = self.point * *axis;
            Shadow::new(position, position)
        } else {
            Shadow::new(FloatNum::NEG_INFINITY, FloatNum::INFINITY)
        }
    }
}

/// half line leaving `start` along the unit `tangent`
#[derive(Clone, Debug, PartialEq, Fields)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "[FloatNum; 4]", into = "[FloatNum; 4]")
)]
#[r(copy)]
pub struct Ray {
    start: Vector,
    tangent: Vector,
}

impl Ray {
    pub fn new(start: impl Into<Vector>, direction: impl Into<Vector>) -> Result<Self> {
        let (start, tangent) = anchor_and_tangent(start, direction)?;
        Ok(Self { start, tangent })
    }

    /// point reached after travelling `distance` along the ray
    pub fn at(&self, distance: FloatNum) -> Vector {
        self.start + self.tangent * distance
    }

    pub fn distance_point(&self, point: &Vector) -> FloatNum {
        let offset = *point - self.start;
        if offset * self.tangent <= 0. {
            offset.abs()
        } else {
            (self.tangent ^ offset).abs()
        }
    }
}

impl CenterPoint for Ray {
    fn center_point(&self) -> Vector {
        self.start
    }
}

impl Bounds for Ray {
    fn xmin(&self) -> FloatNum {
        half_line_range(self.start.x(), self.tangent.x()).0
    }

    fn xmax(&self) -> FloatNum {
        half_line_range(self.start.x(), self.tangent.x()).1
    }

    fn ymin(&self) -> FloatNum {
        half_line_range(self.start.y(), self.tangent.y()).0
    }

    fn ymax(&self) -> FloatNum {
        half_line_range(self.start.y(), self.tangent.y()).1
    }
}

impl Translate for Ray {
    fn translate(&mut self, vector: &Vector) {
        self.start += vector;
    }
}

impl Projector for Ray {
    fn shadow_with_context(&self, axis: &Vector, context: &Context) -> Shadow {
        let position = self.start * *axis;
        let along = self.tangent * *axis;
        let tolerance = context.parallel_tolerance();

        if along > tolerance {
            Shadow::new(position, FloatNum::INFINITY)
        } else if along < -tolerance {
            Shadow::new(FloatNum::NEG_INFINITY, position)
        } else {
            Shadow::new(position, position)
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use rstest::rstest;

    use super::*;

    #[test]
    fn test_direction_is_normalized() {
        let line = Line::new((1., 1.), (3., 4.)).unwrap();
        assert_relative_eq!(line.tangent(), Vector::new(0.6, 0.8));

        let ray = Ray::new((0., 0.), (0., -2.)).unwrap();
        assert_relative_eq!(ray.tangent(), Vector::new(0., -1.));
    }

    #[test]
    fn test_zero_direction_is_degenerate() {
        assert!(matches!(
            Line::new((0., 0.), (0., 0.)),
            Err(GeometryError::DegenerateInput(_))
        ));
        assert!(matches!(
            Ray::new((0., 0.), (0., 0.)),
            Err(GeometryError::DegenerateInput(_))
        ));
    }

    #[test]
    fn test_line_bounds() {
        let horizontal = Line::new((2., 3.), (1., 0.)).unwrap();
        assert_eq!(horizontal.xmin(), FloatNum::NEG_INFINITY);
        assert_eq!(horizontal.xmax(), FloatNum::INFINITY);
        assert_eq!((horizontal.ymin(), horizontal.ymax()), (3., 3.));

        let vertical = Line::new((2., 3.), (0., 1.)).unwrap();
        assert_eq!((vertical.xmin(), vertical.xmax()), (2., 2.));
        assert_eq!(vertical.ymin(), FloatNum::NEG_INFINITY);

        let diagonal = Line::new((2., 3.), (1., 1.)).unwrap();
        assert!(!diagonal.is_bounded());
        assert_eq!(diagonal.ymax(), FloatNum::INFINITY);
    }

    #[test]
    fn test_ray_bounds() {
        let ray = Ray::new((1., 2.), (-1., 0.)).unwrap();

        assert_eq!(ray.xmin(), FloatNum::NEG_INFINITY);
        assert_eq!(ray.xmax(), 1.);
        assert_eq!((ray.ymin(), ray.ymax()), (2., 2.));
    }

    #[rstest]
    #[case(Vector::new(0., 1.), Shadow::new(3., 3.))]
    #[case(Vector::new(1., 0.), Shadow::new(FloatNum::NEG_INFINITY, FloatNum::INFINITY))]
    fn test_line_shadow(#[case] axis: Vector, #[case] expected: Shadow) {
        let line = Line::new((5., 3.), (1., 0.)).unwrap();
        assert_eq!(line.shadow(&axis), expected);
    }

    #[rstest]
    #[case(Vector::new(1., 0.), Shadow::new(5., FloatNum::INFINITY))]
    #[case(Vector::new(-1., 0.), Shadow::new(FloatNum::NEG_INFINITY, -5.))]
    #[case(Vector::new(0., 1.), Shadow::new(3., 3.))]
    fn test_ray_shadow(#[case] axis: Vector, #[case] expected: Shadow) {
        let ray = Ray::new((5., 3.), (1., 0.)).unwrap();
        assert_eq!(ray.shadow(&axis), expected);
    }

    #[test]
    fn test_line_contains_point() {
        let line = Line::through((0., 0.), (2., 2.)).unwrap();

        assert!(line.contains_point(&Vector::new(-1., -1.), 1e-9));
        assert!(!line.contains_point(&Vector::new(-1., 1.), 1e-9));
        assert_relative_eq!(line.distance_point(&Vector::new(-1., 1.)), 2f64.sqrt());
    }

    #[rstest]
    #[case((3., 2.), 2.)]
    #[case((-3., 4.), 5.)]
    #[case((0., -1.), 1.)]
    fn test_ray_distance_point(#[case] point: (FloatNum, FloatNum), #[case] expected: FloatNum) {
        let ray = Ray::new((0., 0.), (1., 0.)).unwrap();
        assert_relative_eq!(ray.distance_point(&point.into()), expected);
    }

    #[test]
    fn test_ray_at() {
        let ray = Ray::new((1., 1.), (0., 3.)).unwrap();
        assert_eq!(ray.at(2.), Vector::new(1., 3.));
    }
}
