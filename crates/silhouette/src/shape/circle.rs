use silhouette_macro_tools::Fields;

use crate::{
    collision::{Projector, Shadow},
    context::Context,
    error::{GeometryError, Result},
    math::{pi, vector::Vector, FloatNum},
};

use super::{Bounds, CenterPoint, Segment, Solid, Translate};

#[derive(Clone, Debug, PartialEq, Fields)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "[FloatNum; 3]", into = "[FloatNum; 3]")
)]
#[r]
pub struct Circle {
    radius: FloatNum,
    #[r(copy)]
    center: Vector,
}

impl Circle {
    pub fn new(radius: FloatNum, center: impl Into<Vector>) -> Result<Self> {
        let center = center.into();
        if !radius.is_finite() || radius <= 0. {
            return Err(GeometryError::DegenerateInput(format!(
                "circle radius must be positive and finite, got {radius}"
            )));
        }
        if !center.is_finite() {
            return Err(GeometryError::InvalidConstructionArgs(format!(
                "circle center must be finite, got {center}"
            )));
        }
        Ok(Self { radius, center })
    }

    pub fn contains_point(&self, point: &Vector) -> bool {
        self.center.distance(point) <= self.radius
    }

    pub fn contains_circle(&self, other: &Circle) -> bool {
        self.center.distance(&other.center) + other.radius <= self.radius
    }

    /// 0 inside the circle
    pub fn distance_point(&self, point: &Vector) -> FloatNum {
        (self.center.distance(point) - self.radius).max(0.)
    }

    pub fn contains_segment(&self, segment: &Segment) -> bool {
        self.contains_point(&segment.start()) && self.contains_point(&segment.end())
    }

    /// gap between the two boundaries, 0 once they touch or overlap
    pub fn distance_circle(&self, other: &Circle) -> FloatNum {
        (self.center.distance(&other.center) - self.radius - other.radius).max(0.)
    }
}

impl CenterPoint for Circle {
    fn center_point(&self) -> Vector {
        self.center
    }
}

impl Bounds for Circle {
    fn xmin(&self) -> FloatNum {
        self.center.x() - self.radius
    }

    fn xmax(&self) -> FloatNum {
        self.center.x() + self.radius
    }

    fn ymin(&self) -> FloatNum {
        self.center.y() - self.radius
    }

    fn ymax(&self) -> FloatNum {
        self.center.y() + self.radius
    }
}

impl Solid for Circle {
    fn area(&self) -> FloatNum {
        pi() * self.radius.powi(2)
    }

    fn rog_squared(&self, axis: Option<Vector>) -> Result<FloatNum> {
        let offset = axis.map_or(0., |axis| (self.center - axis).abs_sqr());
        Ok(self.radius.powi(2) * 0.5 + offset)
    }
}

impl Translate for Circle {
    fn translate(&mut self, vector: &Vector) {
        self.center += vector;
    }
}

impl Projector for Circle {
    fn shadow_with_context(&self, axis: &Vector, _context: &Context) -> Shadow {
        let center = self.center * *axis;
        Shadow::new(center - self.radius, center + self.radius)
    }
}
