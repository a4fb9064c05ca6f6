use silhouette_macro_tools::Fields;

use crate::{
    collision::{Projector, Shadow},
    context::Context,
    error::Result,
    math::{vector::Vector, FloatNum},
};

use super::{
    utils::{point_segment_distance, projection_polygon_on_vector},
    Bounds, CenterPoint, Translate, VerticesIter,
};

/// finite straight segment between two points
#[derive(Clone, Debug, PartialEq, Fields)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(from = "[FloatNum; 4]", into = "[FloatNum; 4]")
)]
#[r(copy)]
pub struct Segment {
    start: Vector,
    end: Vector,
}

impl Segment {
    pub fn new(start: impl Into<Vector>, end: impl Into<Vector>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    #[inline]
    pub fn direction(&self) -> Vector {
        self.end - self.start
    }

    #[inline]
    pub fn length(&self) -> FloatNum {
        self.direction().abs()
    }

    /// unit normal on the clockwise side of `start -> end`
    pub fn normal(&self) -> Result<Vector> {
        (!self.direction()).normalize()
    }

    pub fn tangent(&self) -> Result<Vector> {
        self.direction().normalize()
    }

    pub fn distance_point(&self, point: &Vector) -> FloatNum {
        point_segment_distance(point, self.start, self.end)
    }
}

impl CenterPoint for Segment {
    fn center_point(&self) -> Vector {
        self.start.middle(&self.end)
    }
}

impl Bounds for Segment {
    fn xmin(&self) -> FloatNum {
        self.start.x().min(self.end.x())
    }

    fn xmax(&self) -> FloatNum {
        self.start.x().max(self.end.x())
    }

    fn ymin(&self) -> FloatNum {
        self.start.y().min(self.end.y())
    }

    fn ymax(&self) -> FloatNum {
        self.start.y().max(self.end.y())
    }
}

impl Translate for Segment {
    fn translate(&mut self, vector: &Vector) {
        self.start += vector;
        self.end += vector;
    }
}

impl VerticesIter for Segment {
    fn vertices_iter(&self) -> impl Iterator<Item = Vector> + '_ {
        [self.start, self.end].into_iter()
    }
}

impl Projector for Segment {
    fn shadow_with_context(&self, axis: &Vector, _context: &Context) -> Shadow {
        projection_polygon_on_vector(self.vertices_iter(), axis)
    }
}
