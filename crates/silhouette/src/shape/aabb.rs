use silhouette_macro_tools::Fields;

use crate::{
    collision::{Projector, Shadow},
    context::Context,
    error::{GeometryError, Result},
    math::{axis::AxisDirection, vector::Vector, FloatNum},
};

use super::{
    utils::projection_polygon_on_vector, Bounds, CenterPoint, Circle, Segment, Solid, Translate,
    VerticesIter,
};

/// axis aligned rectangle, `xmin <= xmax` and `ymin <= ymax` always hold
#[derive(Clone, Copy, Debug, PartialEq, Fields)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "[FloatNum; 4]", into = "[FloatNum; 4]")
)]
#[r]
pub struct BoundingBox {
    xmin: FloatNum,
    xmax: FloatNum,
    ymin: FloatNum,
    ymax: FloatNum,
}

fn check_finite(values: &[FloatNum]) -> Result<()> {
    if values.iter().all(|v| v.is_finite()) {
        Ok(())
    } else {
        Err(GeometryError::InvalidConstructionArgs(format!(
            "bounding box values must be finite, got {values:?}"
        )))
    }
}

impl BoundingBox {
    pub fn new(xmin: FloatNum, xmax: FloatNum, ymin: FloatNum, ymax: FloatNum) -> Result<Self> {
        check_finite(&[xmin, xmax, ymin, ymax])?;
        if xmin > xmax {
            return Err(GeometryError::InvalidConstructionArgs(format!(
                "xmax {xmax} is smaller than xmin {xmin}"
            )));
        }
        if ymin > ymax {
            return Err(GeometryError::InvalidConstructionArgs(format!(
                "ymax {ymax} is smaller than ymin {ymin}"
            )));
        }
        Ok(Self::new_unchecked(xmin, xmax, ymin, ymax))
    }

    pub(crate) const fn new_unchecked(
        xmin: FloatNum,
        xmax: FloatNum,
        ymin: FloatNum,
        ymax: FloatNum,
    ) -> Self {
        Self {
            xmin,
            xmax,
            ymin,
            ymax,
        }
    }

    /// box from its lower left corner and size
    pub fn from_rect(x: FloatNum, y: FloatNum, width: FloatNum, height: FloatNum) -> Result<Self> {
        check_finite(&[x, y, width, height])?;
        if width < 0. || height < 0. {
            return Err(GeometryError::InvalidConstructionArgs(format!(
                "negative rect size ({width}, {height})"
            )));
        }
        Self::new(x, x + width, y, y + height)
    }

    pub fn from_center_and_shape(
        center: impl Into<Vector>,
        (width, height): (FloatNum, FloatNum),
    ) -> Result<Self> {
        let center = center.into();
        check_finite(&[center.x(), center.y(), width, height])?;
        if width < 0. || height < 0. {
            return Err(GeometryError::InvalidConstructionArgs(format!(
                "negative shape ({width}, {height})"
            )));
        }
        let (half_width, half_height) = (width * 0.5, height * 0.5);
        Self::new(
            center.x() - half_width,
            center.x() + half_width,
            center.y() - half_height,
            center.y() + half_height,
        )
    }

    #[inline]
    pub fn center(&self) -> Vector {
        Vector::new(
            (self.xmin + self.xmax) * 0.5,
            (self.ymin + self.ymax) * 0.5,
        )
    }

    /// `(x, y, width, height)` with `(x, y)` the lower left corner
    pub fn rect(&self) -> (FloatNum, FloatNum, FloatNum, FloatNum) {
        (self.xmin, self.ymin, self.width(), self.height())
    }

    pub fn shape(&self) -> (FloatNum, FloatNum) {
        (self.width(), self.height())
    }

    /// corners counter-clockwise from `(xmin, ymin)`
    pub fn vertices(&self) -> [Vector; 4] {
        [
            Vector::new(self.xmin, self.ymin),
            Vector::new(self.xmax, self.ymin),
            Vector::new(self.xmax, self.ymax),
            Vector::new(self.xmin, self.ymax),
        ]
    }

    pub fn contains_point(&self, point: &Vector) -> bool {
        (self.xmin..=self.xmax).contains(&point.x()) && (self.ymin..=self.ymax).contains(&point.y())
    }

    pub fn contains_aabb(&self, other: &BoundingBox) -> bool {
        self.xmin <= other.xmin
            && self.xmax >= other.xmax
            && self.ymin <= other.ymin
            && self.ymax >= other.ymax
    }

    pub fn contains_circle(&self, circle: &Circle) -> bool {
        self.xmin <= Bounds::xmin(circle)
            && self.xmax >= Bounds::xmax(circle)
            && self.ymin <= Bounds::ymin(circle)
            && self.ymax >= Bounds::ymax(circle)
    }

    pub fn contains_segment(&self, segment: &Segment) -> bool {
        self.contains_point(&segment.start()) && self.contains_point(&segment.end())
    }

    /// 0 inside the box
    pub fn distance_point(&self, point: &Vector) -> FloatNum {
        let dx = (self.xmin - point.x()).max(point.x() - self.xmax).max(0.);
        let dy = (self.ymin - point.y()).max(point.y() - self.ymax).max(0.);
        dx.hypot(dy)
    }

    /// touching edges count as intersecting
    pub fn intersects(&self, other: &BoundingBox) -> bool {
        self.xmin <= other.xmax
            && other.xmin <= self.xmax
            && self.ymin <= other.ymax
            && other.ymin <= self.ymax
    }

    /// same center, both sides multiplied by `scale`
    pub fn rescaled(&self, scale: FloatNum) -> Result<Self> {
        if !scale.is_finite() || scale < 0. {
            return Err(GeometryError::InvalidConstructionArgs(format!(
                "scale must be finite and non negative, got {scale}"
            )));
        }
        Self::from_center_and_shape(self.center(), (self.width() * scale, self.height() * scale))
    }

    pub fn shadow_on_axis(&self, axis: AxisDirection) -> Shadow {
        match axis {
            AxisDirection::X => Shadow::new(self.xmin, self.xmax),
            AxisDirection::Y => Shadow::new(self.ymin, self.ymax),
        }
    }
}

/// construction options of a [`BoundingBox`], exactly one of coords, rect or shape must be set
#[derive(Clone, Debug, Default)]
pub struct BoundingBoxArgs {
    coords: Option<[FloatNum; 4]>,
    rect: Option<[FloatNum; 4]>,
    shape: Option<(FloatNum, FloatNum)>,
    center: Option<Vector>,
}

impl BoundingBoxArgs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn coords(mut self, xmin: FloatNum, xmax: FloatNum, ymin: FloatNum, ymax: FloatNum) -> Self {
        self.coords = Some([xmin, xmax, ymin, ymax]);
        self
    }

    pub fn rect(mut self, x: FloatNum, y: FloatNum, width: FloatNum, height: FloatNum) -> Self {
        self.rect = Some([x, y, width, height]);
        self
    }

    pub fn shape(mut self, width: FloatNum, height: FloatNum) -> Self {
        self.shape = Some((width, height));
        self
    }

    /// only meaningful together with [`BoundingBoxArgs::shape`], defaults to the origin
    pub fn center(mut self, center: impl Into<Vector>) -> Self {
        self.center = Some(center.into());
        self
    }

    pub fn build(self) -> Result<BoundingBox> {
        let modes = [
            self.coords.is_some(),
            self.rect.is_some(),
            self.shape.is_some(),
        ]
        .into_iter()
        .filter(|&set| set)
        .count();

        if modes != 1 {
            return Err(GeometryError::InvalidConstructionArgs(format!(
                "exactly one of coords, rect or shape must be given, found {modes}"
            )));
        }

        if self.center.is_some() && self.shape.is_none() {
            return Err(GeometryError::InvalidConstructionArgs(
                "center can only be combined with shape".to_owned(),
            ));
        }

        if let Some([xmin, xmax, ymin, ymax]) = self.coords {
            return BoundingBox::new(xmin, xmax, ymin, ymax);
        }
        if let Some([x, y, width, height]) = self.rect {
            return BoundingBox::from_rect(x, y, width, height);
        }
        let shape = self.shape.unwrap_or_default();
        BoundingBox::from_center_and_shape(self.center.unwrap_or_default(), shape)
    }
}

impl CenterPoint for BoundingBox {
    fn center_point(&self) -> Vector {
        self.center()
    }
}

impl Bounds for BoundingBox {
    fn xmin(&self) -> FloatNum {
        self.xmin
    }

    fn xmax(&self) -> FloatNum {
        self.xmax
    }

    fn ymin(&self) -> FloatNum {
        self.ymin
    }

    fn ymax(&self) -> FloatNum {
        self.ymax
    }
}

impl Solid for BoundingBox {
    fn area(&self) -> FloatNum {
        self.width() * self.height()
    }

    fn rog_squared(&self, axis: Option<Vector>) -> Result<FloatNum> {
        let (width, height) = self.shape();
        let offset = axis.map_or(0., |axis| (self.center() - axis).abs_sqr());
        Ok((width * width + height * height) / 12. + offset)
    }
}

impl Translate for BoundingBox {
    fn translate(&mut self, vector: &Vector) {
        self.xmin += vector.x();
        self.xmax += vector.x();
        self.ymin += vector.y();
        self.ymax += vector.y();
    }
}

impl VerticesIter for BoundingBox {
    fn vertices_iter(&self) -> impl Iterator<Item = Vector> + '_ {
        self.vertices().into_iter()
    }
}

impl Projector for BoundingBox {
    fn shadow_with_context(&self, axis: &Vector, _context: &Context) -> Shadow {
        projection_polygon_on_vector(self.vertices(), axis)
    }

    fn projection_on_axis(&self, axis: AxisDirection) -> Shadow {
        self.shadow_on_axis(axis)
    }
}
