use super::vector::Vector;

/// the two world axes
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisDirection {
    X,
    Y,
}

impl AxisDirection {
    pub const ALL: [AxisDirection; 2] = [AxisDirection::X, AxisDirection::Y];

    #[inline]
    pub fn unit(self) -> Vector {
        match self {
            AxisDirection::X => Vector::new(1., 0.),
            AxisDirection::Y => Vector::new(0., 1.),
        }
    }
}

impl From<AxisDirection> for Vector {
    fn from(axis: AxisDirection) -> Self {
        axis.unit()
    }
}
