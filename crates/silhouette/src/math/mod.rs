pub mod axis;
pub mod vector;

pub(crate) mod num;

pub type FloatNum = f64;

#[inline]
pub const fn pi() -> FloatNum {
    std::f64::consts::PI
}

#[inline]
pub const fn tau() -> FloatNum {
    std::f64::consts::TAU
}
