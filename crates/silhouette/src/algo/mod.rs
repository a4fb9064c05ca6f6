//! polygon analytic geometry over plain vertex rings

mod clip;
mod hull;
mod polygon;

pub use clip::clip;
pub use hull::convex_hull;
pub use polygon::{polygon_area, polygon_center_of_mass, polygon_rog_squared};
