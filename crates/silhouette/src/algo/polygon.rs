use tracing::debug;

use crate::{
    error::{GeometryError, Result},
    math::{vector::Vector, FloatNum},
    shape::utils::VerticesToEdgeIter,
};

// (start, end, signed area of the triangle origin -> start -> end)
fn weighted_edges(points: &[Vector]) -> impl Iterator<Item = (Vector, Vector, FloatNum)> + '_ {
    VerticesToEdgeIter::new(points).map(|(start, end)| (start, end, (start ^ end) * 0.5))
}

/// signed area of a closed ring, positive for counter-clockwise rings
pub fn polygon_area(points: &[Vector]) -> FloatNum {
    weighted_edges(points).map(|(_, _, weight)| weight).sum()
}

/// centroid of the ring's area, the first vertex when the area is zero
pub fn polygon_center_of_mass(points: &[Vector]) -> Vector {
    let (moment, area) = weighted_edges(points).fold(
        (Vector::ZERO, 0.),
        |(moment, area), (start, end, weight)| (moment + (start + end) * (weight / 3.), area + weight),
    );

    if area == 0. {
        debug!(len = points.len(), "zero area ring, center of mass falls back to the first vertex");
        return points.first().copied().unwrap_or_default();
    }

    moment / area
}

/// squared radius of gyration about the centroid, or about `axis` when given
pub fn polygon_rog_squared(points: &[Vector], axis: Option<Vector>) -> Result<FloatNum> {
    let (inertia, moment, area) = weighted_edges(points).fold(
        (0., Vector::ZERO, 0.),
        |(inertia, moment, area), (start, end, weight)| {
            let sum = start + end;
            let term = sum.x() * sum.x() - start.x() * end.x() + sum.y() * sum.y()
                - start.y() * end.y();
            (
                inertia + term * weight / 6.,
                moment + sum * (weight / 3.),
                area + weight,
            )
        },
    );

    if area == 0. {
        return Err(GeometryError::DegenerateInput(
            "radius of gyration of a zero area ring".to_owned(),
        ));
    }

    let center_of_mass = moment / area;
    // origin -> centroid, then centroid -> axis
    let about_center = inertia / area - center_of_mass.abs_sqr();

    Ok(match axis {
        Some(axis) => about_center + (center_of_mass - axis).abs_sqr(),
        None => about_center,
    })
}
