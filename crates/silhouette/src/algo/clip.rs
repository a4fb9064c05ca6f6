use tracing::debug;

use crate::{
    error::{GeometryError, Result},
    math::vector::Vector,
};

// left of, or on, the directed clip edge
#[inline]
fn is_inside(point: Vector, r0: Vector, direction: Vector) -> bool {
    (direction ^ (point - r0)) >= 0.
}

// crossing of segment `v0 -> v1` with the infinite line through `r0` along `direction`
fn intersection(v0: Vector, v1: Vector, r0: Vector, direction: Vector) -> Vector {
    let segment = v1 - v0;
    let t = (direction ^ (v0 - r0)) / (segment ^ direction);
    v0 + segment * t
}

/// Sutherland–Hodgman clip of `subject` against the counter-clockwise convex `clip_polygon`
///
/// Fails with [`GeometryError::NoOverlap`] as soon as nothing is left of the subject.
pub fn clip(subject: &[Vector], clip_polygon: &[Vector]) -> Result<Vec<Vector>> {
    if clip_polygon.len() < 3 {
        return Err(GeometryError::DegenerateInput(format!(
            "clip polygon needs at least 3 vertices, got {}",
            clip_polygon.len()
        )));
    }

    let mut output = subject.to_vec();
    let mut r0 = clip_polygon[clip_polygon.len() - 1];

    for &r1 in clip_polygon {
        let Some(&last) = output.last() else {
            debug!("clip emptied the subject before the last edge");
            return Err(GeometryError::NoOverlap);
        };

        let direction = r1 - r0;
        let input = std::mem::take(&mut output);

        let mut v0 = last;
        let mut v0_inside = is_inside(v0, r0, direction);

        for v1 in input {
            let v1_inside = is_inside(v1, r0, direction);
            if v1_inside != v0_inside {
                output.push(intersection(v0, v1, r0, direction));
            }
            if v1_inside {
                output.push(v1);
            }
            v0 = v1;
            v0_inside = v1_inside;
        }

        r0 = r1;
    }

    if output.is_empty() {
        debug!("clip left nothing of the subject");
        return Err(GeometryError::NoOverlap);
    }

    Ok(output)
}
