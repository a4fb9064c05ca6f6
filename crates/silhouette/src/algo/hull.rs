use std::cmp::Ordering;

use crate::math::{vector::Vector, FloatNum};

// z of (b - a) x (c - a), positive for a counter-clockwise turn
#[inline]
fn turn(a: Vector, b: Vector, c: Vector) -> FloatNum {
    (b - a) ^ (c - a)
}

fn push_chain(chain: &mut Vec<Vector>, point: Vector) {
    while chain.len() >= 2 && turn(chain[chain.len() - 2], chain[chain.len() - 1], point) <= 0. {
        chain.pop();
    }
    chain.push(point);
}

/// strict convex hull, counter-clockwise from the lexicographically smallest point
///
/// Collinear points are dropped. Fewer than two distinct points come back as they are,
/// collinear input gives its two extreme points.
pub fn convex_hull(points: &[Vector]) -> Vec<Vector> {
    let mut points = points.to_vec();
    points.sort_by(|a, b| {
        a.x()
            .partial_cmp(&b.x())
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.y().partial_cmp(&b.y()).unwrap_or(Ordering::Equal))
    });
    points.dedup_by(|a, b| a.exact_eq(b));

    if points.len() <= 1 {
        return points;
    }

    let mut lower = Vec::with_capacity(points.len());
    for &point in points.iter() {
        push_chain(&mut lower, point);
    }

    let mut upper = Vec::with_capacity(points.len());
    for &point in points.iter().rev() {
        push_chain(&mut upper, point);
    }

    // each chain ends where the other starts
    lower.pop();
    upper.pop();
    lower.extend(upper);
    lower
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, Rng, SeedableRng};

    use super::*;
    use crate::algo::polygon_area;

    fn points(raw: &[(f64, f64)]) -> Vec<Vector> {
        raw.iter().copied().map(Vector::from).collect()
    }

    #[test]
    fn test_square_with_inner_point() {
        let hull = convex_hull(&points(&[(0., 0.), (1., 1.), (1., 0.), (0., 1.), (0.5, 0.5)]));
        assert_eq!(hull, points(&[(0., 0.), (1., 0.), (1., 1.), (0., 1.)]));
    }

    #[test]
    fn test_small_inputs() {
        assert!(convex_hull(&[]).is_empty());
        assert_eq!(convex_hull(&points(&[(1., 2.)])), points(&[(1., 2.)]));
        assert_eq!(
            convex_hull(&points(&[(1., 2.), (1., 2.), (1., 2.)])),
            points(&[(1., 2.)])
        );
    }

    #[test]
    fn test_collinear_keeps_extremes() {
        let hull = convex_hull(&points(&[(2., 2.), (0., 0.), (1., 1.), (3., 3.)]));
        assert_eq!(hull, points(&[(0., 0.), (3., 3.)]));
    }

    #[test]
    fn test_collinear_edge_points_dropped() {
        let hull = convex_hull(&points(&[(0., 0.), (1., 0.), (2., 0.), (2., 2.), (0., 2.)]));
        assert_eq!(hull, points(&[(0., 0.), (2., 0.), (2., 2.), (0., 2.)]));
    }

    #[test]
    fn test_random_hull_is_convex_and_counter_clockwise() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..20 {
            let cloud: Vec<Vector> = (0..40)
                .map(|_| Vector::new(rng.gen_range(-10.0..10.0), rng.gen_range(-10.0..10.0)))
                .collect();
            let hull = convex_hull(&cloud);

            assert!(hull.len() >= 3);
            assert!(hull.len() <= cloud.len());
            assert!(polygon_area(&hull) > 0.);

            let len = hull.len();
            for i in 0..len {
                let (a, b) = (hull[i], hull[(i + 1) % len]);
                for point in cloud.iter() {
                    assert!(turn(a, b, *point) >= -1e-9);
                }
            }
        }
    }
}
