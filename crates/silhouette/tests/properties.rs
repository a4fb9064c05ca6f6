use approx::assert_relative_eq;
use rand::{rngs::StdRng, Rng, SeedableRng};
use rstest::rstest;
use silhouette::prelude::*;
use silhouette::{clip, convex_hull, polygon_area, polygon_center_of_mass, polygon_rog_squared};

fn points(raw: &[(FloatNum, FloatNum)]) -> Vec<Vector> {
    raw.iter().copied().map(Vector::from).collect()
}

fn random_convex_polygon(rng: &mut StdRng) -> ConvexPolygon {
    loop {
        let center = Vector::new(rng.gen_range(-20.0..20.0), rng.gen_range(-20.0..20.0));
        let cloud: Vec<Vector> = (0..12)
            .map(|_| center + Vector::new(rng.gen_range(-5.0..5.0), rng.gen_range(-5.0..5.0)))
            .collect();
        if let Ok(polygon) = ConvexPolygon::from_hull(&cloud) {
            return polygon;
        }
    }
}

fn random_shape(rng: &mut StdRng) -> Shape {
    let center: (FloatNum, FloatNum) = (rng.gen_range(-20.0..20.0), rng.gen_range(-20.0..20.0));
    match rng.gen_range(0..4) {
        0 => Circle::new(rng.gen_range(0.1..5.0), center).unwrap().into(),
        1 => BoundingBoxArgs::new()
            .shape(rng.gen_range(0.0..8.0), rng.gen_range(0.0..8.0))
            .center(center)
            .build()
            .unwrap()
            .into(),
        2 => Segment::new(
            center,
            (
                center.0 + rng.gen_range(-5.0..5.0),
                center.1 + rng.gen_range(-5.0..5.0),
            ),
        )
        .into(),
        _ => random_convex_polygon(rng).into(),
    }
}

#[test]
fn aabb_of_box_is_identity() {
    let mut rng = StdRng::seed_from_u64(1);

    for _ in 0..100 {
        let (a, b): (FloatNum, FloatNum) =
            (rng.gen_range(-100.0..100.0), rng.gen_range(-100.0..100.0));
        let (c, d): (FloatNum, FloatNum) =
            (rng.gen_range(-100.0..100.0), rng.gen_range(-100.0..100.0));
        let bounding_box = make_aabb(a.min(b), a.max(b), c.min(d), c.max(d)).unwrap();

        assert_eq!(aabb(&bounding_box.into()).unwrap(), bounding_box);
    }
}

#[test]
fn bounding_volumes_are_never_negative() {
    let mut rng = StdRng::seed_from_u64(2);

    for _ in 0..200 {
        let shape = random_shape(&mut rng);
        let bounding_box = aabb(&shape).unwrap();
        let bounding_circle = cbb(&shape).unwrap();

        assert!(bounding_box.width() >= 0.);
        assert!(bounding_box.height() >= 0.);
        assert!(bounding_circle.radius() >= 0.);
    }
}

#[test]
fn bounding_volumes_enclose_vertices() {
    let mut rng = StdRng::seed_from_u64(3);

    for _ in 0..100 {
        let shape = random_shape(&mut rng);
        let Some(vertices) = shape.vertices() else {
            continue;
        };
        let bounding_box = aabb(&shape).unwrap();
        let bounding_circle = cbb(&shape).unwrap();

        for vertex in vertices {
            assert!(bounding_box.contains_point(&vertex));
            assert!(
                bounding_circle.center().distance(&vertex) <= bounding_circle.radius() + 1e-9
            );
        }
    }
}

#[test]
fn analytic_geometry_reference_values() {
    assert_relative_eq!(
        polygon_area(&points(&[(0., 0.), (1., 0.), (1., 2.), (0., 1.)])),
        1.5
    );
    assert_relative_eq!(
        polygon_center_of_mass(&points(&[(0., 0.), (1., 0.), (1., 1.), (0., 1.)])),
        Vector::new(0.5, 0.5)
    );

    let square = points(&[(0., 0.), (2., 0.), (2., 2.), (0., 2.)]);
    assert_relative_eq!(polygon_rog_squared(&square, None).unwrap(), 0.6667, epsilon = 1e-4);
    assert_relative_eq!(
        polygon_rog_squared(&square, Some(Vector::ZERO)).unwrap(),
        2.6667,
        epsilon = 1e-4
    );

    assert_eq!(
        convex_hull(&points(&[(0., 0.), (1., 1.), (1., 0.), (0., 1.), (0.5, 0.5)])),
        points(&[(0., 0.), (1., 0.), (1., 1.), (0., 1.)])
    );
}

#[test]
fn rog_about_axis_goes_through_centroid() {
    let mut rng = StdRng::seed_from_u64(4);

    for _ in 0..50 {
        let polygon = random_convex_polygon(&mut rng);
        let axis = Vector::new(rng.gen_range(-10.0..10.0), rng.gen_range(-10.0..10.0));
        let center = polygon.center_point();

        assert_relative_eq!(
            polygon.rog_squared(Some(axis)).unwrap(),
            polygon.rog_squared(None).unwrap() + (center - axis).abs_sqr(),
            epsilon = 1e-6
        );
    }
}

#[test]
fn clip_with_itself_keeps_area() {
    let mut rng = StdRng::seed_from_u64(5);

    for _ in 0..50 {
        let polygon = random_convex_polygon(&mut rng);
        let clipped = clip(polygon.vertices(), polygon.vertices()).unwrap();

        assert_relative_eq!(polygon_area(&clipped), polygon.area(), epsilon = 1e-6);
    }
}

#[test]
fn clip_area_never_exceeds_operands() {
    let mut rng = StdRng::seed_from_u64(6);

    for _ in 0..100 {
        let a = random_convex_polygon(&mut rng);
        let b = random_convex_polygon(&mut rng);

        match clip(a.vertices(), b.vertices()) {
            Ok(clipped) => {
                let area = polygon_area(&clipped);
                assert!(area <= a.area() + 1e-9);
                assert!(area <= b.area() + 1e-9);
            }
            Err(err) => assert_eq!(err, GeometryError::NoOverlap),
        }
    }
}

#[test]
fn hull_contains_every_point() {
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..30 {
        let cloud: Vec<Vector> = (0..30)
            .map(|_| Vector::new(rng.gen_range(-10.0..10.0), rng.gen_range(-10.0..10.0)))
            .collect();
        let hull = ConvexPolygon::from_hull(&cloud).unwrap();

        assert!(hull.is_convex());
        assert!(hull.area() > 0.);
        for point in cloud.iter() {
            let shadow_inside = hull
                .edges()
                .all(|(start, end)| ((end - start) ^ (*point - start)) >= -1e-9);
            assert!(shadow_inside);
        }
    }
}

#[rstest]
#[case(
    Circle::new(3., (0., 0.)).unwrap().into(),
    Circle::new(3., (3., 4.)).unwrap().into(),
    Some(Vector::new(0.6, 0.8))
)]
#[case(
    Circle::new(3., (0., 0.)).unwrap().into(),
    Circle::new(3., (10., 10.)).unwrap().into(),
    None
)]
#[case(
    make_aabb(4., 9., 1., 6.).unwrap().into(),
    make_aabb(0., 5., 0., 5.).unwrap().into(),
    Some(Vector::new(-1., 0.))
)]
fn sat_reference_values(#[case] a: Shape, #[case] b: Shape, #[case] expected: Option<Vector>) {
    let result = sat(&a, &b).unwrap();

    match (result, expected) {
        (Some(mtv), Some(expected)) => assert_relative_eq!(mtv, expected, epsilon = 1e-12),
        (result, expected) => assert_eq!(result, expected),
    }
}

#[test]
fn sat_depth_does_not_depend_on_order() {
    let mut rng = StdRng::seed_from_u64(8);
    let mut overlapping = 0;

    for _ in 0..300 {
        let a = random_shape(&mut rng);
        let b = random_shape(&mut rng);
        let Ok(forward) = sat(&a, &b) else {
            continue;
        };
        let backward = sat(&b, &a).unwrap();

        match (forward, backward) {
            (Some(forward), Some(backward)) => {
                overlapping += 1;
                assert_relative_eq!(forward.abs(), backward.abs(), epsilon = 1e-9);
            }
            (None, None) => {}
            (forward, backward) => panic!("asymmetric result {forward:?} vs {backward:?}"),
        }
    }

    assert!(overlapping > 0);
}

#[test]
fn sat_agrees_with_bounding_boxes_for_boxes() {
    let mut rng = StdRng::seed_from_u64(9);

    for _ in 0..200 {
        let a = BoundingBox::from_rect(
            rng.gen_range(-10.0..10.0),
            rng.gen_range(-10.0..10.0),
            rng.gen_range(0.0..6.0),
            rng.gen_range(0.0..6.0),
        )
        .unwrap();
        let b = BoundingBox::from_rect(
            rng.gen_range(-10.0..10.0),
            rng.gen_range(-10.0..10.0),
            rng.gen_range(0.0..6.0),
            rng.gen_range(0.0..6.0),
        )
        .unwrap();

        assert_eq!(overlaps(&a.into(), &b.into()).unwrap(), a.intersects(&b));
    }
}

#[cfg(feature = "serde")]
#[test]
fn shapes_round_trip_through_json() {
    let shapes: Vec<Shape> = vec![
        Circle::new(1., (2., 3.)).unwrap().into(),
        make_aabb(0., 1., 2., 3.).unwrap().into(),
        Ray::new((0., 0.), (0., 2.)).unwrap().into(),
        ConvexPolygon::regular(5, 1., (0., 0.)).unwrap().into(),
        Path::new(points(&[(0., 0.), (1., 1.), (2., 0.)])).unwrap().into(),
        Circuit::new(points(&[(0., 0.), (2., 0.), (1., 0.5), (0., 2.)]))
            .unwrap()
            .into(),
    ];

    let json = serde_json::to_string(&shapes).unwrap();
    let decoded: Vec<Shape> = serde_json::from_str(&json).unwrap();

    assert_eq!(decoded, shapes);
}

#[cfg(feature = "serde")]
#[test]
fn invalid_json_shapes_are_rejected() {
    let result: Result<Circle, _> = serde_json::from_str("[-1.0, 0.0, 0.0]");
    assert!(result.is_err());
}
