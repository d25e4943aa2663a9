use proptest::prelude::*;
use trajkit_core::{Point3D, Segment};
use trajkit_generators::{CircleGenerator, CircleParameters, PathStitcher};

fn point() -> impl Strategy<Value = Point3D> {
    (-0.05f64..0.05, -0.05f64..0.05, -0.05f64..0.05).prop_map(|(x, y, z)| Point3D::new(x, y, z))
}

fn segment() -> impl Strategy<Value = Segment> {
    prop::collection::vec(point(), 0..20).prop_map(Segment::from)
}

proptest! {
    #[test]
    fn stitched_length_accounts_for_every_point(
        segments in prop::collection::vec(segment(), 0..8),
        density in 0.0005f64..0.01,
    ) {
        let (path, report) = PathStitcher::new(density).stitch_with_report(&segments);

        let segment_points: usize = segments.iter().map(|s| s.len()).sum();
        prop_assert_eq!(report.segment_points, segment_points);
        prop_assert_eq!(path.len(), segment_points + report.inserted_points);

        let non_empty: Vec<&Segment> = segments.iter().filter(|s| !s.is_empty()).collect();
        let expected_inserted: usize = non_empty
            .windows(2)
            .map(|pair| {
                let gap = pair[0].last().unwrap().distance_to(pair[1].first().unwrap());
                (gap / density).floor() as usize
            })
            .sum();
        prop_assert_eq!(report.inserted_points, expected_inserted);
    }

    #[test]
    fn inserted_points_lie_between_boundaries(a in point(), b in point(), density in 0.001f64..0.01) {
        let path = PathStitcher::new(density).stitch(&[Segment::from(vec![a]), Segment::from(vec![b])]);
        let gap = a.distance_to(&b);

        prop_assert_eq!(path.first(), Some(&a));
        prop_assert_eq!(path.last(), Some(&b));
        for p in &path.points()[1..path.len() - 1] {
            let split = a.distance_to(p) + p.distance_to(&b);
            prop_assert!((split - gap).abs() < 1e-9);
            prop_assert!(a.distance_to(p) < gap);
        }
    }

    #[test]
    fn circle_points_sit_on_the_ring(diameter in 0.002f64..0.2, density in 0.0005f64..0.01, z in -0.1f64..0.1) {
        let segment = CircleGenerator::new(CircleParameters {
            diameter,
            point_density: density,
            height_offset: z,
        })
        .generate();

        prop_assert_eq!(segment.len(), (std::f64::consts::PI * diameter / density).floor() as usize);
        for p in segment.iter() {
            prop_assert_eq!(p.z, z);
            prop_assert!(((p.x * p.x + p.y * p.y).sqrt() - diameter / 2.0).abs() < 1e-9);
        }
    }
}
