mod tests {
    use myrtio_light_mapper::bounds::Bounds;
    use myrtio_light_mapper::point::{Point, V_X, V_Y, V_Z};
    use myrtio_light_mapper::segment::StripSegment;
    use myrtio_light_mapper::spatial::SpatialStripSegment;

    fn approx_eq(a: Point, b: Point) -> bool {
        (a - b).norm() < 1e-4
    }

    #[test]
    fn test_point_arithmetic() {
        let a = Point::new(1.0, 2.0, 3.0);
        let b = Point::new(4.0, -2.0, 0.5);

        assert_eq!(a + b, Point::new(5.0, 0.0, 3.5));
        assert_eq!(a - b, Point::new(-3.0, 4.0, 2.5));
        assert_eq!(a * 2.0, Point::new(2.0, 4.0, 6.0));
        assert_eq!(2.0 * a, a.scale(2.0));
        assert_eq!(a / 2.0, Point::new(0.5, 1.0, 1.5));
        assert_eq!(-a, Point::new(-1.0, -2.0, -3.0));
        assert_eq!(a.hadamard_product(b), Point::new(4.0, -4.0, 1.5));
        assert_eq!(a.hadamard_product(b).hadamard_divide(b), a);
        assert_eq!(a.dot(b), 1.5);
        assert_eq!(Point::from([1.0, 2.0, 3.0]), a);
    }

    #[test]
    fn test_point_norm_and_distance() {
        assert_eq!(Point::new(3.0, 4.0, 0.0).norm(), 5.0);
        assert_eq!(Point::ORIGIN.distance(Point::new(0.0, 0.0, 2.0)), 2.0);
        assert_eq!(Point::new(1.0, 2.0, 3.0).distance_squared(Point::new(3.0, 2.0, 0.0)), 13.0);
        assert_eq!(Point::planar(1.0, 2.0), Point::new(1.0, 2.0, 0.0));
        assert_eq!(V_X.dot(V_Y), 0.0);
        assert_eq!(V_Z.norm(), 1.0);
    }

    #[test]
    fn test_distance_to_plane() {
        let point = Point::new(1.0, 5.0, -2.0);
        assert_eq!(point.distance_to_plane(V_Y, Point::ORIGIN), 5.0);
        // Normal length does not matter
        assert_eq!(point.distance_to_plane(V_Y * 4.0, Point::new(0.0, 2.0, 0.0)), 3.0);
        // Distance is unsigned
        assert_eq!(point.distance_to_plane(V_Y, Point::new(0.0, 8.0, 0.0)), 3.0);
    }

    #[test]
    fn test_line_interpolation() {
        let segment = StripSegment::forward(0, 5, 5);
        let line = SpatialStripSegment::from_line(
            segment,
            Point::new(-1.0, 0.0, 2.0),
            Point::new(1.0, 4.0, 2.0),
        );

        assert_eq!(line.spatial_position(0), Point::new(-1.0, 0.0, 2.0));
        assert_eq!(line.spatial_position(2), Point::new(0.0, 2.0, 2.0));
        assert_eq!(line.spatial_position(4), Point::new(1.0, 4.0, 2.0));
        // Clamped to the last LED
        assert_eq!(line.spatial_position(9), Point::new(1.0, 4.0, 2.0));
    }

    #[test]
    fn test_point_list() {
        let points = [
            Point::new(0.0, 0.0, 0.0),
            Point::new(1.0, 1.0, 0.0),
            Point::new(3.0, -1.0, 2.0),
        ];
        let spatial = SpatialStripSegment::new(StripSegment::new(4, 3, 6, false), &points);

        assert_eq!(spatial.len(), 3);
        assert_eq!(spatial.led_id(2), 0);
        assert_eq!(spatial.spatial_position(1), points[1]);
        assert_eq!(spatial.positions().collect::<Vec<_>>(), points);

        let bounds = spatial.bounds();
        assert_eq!(bounds.min, Point::new(0.0, -1.0, 0.0));
        assert_eq!(bounds.max, Point::new(3.0, 1.0, 2.0));
    }

    #[test]
    #[should_panic(expected = "one position per segment LED")]
    fn test_point_count_mismatch_panics() {
        let points = [Point::ORIGIN; 2];
        let _ = SpatialStripSegment::new(StripSegment::forward(0, 3, 3), &points);
    }

    #[test]
    #[should_panic(expected = "at least two LEDs")]
    fn test_single_led_line_panics() {
        let _ = SpatialStripSegment::from_line(StripSegment::forward(0, 1, 3), V_X, V_Y);
    }

    #[test]
    #[should_panic(expected = "coincide")]
    fn test_degenerate_line_panics() {
        let _ = SpatialStripSegment::from_line(StripSegment::forward(0, 3, 3), V_X, V_X);
    }

    #[test]
    fn test_negate_keeps_led_positions() {
        let segment = StripSegment::new(8, 5, 10, false);
        let line =
            SpatialStripSegment::from_line(segment, Point::ORIGIN, Point::new(4.0, 0.0, 0.0));
        let negated = line.negate();

        assert!(negated.strip_segment().is_reversed());
        for pos in 0..line.len() {
            let led = line.led_id(pos);
            let negated_pos = (0..negated.len())
                .find(|&p| negated.led_id(p) == led)
                .unwrap();
            assert!(approx_eq(
                negated.spatial_position(negated_pos),
                line.spatial_position(pos)
            ));
        }
        assert_eq!(negated.negate(), line);
    }

    #[test]
    fn test_bounds_fold() {
        let empty = Bounds::empty();
        assert!(empty.is_empty());
        assert_eq!(Bounds::default(), empty);

        let single = empty.include(Point::new(-2.0, -3.0, -4.0));
        assert!(!single.is_empty());
        assert_eq!(single.min, single.max);

        let bounds = Bounds::from_points([
            Point::new(-2.0, 1.0, 0.0),
            Point::new(2.0, -1.0, 0.0),
            Point::new(0.0, 0.0, 6.0),
        ]);
        assert_eq!(bounds.min, Point::new(-2.0, -1.0, 0.0));
        assert_eq!(bounds.max, Point::new(2.0, 1.0, 6.0));
        assert_eq!(bounds.magnitude(), Point::new(4.0, 2.0, 6.0));
        assert_eq!(bounds.centre(), Point::new(0.0, 0.0, 3.0));
        assert!(bounds.contains(Point::new(0.0, 0.0, 6.0)));
        assert!(!bounds.contains(Point::new(0.0, 0.0, 6.5)));

        assert_eq!(bounds.union(Bounds::empty()), bounds);
    }

    #[test]
    fn test_bounds_negative_coordinates() {
        let bounds = Bounds::from_points([
            Point::new(-5.0, -5.0, -5.0),
            Point::new(-1.0, -2.0, -3.0),
        ]);
        assert_eq!(bounds.max, Point::new(-1.0, -2.0, -3.0));
    }

    #[test]
    fn test_aggregate_bounds() {
        let a = SpatialStripSegment::from_line(
            StripSegment::forward(0, 3, 6),
            Point::new(-1.0, 0.0, 0.0),
            Point::new(1.0, 0.0, 0.0),
        );
        let b = SpatialStripSegment::from_line(
            StripSegment::forward(3, 3, 6),
            Point::new(0.0, -2.0, 1.0),
            Point::new(0.0, 2.0, 1.0),
        );

        let bounds = Bounds::aggregate(&[a, b]);
        assert_eq!(bounds.min, Point::new(-1.0, -2.0, 0.0));
        assert_eq!(bounds.max, Point::new(1.0, 2.0, 1.0));
        assert!(Bounds::aggregate(&[]).is_empty());
    }
}
