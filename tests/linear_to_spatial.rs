mod tests {
    use embassy_time::Duration;
    use myrtio_light_mapper::color::{ColorSource, Rgb};
    use myrtio_light_mapper::mapper::{
        LinearToSpatialConfig, LinearToSpatialPatternMapper, PatternMapper,
    };
    use myrtio_light_mapper::pattern::{LinearPattern, Pattern};
    use myrtio_light_mapper::point::{Point, V_X, V_Y};
    use myrtio_light_mapper::segment::StripSegment;
    use myrtio_light_mapper::spatial::SpatialStripSegment;

    const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

    const fn gray(v: u8) -> Rgb {
        Rgb { r: v, g: v, b: v }
    }

    const RAMP: [Rgb; 5] = [gray(10), gray(20), gray(30), gray(40), gray(50)];

    struct Ramp {
        colors: ColorSource,
    }

    impl Pattern for Ramp {
        fn color_source(&self) -> &ColorSource {
            &self.colors
        }

        fn color_source_mut(&mut self) -> &mut ColorSource {
            &mut self.colors
        }
    }

    impl LinearPattern for Ramp {
        fn frame_action(&mut self, pixels: &mut [Rgb], _frame_time: Duration) {
            pixels.copy_from_slice(&RAMP);
        }
    }

    fn ramp() -> Ramp {
        Ramp {
            colors: ColorSource::default(),
        }
    }

    /// Five LEDs spaced 0.5 apart on the x axis from -1 to 1
    fn x_line() -> [SpatialStripSegment<'static>; 1] {
        [SpatialStripSegment::from_line(
            StripSegment::whole_strip(5),
            Point::new(-1.0, 0.0, 0.0),
            Point::new(1.0, 0.0, 0.0),
        )]
    }

    fn render(
        segments: &[SpatialStripSegment<'_>],
        direction: Point,
        config: LinearToSpatialConfig,
    ) -> [Rgb; 5] {
        let mut mapper =
            LinearToSpatialPatternMapper::<_, 5>::new(ramp(), segments, direction, config);
        let mut leds = [gray(1); 5];
        mapper.new_frame(&mut leds, Duration::from_millis(0));
        leds
    }

    #[test]
    fn test_config_defaults() {
        let config = LinearToSpatialConfig::default();
        assert_eq!(config.offset, 0.0);
        assert_eq!(config.scale, 1.0);
        assert!(config.mirrored);
    }

    #[test]
    fn test_path_geometry() {
        let segments = x_line();
        let mapper = LinearToSpatialPatternMapper::<_, 5>::new(
            ramp(),
            &segments,
            V_X * 2.0,
            LinearToSpatialConfig::default(),
        );
        assert_eq!(mapper.path_start(), Point::new(-1.0, 0.0, 0.0));
        assert_eq!(mapper.path_end(), Point::new(1.0, 0.0, 0.0));
        assert_eq!(mapper.path_length(), 2.0);
        assert_eq!(mapper.distance_from_start(Point::new(0.5, 7.0, -3.0)), 1.5);
    }

    #[test]
    fn test_ramp_along_path() {
        let config = LinearToSpatialConfig::default().with_mirrored(false);
        assert_eq!(render(&x_line(), V_X, config), RAMP);
    }

    #[test]
    fn test_opposite_direction_reverses() {
        let config = LinearToSpatialConfig::default().with_mirrored(false);
        let mut reversed = RAMP;
        reversed.reverse();
        assert_eq!(render(&x_line(), -V_X, config), reversed);
    }

    #[test]
    fn test_mirrored_around_centre() {
        let config = LinearToSpatialConfig::default().with_offset(1.0);
        assert_eq!(
            render(&x_line(), V_X, config),
            [gray(30), gray(20), gray(10), gray(20), gray(30)]
        );
    }

    #[test]
    fn test_behind_start_is_black() {
        let config = LinearToSpatialConfig::default()
            .with_offset(1.0)
            .with_mirrored(false);
        assert_eq!(
            render(&x_line(), V_X, config),
            [BLACK, BLACK, gray(10), gray(20), gray(30)]
        );
    }

    #[test]
    fn test_past_path_end_is_black() {
        let config = LinearToSpatialConfig::default()
            .with_scale(0.5)
            .with_mirrored(false);
        assert_eq!(
            render(&x_line(), V_X, config),
            [gray(10), gray(30), gray(50), BLACK, BLACK]
        );
    }

    #[test]
    fn test_perpendicular_direction_is_flat() {
        // Every LED sits on the start plane
        let config = LinearToSpatialConfig::default();
        assert_eq!(render(&x_line(), V_Y, config), [gray(10); 5]);
    }

    #[test]
    #[should_panic(expected = "direction must not be zero")]
    fn test_zero_direction_panics() {
        let segments = x_line();
        let _ = LinearToSpatialPatternMapper::<_, 5>::new(
            ramp(),
            &segments,
            Point::ORIGIN,
            LinearToSpatialConfig::default(),
        );
    }
}
