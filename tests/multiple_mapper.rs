mod tests {
    use embassy_time::Duration;
    use myrtio_light_mapper::color::{Palette16, Rgb, SNOW_PALETTE};
    use myrtio_light_mapper::mapper::{MultiplePatternMapper, PatternMapper};

    /// Paints a fixed range and records every call
    struct RangeMapper {
        range: core::ops::Range<usize>,
        color: Rgb,
        resets: u32,
        frames: Vec<Duration>,
        palette: Option<Palette16>,
    }

    impl RangeMapper {
        fn new(range: core::ops::Range<usize>, color: Rgb) -> Self {
            Self {
                range,
                color,
                resets: 0,
                frames: Vec::new(),
                palette: None,
            }
        }
    }

    impl PatternMapper for RangeMapper {
        fn reset(&mut self) {
            self.resets += 1;
        }

        fn new_frame(&mut self, leds: &mut [Rgb], frame_time: Duration) {
            self.frames.push(frame_time);
            leds[self.range.clone()].fill(self.color);
        }

        fn set_palette(&mut self, palette: Palette16) {
            self.palette = Some(palette);
        }

        fn reset_palette(&mut self) {
            self.palette = None;
        }
    }

    const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
    const BLUE: Rgb = Rgb { r: 0, g: 0, b: 255 };
    const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

    #[test]
    fn test_fan_out_in_order() {
        let mut first = RangeMapper::new(0..3, RED);
        let mut second = RangeMapper::new(2..4, BLUE);
        let mut leds = [BLACK; 5];

        {
            let mut multiple = MultiplePatternMapper::<2>::new();
            assert!(multiple.push(&mut first).is_ok());
            assert!(multiple.push(&mut second).is_ok());
            assert_eq!(multiple.len(), 2);

            multiple.reset();
            multiple.new_frame(&mut leds, Duration::from_millis(60));
            multiple.set_palette(SNOW_PALETTE);
        }

        // The later mapper wins on the overlapping LED
        assert_eq!(leds, [RED, RED, BLUE, BLUE, BLACK]);
        for mapper in [&first, &second] {
            assert_eq!(mapper.resets, 1);
            assert_eq!(mapper.frames, [Duration::from_millis(60)]);
            assert_eq!(mapper.palette, Some(SNOW_PALETTE));
        }
    }

    #[test]
    fn test_reset_palette_fans_out() {
        let mut first = RangeMapper::new(0..1, RED);
        first.palette = Some(SNOW_PALETTE);
        {
            let mut multiple = MultiplePatternMapper::<1>::default();
            assert!(multiple.is_empty());
            assert!(multiple.push(&mut first).is_ok());
            multiple.reset_palette();
        }
        assert_eq!(first.palette, None);
    }

    #[test]
    fn test_push_over_capacity_returns_mapper() {
        let mut first = RangeMapper::new(0..1, RED);
        let mut second = RangeMapper::new(1..2, BLUE);
        let mut multiple = MultiplePatternMapper::<1>::new();

        assert!(multiple.push(&mut first).is_ok());
        let rejected = multiple.push(&mut second);
        assert!(rejected.is_err());
        assert_eq!(multiple.len(), 1);
    }
}
