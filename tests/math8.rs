mod tests {
    use myrtio_light_mapper::math8::{blend8, lerp8_by_pos, mix64, qadd8, qsub8, scale8};

    #[test]
    fn test_scale8() {
        assert_eq!(scale8(255, 128), 128);
        assert_eq!(scale8(0, 128), 0);
        assert_eq!(scale8(128, 128), 64);
        assert_eq!(scale8(128, 255), 128);
        assert_eq!(scale8(128, 0), 0);
    }

    #[test]
    fn test_blend8() {
        assert_eq!(blend8(255, 128, 128), 191);
        assert_eq!(blend8(0, 128, 255), 128);
        assert_eq!(blend8(255, 0, 128), 127);
        assert_eq!(blend8(255, 128, 0), 255);
    }

    #[test]
    fn test_saturating_math() {
        assert_eq!(qadd8(200, 100), 255);
        assert_eq!(qadd8(20, 10), 30);
        assert_eq!(qsub8(10, 20), 0);
        assert_eq!(qsub8(20, 10), 10);
    }

    #[test]
    fn test_lerp8_by_pos() {
        assert_eq!(lerp8_by_pos(255, 0, 0, 4), 255);
        assert_eq!(lerp8_by_pos(255, 0, 1, 4), 192);
        assert_eq!(lerp8_by_pos(0, 100, 1, 2), 50);
        assert_eq!(lerp8_by_pos(0, 100, 2, 2), 100);
        assert_eq!(lerp8_by_pos(0, 100, 9, 2), 100);
        assert_eq!(lerp8_by_pos(30, 100, 0, 0), 100);
    }

    #[test]
    fn test_mix64() {
        assert_eq!(mix64(7, 3), mix64(7, 3));
        assert_ne!(mix64(7, 3), mix64(7, 4));
        assert_ne!(mix64(7, 3), mix64(8, 3));
    }
}
