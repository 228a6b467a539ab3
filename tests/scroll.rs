mod tests {
    use embassy_futures::block_on;
    use embassy_time::Duration;
    use myrtio_matrix_composer::color::palette;
    use myrtio_matrix_composer::{Matrix, MatrixConfig, OutputDriver, Rgb, ScrollConfig};

    /// Driver counting frames and keeping the last one.
    #[derive(Default)]
    struct CaptureDriver {
        writes: usize,
        last: Vec<Rgb>,
    }

    impl OutputDriver for CaptureDriver {
        type Error = core::convert::Infallible;

        fn write(&mut self, colors: &[Rgb]) -> Result<(), Self::Error> {
            self.writes += 1;
            self.last = colors.to_vec();
            Ok(())
        }
    }

    fn panel_32x8() -> Matrix<CaptureDriver, 1024> {
        Matrix::new(CaptureDriver::default(), &MatrixConfig::new(32, 8)).unwrap()
    }

    fn immediate(scroll_in: bool, scroll_out: bool) -> ScrollConfig {
        ScrollConfig {
            delay: Duration::from_millis(0),
            scroll_in,
            scroll_out,
            ..ScrollConfig::default()
        }
    }

    const TEN_CHARS: &str = "0123456789";

    #[test]
    fn test_scroll_in_and_out_step_count() {
        // Text width 80 on a 32-wide panel: the frame grows to 112
        // columns, 80 steps bring the text's end to the left edge and 32
        // more take it off the panel. Plus the initial static frame.
        let mut matrix = panel_32x8();
        matrix
            .scroll_text_blocking(TEN_CHARS, &immediate(true, true))
            .unwrap();
        assert_eq!(matrix.driver().writes, 112 + 1);
    }

    #[test]
    fn test_scroll_in_only_step_count() {
        let mut matrix = panel_32x8();
        matrix
            .scroll_text_blocking(TEN_CHARS, &immediate(true, false))
            .unwrap();
        assert_eq!(matrix.driver().writes, 80 + 1);
    }

    #[test]
    fn test_scroll_out_only_step_count() {
        let mut matrix = panel_32x8();
        matrix
            .scroll_text_blocking(TEN_CHARS, &immediate(false, true))
            .unwrap();
        assert_eq!(matrix.driver().writes, 80 + 1);
    }

    #[test]
    fn test_static_text_renders_once_and_returns() {
        // Two glyphs fit a 32-wide panel: zero steps, one static frame.
        let mut matrix = panel_32x8();
        matrix
            .scroll_text_blocking("AB", &immediate(false, false))
            .unwrap();
        assert_eq!(matrix.driver().writes, 1);
    }

    #[test]
    fn test_scroll_in_parks_text_at_the_panel() {
        let mut matrix = panel_32x8();
        matrix
            .scroll_text_blocking("H", &immediate(true, false))
            .unwrap();

        // One glyph entering a 32-wide panel stops with its final column
        // at the right edge: 'H' occupies x = 24..=31, row 0 lights 24,
        // 25, 28 and 29.
        let packed_red = Rgb { r: 248, g: 0, b: 0 };
        assert_eq!(matrix.pixel(24, 0), Some(packed_red));
        assert_eq!(matrix.pixel(25, 0), Some(packed_red));
        assert_eq!(matrix.pixel(23, 0), Some(palette::BLACK));
    }

    #[test]
    fn test_scroll_out_ends_on_a_blank_panel() {
        let mut matrix = panel_32x8();
        matrix
            .scroll_text_blocking("HI", &immediate(true, true))
            .unwrap();
        assert!(
            matrix
                .driver()
                .last
                .iter()
                .all(|slot| *slot == palette::BLACK)
        );
    }

    #[test]
    fn test_cooperative_scroll_matches_blocking_frame_count() {
        let mut blocking = panel_32x8();
        blocking
            .scroll_text_blocking("AB", &immediate(true, true))
            .unwrap();

        let mut cooperative = panel_32x8();
        block_on(cooperative.scroll_text("AB", &immediate(true, true))).unwrap();

        assert_eq!(blocking.driver().writes, cooperative.driver().writes);
        assert_eq!(blocking.driver().last, cooperative.driver().last);
    }

    #[test]
    fn test_cooperative_static_text_renders_once() {
        let mut matrix = panel_32x8();
        block_on(matrix.scroll_text("AB", &immediate(false, false))).unwrap();
        assert_eq!(matrix.driver().writes, 1);
    }

    #[test]
    fn test_next_draw_shrinks_the_scroll_buffer() {
        let mut matrix = panel_32x8();
        matrix
            .scroll_text_blocking(TEN_CHARS, &immediate(true, true))
            .unwrap();
        // The widened frame is still around after the scroll...
        assert!(matrix.pixel(100, 0).is_some());

        matrix.text("HI", 0, 0, palette::RED).unwrap();
        // ...and collapses back to the panel width on the next draw.
        assert!(matrix.pixel(31, 0).is_some());
        assert!(matrix.pixel(32, 0).is_none());
    }
}
