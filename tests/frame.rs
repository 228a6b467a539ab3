mod tests {
    use myrtio_matrix_composer::frame::{BufferOverflow, FrameBuffer};

    const LIT: u16 = 0xF800;
    const BG: u16 = 0x0000;

    #[test]
    fn test_new_frame_is_zeroed() {
        let frame = FrameBuffer::<64>::new(8, 8).unwrap();
        assert_eq!(frame.width(), 8);
        assert_eq!(frame.height(), 8);
        for y in 0..8 {
            for x in 0..8 {
                assert_eq!(frame.pixel(x, y), Some(BG));
            }
        }
    }

    #[test]
    fn test_pixel_out_of_bounds_is_none() {
        let frame = FrameBuffer::<64>::new(8, 8).unwrap();
        assert_eq!(frame.pixel(8, 0), None);
        assert_eq!(frame.pixel(0, 8), None);
        assert_eq!(frame.pixel(100, 100), None);
    }

    #[test]
    fn test_set_pixel_clips_silently() {
        let mut frame = FrameBuffer::<64>::new(8, 8).unwrap();
        frame.set_pixel(-1, 0, LIT);
        frame.set_pixel(0, -1, LIT);
        frame.set_pixel(8, 0, LIT);
        frame.set_pixel(0, 8, LIT);
        for y in 0..8 {
            for x in 0..8 {
                assert_eq!(frame.pixel(x, y), Some(BG));
            }
        }
    }

    #[test]
    fn test_fill_and_overwrite() {
        let mut frame = FrameBuffer::<64>::new(8, 8).unwrap();
        frame.fill(LIT);
        assert_eq!(frame.pixel(7, 7), Some(LIT));
        frame.set_pixel(7, 7, BG);
        assert_eq!(frame.pixel(7, 7), Some(BG));
        assert_eq!(frame.pixel(6, 7), Some(LIT));
    }

    #[test]
    fn test_resize_same_width_keeps_contents() {
        let mut frame = FrameBuffer::<64>::new(8, 8).unwrap();
        frame.set_pixel(3, 3, LIT);
        frame.resize(8).unwrap();
        assert_eq!(frame.pixel(3, 3), Some(LIT));
    }

    #[test]
    fn test_resize_discards_contents() {
        let mut frame = FrameBuffer::<256>::new(8, 8).unwrap();
        frame.fill(LIT);
        frame.resize(16).unwrap();
        assert_eq!(frame.width(), 16);
        for y in 0..8 {
            for x in 0..16 {
                assert_eq!(frame.pixel(x, y), Some(BG));
            }
        }
    }

    #[test]
    fn test_resize_beyond_capacity_fails() {
        let mut frame = FrameBuffer::<64>::new(8, 8).unwrap();
        frame.set_pixel(3, 3, LIT);
        assert_eq!(frame.resize(9), Err(BufferOverflow));
        // A failed resize leaves the frame untouched.
        assert_eq!(frame.width(), 8);
        assert_eq!(frame.pixel(3, 3), Some(LIT));
    }

    #[test]
    fn test_text_renders_glyph_rows() {
        let mut frame = FrameBuffer::<256>::new(16, 8).unwrap();
        frame.text("H", 0, 0, LIT);
        // 'H' row 0 is 0x33: columns 0, 1, 4 and 5.
        assert_eq!(frame.pixel(0, 0), Some(LIT));
        assert_eq!(frame.pixel(1, 0), Some(LIT));
        assert_eq!(frame.pixel(2, 0), Some(BG));
        assert_eq!(frame.pixel(4, 0), Some(LIT));
        assert_eq!(frame.pixel(5, 0), Some(LIT));
        assert_eq!(frame.pixel(6, 0), Some(BG));
    }

    #[test]
    fn test_text_advances_one_cell_per_glyph() {
        let mut frame = FrameBuffer::<256>::new(16, 8).unwrap();
        frame.text("HH", 0, 0, LIT);
        assert_eq!(frame.pixel(8, 0), Some(LIT));
        assert_eq!(frame.pixel(9, 0), Some(LIT));
    }

    #[test]
    fn test_text_clips_at_the_edges() {
        let mut frame = FrameBuffer::<64>::new(8, 8).unwrap();
        // Partially off the left edge: column 4 of the glyph lands at x = 0.
        frame.text("H", -4, 0, LIT);
        assert_eq!(frame.pixel(0, 0), Some(LIT));
        // Fully off every edge: nothing to draw, nothing to panic about.
        frame.text("H", 100, 100, LIT);
        frame.text("H", -100, -100, LIT);
    }

    #[test]
    fn test_line_endpoints_and_diagonal() {
        let mut frame = FrameBuffer::<64>::new(8, 8).unwrap();
        frame.line((0, 0), (7, 7), LIT);
        for i in 0..8 {
            assert_eq!(frame.pixel(i, i), Some(LIT));
        }
        assert_eq!(frame.pixel(1, 0), Some(BG));

        let mut frame = FrameBuffer::<64>::new(8, 8).unwrap();
        frame.line((6, 2), (1, 2), LIT);
        for x in 1..=6 {
            assert_eq!(frame.pixel(x, 2), Some(LIT));
        }
    }

    #[test]
    fn test_rect_corners_in_either_order() {
        let mut forward = FrameBuffer::<64>::new(8, 8).unwrap();
        forward.rect((1, 1), (5, 4), LIT, true);
        let mut reversed = FrameBuffer::<64>::new(8, 8).unwrap();
        reversed.rect((5, 4), (1, 1), LIT, true);
        for y in 0..8 {
            for x in 0..8 {
                assert_eq!(forward.pixel(x, y), reversed.pixel(x, y));
            }
        }
        assert_eq!(forward.pixel(1, 1), Some(LIT));
        assert_eq!(forward.pixel(5, 4), Some(LIT));
        assert_eq!(forward.pixel(6, 4), Some(BG));
    }

    #[test]
    fn test_rect_outline_leaves_interior_empty() {
        let mut frame = FrameBuffer::<64>::new(8, 8).unwrap();
        frame.rect((1, 1), (6, 6), LIT, false);
        assert_eq!(frame.pixel(1, 1), Some(LIT));
        assert_eq!(frame.pixel(6, 6), Some(LIT));
        assert_eq!(frame.pixel(3, 1), Some(LIT));
        assert_eq!(frame.pixel(1, 3), Some(LIT));
        assert_eq!(frame.pixel(3, 3), Some(BG));
    }

    #[test]
    fn test_scroll_left_fills_trailing_columns() {
        let mut frame = FrameBuffer::<64>::new(8, 8).unwrap();
        frame.set_pixel(3, 1, LIT);
        frame.scroll_x(-1, BG);
        assert_eq!(frame.pixel(2, 1), Some(LIT));
        assert_eq!(frame.pixel(3, 1), Some(BG));
        // Vacated rightmost column takes the fill value.
        let mut frame = FrameBuffer::<64>::new(8, 8).unwrap();
        frame.fill(LIT);
        frame.scroll_x(-3, BG);
        for y in 0..8 {
            assert_eq!(frame.pixel(4, y), Some(LIT));
            assert_eq!(frame.pixel(5, y), Some(BG));
            assert_eq!(frame.pixel(7, y), Some(BG));
        }
    }

    #[test]
    fn test_scroll_right() {
        let mut frame = FrameBuffer::<64>::new(8, 8).unwrap();
        frame.set_pixel(3, 2, LIT);
        frame.scroll_x(2, BG);
        assert_eq!(frame.pixel(5, 2), Some(LIT));
        assert_eq!(frame.pixel(3, 2), Some(BG));
        assert_eq!(frame.pixel(0, 2), Some(BG));
    }

    #[test]
    fn test_scroll_full_width_clears() {
        let mut frame = FrameBuffer::<64>::new(8, 8).unwrap();
        frame.fill(LIT);
        frame.scroll_x(-8, BG);
        for y in 0..8 {
            for x in 0..8 {
                assert_eq!(frame.pixel(x, y), Some(BG));
            }
        }
    }
}
