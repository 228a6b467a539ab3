//! Console preview for the matrix composer.
//!
//! Drives a virtual 32×8 panel on stdout: centered text, a progress-bar
//! sweep and a cooperative scroll, all through the console backend.

use core::fmt;

use embassy_futures::block_on;
use embassy_time::Duration;
use myrtio_matrix_composer::{
    ConsoleBackend, Matrix, MatrixConfig, ScrollConfig, SerpentineMapping, color::palette,
};

const WIDTH: usize = 32;
const HEIGHT: usize = 8;

/// Enough cells for a scrolled line of 20 characters plus the panel.
const MAX_CELLS: usize = (20 * 8 + WIDTH) * HEIGHT;

/// `core::fmt` sink forwarding to stdout.
struct Stdout;

impl fmt::Write for Stdout {
    #[allow(clippy::print_stdout)]
    fn write_str(&mut self, s: &str) -> fmt::Result {
        print!("{s}");
        Ok(())
    }
}

fn main() {
    let config = MatrixConfig::new(WIDTH, HEIGHT);
    let mapping = SerpentineMapping::new(WIDTH, HEIGHT, config.direction);
    let backend = ConsoleBackend::new(Stdout, mapping, config.bg_color, true);

    let mut matrix: Matrix<_, MAX_CELLS> =
        Matrix::new(backend, &config).expect("panel geometry fits MAX_CELLS");

    matrix
        .text_centered("HOT", 0, palette::RED)
        .expect("console write");
    embassy_time::block_for(Duration::from_millis(800));

    for progress in (0..=100).step_by(10) {
        matrix
            .draw_progress_bar(progress, 100, palette::GREEN, 2, 4)
            .expect("console write");
        embassy_time::block_for(Duration::from_millis(150));
    }

    block_on(matrix.scroll_text(
        "Hi from Berlin",
        &ScrollConfig {
            delay: Duration::from_millis(40),
            ..ScrollConfig::default()
        },
    ))
    .expect("console write");
}
