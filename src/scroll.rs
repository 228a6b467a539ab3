//! Scrolling-text animation.
//!
//! A scroll call computes its range once, draws the text into a widened
//! frame, renders one static frame, then steps: shift left by one pixel,
//! render, wait. The blocking and cooperative entry points share the same
//! step routine and differ only at the wait.
//!
//! The engine is single-owner: two animations driving one panel interleave
//! into torn frames. Callers running concurrent tasks wrap the matrix in a
//! mutual exclusion primitive or route all drawing through one task.

use embassy_futures::yield_now;
use embassy_time::{Duration, Timer, block_for};

use crate::OutputDriver;
use crate::color::{self, Rgb, palette};
use crate::error::MatrixError;
use crate::font;
use crate::matrix::Matrix;

/// Parameters of one scrolling-text call.
#[derive(Debug, Clone, Copy)]
pub struct ScrollConfig {
    /// Starting x of the text; ignored when `scroll_in` places the text
    /// beyond the right edge
    pub x: i32,
    /// Top row of the text
    pub y: i32,
    /// Text color
    pub color: Rgb,
    /// Delay between scroll steps
    pub delay: Duration,
    /// Enter from beyond the right edge
    pub scroll_in: bool,
    /// Keep going until the text has fully left the panel
    pub scroll_out: bool,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            x: 0,
            y: 0,
            color: palette::RED,
            delay: Duration::from_millis(70),
            scroll_in: true,
            scroll_out: true,
        }
    }
}

/// Computed geometry of one scroll call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ScrollPlan {
    /// Width the frame buffer is resized to
    pub(crate) frame_width: usize,
    /// Where the text is drawn before the first frame
    pub(crate) text_x: i32,
    /// Number of one-pixel steps
    pub(crate) steps: usize,
}

#[allow(clippy::cast_possible_wrap)]
pub(crate) fn plan(
    text_width: usize,
    matrix_width: usize,
    x: i32,
    scroll_in: bool,
    scroll_out: bool,
) -> ScrollPlan {
    let (frame_width, text_x) = if scroll_in {
        // The text starts entirely beyond the right edge of the panel.
        (text_width + matrix_width, matrix_width as i32)
    } else {
        (text_width.max(matrix_width), x)
    };

    // Enough steps to bring the end of the text to the left edge, plus a
    // full panel width more when it should leave the screen entirely.
    let mut steps = frame_width - matrix_width;
    if scroll_out {
        steps += matrix_width;
    }

    ScrollPlan {
        frame_width,
        text_x,
        steps,
    }
}

impl<D: OutputDriver, const MAX_CELLS: usize> Matrix<D, MAX_CELLS> {
    /// Resize, clear and pre-draw the frame for a scroll; returns the step
    /// count.
    fn begin_scroll(
        &mut self,
        string: &str,
        config: &ScrollConfig,
    ) -> Result<usize, MatrixError<D::Error>> {
        let plan = plan(
            font::text_width(string),
            self.width(),
            config.x,
            config.scroll_in,
            config.scroll_out,
        );

        self.frame.resize(plan.frame_width)?;
        self.frame.fill(color::rgb_to_rgb565(self.bg_color));
        self.frame.text(
            string,
            plan.text_x,
            config.y,
            color::rgb_to_rgb565(config.color),
        );
        Ok(plan.steps)
    }

    /// One animation step: shift left one pixel and render.
    fn scroll_step(&mut self) -> Result<(), MatrixError<D::Error>> {
        self.frame.scroll_x(-1, color::rgb_to_rgb565(self.bg_color));
        self.render()
    }

    /// Scroll `string` across the panel, sleeping on the calling thread
    /// between frames.
    ///
    /// A zero-length range (text fits, no scroll flags) renders one static
    /// frame and returns.
    pub fn scroll_text_blocking(
        &mut self,
        string: &str,
        config: &ScrollConfig,
    ) -> Result<(), MatrixError<D::Error>> {
        let steps = self.begin_scroll(string, config)?;
        self.render()?;
        for _ in 0..steps {
            self.scroll_step()?;
            block_for(config.delay);
        }
        Ok(())
    }

    /// Scroll `string` across the panel, yielding to the executor after
    /// every rendered frame.
    ///
    /// Frames within one call are strictly sequential. A zero delay still
    /// suspends once per step so other tasks are not starved. Dropping the
    /// future mid-scroll stops between frames and leaves the last rendered
    /// frame on the device; callers wanting a blank panel clear and render
    /// afterwards.
    pub async fn scroll_text(
        &mut self,
        string: &str,
        config: &ScrollConfig,
    ) -> Result<(), MatrixError<D::Error>> {
        let steps = self.begin_scroll(string, config)?;
        self.render()?;
        for _ in 0..steps {
            self.scroll_step()?;
            if config.delay.as_ticks() == 0 {
                yield_now().await;
            } else {
                Timer::after(config.delay).await;
            }
        }
        Ok(())
    }
}
