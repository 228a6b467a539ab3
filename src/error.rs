use crate::frame::BufferOverflow;

/// Errors surfaced by the matrix engine.
///
/// `E` is the output driver's write error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixError<E> {
    /// Zero dimensions, a zero progress denominator, or margins that leave
    /// no drawable track.
    InvalidConfiguration,
    /// The requested frame exceeds the reserved cell capacity.
    Overflow(BufferOverflow),
    /// The physical strip rejected the frame write.
    ///
    /// The logical frame buffer is left untouched; re-rendering after the
    /// transport recovers produces the same frame.
    Driver(E),
}

impl<E> From<BufferOverflow> for MatrixError<E> {
    fn from(overflow: BufferOverflow) -> Self {
        Self::Overflow(overflow)
    }
}
