//! The two ways a render request can be rejected.  Both are detected
//! before any pixel is computed, and both leave the caller's buffer
//! untouched, so a caller can correct its parameters and simply call
//! again.

/// Validation failure for a render request.
#[derive(Copy, Clone, Debug, Fail, PartialEq, Eq)]
pub enum Error {
    /// The grid has a zero dimension, the iteration limit is zero, or
    /// the output buffer is missing or the wrong length.
    #[fail(display = "invalid grid, iteration, or buffer parameters")]
    InvalidParameters,

    /// The complex-plane window is empty or inverted on at least one
    /// axis.
    #[fail(display = "invalid viewport: the complex-plane window is empty or inverted")]
    InvalidViewport,
}
