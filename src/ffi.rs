//! The C calling convention for the kernel.  The crate builds as a
//! `cdylib`, and this is the one symbol a foreign host needs: the same
//! signature the original shared library exposed, with integer status
//! codes instead of unwinding, because panics must never cross the
//! boundary.
//!
//! The out-buffer is declared as C `int` cells.  The kernel writes
//! `u32` counts, but every count is bounded by `max_iter`, which
//! arrives as a positive `c_int`, so the sign bit is never set and the
//! two views of the buffer agree bit for bit.

use std::os::raw::c_int;
use std::slice;

use num::Complex;

use error::Error;
use kernel::Renderer;

/// The render succeeded and the buffer is fully populated.
pub const STATUS_OK: c_int = 0;
/// The grid, iteration limit, or buffer was invalid; nothing was
/// written.
pub const STATUS_BAD_PARAMETERS: c_int = 1;
/// The complex-plane window was empty or inverted; nothing was
/// written.
pub const STATUS_BAD_VIEWPORT: c_int = 2;

fn status_of(err: Error) -> c_int {
    match err {
        Error::InvalidParameters => STATUS_BAD_PARAMETERS,
        Error::InvalidViewport => STATUS_BAD_VIEWPORT,
    }
}

/// Fill `out_buffer` with the escape count of every pixel of a
/// `width` by `height` grid sampled over the window
/// `[xmin, xmax) x [ymin, ymax)`, row-major.
///
/// Returns `STATUS_OK` on success, `STATUS_BAD_PARAMETERS` for a
/// non-positive dimension or iteration limit or a null buffer, and
/// `STATUS_BAD_VIEWPORT` for an empty or inverted window.  On any
/// failure the buffer is untouched.
///
/// # Safety
///
/// `out_buffer` must either be null (reported as bad parameters) or
/// point to at least `width * height` writable `int` cells that no
/// other thread touches for the duration of the call.
#[no_mangle]
pub unsafe extern "C" fn mandelbrot(
    width: c_int,
    height: c_int,
    xmin: f64,
    ymin: f64,
    xmax: f64,
    ymax: f64,
    max_iter: c_int,
    out_buffer: *mut c_int,
) -> c_int {
    if width <= 0 || height <= 0 || max_iter <= 0 || out_buffer.is_null() {
        return STATUS_BAD_PARAMETERS;
    }

    let renderer = match Renderer::new(
        width as usize,
        height as usize,
        Complex::new(xmin, ymin),
        Complex::new(xmax, ymax),
        max_iter as u32,
    ) {
        Ok(renderer) => renderer,
        Err(err) => return status_of(err),
    };

    let buffer =
        slice::from_raw_parts_mut(out_buffer as *mut u32, (width as usize) * (height as usize));
    match renderer.render_into(buffer) {
        Ok(()) => STATUS_OK,
        Err(err) => status_of(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ptr;

    #[test]
    fn fills_the_buffer_and_reports_success() {
        let mut buffer = vec![-1 as c_int; 12];
        let status = unsafe {
            mandelbrot(4, 3, -2.0, -1.5, 1.0, 1.5, 100, buffer.as_mut_ptr())
        };
        assert_eq!(status, STATUS_OK);
        assert!(buffer.iter().all(|&v| v >= 0 && v <= 100));
    }

    #[test]
    fn rejects_non_positive_dimensions() {
        let mut buffer = vec![0 as c_int; 4];
        let status = unsafe {
            mandelbrot(0, 4, -2.0, -1.5, 1.0, 1.5, 100, buffer.as_mut_ptr())
        };
        assert_eq!(status, STATUS_BAD_PARAMETERS);
        let status = unsafe {
            mandelbrot(4, -1, -2.0, -1.5, 1.0, 1.5, 100, buffer.as_mut_ptr())
        };
        assert_eq!(status, STATUS_BAD_PARAMETERS);
    }

    #[test]
    fn rejects_zero_iteration_limit() {
        let mut buffer = vec![0 as c_int; 4];
        let status = unsafe {
            mandelbrot(2, 2, -2.0, -1.5, 1.0, 1.5, 0, buffer.as_mut_ptr())
        };
        assert_eq!(status, STATUS_BAD_PARAMETERS);
    }

    #[test]
    fn rejects_a_null_buffer() {
        let status =
            unsafe { mandelbrot(4, 4, -2.0, -1.5, 1.0, 1.5, 100, ptr::null_mut()) };
        assert_eq!(status, STATUS_BAD_PARAMETERS);
    }

    #[test]
    fn inverted_viewport_leaves_the_buffer_untouched() {
        let mut buffer = vec![-7 as c_int; 16];
        let status = unsafe {
            mandelbrot(4, 4, 1.0, -1.0, 0.0, 1.0, 100, buffer.as_mut_ptr())
        };
        assert_eq!(status, STATUS_BAD_VIEWPORT);
        assert!(buffer.iter().all(|&v| v == -7));
    }
}
