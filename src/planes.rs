//! Contains the PlaneMapper struct, which describes a relationship
//! between a pixel grid with an origin at 0,0 and a rectangular window
//! of the complex plane defined by its leftlower and rightupper
//! corners.  Every sample the kernel takes goes through this mapping.
use num::Complex;

use error::Error;

/// The dimensions of the pixel grid, in pixels.  The grid's origin is
/// at 0,0 and rows grow downward in memory (row-major).
#[derive(Copy, Clone, Debug)]
pub struct Grid {
    /// Number of pixel columns.
    pub width: usize,
    /// Number of pixel rows.
    pub height: usize,
}

/// A single pixel location: column, then row.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Pixel(pub usize, pub usize);

/// Maps pixels on the integral grid to points on the complex plane.
///
/// The mapping is fixed at construction: each axis gets a per-pixel
/// step of (span / pixel count), and pixel (px, py) lands on
/// (xmin + px * dx, ymin + py * dy).  The divisor is the pixel count
/// itself, not count - 1, so the rightmost and bottommost samples stop
/// one step short of the far corner.  That off-by-one is part of the
/// kernel's compatibility contract and must not be "fixed."
#[derive(Debug)]
pub struct PlaneMapper {
    /// The pixel grid being sampled.
    pub grid: Grid,
    /// The left-lower corner of the complex window.
    pub leftlower: Complex<f64>,
    /// The right-upper corner of the complex window.
    pub rightupper: Complex<f64>,
    // Per-pixel step along the real and imaginary axes.
    steps: (f64, f64),
}

impl PlaneMapper {
    /// Validates the grid and the window, then fixes the per-axis step
    /// sizes.  A zero-sized grid is `InvalidParameters`; a window that
    /// is empty or inverted on either axis is `InvalidViewport`.
    pub fn new(
        width: usize,
        height: usize,
        leftlower: Complex<f64>,
        rightupper: Complex<f64>,
    ) -> Result<PlaneMapper, Error> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidParameters);
        }
        if rightupper.re <= leftlower.re || rightupper.im <= leftlower.im {
            return Err(Error::InvalidViewport);
        }

        let steps = (
            (rightupper.re - leftlower.re) / (width as f64),
            (rightupper.im - leftlower.im) / (height as f64),
        );

        Ok(PlaneMapper {
            grid: Grid { width, height },
            leftlower,
            rightupper,
            steps,
        })
    }

    /// The total number of pixels in the grid, which is also the
    /// length a caller's output buffer must have.
    pub fn len(&self) -> usize {
        self.grid.width * self.grid.height
    }

    /// Never true for a constructed mapper; the constructor rejects
    /// zero-sized grids.
    pub fn is_empty(&self) -> bool {
        self.grid.width == 0 || self.grid.height == 0
    }

    /// Given a pixel on the grid, return the point of the complex
    /// plane it samples.
    pub fn pixel_to_point(&self, pixel: &Pixel) -> Complex<f64> {
        Complex::new(
            self.leftlower.re + (pixel.0 as f64) * self.steps.0,
            self.leftlower.im + (pixel.1 as f64) * self.steps.1,
        )
    }
}
