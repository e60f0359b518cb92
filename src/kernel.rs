// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The escape-iteration kernel.  For every pixel of the grid, run the
//! recurrence z = z^2 + c at the pixel's point of the complex plane
//! and record how many steps the orbit survives inside the escape
//! radius.  Pixels are mutually independent, so the fill can run on
//! one thread or be fanned out across row bands; both produce
//! bit-identical buffers.

extern crate crossbeam;

use itertools::iproduct;
use num::Complex;

use error::Error;
use planes::{Pixel, PlaneMapper};

/// Count the recurrence steps the orbit of `c` completes before its
/// squared magnitude exceeds 4.0, capped at `limit`.
///
/// The test runs after each update and the escaping step itself is not
/// counted: an orbit that leaves on step n+1 reports n.  A point that
/// never leaves reports exactly `limit`, which callers treat as "in
/// the set" by convention, not as proven membership.
pub fn escape_iterations(c: Complex<f64>, limit: u32) -> u32 {
    let mut z: Complex<f64> = Complex { re: 0.0, im: 0.0 };
    let mut iter = 0;
    while iter < limit {
        z = z * z + c;
        if z.norm_sqr() > 4.0 {
            break;
        }
        iter += 1;
    }
    iter
}

/// Owns a plane mapping and an iteration limit, and fills caller
/// buffers with escape counts.  The renderer itself is immutable and
/// holds no buffer: the caller allocates, the renderer writes each
/// cell exactly once, and nothing is retained after the call returns.
#[derive(Debug)]
pub struct Renderer {
    plane: PlaneMapper,
    limit: u32,
}

impl Renderer {
    /// Requires the width and height of the grid, the left-lower and
    /// right-upper corners of the complex window, and the per-pixel
    /// iteration limit.  All validation happens here: a zero grid
    /// dimension or zero limit is `InvalidParameters`, an empty or
    /// inverted window is `InvalidViewport`.
    pub fn new(
        width: usize,
        height: usize,
        leftlower: Complex<f64>,
        rightupper: Complex<f64>,
        limit: u32,
    ) -> Result<Self, Error> {
        if limit == 0 {
            return Err(Error::InvalidParameters);
        }
        let plane = PlaneMapper::new(width, height, leftlower, rightupper)?;
        Ok(Renderer { plane, limit })
    }

    /// The number of cells a caller's buffer must have.
    pub fn len(&self) -> usize {
        self.plane.len()
    }

    /// True only for a renderer over an empty grid, which `new` never
    /// produces.
    pub fn is_empty(&self) -> bool {
        self.plane.is_empty()
    }

    // Fills a band of whole rows starting at grid row `top`.  The band
    // length must be a multiple of the grid width.
    fn fill_rows(&self, top: usize, band: &mut [u32]) {
        let width = self.plane.grid.width;
        for (row, column) in iproduct!(0..band.len() / width, 0..width) {
            let c = self.plane.pixel_to_point(&Pixel(column, top + row));
            band[row * width + column] = escape_iterations(c, self.limit);
        }
    }

    /// Fill `buffer` with the escape count of every pixel, row-major
    /// (index = row * width + column).  The buffer must hold exactly
    /// `len()` cells; anything else is `InvalidParameters` and nothing
    /// is written.  On success every cell holds a value in
    /// [0, limit].
    pub fn render_into(&self, buffer: &mut [u32]) -> Result<(), Error> {
        if buffer.len() != self.plane.len() {
            return Err(Error::InvalidParameters);
        }
        self.fill_rows(0, buffer);
        Ok(())
    }

    /// Allocating convenience over `render_into` for callers that do
    /// not manage their own buffer.
    pub fn render(&self) -> Vec<u32> {
        let mut buffer = vec![0 as u32; self.plane.len()];
        self.fill_rows(0, &mut buffer);
        buffer
    }

    /// Same contract and same output as `render_into`, with the rows
    /// split into contiguous bands and each band filled by its own
    /// thread.  Every cell is still written exactly once, because the
    /// bands are disjoint slices of the one buffer.  `threads` must be
    /// at least 1.
    pub fn render_threaded(&self, buffer: &mut [u32], threads: usize) -> Result<(), Error> {
        if threads == 0 || buffer.len() != self.plane.len() {
            return Err(Error::InvalidParameters);
        }
        let width = self.plane.grid.width;
        let rows_per_band = self.plane.grid.height / threads + 1;
        crossbeam::scope(|spawner| {
            for (i, band) in buffer.chunks_mut(rows_per_band * width).enumerate() {
                spawner.spawn(move |_| {
                    self.fill_rows(rows_per_band * i, band);
                });
            }
        })
        .unwrap();
        Ok(())
    }
}
