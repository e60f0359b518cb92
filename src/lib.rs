#![deny(missing_docs)]
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Mandelbrot escape-time kernel
//!
//! The Mandelbrot set lives on the complex plane: for every point c,
//! iterate z = z^2 + c starting from zero and watch whether the orbit
//! stays bounded or flies off to infinity.  The number of steps the
//! orbit survives inside the circle of radius 2 is the "escape
//! iteration count," and it is the raw material every Mandelbrot
//! render is made of.
//!
//! This crate is the kernel and nothing else.  It maps a pixel grid
//! onto a rectangular window of the complex plane, runs the recurrence
//! at every pixel, and fills a caller-owned buffer with the counts.
//! Coloring, encoding, and interaction belong to whoever calls it; the
//! whole thing is also exported over a C calling convention (see the
//! `ffi` module) so that a host written in another language can load
//! it as a shared library and drive it directly.
//!
//! One convention matters for pixel-for-pixel reproducibility: the
//! escape test runs after the update, with a strict `> 4.0` threshold
//! on the squared magnitude, and the step that escapes is not counted.
//! Swapping either choice shifts every boundary count by one.

extern crate crossbeam;
#[macro_use]
extern crate failure;
extern crate itertools;
extern crate num;

pub mod error;
pub mod ffi;
pub mod kernel;
pub mod planes;

pub use error::Error;
pub use kernel::{escape_iterations, Renderer};
pub use planes::{Grid, Pixel, PlaneMapper};
