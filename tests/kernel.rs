//! End-to-end checks of the kernel contract: determinism, the range
//! invariant, the validation classes, the two pinned sample points,
//! refinement monotonicity, and full buffer coverage.

extern crate mandelbrot;
extern crate num;

use mandelbrot::{Error, Renderer};
use num::Complex;

fn renderer(width: usize, height: usize, limit: u32) -> Renderer {
    Renderer::new(
        width,
        height,
        Complex::new(-2.0, -1.5),
        Complex::new(1.0, 1.5),
        limit,
    )
    .unwrap()
}

#[test]
fn repeated_renders_are_bit_identical() {
    let r = renderer(32, 24, 200);
    let mut first = vec![0 as u32; r.len()];
    let mut second = vec![0 as u32; r.len()];
    r.render_into(&mut first).unwrap();
    r.render_into(&mut second).unwrap();
    assert_eq!(first, second);
}

#[test]
fn threaded_render_is_bit_identical_to_single() {
    let r = renderer(33, 25, 200);
    let mut single = vec![0 as u32; r.len()];
    let mut threaded = vec![0 as u32; r.len()];
    r.render_into(&mut single).unwrap();
    r.render_threaded(&mut threaded, 4).unwrap();
    assert_eq!(single, threaded);
}

#[test]
fn every_count_is_within_the_limit() {
    let limit = 75;
    let r = renderer(40, 30, limit);
    for count in r.render() {
        assert!(count <= limit);
    }
}

#[test]
fn zero_width_is_rejected() {
    let r = Renderer::new(0, 10, Complex::new(-2.0, -1.5), Complex::new(1.0, 1.5), 100);
    assert_eq!(r.unwrap_err(), Error::InvalidParameters);
}

#[test]
fn zero_height_is_rejected() {
    let r = Renderer::new(10, 0, Complex::new(-2.0, -1.5), Complex::new(1.0, 1.5), 100);
    assert_eq!(r.unwrap_err(), Error::InvalidParameters);
}

#[test]
fn zero_iteration_limit_is_rejected() {
    let r = Renderer::new(10, 10, Complex::new(-2.0, -1.5), Complex::new(1.0, 1.5), 0);
    assert_eq!(r.unwrap_err(), Error::InvalidParameters);
}

#[test]
fn inverted_viewport_is_rejected() {
    let r = Renderer::new(10, 10, Complex::new(1.0, -1.0), Complex::new(0.0, 1.0), 100);
    assert_eq!(r.unwrap_err(), Error::InvalidViewport);
}

#[test]
fn a_pixel_on_c_equal_two_escapes_after_one_step() {
    // A 1x1 grid over [2, 6) x [0, 4) samples exactly c = 2 + 0i.  The
    // first step lands on |z|^2 = 4.0 (kept by the strict test), the
    // second escapes and is not counted.
    let r = Renderer::new(1, 1, Complex::new(2.0, 0.0), Complex::new(6.0, 4.0), 100).unwrap();
    assert_eq!(r.render(), vec![1]);
}

#[test]
fn the_origin_pixel_reports_the_full_limit() {
    // Pixel (2, 2) of a 4x4 grid over [-2, 2) x [-2, 2) samples
    // exactly c = 0 + 0i, whose orbit never moves.
    let limit = 123;
    let r = Renderer::new(4, 4, Complex::new(-2.0, -2.0), Complex::new(2.0, 2.0), limit).unwrap();
    let buffer = r.render();
    assert_eq!(buffer[2 * 4 + 2], limit);
}

#[test]
fn raising_the_limit_never_lowers_an_escaped_count() {
    let coarse = renderer(24, 18, 50).render();
    let fine = renderer(24, 18, 400).render();
    for (lo, hi) in coarse.iter().zip(fine.iter()) {
        if *lo < 50 {
            assert_eq!(lo, hi);
        } else {
            assert!(*hi >= 50);
        }
    }
}

#[test]
fn a_successful_render_overwrites_every_cell() {
    let limit = 60;
    let r = renderer(17, 11, limit);
    // The sentinel is outside [0, limit], so any survivor is a cell
    // the fill skipped.
    let mut buffer = vec![u32::max_value(); r.len()];
    r.render_into(&mut buffer).unwrap();
    assert!(buffer.iter().all(|&count| count <= limit));
}

#[test]
fn a_failed_render_writes_nothing() {
    let r = renderer(6, 6, 60);
    let mut buffer = vec![u32::max_value(); r.len() + 1];
    assert!(r.render_into(&mut buffer).is_err());
    assert!(buffer.iter().all(|&count| count == u32::max_value()));
}
