//! Grayscale conversion regression test
//!
//! Sweeps the RGB cube on a coarse grid and checks both reductions
//! against their defining formulas, then checks that the mean reduction
//! leaves gray images unchanged.

use histeq_color::{GrayConversion, convert_to_gray};
use histeq_core::{GrayscaleCheck, PixelBuffer, color};
use histeq_test::RegParams;

const STEP: usize = 5;

/// One pixel per grid point of the RGB cube, with varying alpha.
fn make_cube() -> PixelBuffer {
    let mut pixels = Vec::new();
    for r in (0..=255).step_by(STEP) {
        for g in (0..=255).step_by(STEP) {
            for b in (0..=255).step_by(STEP) {
                let a = ((r + b) % 256) as u8;
                pixels.push(color::compose_rgba(r as u8, g as u8, b as u8, a));
            }
        }
    }
    let n = pixels.len() as u32;
    PixelBuffer::from_data(n, 1, pixels).unwrap()
}

#[test]
fn grayscale_reg_arithmetic_mean() {
    let mut rp = RegParams::new("grayscale_mean");

    let original = make_cube();
    let mut buf = original.clone();
    convert_to_gray(&mut buf, GrayConversion::ArithmeticMean);

    rp.compare_values(1.0, buf.is_grayscale(GrayscaleCheck::Strict) as u8 as f64, 0.0);
    let mut mismatches = 0;
    for (&before, &after) in original.data().iter().zip(buf.data()) {
        let (r, g, b, a) = color::extract_rgba(before);
        let expected = (r as u32 + g as u32 + b as u32) / 3;
        let (nr, _, _, na) = color::extract_rgba(after);
        if nr as u32 != expected || na != a {
            mismatches += 1;
        }
    }
    rp.compare_values(0.0, mismatches as f64, 0.0);

    assert!(rp.cleanup(), "grayscale_mean regression test failed");
}

#[test]
fn grayscale_reg_weighted_luma() {
    let mut rp = RegParams::new("grayscale_luma");

    let original = make_cube();
    let mut buf = original.clone();
    convert_to_gray(&mut buf, GrayConversion::WeightedLuma);

    rp.compare_values(1.0, buf.is_grayscale(GrayscaleCheck::Strict) as u8 as f64, 0.0);
    let mut mismatches = 0;
    for (&before, &after) in original.data().iter().zip(buf.data()) {
        let (r, g, b, a) = color::extract_rgba(before);
        let luma = 0.2126 * r as f64 + 0.7152 * g as f64 + 0.0722 * b as f64;
        let (nr, _, _, na) = color::extract_rgba(after);
        // truncation, never rounding up
        if nr as f64 > luma || luma - (nr as f64) >= 1.0 || na != a {
            mismatches += 1;
        }
    }
    rp.compare_values(0.0, mismatches as f64, 0.0);

    assert!(rp.cleanup(), "grayscale_luma regression test failed");
}

#[test]
fn grayscale_reg_mean_is_noop_on_gray() {
    let mut rp = RegParams::new("grayscale_noop");

    let pixels = (0..=255u32)
        .map(|v| color::compose_gray(v as u8, (255 - v) as u8))
        .collect();
    let gray = PixelBuffer::from_data(16, 16, pixels).unwrap();
    let mut buf = gray.clone();
    convert_to_gray(&mut buf, GrayConversion::ArithmeticMean);
    rp.compare_buffers(&gray, &buf);

    // the mean of a luma-converted image is the image itself
    let mut twice = make_cube();
    convert_to_gray(&mut twice, GrayConversion::WeightedLuma);
    let once = twice.clone();
    convert_to_gray(&mut twice, GrayConversion::ArithmeticMean);
    rp.compare_buffers(&once, &twice);

    assert!(rp.cleanup(), "grayscale_noop regression test failed");
}
