//! Histogram and grayscale validation regression test
//!
//! Run with:
//! ```
//! cargo test -p histeq-core --test histogram_reg
//! ```

use histeq_core::{Color, Error, GrayscaleCheck, PixelBuffer, color};
use histeq_test::RegParams;

/// Gray image whose level at (x, y) is `(x * 7 + y * 13) % 256`.
fn make_pattern(w: u32, h: u32) -> PixelBuffer {
    let mut buf = PixelBuffer::new(w, h);
    for y in 0..h {
        for x in 0..w {
            let v = ((x * 7 + y * 13) % 256) as u8;
            buf.set_pixel_unchecked(x, y, color::compose_gray(v, 255));
        }
    }
    buf
}

#[test]
fn histogram_reg_sums() {
    let mut rp = RegParams::new("histogram_sums");

    for (w, h) in [(1, 1), (2, 2), (17, 3), (64, 48), (300, 1)] {
        let buf = make_pattern(w, h);
        let hist = buf.gray_histogram(GrayscaleCheck::Strict).unwrap();
        rp.compare_values((w * h) as f64, hist.total() as f64, 0.0);
        rp.compare_values(hist.total() as f64, hist.partial_sums()[255] as f64, 0.0);
    }

    let mut buf = PixelBuffer::filled(2, 2, color::compose_gray(0, 255));
    buf.set_pixel(1, 1, color::compose_gray(255, 255)).unwrap();
    let hist = buf.gray_histogram(GrayscaleCheck::Strict).unwrap();
    rp.compare_values(3.0, hist.get(0) as f64, 0.0);
    rp.compare_values(1.0, hist.get(255) as f64, 0.0);
    rp.compare_values(3.0, hist.max_count() as f64, 0.0);

    assert!(rp.cleanup(), "histogram_sums regression test failed");
}

#[test]
fn histogram_reg_grayscale_checks() {
    let mut rp = RegParams::new("histogram_checks");

    // one off-gray pixel anywhere is enough to reject the image
    let base = make_pattern(8, 8);
    let mut rejected = 0;
    for (r, g, b) in [(1, 0, 0), (0, 1, 0), (0, 0, 1), (10, 20, 20), (20, 20, 10)] {
        let mut buf = base.clone();
        buf.set_rgba(5, 6, r, g, b, 255).unwrap();
        if matches!(
            buf.gray_histogram(GrayscaleCheck::Strict),
            Err(Error::GrayscaleRequired)
        ) {
            rejected += 1;
        }
    }
    rp.compare_values(5.0, rejected as f64, 0.0);

    // lenient accepts a pixel when either pair of neighbors matches
    let mut buf = base.clone();
    buf.set_rgba(0, 0, 10, 20, 20, 255).unwrap();
    rp.compare_values(1.0, buf.is_grayscale(GrayscaleCheck::Lenient) as u8 as f64, 0.0);
    buf.set_rgba(0, 0, 10, 20, 30, 255).unwrap();
    rp.compare_values(0.0, buf.is_grayscale(GrayscaleCheck::Lenient) as u8 as f64, 0.0);

    // translucent gray is still gray
    let buf = PixelBuffer::filled(3, 3, color::compose_gray(90, 0));
    rp.compare_values(1.0, buf.is_grayscale(GrayscaleCheck::Strict) as u8 as f64, 0.0);

    assert!(rp.cleanup(), "histogram_checks regression test failed");
}

#[test]
fn histogram_reg_bars() {
    let mut rp = RegParams::new("histogram_bars");

    let mut frame = PixelBuffer::new(6, 10);
    frame.fill(Color::new(125, 125, 125));
    frame.render_bar_from_bottom(2, 4, Color::GREEN);
    frame.render_bar_from_bottom(3, 40, Color::GREEN);
    frame.render_bar_from_bottom(4, 0, Color::GREEN);

    let green = Color::GREEN.to_pixel32();
    let gray = Color::new(125, 125, 125).to_pixel32();
    let column = |x: u32| (0..10).filter(|&y| frame.get_pixel(x, y) == Some(green)).count();
    rp.compare_values(4.0, column(2) as f64, 0.0);
    rp.compare_values(10.0, column(3) as f64, 0.0);
    rp.compare_values(0.0, column(4) as f64, 0.0);
    rp.compare_values(gray as f64, frame.get_pixel(2, 5).unwrap_or(0) as f64, 0.0);
    rp.compare_values(green as f64, frame.get_pixel(2, 6).unwrap_or(0) as f64, 0.0);

    assert!(rp.cleanup(), "histogram_bars regression test failed");
}
