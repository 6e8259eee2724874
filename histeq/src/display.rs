//! Frame rendering
//!
//! Composes what a window would show: the current image at the top-left
//! corner and, to its right, one vertical bar per intensity level rising
//! from the bottom edge of the frame.

use crate::config::DisplayConfig;
use crate::session::ImageSession;
use histeq_core::PixelBuffer;

/// Width and height of the frame for an image of `image_w x image_h`.
pub fn frame_size(image_w: u32, image_h: u32, config: &DisplayConfig) -> (u32, u32) {
    let w = image_w
        .max(config.min_width)
        .saturating_add(config.histogram_panel_width);
    let h = image_h.max(config.min_height);
    (w, h)
}

/// Height in pixels of the bar for a bucket holding `count` pixels.
#[inline]
pub fn bar_height(count: u32, config: &DisplayConfig) -> u32 {
    (count as f64 / config.bar_divisor) as u32
}

/// Render the session's image and histogram into a new frame.
///
/// Without an image the frame is just background plus the (possibly
/// empty) histogram, drawn from `x = 1`.
pub fn render_frame(session: &ImageSession, config: &DisplayConfig) -> PixelBuffer {
    let (image_w, image_h) = session
        .image()
        .map_or((0, 0), |image| (image.width(), image.height()));
    let (w, h) = frame_size(image_w, image_h, config);

    let mut frame = PixelBuffer::new(w, h);
    frame.fill(config.background());
    if let Some(image) = session.image() {
        frame.paste(image, 0, 0);
    }

    let bar_color = config.bar_color();
    let x0 = image_w as i64 + 1;
    for (level, count) in session.histogram().iter() {
        let height = bar_height(count, config);
        if height > 0 {
            frame.render_bar_from_bottom(x0 + level as i64, height, bar_color);
        }
    }

    log::debug!(
        "rendered {}x{} frame at revision {}",
        w,
        h,
        session.revision()
    );
    frame
}

#[cfg(test)]
mod tests {
    use super::*;
    use histeq_core::{Color, GrayscaleCheck, color};

    #[test]
    fn test_frame_size() {
        let config = DisplayConfig::default();
        assert_eq!(frame_size(0, 0, &config), (898, 480));
        assert_eq!(frame_size(768, 512, &config), (1026, 512));
        assert_eq!(frame_size(100, 700, &config), (898, 700));
        assert_eq!(frame_size(u32::MAX - 10, 1, &config), (u32::MAX, 480));
    }

    #[test]
    fn test_bar_height_truncates() {
        let config = DisplayConfig::default();
        assert_eq!(bar_height(16, &config), 0);
        assert_eq!(bar_height(17, &config), 1);
        assert_eq!(bar_height(170, &config), 10);
    }

    #[test]
    fn test_empty_session_is_background() {
        let session = ImageSession::new("unused.png", GrayscaleCheck::Strict);
        let config = DisplayConfig::default();
        let frame = render_frame(&session, &config);
        let bg = Color::new(125, 125, 125).to_pixel32();
        assert!(frame.data().iter().all(|&p| p == bg));
    }

    #[test]
    fn test_image_and_bars() {
        let image = PixelBuffer::filled(4, 3, color::compose_gray(40, 255));
        let mut session = ImageSession::from_buffer(image, GrayscaleCheck::Strict);
        session.compute_histogram().unwrap();
        let config = DisplayConfig {
            min_width: 4,
            min_height: 8,
            histogram_panel_width: 258,
            bar_divisor: 2.0,
            ..DisplayConfig::default()
        };
        let frame = render_frame(&session, &config);
        assert_eq!((frame.width(), frame.height()), (262, 8));
        assert_eq!(frame.get_pixel(3, 2), Some(color::compose_gray(40, 255)));

        // 12 pixels at level 40 -> 6 pixel bar at x = 4 + 1 + 40
        let green = Color::GREEN.to_pixel32();
        let bar: Vec<_> = (0..8).map(|y| frame.get_pixel(45, y) == Some(green)).collect();
        assert_eq!(bar, [false, false, true, true, true, true, true, true]);
        assert_ne!(frame.get_pixel(44, 7), Some(green));
    }
}
