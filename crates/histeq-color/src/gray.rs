//! In-place grayscale conversion

use crate::ColorError;
use histeq_core::{PixelBuffer, color};
use std::fmt;
use std::str::FromStr;

/// Red weight of the luma reduction
pub const R_LUMA_WEIGHT: f64 = 0.2126;
/// Green weight of the luma reduction
pub const G_LUMA_WEIGHT: f64 = 0.7152;
/// Blue weight of the luma reduction
pub const B_LUMA_WEIGHT: f64 = 0.0722;

/// Formula used to reduce R, G, B to one intensity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GrayConversion {
    /// `(r + g + b) / 3` with truncating integer division
    ArithmeticMean,
    /// `trunc(0.2126 r + 0.7152 g + 0.0722 b)`
    WeightedLuma,
}

impl GrayConversion {
    /// Short name, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Self::ArithmeticMean => "arithmetic",
            Self::WeightedLuma => "weighted",
        }
    }
}

impl fmt::Display for GrayConversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GrayConversion {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "arithmetic" | "mean" | "average" => Ok(Self::ArithmeticMean),
            "weighted" | "luma" => Ok(Self::WeightedLuma),
            other => Err(ColorError::UnknownConversion(other.to_string())),
        }
    }
}

/// Gray intensity of one RGB triple under `conversion`.
///
/// The luma sum is computed in `f64` and truncated, so pure white maps
/// to 254 rather than 255.
///
/// ```
/// use histeq_color::{GrayConversion, gray_value};
///
/// assert_eq!(gray_value(GrayConversion::ArithmeticMean, 1, 1, 2), 1);
/// assert_eq!(gray_value(GrayConversion::WeightedLuma, 200, 50, 10), 79);
/// ```
#[inline]
pub fn gray_value(conversion: GrayConversion, r: u8, g: u8, b: u8) -> u8 {
    match conversion {
        GrayConversion::ArithmeticMean => ((r as u32 + g as u32 + b as u32) / 3) as u8,
        GrayConversion::WeightedLuma => {
            (r as f64 * R_LUMA_WEIGHT + g as f64 * G_LUMA_WEIGHT + b as f64 * B_LUMA_WEIGHT) as u8
        }
    }
}

/// Convert every pixel of `buf` to gray in place, keeping alpha.
///
/// An empty buffer is left untouched.
pub fn convert_to_gray(buf: &mut PixelBuffer, conversion: GrayConversion) {
    for pixel in buf.data_mut() {
        let (r, g, b, a) = color::extract_rgba(*pixel);
        *pixel = color::compose_gray(gray_value(conversion, r, g, b), a);
    }
    log::debug!(
        "converted {}x{} image to gray ({})",
        buf.width(),
        buf.height(),
        conversion
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use histeq_core::GrayscaleCheck;

    #[test]
    fn test_mean_truncates() {
        // 2/3 rounds down
        assert_eq!(gray_value(GrayConversion::ArithmeticMean, 0, 1, 1), 0);
        assert_eq!(gray_value(GrayConversion::ArithmeticMean, 255, 255, 254), 254);
        assert_eq!(gray_value(GrayConversion::ArithmeticMean, 255, 255, 255), 255);
    }

    #[test]
    fn test_luma_truncates() {
        assert_eq!(gray_value(GrayConversion::WeightedLuma, 0, 0, 0), 0);
        assert_eq!(gray_value(GrayConversion::WeightedLuma, 100, 100, 100), 100);
        // 254.99999999999997 truncates to 254
        assert_eq!(gray_value(GrayConversion::WeightedLuma, 255, 255, 255), 254);
        assert_eq!(gray_value(GrayConversion::WeightedLuma, 0, 255, 0), 182);
    }

    #[test]
    fn test_convert_keeps_alpha() {
        let mut buf = PixelBuffer::filled(3, 2, color::compose_rgba(30, 60, 90, 17));
        convert_to_gray(&mut buf, GrayConversion::ArithmeticMean);
        assert!(buf.is_grayscale(GrayscaleCheck::Strict));
        assert_eq!(buf.get_rgba(2, 1), Some((60, 60, 60, 17)));
    }

    #[test]
    fn test_convert_empty() {
        let mut buf = PixelBuffer::new(0, 0);
        convert_to_gray(&mut buf, GrayConversion::WeightedLuma);
        assert!(buf.is_empty());
    }

    #[test]
    fn test_from_str() {
        assert_eq!(
            "Arithmetic".parse::<GrayConversion>().unwrap(),
            GrayConversion::ArithmeticMean
        );
        assert_eq!(
            "luma".parse::<GrayConversion>().unwrap(),
            GrayConversion::WeightedLuma
        );
        assert!(matches!(
            "sepia".parse::<GrayConversion>(),
            Err(ColorError::UnknownConversion(_))
        ));
        assert_eq!(GrayConversion::WeightedLuma.to_string(), "weighted");
    }
}
