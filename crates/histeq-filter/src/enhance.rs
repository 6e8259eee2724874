//! Histogram equalization
//!
//! Builds a 256-entry transfer table from the cumulative distribution of
//! a grayscale histogram and remaps every pixel through it in place.
//!
//! For intensity `v` the table holds
//!
//! ```text
//! mapped[v] = (L - 1) * cumsum[v] / total
//! ```
//!
//! with `L = 2^8` levels, rescaled so that its maximum is exactly 255.
//! Pixel values are truncated, not rounded.

use crate::{FilterError, FilterResult};
use histeq_core::{
    BITS_PER_CHANNEL, GrayscaleCheck, Histogram, INTENSITY_LEVELS, PixelBuffer, color,
};

/// Largest output intensity, `L - 1`.
const MAX_LEVEL: f64 = ((1u32 << BITS_PER_CHANNEL) - 1) as f64;

/// Transfer table mapping old intensity to new intensity.
///
/// Entries are kept as `f64`; [`EqualizationTable::get`] truncates.
#[derive(Debug, Clone, PartialEq)]
pub struct EqualizationTable {
    mapped: [f64; INTENSITY_LEVELS],
    max: f64,
}

impl EqualizationTable {
    /// Compute the table for a histogram describing `total` pixels.
    ///
    /// The cumulative sums and the running maximum are taken in one pass.
    /// When the maximum is not positive the rescale is skipped and the raw
    /// table is returned.
    ///
    /// # Errors
    ///
    /// - [`FilterError::HistogramMismatch`] if the histogram does not sum
    ///   to `total`.
    /// - [`histeq_core::Error::InvalidParameter`] if `total` is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use histeq_core::Histogram;
    /// use histeq_filter::EqualizationTable;
    ///
    /// let mut hist = Histogram::new();
    /// for _ in 0..3 {
    ///     hist.increment(0);
    /// }
    /// hist.increment(255);
    ///
    /// let table = EqualizationTable::from_histogram(&hist, 4).unwrap();
    /// assert_eq!(table.as_slice()[0], 191.25);
    /// assert_eq!(table.get(0), 191);
    /// assert_eq!(table.get(255), 255);
    /// ```
    pub fn from_histogram(histogram: &Histogram, total: u64) -> FilterResult<Self> {
        if total == 0 {
            return Err(histeq_core::Error::InvalidParameter(
                "equalization needs a non-zero pixel count".into(),
            )
            .into());
        }
        let histogram_total = histogram.total();
        if histogram_total != total {
            return Err(FilterError::HistogramMismatch {
                histogram_total,
                pixel_count: total,
            });
        }

        let mut mapped = [0.0f64; INTENSITY_LEVELS];
        let mut max = 0.0f64;
        let mut cumsum = 0u64;
        for (entry, &count) in mapped.iter_mut().zip(histogram.as_slice()) {
            cumsum += count as u64;
            *entry = MAX_LEVEL * cumsum as f64 / total as f64;
            if *entry > max {
                max = *entry;
            }
        }

        if max > 0.0 {
            for entry in mapped.iter_mut() {
                *entry = *entry * MAX_LEVEL / max;
            }
            max = MAX_LEVEL;
        }

        Ok(EqualizationTable { mapped, max })
    }

    /// New intensity for `level`, truncated.
    #[inline]
    pub fn get(&self, level: u8) -> u8 {
        self.mapped[level as usize] as u8
    }

    /// Largest entry of the table.
    pub fn max_value(&self) -> f64 {
        self.max
    }

    /// All 256 entries, before truncation.
    pub fn as_slice(&self) -> &[f64] {
        &self.mapped
    }
}

/// Equalize a grayscale buffer in place using a precomputed histogram.
///
/// Each pixel's intensity is read from its red channel, remapped through
/// the [`EqualizationTable`] and written back to R, G and B; alpha is kept.
/// The histogram of the result is counted in the same pass and returned.
///
/// # Errors
///
/// Checked in this order, before any pixel is touched:
///
/// - [`histeq_core::Error::DegenerateImage`] if the buffer has no pixels
/// - [`histeq_core::Error::GrayscaleRequired`] if a pixel fails `check`
/// - [`FilterError::HistogramMismatch`] if `histogram` does not sum to the
///   pixel count
pub fn equalize(
    buf: &mut PixelBuffer,
    histogram: &Histogram,
    check: GrayscaleCheck,
) -> FilterResult<Histogram> {
    buf.ensure_not_empty()?;
    if !buf.is_grayscale(check) {
        return Err(histeq_core::Error::GrayscaleRequired.into());
    }

    let table = EqualizationTable::from_histogram(histogram, buf.pixel_count() as u64)?;

    let mut equalized = Histogram::new();
    for pixel in buf.data_mut() {
        let (r, _, _, a) = color::extract_rgba(*pixel);
        let level = table.get(r);
        *pixel = color::compose_gray(level, a);
        equalized.increment(level);
    }

    log::debug!(
        "equalized {}x{} image, table max {}",
        buf.width(),
        buf.height(),
        table.max_value()
    );
    Ok(equalized)
}

/// Build the histogram of `buf` and equalize it in place.
///
/// Returns the post-equalization histogram. Fails like [`equalize`].
pub fn equalize_histogram(
    buf: &mut PixelBuffer,
    check: GrayscaleCheck,
) -> FilterResult<Histogram> {
    buf.ensure_not_empty()?;
    let histogram = buf.gray_histogram(check)?;
    equalize(buf, &histogram, check)
}
