//! Intensity histograms
//!
//! A [`Histogram`] counts how many pixels sit at each of the 256
//! intensity levels. It is always rebuilt from a full scan, never
//! updated incrementally.

use crate::INTENSITY_LEVELS;
use crate::color;
use crate::error::{Error, Result};
use crate::pixbuf::{GrayscaleCheck, PixelBuffer};

/// 256-bucket intensity histogram
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Histogram {
    counts: [u32; INTENSITY_LEVELS],
}

impl Default for Histogram {
    fn default() -> Self {
        Self::new()
    }
}

impl Histogram {
    /// Create an all-zero histogram.
    pub fn new() -> Self {
        Histogram {
            counts: [0; INTENSITY_LEVELS],
        }
    }

    /// Wrap a complete count array.
    pub fn from_counts(counts: [u32; INTENSITY_LEVELS]) -> Self {
        Histogram { counts }
    }

    /// Count at intensity `level`.
    #[inline]
    pub fn get(&self, level: u8) -> u32 {
        self.counts[level as usize]
    }

    /// Add one pixel at intensity `level`.
    #[inline]
    pub fn increment(&mut self, level: u8) {
        self.counts[level as usize] += 1;
    }

    /// All 256 counts, indexed by intensity.
    #[inline]
    pub fn as_slice(&self) -> &[u32] {
        &self.counts
    }

    /// Iterate over `(level, count)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (u8, u32)> + '_ {
        self.counts.iter().enumerate().map(|(i, &c)| (i as u8, c))
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.counts.iter().map(|&c| c as u64).sum()
    }

    /// Largest single bucket count.
    pub fn max_count(&self) -> u32 {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    /// True when every bucket is zero.
    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|&c| c == 0)
    }

    /// Cumulative sums: `result[i] = sum(self[0..=i])`.
    ///
    /// The last element equals [`Histogram::total`].
    ///
    /// ```
    /// use histeq_core::Histogram;
    ///
    /// let mut hist = Histogram::new();
    /// hist.increment(0);
    /// hist.increment(0);
    /// hist.increment(3);
    /// let sums = hist.partial_sums();
    /// assert_eq!(sums[0], 2);
    /// assert_eq!(sums[2], 2);
    /// assert_eq!(sums[255], 3);
    /// ```
    pub fn partial_sums(&self) -> [u64; INTENSITY_LEVELS] {
        let mut sums = [0u64; INTENSITY_LEVELS];
        let mut cumsum = 0u64;
        for (sum, &count) in sums.iter_mut().zip(self.counts.iter()) {
            cumsum += count as u64;
            *sum = cumsum;
        }
        sums
    }
}

impl PixelBuffer {
    /// Get the grayscale histogram of the image.
    ///
    /// Every pixel must pass `check`; since R == G == B on a gray pixel,
    /// the red channel is the one counted.
    ///
    /// # Errors
    ///
    /// Returns [`Error::GrayscaleRequired`] without scanning further if the
    /// image is not grayscale.
    ///
    /// # Example
    ///
    /// ```
    /// use histeq_core::{GrayscaleCheck, PixelBuffer, color};
    ///
    /// let buf = PixelBuffer::filled(10, 10, color::compose_gray(40, 255));
    /// let hist = buf.gray_histogram(GrayscaleCheck::Strict).unwrap();
    /// assert_eq!(hist.get(40), 100);
    /// ```
    pub fn gray_histogram(&self, check: GrayscaleCheck) -> Result<Histogram> {
        if !self.is_grayscale(check) {
            return Err(Error::GrayscaleRequired);
        }
        Ok(self.red_histogram())
    }

    /// Histogram of the red channel, without any grayscale validation.
    pub fn red_histogram(&self) -> Histogram {
        let mut histogram = Histogram::new();
        for &pixel in self.data() {
            histogram.increment(color::red(pixel));
        }
        log::debug!(
            "histogram of {}x{} image, peak count {}",
            self.width(),
            self.height(),
            histogram.max_count()
        );
        histogram
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{compose_gray, compose_rgb};

    fn two_by_two() -> PixelBuffer {
        let black = compose_gray(0, 255);
        let white = compose_gray(255, 255);
        PixelBuffer::from_data(2, 2, vec![black, black, black, white]).unwrap()
    }

    #[test]
    fn test_black_and_white() {
        let hist = two_by_two().gray_histogram(GrayscaleCheck::Strict).unwrap();
        assert_eq!(hist.get(0), 3);
        assert_eq!(hist.get(255), 1);
        assert_eq!(hist.total(), 4);
        assert_eq!((1..=254).map(|l| hist.get(l)).sum::<u32>(), 0);
    }

    #[test]
    fn test_rejects_color() {
        let mut buf = two_by_two();
        buf.set_pixel(0, 0, compose_rgb(1, 2, 2)).unwrap();
        assert!(matches!(
            buf.gray_histogram(GrayscaleCheck::Strict),
            Err(Error::GrayscaleRequired)
        ));
        // the lenient check lets (1, 2, 2) through and counts its red value
        let hist = buf.gray_histogram(GrayscaleCheck::Lenient).unwrap();
        assert_eq!(hist.get(1), 1);
    }

    #[test]
    fn test_empty_buffer() {
        let hist = PixelBuffer::new(0, 3)
            .gray_histogram(GrayscaleCheck::Strict)
            .unwrap();
        assert!(hist.is_empty());
        assert_eq!(hist.total(), 0);
    }

    #[test]
    fn test_partial_sums_monotonic() {
        let mut hist = Histogram::new();
        for level in [5u8, 5, 9, 200, 255] {
            hist.increment(level);
        }
        let sums = hist.partial_sums();
        assert!(sums.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(sums[4], 0);
        assert_eq!(sums[5], 2);
        assert_eq!(sums[255], hist.total());
    }

    #[test]
    fn test_max_count_and_iter() {
        let mut hist = Histogram::new();
        hist.increment(7);
        hist.increment(7);
        hist.increment(8);
        assert_eq!(hist.max_count(), 2);
        let nonzero: Vec<_> = hist.iter().filter(|&(_, c)| c > 0).collect();
        assert_eq!(nonzero, vec![(7, 2), (8, 1)]);
    }
}
