//! Interactive image session
//!
//! [`ImageSession`] owns the current image and the histogram shown next
//! to it. Every command validates before it mutates, so an `Err` leaves the
//! image, the histogram and the revision untouched.

use crate::command::Command;
use crate::error::{SessionError, SessionResult};
use histeq_color::GrayConversion;
use histeq_core::{GrayscaleCheck, Histogram, PixelBuffer};
use std::path::{Path, PathBuf};

/// Current image, its displayed histogram and a change counter.
#[derive(Debug, Clone)]
pub struct ImageSession {
    source: Option<PathBuf>,
    image: Option<PixelBuffer>,
    histogram: Histogram,
    revision: u64,
    check: GrayscaleCheck,
}

impl ImageSession {
    /// Create a session bound to `source` without loading it yet.
    pub fn new<P: AsRef<Path>>(source: P, check: GrayscaleCheck) -> Self {
        ImageSession {
            source: Some(source.as_ref().to_path_buf()),
            image: None,
            histogram: Histogram::new(),
            revision: 0,
            check,
        }
    }

    /// Create a session and load `source`.
    pub fn open<P: AsRef<Path>>(source: P, check: GrayscaleCheck) -> SessionResult<Self> {
        let mut session = Self::new(source, check);
        session.reload()?;
        Ok(session)
    }

    /// Create a session around an in-memory image. It cannot be reloaded.
    pub fn from_buffer(image: PixelBuffer, check: GrayscaleCheck) -> Self {
        ImageSession {
            source: None,
            image: Some(image),
            histogram: Histogram::new(),
            revision: 1,
            check,
        }
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Current image, if one has been loaded.
    pub fn image(&self) -> Option<&PixelBuffer> {
        self.image.as_ref()
    }

    /// Histogram from the last histogram or equalize command.
    pub fn histogram(&self) -> &Histogram {
        &self.histogram
    }

    /// Bumped whenever the image pixels change.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn grayscale_check(&self) -> GrayscaleCheck {
        self.check
    }

    pub fn set_grayscale_check(&mut self, check: GrayscaleCheck) {
        self.check = check;
    }

    /// Run one command.
    pub fn apply(&mut self, command: Command) -> SessionResult<()> {
        match command {
            Command::ConvertArithmetic => self.convert_to_gray(GrayConversion::ArithmeticMean),
            Command::ConvertWeighted => self.convert_to_gray(GrayConversion::WeightedLuma),
            Command::ShowHistogram => self.compute_histogram().map(|_| ()),
            Command::Equalize => self.equalize().map(|_| ()),
            Command::Reload => self.reload(),
        }
    }

    /// (Re)load the source image, replacing the current one.
    ///
    /// The displayed histogram is kept until the next histogram command.
    /// If loading fails the previous image stays in place.
    pub fn reload(&mut self) -> SessionResult<()> {
        let path = self.source.as_ref().ok_or(SessionError::NoSourcePath)?;
        let image = histeq_io::read_image(path)?;
        log::info!(
            "loaded {} ({}x{})",
            path.display(),
            image.width(),
            image.height()
        );
        self.image = Some(image);
        self.revision += 1;
        Ok(())
    }

    /// Convert the current image to gray in place.
    pub fn convert_to_gray(&mut self, conversion: GrayConversion) -> SessionResult<()> {
        let image = self.image.as_mut().ok_or(SessionError::NoImageLoaded)?;
        histeq_color::convert_to_gray(image, conversion);
        self.revision += 1;
        log::info!("converted to grayscale ({})", conversion);
        Ok(())
    }

    /// Rebuild the displayed histogram from the current image.
    pub fn compute_histogram(&mut self) -> SessionResult<&Histogram> {
        let image = self.image.as_ref().ok_or(SessionError::NoImageLoaded)?;
        self.histogram = image.gray_histogram(self.check)?;
        log::info!(
            "histogram of {} pixels, peak {}",
            self.histogram.total(),
            self.histogram.max_count()
        );
        Ok(&self.histogram)
    }

    /// Equalize the current image and display the resulting histogram.
    ///
    /// The histogram is always rebuilt from the image first, so a stale
    /// displayed histogram never feeds the remapping.
    pub fn equalize(&mut self) -> SessionResult<&Histogram> {
        let image = self.image.as_mut().ok_or(SessionError::NoImageLoaded)?;
        self.histogram = histeq_filter::equalize_histogram(image, self.check)?;
        self.revision += 1;
        log::info!("equalized image");
        Ok(&self.histogram)
    }
}
