//! Regression test state
//!
//! A [`RegParams`] numbers every check it performs, records the failures
//! and prints a summary in [`RegParams::cleanup`]. Checks never panic; the
//! test asserts on the value `cleanup` returns.

use crate::error::{TestError, TestResult};
use crate::{golden_dir, regout_dir};
use histeq_core::{Histogram, PixelBuffer};
use histeq_io::ImageFormat;
use std::fs;
use std::path::Path;

/// What to do with output images
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegTestMode {
    /// Copy outputs to the golden directory
    Generate,
    /// Check outputs against existing golden files
    #[default]
    Compare,
    /// Write outputs only, for looking at them
    Display,
}

impl RegTestMode {
    /// Read `REGTEST_MODE`; anything other than `generate` or `display`
    /// means [`RegTestMode::Compare`].
    pub fn from_env() -> Self {
        let value = std::env::var("REGTEST_MODE").unwrap_or_default();
        match value.to_ascii_lowercase().as_str() {
            "generate" => Self::Generate,
            "display" => Self::Display,
            _ => Self::Compare,
        }
    }
}

/// Regression test parameters
pub struct RegParams {
    pub test_name: String,
    pub mode: RegTestMode,
    index: usize,
    failures: Vec<String>,
}

impl RegParams {
    pub fn new(test_name: &str) -> Self {
        let mode = RegTestMode::from_env();
        for dir in [golden_dir(), regout_dir()] {
            if let Err(e) = fs::create_dir_all(&dir) {
                eprintln!("cannot create {}: {}", dir, e);
            }
        }
        eprintln!("\n==== {}_reg ({:?}) ====", test_name, mode);

        RegParams {
            test_name: test_name.to_string(),
            mode,
            index: 0,
            failures: Vec::new(),
        }
    }

    /// Number of checks performed so far.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Start the next numbered check.
    fn next(&mut self) -> usize {
        self.index += 1;
        self.index
    }

    fn fail(&mut self, what: &str, detail: String) -> bool {
        let msg = format!(
            "{}_reg check {} ({}): {}",
            self.test_name, self.index, what, detail
        );
        eprintln!("FAILED {}", msg);
        self.failures.push(msg);
        false
    }

    /// Check that `actual` is within `delta` of `expected`.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        self.next();
        let diff = (expected - actual).abs();
        if diff > delta {
            return self.fail(
                "value",
                format!(
                    "expected {}, got {} (diff {} > {})",
                    expected, actual, diff, delta
                ),
            );
        }
        true
    }

    /// Check that two buffers have the same size and identical pixels.
    pub fn compare_buffers(&mut self, expected: &PixelBuffer, actual: &PixelBuffer) -> bool {
        self.next();
        if !expected.sizes_equal(actual) {
            return self.fail(
                "buffer",
                format!(
                    "size {}x{}, got {}x{}",
                    expected.width(),
                    expected.height(),
                    actual.width(),
                    actual.height()
                ),
            );
        }

        let first_diff = expected
            .data()
            .iter()
            .zip(actual.data())
            .position(|(e, a)| e != a);
        match first_diff {
            Some(i) => {
                let w = expected.width().max(1) as usize;
                let (x, y) = (i % w, i / w);
                self.fail(
                    "buffer",
                    format!(
                        "pixel ({}, {}) is {:08x}, expected {:08x}",
                        x,
                        y,
                        actual.data()[i],
                        expected.data()[i]
                    ),
                )
            }
            None => true,
        }
    }

    /// Check that two histograms agree in every bucket.
    pub fn compare_histograms(&mut self, expected: &Histogram, actual: &Histogram) -> bool {
        self.next();
        let first_diff = expected
            .iter()
            .zip(actual.iter())
            .find(|((_, e), (_, a))| e != a);
        match first_diff {
            Some(((level, e), (_, a))) => self.fail(
                "histogram",
                format!("level {} counts {}, expected {}", level, a, e),
            ),
            None => true,
        }
    }

    /// Write `buf` to the output directory and, depending on the mode,
    /// store it as or compare it with the golden file of this check.
    ///
    /// In compare mode a missing golden file is reported but does not
    /// fail the test; run once with `REGTEST_MODE=generate` to create it.
    pub fn write_buffer_and_check(
        &mut self,
        buf: &PixelBuffer,
        format: ImageFormat,
    ) -> TestResult<()> {
        let index = self.next();
        let ext = format.extension();
        let output = format!("{}/{}.{:02}.{}", regout_dir(), self.test_name, index, ext);
        let golden = format!(
            "{}/{}_golden.{:02}.{}",
            golden_dir(),
            self.test_name,
            index,
            ext
        );

        histeq_io::write_image(buf, &output, format).map_err(|source| TestError::Write {
            path: output.clone(),
            source,
        })?;

        match self.mode {
            RegTestMode::Generate => {
                fs::copy(&output, &golden).map_err(|source| TestError::Golden {
                    path: golden.clone(),
                    source,
                })?;
                eprintln!("generated {}", golden);
            }
            RegTestMode::Compare if !Path::new(&golden).exists() => {
                eprintln!("no golden file {}, skipped", golden);
            }
            RegTestMode::Compare => {
                if !same_image(&output, &golden) {
                    self.fail("file", format!("{} differs from {}", output, golden));
                }
            }
            RegTestMode::Display => eprintln!("wrote {}", output),
        }
        Ok(())
    }

    /// Print the summary and return `true` if every check passed.
    pub fn cleanup(self) -> bool {
        let passed = self.failures.is_empty();
        if passed {
            eprintln!("{}_reg: {} checks passed", self.test_name, self.index);
        } else {
            eprintln!(
                "{}_reg: {} of {} checks failed",
                self.test_name,
                self.failures.len(),
                self.index
            );
            for failure in &self.failures {
                eprintln!("  {}", failure);
            }
        }
        passed
    }

    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn failures(&self) -> &[String] {
        &self.failures
    }
}

/// Identical bytes, or failing that identical decoded pixels.
fn same_image(path1: &str, path2: &str) -> bool {
    match (fs::read(path1), fs::read(path2)) {
        (Ok(a), Ok(b)) if a == b => true,
        (Ok(_), Ok(_)) => matches!(
            (histeq_io::read_image(path1), histeq_io::read_image(path2)),
            (Ok(a), Ok(b)) if a == b
        ),
        _ => false,
    }
}
