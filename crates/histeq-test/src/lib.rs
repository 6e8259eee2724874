//! histeq-test - Regression test helpers
//!
//! Integration tests named `tests/*_reg.rs` create a [`RegParams`], run
//! numbered checks through it and finish with
//! `assert!(rp.cleanup())`. Images written by a check go to
//! `tests/regout/` at the workspace root; golden copies live in
//! `tests/golden/`.
//!
//! `REGTEST_MODE` selects what happens to written images:
//!
//! | Value      | Effect                                   |
//! |------------|------------------------------------------|
//! | `compare`  | compare with the golden file (default)   |
//! | `generate` | copy the output over the golden file     |
//! | `display`  | write the output and nothing else        |
//!
//! ```ignore
//! use histeq_test::RegParams;
//!
//! let mut rp = RegParams::new("equalize");
//! rp.compare_values(191.0, level as f64, 0.0);
//! assert!(rp.cleanup());
//! ```

mod error;
mod params;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

/// Workspace root, two levels above this crate's manifest.
fn workspace_root() -> String {
    format!("{}/../..", env!("CARGO_MANIFEST_DIR"))
}

/// Directory holding golden images.
pub fn golden_dir() -> String {
    format!("{}/tests/golden", workspace_root())
}

/// Directory regression outputs are written to.
pub fn regout_dir() -> String {
    format!("{}/tests/regout", workspace_root())
}
