//! firma-test - Regression test framework for firma
//!
//! Provides [`RegParams`], which accumulates value comparisons and reports
//! all failures at the end of a test, and the [`synth`] builders for
//! deterministic synthetic signature images. Two modes:
//!
//! - **Compare**: check values only (default)
//! - **Display**: additionally dump parameter records as JSON under
//!   `tests/regout/` for manual inspection
//!
//! # Usage
//!
//! ```ignore
//! use firma_test::RegParams;
//!
//! let mut rp = RegParams::new("stroke");
//! rp.compare_values(1.0, params.stroke_width.mean_mm, 0.2);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "compare" or "display"

mod error;
mod params;
pub mod synth;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

/// Get the path to the workspace root
fn workspace_root() -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    // firma-test is at crates/firma-test, so go up two directories
    format!("{}/../..", manifest_dir)
}

/// Get the path to the regout (regression output) directory
pub fn regout_dir() -> String {
    format!("{}/tests/regout", workspace_root())
}
