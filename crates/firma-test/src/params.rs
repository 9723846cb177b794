//! Regression test parameters and operations

use crate::error::{TestError, TestResult};
use crate::regout_dir;
use serde::Serialize;
use std::fs;

/// Regression test mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegTestMode {
    /// Check values only (default)
    #[default]
    Compare,
    /// Also dump intermediate records to the regout directory
    Display,
}

impl RegTestMode {
    /// Parse mode from the `REGTEST_MODE` environment variable
    pub fn from_env() -> Self {
        match std::env::var("REGTEST_MODE")
            .unwrap_or_default()
            .to_lowercase()
            .as_str()
        {
            "display" => Self::Display,
            _ => Self::Compare,
        }
    }
}

/// Regression test parameters
///
/// Tracks the test name, the running comparison index, the mode and every
/// recorded failure. Comparisons never panic; call [`RegParams::cleanup`]
/// at the end of the test and assert on its result.
pub struct RegParams {
    /// Name of the test (e.g., "stroke")
    pub test_name: String,
    /// Current test index (incremented before each comparison)
    index: usize,
    /// Test mode
    pub mode: RegTestMode,
    /// Overall success status
    success: bool,
    /// Recorded failures
    failures: Vec<String>,
}

impl RegParams {
    /// Create new regression test parameters
    ///
    /// # Arguments
    ///
    /// * `test_name` - Name of the test (e.g., "stroke")
    pub fn new(test_name: &str) -> Self {
        let mode = RegTestMode::from_env();

        if mode == RegTestMode::Display {
            let _ = fs::create_dir_all(regout_dir());
        }

        eprintln!();
        eprintln!("////////////////////////////////////////////////");
        eprintln!("////////////////   {}_reg   ///////////////", test_name);
        eprintln!("////////////////////////////////////////////////");
        eprintln!("Mode: {:?}", mode);

        Self {
            test_name: test_name.to_string(),
            index: 0,
            mode,
            success: true,
            failures: Vec::new(),
        }
    }

    /// Get the current test index
    pub fn index(&self) -> usize {
        self.index
    }

    /// Check if in display mode
    pub fn display(&self) -> bool {
        self.mode == RegTestMode::Display
    }

    /// Compare two floating-point values
    ///
    /// # Arguments
    ///
    /// * `expected` - Expected value
    /// * `actual` - Actual computed value
    /// * `delta` - Maximum allowed difference
    ///
    /// # Returns
    ///
    /// `true` if values match within delta, `false` otherwise. A NaN
    /// `actual` never matches.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        self.index += 1;
        let diff = (expected - actual).abs();

        if diff.is_nan() || diff > delta {
            let msg = format!(
                "Failure in {}_reg: value comparison for index {}\n\
                 difference = {} but allowed delta = {}\n\
                 expected = {}, actual = {}",
                self.test_name, self.index, diff, delta, expected, actual
            );
            self.fail(msg);
            false
        } else {
            true
        }
    }

    /// Check that `value` lies in the closed interval `[lo, hi]`
    pub fn compare_range(&mut self, lo: f64, hi: f64, value: f64) -> bool {
        self.index += 1;
        if !(lo..=hi).contains(&value) {
            let msg = format!(
                "Failure in {}_reg: range check for index {}\n\
                 {} not in [{}, {}]",
                self.test_name, self.index, value, lo, hi
            );
            self.fail(msg);
            false
        } else {
            true
        }
    }

    /// Record a boolean condition
    ///
    /// # Arguments
    ///
    /// * `what` - Short description used in the failure message
    /// * `ok` - Condition that must hold
    pub fn check(&mut self, what: &str, ok: bool) -> bool {
        self.index += 1;
        if !ok {
            let msg = format!(
                "Failure in {}_reg: check for index {} failed: {}",
                self.test_name, self.index, what
            );
            self.fail(msg);
        }
        ok
    }

    /// Write a serializable record as pretty JSON in display mode
    ///
    /// The file is `<regout>/<test>.<index>.<name>.json`. In compare mode
    /// this only serializes the value, so serialization failures surface
    /// in both modes.
    pub fn write_json<T: Serialize>(&mut self, name: &str, value: &T) -> TestResult<()> {
        self.index += 1;
        let json = serde_json::to_string_pretty(value).map_err(|e| TestError::Serialize {
            name: name.to_string(),
            message: e.to_string(),
        })?;

        if self.display() {
            let path = format!(
                "{}/{}.{:02}.{}.json",
                regout_dir(),
                self.test_name,
                self.index,
                name
            );
            fs::write(&path, json)?;
            eprintln!("Wrote: {}", path);
        }
        Ok(())
    }

    fn fail(&mut self, msg: String) {
        eprintln!("{}", msg);
        self.failures.push(msg);
        self.success = false;
    }

    /// Clean up and report results
    ///
    /// # Returns
    ///
    /// `true` if all comparisons passed, `false` if any failed.
    pub fn cleanup(self) -> bool {
        if self.success {
            eprintln!("SUCCESS: {}_reg", self.test_name);
        } else {
            eprintln!("FAILURE: {}_reg", self.test_name);
            for failure in &self.failures {
                eprintln!("  {}", failure);
            }
        }
        eprintln!();

        self.success
    }

    /// Check if all comparisons have passed so far
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Get list of failures
    pub fn failures(&self) -> &[String] {
        &self.failures
    }
}
