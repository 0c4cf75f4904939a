//! Configuration for the entry sequence.
//!
//! [`SequenceConfig`] holds the bounds of the two loops and the index passed
//! to `fibonacci`. Its [`Default`] is the fixed program the binary runs; the
//! other values exist so the sequence can be exercised with different bounds.

use crate::ProgramError;

/// Largest `fibonacci` index whose value fits in an `i32`.
///
/// `fibonacci(45) = 1_836_311_903`; `fibonacci(46)` would exceed `i32::MAX`.
pub const MAX_FIBONACCI_INPUT: u32 = 45;

/// Largest `n` for which `1 + 2 + ... + n` fits in an `i32`.
pub const MAX_SUM_UPPER_BOUND: i32 = 65_535;

/// Bounds used by the entry sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceConfig {
    /// Number of `progress` lines printed by the first loop.
    pub progress_iterations: u32,

    /// Inclusive upper bound of the accumulating sum `1..=n`.
    pub sum_upper_bound: i32,

    /// Index passed to `fibonacci` in the final step.
    pub fibonacci_input: u32,
}

impl Default for SequenceConfig {
    fn default() -> Self {
        Self {
            progress_iterations: defaults::progress_iterations(),
            sum_upper_bound: defaults::sum_upper_bound(),
            fibonacci_input: defaults::fibonacci_input(),
        }
    }
}

impl SequenceConfig {
    /// Set the number of `progress` lines.
    #[must_use]
    pub fn with_progress_iterations(mut self, iterations: u32) -> Self {
        self.progress_iterations = iterations;
        self
    }

    /// Set the inclusive upper bound of the accumulating sum.
    #[must_use]
    pub fn with_sum_upper_bound(mut self, bound: i32) -> Self {
        self.sum_upper_bound = bound;
        self
    }

    /// Set the index passed to `fibonacci`.
    #[must_use]
    pub fn with_fibonacci_input(mut self, n: u32) -> Self {
        self.fibonacci_input = n;
        self
    }

    /// Check that every computed value stays within `i32`.
    ///
    /// # Errors
    ///
    /// Returns [`ProgramError::InvalidConfig`] if `sum_upper_bound` exceeds
    /// [`MAX_SUM_UPPER_BOUND`] or `fibonacci_input` exceeds
    /// [`MAX_FIBONACCI_INPUT`].
    pub fn validate(&self) -> Result<(), ProgramError> {
        if self.sum_upper_bound > MAX_SUM_UPPER_BOUND {
            return Err(ProgramError::invalid_config(format!(
                "sum_upper_bound {} exceeds {MAX_SUM_UPPER_BOUND}",
                self.sum_upper_bound
            )));
        }

        if self.fibonacci_input > MAX_FIBONACCI_INPUT {
            return Err(ProgramError::invalid_config(format!(
                "fibonacci_input {} exceeds {MAX_FIBONACCI_INPUT}",
                self.fibonacci_input
            )));
        }

        Ok(())
    }
}

/// Default values.
mod defaults {
    pub const fn progress_iterations() -> u32 {
        2
    }

    pub const fn sum_upper_bound() -> i32 {
        4
    }

    pub const fn fibonacci_input() -> u32 {
        15
    }
}
