//! The entry sequence.
//!
//! [`EntrySequence::run`] executes the program's fixed steps in order against
//! a [`Console`]:
//!
//! 1. `hello`
//! 2. `j = 1 + 2`
//! 3. `3 + 4`
//! 4. `progress`, once per loop iteration
//! 5. the accumulated sum `1..=n`
//! 6. `show()`
//! 7. `constant()`
//! 8. `identity(12345)`
//! 9. `add(1, 30)`
//! 10. `fibonacci(n)`

use std::io::Write;
use std::time::{Duration, Instant};

use tracing::{debug, info, instrument};

use hello_world_common::{ProgramError, SequenceConfig};

use crate::Console;
use crate::functions::{add, constant, fibonacci, identity, show};

/// Summary of one completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    /// Lines written to the console.
    pub lines_written: usize,

    /// Numbered steps executed.
    pub steps_executed: u32,

    /// Value printed by the final step.
    pub fibonacci_value: i32,

    /// Total wall-clock duration of the run.
    pub duration: Duration,
}

/// The program's top-level procedure.
#[derive(Debug, Clone, Default)]
pub struct EntrySequence {
    config: SequenceConfig,
}

impl EntrySequence {
    /// Create an entry sequence with the given bounds.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration fails validation.
    pub fn new(config: SequenceConfig) -> Result<Self, ProgramError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Get the sequence configuration.
    pub fn config(&self) -> &SequenceConfig {
        &self.config
    }

    /// Execute every step, writing output to `console`.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the console fails. Steps after the
    /// failing write are not executed.
    #[instrument(skip_all, fields(fibonacci_input = self.config.fibonacci_input))]
    pub fn run<W: Write>(&self, console: &mut Console<W>) -> Result<RunReport, ProgramError> {
        let start = Instant::now();
        let lines_before = console.lines_written();
        let mut steps = 0;

        let mut step = |name: &str| {
            steps += 1;
            debug!(step = steps, name, "Executing step");
        };

        step("greeting");
        console.println("hello")?;

        step("local arithmetic");
        let i = 1;
        let j = i + 2;
        console.println(j)?;

        step("literal arithmetic");
        console.println(3 + 4)?;

        step("progress loop");
        for _ in 0..self.config.progress_iterations {
            console.println("progress")?;
        }

        step("accumulate");
        let mut s = 0;
        for l in 1..=self.config.sum_upper_bound {
            s += l;
        }
        console.println(s)?;

        step("show");
        show(console)?;

        step("constant");
        console.println(constant())?;

        step("identity");
        console.println(identity(12345))?;

        step("add");
        console.println(add(1, 30))?;

        step("fibonacci");
        let fibonacci_value = fibonacci(self.config.fibonacci_input);
        console.println(fibonacci_value)?;

        let report = RunReport {
            lines_written: console.lines_written() - lines_before,
            steps_executed: steps,
            fibonacci_value,
            duration: start.elapsed(),
        };

        info!(
            lines_written = report.lines_written,
            steps_executed = report.steps_executed,
            duration_us = report.duration.as_micros(),
            "Entry sequence completed"
        );

        Ok(report)
    }
}
