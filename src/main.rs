//! hello-world CLI entry point.
//!
//! Runs the entry sequence once against standard output. Diagnostics go to
//! standard error so stdout carries only the program's own lines.

use std::io;

use anyhow::Context;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hello_world_common::SequenceConfig;
use hello_world_core::{Console, EntrySequence};

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let sequence =
        EntrySequence::new(SequenceConfig::default()).context("Invalid sequence configuration")?;

    debug!(config = ?sequence.config(), "Configuration loaded");

    let mut console = Console::new(io::stdout().lock());

    let outcome = sequence
        .run(&mut console)
        .and_then(|report| console.flush().map(|()| report));

    let report = match outcome {
        Ok(report) => report,
        Err(e) if e.is_broken_pipe() => {
            debug!(lines_written = console.lines_written(), "Stdout closed early");
            return Ok(());
        }
        Err(e) => return Err(e).context("Failed to write program output"),
    };

    info!(
        lines_written = report.lines_written,
        fibonacci_value = report.fibonacci_value,
        duration_us = report.duration.as_micros(),
        "Program finished"
    );

    Ok(())
}
