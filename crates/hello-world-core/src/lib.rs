//! Entry sequence and helper functions for hello-world.
//!
//! This crate provides:
//! - [`Console`]: Line-oriented output sink with line counting
//! - [`functions`]: `show`, `constant`, `identity`, `add` and `fibonacci`
//! - [`EntrySequence`]: The fixed sequence of printed values
//! - [`RunReport`]: Summary of one run
//!
//! # Example
//!
//! ```
//! use hello_world_core::{Console, EntrySequence};
//!
//! let mut console = Console::new(Vec::new());
//! let report = EntrySequence::default().run(&mut console)?;
//!
//! assert_eq!(report.lines_written, 11);
//! assert!(console.into_inner().ends_with(b"31\n987\n"));
//! # Ok::<(), hello_world_common::ProgramError>(())
//! ```

pub mod console;
pub mod functions;
pub mod sequence;

pub use console::Console;
pub use sequence::{EntrySequence, RunReport};
