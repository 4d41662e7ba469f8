//! Command-line interface and orchestration for pypi-rank
//!
//! This module implements the CLI and coordinates the end-to-end batch job:
//!
//! 1. Parse arguments and configure logging
//! 2. Load the top-packages input file
//! 3. Run the sequential analyzer over the records
//! 4. Write the sorted results to the SQLite store
//!
//! The `Host` trait abstracts stdout/stderr/exit so the flow can be driven
//! from tests without touching the real process environment.

mod analyze;
mod host;
mod progress_reporter;
mod run;

pub use analyze::analyze;
pub use host::Host;
pub use progress_reporter::ProgressReporter;
pub use run::{Args, run};
