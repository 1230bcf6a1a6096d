//! Command-line surface of canonry.
//!
//! A single command: read an inventory (and optionally a dependency
//! document), run the analysis, print the report.

pub mod entrypoint;

pub use entrypoint::{Args, ColorArg, run};
