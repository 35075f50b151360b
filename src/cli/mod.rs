//! Command Line Interface (CLI) layer for framekit.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`) that maps each subcommand onto
//! the library functions exposed via `framekit::api`.
//!
//! If you are embedding framekit into another application, prefer using
//! the high-level `framekit::api` module instead of calling the CLI code.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
