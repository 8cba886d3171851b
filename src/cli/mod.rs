//! Command Line Interface (CLI) layer for parserelease.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`) for single-release and batch
//! flows. It wires user-provided options to the library functionality
//! exposed via `parserelease::api`.
//!
//! If you are embedding the parser into another application, prefer using
//! the high-level `parserelease::api` module instead of calling the CLI code.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
