//! Library surface of the `nextshift` CLI.
//!
//! Split from `main.rs` so the argument parser and command logic are unit
//! testable without spawning the binary.

pub mod cli;
pub mod commands;
pub mod logger;
