#![forbid(unsafe_code)]

//! Command-line front end for `shadeset-core`.
//!
//! Resolves options from defaults, an optional JSON config file and flags,
//! runs the engine and prints or saves the result.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;

pub use cli::{Cli, Commands, run, run_from_env};
pub use error::{CliError, Result};
