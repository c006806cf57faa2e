//! Lexstat CLI library
//!
//! This library provides the command-line interface for the lexstat
//! streaming frequency-analysis pipeline.

pub mod commands;
pub mod config;
pub mod error;
pub mod output;
pub mod render;

pub use error::{CliError, CliResult};
