//! CLI module for wavtohead.
//!
//! This module provides the command-line interface:
//! - `commands`: Command definitions using clap derive
//! - `display`: Output formatting and display logic

pub mod commands;
pub mod display;

pub use commands::{Cli, DEFAULT_INPUT, DEFAULT_OUTPUT};
pub use display::Display;
