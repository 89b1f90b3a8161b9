//! wavtohead Library
//!
//! This library provides the core functionality for the wavtohead CLI.
//! It includes:
//! - Byte-to-header encoder that renders arbitrary bytes as C source text
//! - File conversion (read input, render, write output)
//! - CLI command parsing and display utilities
//!
//! The input file is treated as an opaque byte sequence; no WAV/RIFF
//! structure is parsed or validated.

pub mod cli;
pub mod encoder;

// Re-export commonly used items for convenience
pub use encoder::{
    convert_file, render_header, EncodeError, ARRAY_NAME, BYTES_PER_LINE, GUARD_NAME,
};
