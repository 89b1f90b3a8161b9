//! Byte-to-header encoder.
//!
//! This module turns an arbitrary byte sequence into C source text:
//! - `header`: pure rendering of the header text
//! - `convert`: file read / write around the renderer
//! - `error`: encoder error types

pub mod convert;
pub mod error;
pub mod header;

pub use convert::convert_file;
pub use error::EncodeError;
pub use header::{render_header, ARRAY_NAME, BYTES_PER_LINE, GUARD_NAME};
