//! File-to-header conversion.
//!
//! Reads the whole input file into memory, renders the header text, and
//! writes it to the output path in one pass. Both file handles are scoped
//! inside `fs::read` / `fs::write` and released on every exit path.

use std::fs;
use std::path::Path;

use super::error::EncodeError;
use super::header::render_header;

/// Converts the file at `input` into a C header written to `output`.
///
/// The input is treated as an opaque byte sequence; no WAV validation is
/// performed. The output file is created or overwritten. A failure while
/// writing may leave a partial output file behind; no cleanup is attempted.
///
/// # Returns
/// The number of input bytes embedded in the header.
///
/// # Errors
/// Returns [`EncodeError::ReadInput`] if the input cannot be read, or
/// [`EncodeError::WriteOutput`] if the output cannot be written.
pub fn convert_file(input: &Path, output: &Path) -> Result<usize, EncodeError> {
    let data = fs::read(input).map_err(|source| EncodeError::ReadInput {
        path: input.to_path_buf(),
        source,
    })?;
    tracing::debug!(bytes = data.len(), input = %input.display(), "入力ファイルを読み込みました");

    let header = render_header(&data);

    fs::write(output, &header).map_err(|source| EncodeError::WriteOutput {
        path: output.to_path_buf(),
        source,
    })?;
    tracing::info!(output = %output.display(), "ヘッダーファイルを生成しました");

    Ok(data.len())
}
