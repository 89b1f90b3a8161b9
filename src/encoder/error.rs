//! Encoder error types.
//!
//! Only one error category exists: I/O failure on the input or output file.
//! The variants record which side failed and the offending path, so the CLI
//! can report exactly which file operation went wrong.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while converting a file to a header.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// The input file could not be opened or read.
    #[error("入力ファイルを読み込めません: {path}: {source}")]
    ReadInput {
        /// Path of the input file.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The output file could not be created or written.
    #[error("出力ファイルを書き込めません: {path}: {source}")]
    WriteOutput {
        /// Path of the output file.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}

impl EncodeError {
    /// Returns the path of the file that failed.
    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::ReadInput { path, .. } | Self::WriteOutput { path, .. } => path,
        }
    }

    /// Returns true if the failure happened while reading the input.
    #[must_use]
    pub fn is_read_error(&self) -> bool {
        matches!(self, Self::ReadInput { .. })
    }

    /// Returns true if the failure happened while writing the output.
    #[must_use]
    pub fn is_write_error(&self) -> bool {
        matches!(self, Self::WriteOutput { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    fn not_found() -> io::Error {
        io::Error::new(io::ErrorKind::NotFound, "no such file")
    }

    #[test]
    fn test_error_display() {
        let err = EncodeError::ReadInput {
            path: PathBuf::from("output.wav"),
            source: not_found(),
        };
        assert!(err.to_string().contains("output.wav"));
        assert!(err.to_string().contains("入力ファイルを読み込めません"));

        let err = EncodeError::WriteOutput {
            path: PathBuf::from("one.h"),
            source: not_found(),
        };
        assert!(err.to_string().contains("one.h"));
        assert!(err.to_string().contains("出力ファイルを書き込めません"));
    }

    #[test]
    fn test_path_accessor() {
        let err = EncodeError::ReadInput {
            path: PathBuf::from("a.wav"),
            source: not_found(),
        };
        assert_eq!(err.path(), std::path::Path::new("a.wav"));
    }

    #[test]
    fn test_predicates() {
        let read = EncodeError::ReadInput {
            path: PathBuf::from("a.wav"),
            source: not_found(),
        };
        assert!(read.is_read_error());
        assert!(!read.is_write_error());

        let write = EncodeError::WriteOutput {
            path: PathBuf::from("a.h"),
            source: not_found(),
        };
        assert!(write.is_write_error());
        assert!(!write.is_read_error());
    }
}
