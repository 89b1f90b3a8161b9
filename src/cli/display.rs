//! Display utilities for the wavtohead CLI.
//!
//! This module provides formatted output for:
//! - Success messages
//! - Error messages

use std::path::Path;

// ============================================================================
// Display
// ============================================================================

/// Display utilities for CLI output.
pub struct Display;

impl Display {
    /// Shows a success message after the header has been written.
    pub fn show_generate_success(output: &Path, byte_count: usize) {
        println!("* {} を生成しました", output.display());
        println!("  埋め込みバイト数: {}", byte_count);
    }

    /// Shows an error message.
    pub fn show_error(message: &str) {
        eprintln!("エラー: {}", message);
    }
}
