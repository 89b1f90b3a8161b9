//! Command definitions for the wavtohead CLI.
//!
//! Uses clap derive macro for argument parsing.

use std::path::{Path, PathBuf};

use clap::Parser;

// ============================================================================
// Defaults
// ============================================================================

/// Input path used when none is given on the command line.
pub const DEFAULT_INPUT: &str = "output.wav";

/// Output path used when none is given on the command line.
pub const DEFAULT_OUTPUT: &str = "one.h";

// ============================================================================
// CLI Structure
// ============================================================================

/// wavtohead - embeds a WAV file into a C header as a byte array
#[derive(Parser, Debug)]
#[command(
    name = "wavtohead",
    version,
    about = "WAVファイルをCヘッダーに埋め込むCLI",
    long_about = "バイナリファイルを読み込み、バイト配列として埋め込んだ\n\
                  C/C++ヘッダーファイルを生成します。ファームウェアなど、\n\
                  アセットをコンパイル時にリンクしたい場面で使います。"
)]
pub struct Cli {
    /// Input file to embed (treated as opaque bytes)
    #[arg(value_name = "INPUT", default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// Output header file to generate
    #[arg(value_name = "OUTPUT", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short, long)]
    pub verbose: bool,

    /// Generate a shell completion script and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<clap_complete::Shell>,
}

impl Cli {
    /// Returns the input path to read.
    #[must_use]
    pub fn input_path(&self) -> &Path {
        &self.input
    }

    /// Returns the output path to write.
    #[must_use]
    pub fn output_path(&self) -> &Path {
        &self.output
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_no_args_uses_defaults() {
        let cli = Cli::parse_from(["wavtohead"]);
        assert_eq!(cli.input, PathBuf::from("output.wav"));
        assert_eq!(cli.output, PathBuf::from("one.h"));
        assert!(!cli.verbose);
        assert!(cli.completions.is_none());
    }

    #[test]
    fn test_parse_input_only() {
        let cli = Cli::parse_from(["wavtohead", "beep.wav"]);
        assert_eq!(cli.input, PathBuf::from("beep.wav"));
        assert_eq!(cli.output, PathBuf::from("one.h"));
    }

    #[test]
    fn test_parse_input_and_output() {
        let cli = Cli::parse_from(["wavtohead", "beep.wav", "beep.h"]);
        assert_eq!(cli.input, PathBuf::from("beep.wav"));
        assert_eq!(cli.output, PathBuf::from("beep.h"));
    }

    #[test]
    fn test_parse_verbose() {
        let cli = Cli::parse_from(["wavtohead", "--verbose"]);
        assert!(cli.verbose);
    }

    #[test]
    fn test_parse_completions() {
        let cli = Cli::parse_from(["wavtohead", "--completions", "bash"]);
        assert_eq!(cli.completions, Some(clap_complete::Shell::Bash));
    }
}
