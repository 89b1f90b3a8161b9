//! wavtohead CLI - embeds a WAV file into a C header
//!
//! Reads a binary file (by default `output.wav`), renders it as a C byte
//! array, and writes the result to a header file (by default `one.h`).

use anyhow::Result;
use clap::{CommandFactory, Parser};

pub mod cli;
pub mod encoder;

use cli::{Cli, Display};

/// Main entry point
fn main() {
    // Initialize logging
    init_tracing();

    // Parse command line arguments
    let cli = Cli::parse();

    // Execute command
    if let Err(e) = execute(cli) {
        Display::show_error(&e.to_string());
        std::process::exit(1);
    }
}

/// Initializes the tracing subscriber for logging.
fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();
}

/// Executes the CLI command.
fn execute(cli: Cli) -> Result<()> {
    // Set verbose logging if requested
    if cli.verbose {
        tracing::info!("Verbose mode enabled");
    }

    if let Some(shell) = cli.completions {
        generate_completions(shell);
        return Ok(());
    }

    let byte_count = encoder::convert_file(cli.input_path(), cli.output_path())?;
    Display::show_generate_success(cli.output_path(), byte_count);

    Ok(())
}

/// Generates shell completion scripts.
fn generate_completions(shell: clap_complete::Shell) {
    use clap_complete::generate;
    use std::io;

    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();
    generate(shell, &mut cmd, bin_name, &mut io::stdout());
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_cli_parse_no_args() {
        let cli = Cli::parse_from(["wavtohead"]);
        assert_eq!(cli.input_path(), Path::new("output.wav"));
        assert_eq!(cli.output_path(), Path::new("one.h"));
    }

    #[test]
    fn test_cli_parse_explicit_paths() {
        let cli = Cli::parse_from(["wavtohead", "chime.wav", "chime.h"]);
        assert_eq!(cli.input_path(), Path::new("chime.wav"));
        assert_eq!(cli.output_path(), Path::new("chime.h"));
    }

    #[test]
    fn test_cli_parse_verbose() {
        let cli = Cli::parse_from(["wavtohead", "--verbose"]);
        assert!(cli.verbose);
    }
}
