//! Command-line argument parsing and validation

use clap::Parser;
use std::path::PathBuf;

/// Build the wheel of every CLI module into one distribution directory
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(name = "build-packages")]
pub struct Args {
    /// Enable debug output
    #[arg(long)]
    pub debug: bool,

    /// Log each packaging command without running it
    #[arg(long)]
    pub dry_run: bool,

    /// Interpreter used to run each module's setup.py
    #[arg(long, value_name = "PROGRAM", default_value = "python")]
    pub python: String,

    /// Output directory for the built wheels
    #[arg(value_name = "DIST_DIR")]
    pub dist_dir: PathBuf,

    /// Root of the source checkout containing the modules
    #[arg(value_name = "CLONE_ROOT")]
    pub clone_root: PathBuf,
}

/// Parse command line arguments
///
/// Usage errors exit with status 1; `--help` and `--version` exit 0.
pub fn parse_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) if e.use_stderr() => {
            // Exiting either way; a failed write to stderr has nowhere to go
            e.print().ok();
            std::process::exit(1);
        }
        Err(e) => e.exit(),
    }
}
