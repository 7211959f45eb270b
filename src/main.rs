#![allow(clippy::cargo_common_metadata)]
use anyhow::Result;
use wheel_release_builder::{cli, config::Config, setup_logging};

fn main() -> Result<()> {
    // DIST_DIR and CLONE_ROOT; a missing one exits 1 before any build
    let args = cli::parse_args();

    setup_logging(args.debug)?;

    let config = Config::from_args(&args)?;

    // Any error here has already stopped the module loop; anyhow prints
    // the chain to stderr and the process exits 1
    cli::execute(&config)
}
