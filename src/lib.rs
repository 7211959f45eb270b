//! # Wheel Release Builder
//!
//! Builds the installable wheel of every module of the CLI suite into a single
//! distribution directory. Each module is packaged by running its `setup.py`
//! with the external Python packaging tool; the first failure stops the run.
//!
//! ## Example
//!
//! ```no_run
//! use wheel_release_builder::{config::Config, core::PackageBuilder, utils::ProcessRunner};
//!
//! let config = Config {
//!     dist_dir: "/tmp/out".into(),
//!     clone_root: "/repo".into(),
//!     ..Config::default()
//! };
//! let report = PackageBuilder::new(config, ProcessRunner::default()).build_all()?;
//! println!("Built {} modules", report.modules.len());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod utils;

use anyhow::Result;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging for a release build
///
/// Module progress (`Executing ...`, wheel inventory, failures) is logged at
/// `info`; `debug` adds per-module timings and the working directory of each
/// packaging command. Everything goes to stderr so stdout only carries the
/// completion message.
pub fn setup_logging(debug: bool) -> Result<()> {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_level(true)
                .compact(),
        )
        .with(filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}
