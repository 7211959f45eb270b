//! Command implementation for the CLI

use crate::{
    config::Config,
    core::{BuildReport, PackageBuilder},
    utils::process::{DryRunRunner, ProcessRunner},
};
use anyhow::Context;
use tracing::{info, instrument};

/// Build every module and print where the wheels went
#[instrument(skip(config))]
pub fn execute(config: &Config) -> anyhow::Result<()> {
    info!(
        "Building packages from {} into {}",
        config.clone_root.display(),
        config.dist_dir.display()
    );

    let result = if config.dry_run {
        PackageBuilder::new(config.clone(), DryRunRunner).build_all()
    } else {
        PackageBuilder::new(config.clone(), ProcessRunner::new()).build_all()
    };
    let report = result.context("Failed to build packages")?;

    print_summary(&report, config.dry_run);
    Ok(())
}

fn print_summary(report: &BuildReport, dry_run: bool) {
    let elapsed = report.finished_at - report.started_at;
    info!(
        "{} {} module(s) in {:.1}s, {} wheel(s) in output directory",
        if dry_run { "Checked" } else { "Built" },
        report.modules.len(),
        elapsed.num_milliseconds() as f64 / 1000.0,
        report.artifacts.len()
    );

    println!("{}", completion_message(report, dry_run));
    println!("Done.");
}

/// Final stdout line naming the output directory
fn completion_message(report: &BuildReport, dry_run: bool) -> String {
    if dry_run {
        format!(
            "Dry run: all {} modules are buildable, packages would be built to {}",
            report.modules.len(),
            report.dist_dir.display()
        )
    } else {
        format!("Packages were built to {}", report.dist_dir.display())
    }
}
