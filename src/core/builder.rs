//! Release building functionality
//!
//! Walks the release manifest in order and packages each module with the
//! external tool. The first failure stops the run.

use crate::{
    config::Config,
    core::{
        artifacts::{ArtifactCollector, WheelArtifact},
        manifest::{resolve_modules, PackageModule},
    },
    error::{BuilderError, Result},
    utils::process::CommandRunner,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::PathBuf;
use tracing::{debug, info, instrument};

/// Outcome of one successfully packaged module
#[derive(Debug, Clone, Serialize)]
pub struct ModuleOutcome {
    /// Module name
    pub name: String,
    /// Module directory
    pub path: PathBuf,
    /// Wall time spent in the packaging tool
    pub elapsed_ms: i64,
}

/// Summary of a complete run
#[derive(Debug, Clone, Serialize)]
pub struct BuildReport {
    /// Directory the wheels were written to
    pub dist_dir: PathBuf,
    /// Built modules, in build order
    pub modules: Vec<ModuleOutcome>,
    /// Wheels found in the output directory afterwards
    pub artifacts: Vec<WheelArtifact>,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

/// Release builder that packages every manifest module
pub struct PackageBuilder<R> {
    config: Config,
    runner: R,
}

impl<R: CommandRunner> PackageBuilder<R> {
    /// Create a new release builder with the given configuration
    #[must_use]
    pub const fn new(config: Config, runner: R) -> Self {
        Self { config, runner }
    }

    /// Build every module in manifest order, stopping at the first error
    #[instrument(skip(self), fields(dist_dir = %self.config.dist_dir.display()))]
    pub fn build_all(&self) -> Result<BuildReport> {
        let started_at = Utc::now();
        let modules = resolve_modules(&self.config.clone_root);
        info!(
            "Building {} modules from {}",
            modules.len(),
            self.config.clone_root.display()
        );

        let outcomes = modules
            .iter()
            .enumerate()
            .map(|(i, module)| {
                debug!("Module {} of {}: {}", i + 1, modules.len(), module.relative);
                self.build_module(module)
            })
            .collect::<Result<Vec<_>>>()?;

        let artifacts = ArtifactCollector::new()?.collect(&self.config.dist_dir);
        for wheel in &artifacts {
            info!("Built wheel: {}", wheel.full_name());
        }

        Ok(BuildReport {
            dist_dir: self.config.dist_dir.clone(),
            modules: outcomes,
            artifacts,
            started_at,
            finished_at: Utc::now(),
        })
    }

    /// Check the build descriptor and run the packaging tool for one module
    fn build_module(&self, module: &PackageModule) -> Result<ModuleOutcome> {
        let descriptor = module.descriptor_path(&self.config.packaging.descriptor);
        if !descriptor.is_file() {
            return Err(BuilderError::missing_descriptor(descriptor));
        }

        let invocation = self.config.build_invocation(&module.path);
        info!("Executing {}", invocation);

        let start = Utc::now();
        self.runner
            .run(&invocation)
            .map_err(|e| BuilderError::build(&module.path, e))?;
        let elapsed = Utc::now() - start;

        debug!(
            "Built {} in {} ms",
            module.name(),
            elapsed.num_milliseconds()
        );

        Ok(ModuleOutcome {
            name: module.name().to_string(),
            path: module.path.clone(),
            elapsed_ms: elapsed.num_milliseconds(),
        })
    }
}
