//! Configuration management for the release builder
//!
//! Centralizes configuration options and provides validation.

use crate::{cli::Args, error::BuilderError, utils::process::Invocation};
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Enable debug logging
    pub debug: bool,
    /// Log invocations instead of running them
    pub dry_run: bool,
    /// Shared output directory for every built wheel
    pub dist_dir: PathBuf,
    /// Root of the source checkout holding all modules
    pub clone_root: PathBuf,
    /// Packaging tool configuration
    pub packaging: PackagingConfig,
}

/// Packaging tool configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackagingConfig {
    /// Interpreter that runs the build descriptor
    pub interpreter: String,
    /// File that must exist in a module for it to be buildable
    pub descriptor: String,
    /// Arguments following the descriptor; the output directory is appended
    pub build_args: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            debug: false,
            dry_run: false,
            dist_dir: PathBuf::from("dist"),
            clone_root: PathBuf::from("."),
            packaging: PackagingConfig::default(),
        }
    }
}

impl Default for PackagingConfig {
    fn default() -> Self {
        Self {
            interpreter: "python".to_string(),
            descriptor: "setup.py".to_string(),
            build_args: vec!["bdist_wheel".to_string(), "-d".to_string()],
        }
    }
}

impl Config {
    /// Create configuration from command line arguments
    pub fn from_args(args: &Args) -> Result<Self, BuilderError> {
        let mut config = Self {
            debug: args.debug,
            dry_run: args.dry_run,
            dist_dir: args.dist_dir.clone(),
            clone_root: args.clone_root.clone(),
            ..Self::default()
        };
        config.packaging.interpreter = args.python.clone();

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), BuilderError> {
        if self.packaging.interpreter.trim().is_empty() {
            return Err(BuilderError::config("Interpreter must not be empty"));
        }

        let descriptor = Path::new(&self.packaging.descriptor);
        if self.packaging.descriptor.is_empty()
            || descriptor.file_name() != Some(descriptor.as_os_str())
        {
            return Err(BuilderError::config(format!(
                "Build descriptor must be a bare file name: {:?}",
                self.packaging.descriptor
            )));
        }

        Ok(())
    }

    /// Get the packaging command for one module directory
    pub fn build_invocation(&self, module_dir: &Path) -> Invocation {
        let mut args = Vec::with_capacity(self.packaging.build_args.len() + 2);
        args.push(OsString::from(&self.packaging.descriptor));
        args.extend(self.packaging.build_args.iter().map(OsString::from));
        args.push(self.dist_dir.clone().into_os_string());

        Invocation::new(self.packaging.interpreter.clone(), args, module_dir)
    }
}
