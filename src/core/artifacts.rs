//! Artifact inventory
//!
//! Lists the wheels present in the distribution directory after a build.
//! Read-only: nothing here moves, copies or deletes files.

use crate::error::{BuilderError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, instrument, warn};

/// A wheel file found in the distribution directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WheelArtifact {
    /// Location of the wheel file
    pub path: PathBuf,
    /// Distribution name, as written in the file name
    pub distribution: String,
    /// Distribution version
    pub version: String,
    /// Optional build tag
    pub build: Option<String>,
    /// Python tag, e.g. `py3`
    pub python_tag: String,
    /// ABI tag, e.g. `none`
    pub abi_tag: String,
    /// Platform tag, e.g. `any`
    pub platform_tag: String,
}

impl WheelArtifact {
    /// `distribution-version`
    pub fn full_name(&self) -> String {
        format!("{}-{}", self.distribution, self.version)
    }
}

/// Scans a directory for wheels
pub struct ArtifactCollector {
    re_wheel: Regex,
}

impl ArtifactCollector {
    /// Create a new artifact collector
    pub fn new() -> Result<Self> {
        Ok(Self {
            re_wheel: Regex::new(
                r"^(?P<dist>[^-]+)-(?P<ver>[^-]+)(?:-(?P<build>\d[^-]*))?-(?P<py>[^-]+)-(?P<abi>[^-]+)-(?P<plat>[^-]+)\.whl$",
            )
            .map_err(|e| BuilderError::config(format!("Failed to compile regex: {e}")))?,
        })
    }

    /// Parse a wheel file name into its tags
    pub fn parse(&self, path: &Path) -> Option<WheelArtifact> {
        let file_name = path.file_name()?.to_str()?;
        let caps = self.re_wheel.captures(file_name)?;

        Some(WheelArtifact {
            path: path.to_path_buf(),
            distribution: caps["dist"].to_string(),
            version: caps["ver"].to_string(),
            build: caps.name("build").map(|m| m.as_str().to_string()),
            python_tag: caps["py"].to_string(),
            abi_tag: caps["abi"].to_string(),
            platform_tag: caps["plat"].to_string(),
        })
    }

    /// List the wheels in `dist_dir`, sorted by path
    ///
    /// A missing directory yields an empty list. Files that are not valid
    /// wheel names are skipped with a warning.
    #[instrument(skip(self))]
    pub fn collect(&self, dist_dir: &Path) -> Vec<WheelArtifact> {
        let pattern = format!(
            "{}/*.whl",
            glob::Pattern::escape(&dist_dir.to_string_lossy())
        );

        let paths = match glob::glob(&pattern) {
            Ok(paths) => paths,
            Err(e) => {
                warn!("Invalid glob pattern {}: {}", pattern, e);
                return Vec::new();
            }
        };

        let mut wheels = Vec::new();
        for path_result in paths {
            match path_result {
                Ok(path) => match self.parse(&path) {
                    Some(wheel) => {
                        debug!("Found wheel: {}", path.display());
                        wheels.push(wheel);
                    }
                    None => warn!("Skipping file with invalid wheel name: {}", path.display()),
                },
                Err(e) => warn!("Error reading wheel path: {}", e),
            }
        }

        wheels.sort_by(|a, b| a.path.cmp(&b.path));
        wheels
    }
}
