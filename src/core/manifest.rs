//! Release manifest
//!
//! The fixed, ordered set of modules that make up a release of the CLI suite.

use std::path::{Path, PathBuf};

/// Module directories relative to the clone root, in build order
pub const PACKAGE_MODULES: [&str; 14] = [
    "src/common_modules/azdos-cli-common",
    "src/common_modules/azdos-cli-admin-common",
    "src/common_modules/azdos-cli-build-common",
    "src/common_modules/azdos-cli-code-common",
    "src/common_modules/azdos-cli-package-common",
    "src/common_modules/azdos-cli-team-common",
    "src/common_modules/azdos-cli-work-common",
    "src/command_modules/azdos-cli-admin",
    "src/command_modules/azdos-cli-build",
    "src/command_modules/azdos-cli-code",
    "src/command_modules/azdos-cli-package",
    "src/command_modules/azdos-cli-team",
    "src/command_modules/azdos-cli-work",
    "src/azdos-cli",
];

/// One buildable module resolved against a clone root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageModule {
    /// Path relative to the clone root, as listed in the manifest
    pub relative: &'static str,
    /// Absolute (or clone-root-relative) module directory
    pub path: PathBuf,
}

impl PackageModule {
    /// Module name, the last component of its directory
    pub fn name(&self) -> &str {
        self.relative.rsplit('/').next().unwrap_or(self.relative)
    }

    /// Location of the build descriptor inside the module directory
    pub fn descriptor_path(&self, descriptor: &str) -> PathBuf {
        self.path.join(descriptor)
    }
}

/// Resolve every manifest entry against `clone_root`, keeping manifest order
pub fn resolve_modules(clone_root: &Path) -> Vec<PackageModule> {
    PACKAGE_MODULES
        .iter()
        .map(|&relative| PackageModule {
            relative,
            path: clone_root.join(relative),
        })
        .collect()
}
