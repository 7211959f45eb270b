//! Core functionality for release building
//!
//! Contains the release manifest, the module builder and the wheel inventory.

pub mod artifacts;
pub mod builder;
pub mod manifest;

pub use artifacts::{ArtifactCollector, WheelArtifact};
pub use builder::{BuildReport, ModuleOutcome, PackageBuilder};
pub use manifest::{resolve_modules, PackageModule, PACKAGE_MODULES};
