//! Utility modules for common functionality
//!
//! Provides process execution behind the [`CommandRunner`] capability.

pub mod process;

pub use process::{CommandRunner, DryRunRunner, Invocation, ProcessRunner};
