//! Process execution utilities
//!
//! Runs the external packaging tool. The builder only ever sees the
//! [`CommandRunner`] capability, which reports plain success or failure.

use crate::error::{BuilderError, Result};
use std::ffi::OsString;
use std::fmt;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use tracing::{debug, info, instrument};

/// One external command: program, arguments and the directory it runs in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Program to execute, resolved through `PATH`
    pub program: String,
    /// Arguments passed to the program, unmodified
    pub args: Vec<OsString>,
    /// Working directory of the child process
    pub working_dir: PathBuf,
}

impl Invocation {
    /// Create a new invocation
    pub fn new(
        program: impl Into<String>,
        args: Vec<OsString>,
        working_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            program: program.into(),
            args,
            working_dir: working_dir.into(),
        }
    }

    /// Command line as a single string, used in logs and errors
    ///
    /// Lossy: arguments that are not valid UTF-8 are only rendered, the child
    /// still receives the original bytes.
    pub fn command_line(&self) -> String {
        let mut line = self.program.clone();
        for arg in &self.args {
            line.push(' ');
            line.push_str(&arg.to_string_lossy());
        }
        line
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.command_line())
    }
}

/// Something that can run an [`Invocation`] to completion
pub trait CommandRunner {
    /// Run the invocation and block until it exits
    ///
    /// Returns `BuilderError::Process` when the command cannot be spawned or
    /// exits unsuccessfully.
    fn run(&self, invocation: &Invocation) -> Result<()>;
}

impl<R: CommandRunner + ?Sized> CommandRunner for &R {
    fn run(&self, invocation: &Invocation) -> Result<()> {
        (**self).run(invocation)
    }
}

/// Utility for running external processes, inheriting stdout/stderr
#[derive(Debug, Default)]
pub struct ProcessRunner;

impl ProcessRunner {
    /// Create a new process runner
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl CommandRunner for ProcessRunner {
    #[instrument(skip(self), fields(cwd = %invocation.working_dir.display()))]
    fn run(&self, invocation: &Invocation) -> Result<()> {
        let cmd_str = invocation.command_line();

        debug!(
            "Running command: {} (in {})",
            cmd_str,
            invocation.working_dir.display()
        );

        let status = Command::new(&invocation.program)
            .args(&invocation.args)
            .current_dir(&invocation.working_dir)
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| BuilderError::spawn(cmd_str.clone(), e))?;

        if !status.success() {
            let exit_code = status.code();
            return Err(BuilderError::process(cmd_str, exit_code));
        }

        debug!("Command completed successfully");
        Ok(())
    }
}

/// Runner that logs each invocation and never spawns anything
#[derive(Debug, Default)]
pub struct DryRunRunner;

impl CommandRunner for DryRunRunner {
    fn run(&self, invocation: &Invocation) -> Result<()> {
        info!(
            "[dry-run] {} (in {})",
            invocation.command_line(),
            invocation.working_dir.display()
        );
        Ok(())
    }
}
