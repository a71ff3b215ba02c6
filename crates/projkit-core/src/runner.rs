//! Blocking execution of external tools
//!
//! Every external call (git, gh, pyenv, python) goes through a
//! [`CommandRunner`]. A non-zero exit status becomes an [`ExecutionError`]
//! that carries the caller's message and the tool's captured stderr.

use crate::error::ExecutionError;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Output, Stdio};

/// One external command to run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
    /// Reported when the command fails
    pub failure_message: String,
    /// Child working directory; inherits the current one when unset
    pub working_dir: Option<PathBuf>,
}

impl Invocation {
    pub fn new<I, S>(program: &str, args: I, failure_message: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.to_string(),
            args: args.into_iter().map(Into::into).collect(),
            failure_message: failure_message.into(),
            working_dir: None,
        }
    }

    /// Run the command inside `dir`
    pub fn in_dir(mut self, dir: &Path) -> Self {
        self.working_dir = Some(dir.to_path_buf());
        self
    }

    /// Render as a shell-like line for logs and dry output
    pub fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Exit status plus captured stderr of a finished command
#[derive(Debug, Clone)]
pub struct CommandOutcome {
    pub status: ExitStatus,
    pub stderr: String,
}

impl CommandOutcome {
    /// Turn a non-zero exit into an error carrying `failure_message`
    pub fn check(self, failure_message: &str) -> Result<(), ExecutionError> {
        if self.status.success() {
            Ok(())
        } else {
            let detail = if self.stderr.trim().is_empty() {
                match self.status.code() {
                    Some(code) => format!("exited with status {}", code),
                    None => "terminated by signal".to_string(),
                }
            } else {
                self.stderr
            };
            Err(ExecutionError::new(failure_message, detail))
        }
    }
}

/// Executes external commands
pub trait CommandRunner {
    /// Run a command with stdout inherited and stderr captured.
    fn run(&self, invocation: &Invocation) -> Result<(), ExecutionError>;

    /// Run a command and return its trimmed stdout.
    fn capture(&self, invocation: &Invocation) -> Result<String, ExecutionError>;
}

impl<R: CommandRunner + ?Sized> CommandRunner for &R {
    fn run(&self, invocation: &Invocation) -> Result<(), ExecutionError> {
        (**self).run(invocation)
    }

    fn capture(&self, invocation: &Invocation) -> Result<String, ExecutionError> {
        (**self).capture(invocation)
    }
}

/// Runs commands on the host with `std::process`
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl SystemRunner {
    fn command(invocation: &Invocation) -> Command {
        let mut cmd = Command::new(&invocation.program);
        cmd.args(&invocation.args).stdin(Stdio::inherit());
        if let Some(dir) = &invocation.working_dir {
            cmd.current_dir(dir);
        }
        cmd
    }

    fn spawn_error(invocation: &Invocation, err: std::io::Error) -> ExecutionError {
        ExecutionError::new(
            invocation.failure_message.clone(),
            format!("could not start '{}': {}", invocation.program, err),
        )
    }
}

impl CommandRunner for SystemRunner {
    fn run(&self, invocation: &Invocation) -> Result<(), ExecutionError> {
        tracing::debug!(command = %invocation.command_line(), dir = ?invocation.working_dir, "running");

        let output = Self::command(invocation)
            .stdout(Stdio::inherit())
            .stderr(Stdio::piped())
            .output()
            .map_err(|e| Self::spawn_error(invocation, e))?;

        let outcome = CommandOutcome {
            status: output.status,
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        };
        tracing::debug!(status = ?outcome.status, "finished");
        outcome.check(&invocation.failure_message)
    }

    fn capture(&self, invocation: &Invocation) -> Result<String, ExecutionError> {
        tracing::debug!(command = %invocation.command_line(), dir = ?invocation.working_dir, "capturing");

        let Output {
            status,
            stdout,
            stderr,
        } = Self::command(invocation)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|e| Self::spawn_error(invocation, e))?;

        CommandOutcome {
            status,
            stderr: String::from_utf8_lossy(&stderr).into_owned(),
        }
        .check(&invocation.failure_message)?;

        Ok(String::from_utf8_lossy(&stdout).trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_line_joins_program_and_args() {
        let inv = Invocation::new("git", ["commit", "-m", "Initial commit"], "commit failed");
        assert_eq!(inv.command_line(), "git commit -m Initial commit");
        assert!(inv.working_dir.is_none());
    }

    #[cfg(unix)]
    #[test]
    fn test_run_success_returns_ok() {
        let inv = Invocation::new("sh", ["-c", "exit 0"], "should not fail");
        assert!(SystemRunner.run(&inv).is_ok());
    }

    #[cfg(unix)]
    #[test]
    fn test_run_failure_carries_message_and_stderr() {
        let inv = Invocation::new("sh", ["-c", "echo X >&2; exit 1"], "step exploded");
        let err = SystemRunner.run(&inv).unwrap_err();
        assert_eq!(err.message, "step exploded");
        assert!(err.detail.contains('X'));
        let text = err.to_string();
        assert!(text.contains("step exploded"));
        assert!(text.contains('X'));
    }

    #[cfg(unix)]
    #[test]
    fn test_run_failure_without_stderr_reports_status() {
        let inv = Invocation::new("sh", ["-c", "exit 3"], "quiet failure");
        let err = SystemRunner.run(&inv).unwrap_err();
        assert!(err.detail.contains('3'));
    }

    #[cfg(unix)]
    #[test]
    fn test_capture_returns_trimmed_stdout() {
        let inv = Invocation::new("sh", ["-c", "echo '  3.12.1  '"], "capture failed");
        assert_eq!(SystemRunner.capture(&inv).unwrap(), "3.12.1");
    }

    #[cfg(unix)]
    #[test]
    fn test_run_uses_working_dir() {
        let dir = tempfile::tempdir().unwrap();
        let inv = Invocation::new("sh", ["-c", "touch marker"], "touch failed").in_dir(dir.path());
        SystemRunner.run(&inv).unwrap();
        assert!(dir.path().join("marker").exists());
    }

    #[test]
    fn test_missing_program_is_execution_error() {
        let inv = Invocation::new(
            "projkit-definitely-not-a-real-tool",
            Vec::<String>::new(),
            "tool missing",
        );
        let err = SystemRunner.run(&inv).unwrap_err();
        assert_eq!(err.message, "tool missing");
        assert!(err.detail.contains("projkit-definitely-not-a-real-tool"));
    }
}
