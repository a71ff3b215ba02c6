//! Python version resolution through pyenv

use crate::error::{Result, ScaffoldError};
use crate::runner::{CommandRunner, Invocation};
use std::path::{Path, PathBuf};

/// Virtual environment directory created inside each project
pub const VENV_DIR: &str = ".venv";

/// Pick the Python version for a new project.
///
/// An explicit version wins. Otherwise the ambient `pyenv global` default is
/// used; an empty answer (or the bare `system` interpreter) is an error
/// rather than a silent fallback.
pub fn resolve_python_version<R: CommandRunner>(
    runner: &R,
    explicit: Option<&str>,
) -> Result<String> {
    if let Some(version) = explicit.map(str::trim).filter(|v| !v.is_empty()) {
        return Ok(version.to_string());
    }

    let output = runner
        .capture(&Invocation::new(
            "pyenv",
            ["global"],
            "Failed to read the pyenv global version",
        ))
        .map_err(|e| ScaffoldError::validation(e.to_string()))?;

    match output.lines().map(str::trim).find(|l| !l.is_empty()) {
        Some(version) if version != "system" => Ok(version.to_string()),
        _ => Err(ScaffoldError::validation(
            "No Python version given and no pyenv global version is set.\n\
             Pass --python <VERSION> or run `pyenv global <VERSION>`.",
        )),
    }
}

/// Interpreter inside the project's virtual environment
pub fn venv_python(project_dir: &Path) -> PathBuf {
    let venv = project_dir.join(VENV_DIR);
    if cfg!(windows) {
        venv.join("Scripts").join("python.exe")
    } else {
        venv.join("bin").join("python")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingRunner;

    #[test]
    fn test_explicit_version_skips_pyenv() {
        let runner = RecordingRunner::new();
        let version = resolve_python_version(&runner, Some("3.11.9")).unwrap();
        assert_eq!(version, "3.11.9");
        assert!(runner.calls.borrow().is_empty());
    }

    #[test]
    fn test_falls_back_to_pyenv_global() {
        let runner = RecordingRunner::new().with_output("pyenv global", "3.12.4\n3.11.9");
        let version = resolve_python_version(&runner, None).unwrap();
        assert_eq!(version, "3.12.4");
        assert_eq!(runner.command_lines(), vec!["pyenv global"]);
    }

    #[test]
    fn test_blank_explicit_version_is_ignored() {
        let runner = RecordingRunner::new().with_output("pyenv global", "3.10.14");
        assert_eq!(resolve_python_version(&runner, Some("  ")).unwrap(), "3.10.14");
    }

    #[test]
    fn test_empty_global_is_validation_error() {
        let runner = RecordingRunner::new();
        let err = resolve_python_version(&runner, None).unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("--python"));
    }

    #[test]
    fn test_system_global_is_validation_error() {
        let runner = RecordingRunner::new().with_output("pyenv global", "system");
        assert!(resolve_python_version(&runner, None).unwrap_err().is_validation());
    }

    #[test]
    fn test_pyenv_failure_is_validation_error() {
        let runner = RecordingRunner::new().with_failure("pyenv global", "pyenv: broken shims");
        let err = resolve_python_version(&runner, None).unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("broken shims"));
    }

    #[cfg(unix)]
    #[test]
    fn test_venv_python_path() {
        let path = venv_python(Path::new("/tmp/demo"));
        assert_eq!(path, PathBuf::from("/tmp/demo/.venv/bin/python"));
    }
}
