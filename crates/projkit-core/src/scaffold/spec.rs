//! Project description as given by the caller, and its validated form

use crate::scaffold::RemoteMode;
use std::path::PathBuf;

/// Subdirectories every project starts with
pub const PROJECT_SUBDIRS: &[&str] = &["scripts", "output", "data", "notebooks"];

/// What the caller asked for
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectSpec {
    pub name: String,
    /// Key into the project type registry
    pub project_type: String,
    pub remote: RemoteMode,
    /// Explicit Python version; the pyenv global default otherwise
    pub python_version: Option<String>,
    /// requirements.txt-style manifest to install into the venv
    pub requirements: Option<PathBuf>,
    pub open_editor: bool,
    /// Write a LICENSE file
    pub license: bool,
    /// Copyright holder override for the LICENSE
    pub author: Option<String>,
}

impl ProjectSpec {
    pub fn new(name: impl Into<String>, project_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            project_type: project_type.into(),
            ..Self::default()
        }
    }

    /// Name problems, if any. Names become a directory and a repository name.
    pub fn name_error(&self) -> Option<String> {
        let name = self.name.as_str();
        if name.trim().is_empty() {
            return Some("Project name must not be empty".to_string());
        }
        if name == "." || name == ".." {
            return Some(format!("'{}' is not a valid project name", name));
        }
        if name.contains(['/', '\\']) {
            return Some(format!(
                "Project name '{}' must not contain path separators",
                name
            ));
        }
        if name.chars().any(|c| c.is_control() || c.is_whitespace()) {
            return Some(format!(
                "Project name '{}' must not contain whitespace",
                name
            ));
        }
        None
    }
}

/// A spec that passed validation, with everything resolved to absolute values
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedProject {
    pub spec: ProjectSpec,
    /// `<base dir>/<name>`; does not exist yet
    pub target_dir: PathBuf,
    pub python_version: String,
    /// Absolute path, so it survives running commands inside the project
    pub requirements: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_names() {
        for name in ["weather", "weather-model", "v2_analysis", "proj.io"] {
            assert!(ProjectSpec::new(name, "ds").name_error().is_none(), "{}", name);
        }
    }

    #[test]
    fn test_invalid_names() {
        for name in ["", "  ", ".", "..", "a/b", "a\\b", "my project"] {
            assert!(ProjectSpec::new(name, "ds").name_error().is_some(), "{:?}", name);
        }
    }
}
