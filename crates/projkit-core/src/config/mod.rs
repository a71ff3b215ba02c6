//! User configuration: project types, templates and defaults
//!
//! Loaded once from a YAML file and handed to the workflow read-only.
//!
//! ```yaml
//! project_types:
//!   ds: ~/Projects/data-science
//!   web: $HOME/Projects/web
//! templates_dir: ~/.config/projkit/templates
//! license_holder: Jane Doe
//! editor: code
//! ```

pub mod registry;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

pub use registry::ProjectTypeRegistry;

/// Environment variable pointing at an alternative config file
pub const CONFIG_ENV: &str = "PROJKIT_CONFIG";

/// Branch every new repository starts on
pub const DEFAULT_BRANCH: &str = "main";

/// Editor launched by `--editor` when the config names none
pub const DEFAULT_EDITOR: &str = "code";

/// On-disk configuration file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Project type name to base directory
    #[serde(default)]
    pub project_types: BTreeMap<String, String>,

    /// Directory holding `gitignore` / `LICENSE` templates
    #[serde(default)]
    pub templates_dir: Option<String>,

    /// Copyright holder used when no --author is given
    #[serde(default)]
    pub license_holder: Option<String>,

    /// Editor command for --editor
    #[serde(default)]
    pub editor: Option<String>,

    /// Branch name for new repositories
    #[serde(default)]
    pub default_branch: Option<String>,
}

impl Config {
    /// Default config location: `<config dir>/projkit/config.yaml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("projkit").join("config.yaml"))
    }

    /// Load from an explicit path, `$PROJKIT_CONFIG`, or the default location.
    ///
    /// An explicit or env-provided path must exist. A missing default file
    /// yields an empty configuration.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }
        if let Ok(path) = std::env::var(CONFIG_ENV) {
            if !path.is_empty() {
                return Self::from_file(Path::new(&path));
            }
        }
        match Self::default_path() {
            Some(path) if path.exists() => Self::from_file(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("Failed to parse {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    /// Registry view of `project_types` with paths expanded
    pub fn registry(&self) -> Result<ProjectTypeRegistry> {
        let mut registry = ProjectTypeRegistry::default();
        for (name, raw) in &self.project_types {
            let path = expand_path(raw)
                .with_context(|| format!("Invalid path for project type '{}'", name))?;
            registry.insert(name, path);
        }
        Ok(registry)
    }

    pub fn templates_dir(&self) -> Result<Option<PathBuf>> {
        self.templates_dir.as_deref().map(expand_path).transpose()
    }

    pub fn editor(&self) -> &str {
        self.editor
            .as_deref()
            .filter(|e| !e.trim().is_empty())
            .unwrap_or(DEFAULT_EDITOR)
    }

    pub fn default_branch(&self) -> &str {
        self.default_branch
            .as_deref()
            .filter(|b| !b.trim().is_empty())
            .unwrap_or(DEFAULT_BRANCH)
    }
}

/// Expand `~` and `$VARS` in a configured path
pub fn expand_path(raw: &str) -> Result<PathBuf> {
    let expanded = shellexpand::full(raw).with_context(|| format!("Cannot expand '{}'", raw))?;
    Ok(PathBuf::from(expanded.as_ref()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let config = Config::parse(
            "project_types:\n  ds: /srv/ds\n  web: /srv/web\n\
             templates_dir: /etc/projkit\nlicense_holder: Jane Doe\neditor: vim\n",
        )
        .unwrap();

        assert_eq!(config.project_types.len(), 2);
        assert_eq!(config.license_holder.as_deref(), Some("Jane Doe"));
        assert_eq!(config.editor(), "vim");
        assert_eq!(config.default_branch(), "main");
        assert_eq!(
            config.templates_dir().unwrap(),
            Some(PathBuf::from("/etc/projkit"))
        );
    }

    #[test]
    fn test_parse_empty_config() {
        let config = Config::parse("").unwrap();
        assert!(config.project_types.is_empty());
        assert_eq!(config.editor(), DEFAULT_EDITOR);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(Config::parse("project_types: [1, 2").is_err());
    }

    #[test]
    fn test_tilde_expansion() {
        let home = dirs::home_dir().unwrap();
        assert_eq!(expand_path("~/Projects").unwrap(), home.join("Projects"));
    }

    #[test]
    fn test_load_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "project_types:\n  ml: /data/ml\n").unwrap();

        let config = Config::load(Some(&path)).unwrap();
        let registry = config.registry().unwrap();
        assert_eq!(registry.get("ml"), Some(Path::new("/data/ml")));
    }

    #[test]
    fn test_load_missing_explicit_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load(Some(&dir.path().join("nope.yaml"))).unwrap_err();
        assert!(err.to_string().contains("nope.yaml"));
    }
}
