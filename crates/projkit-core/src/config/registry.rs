//! Project type to base directory mapping

use crate::error::{Result, ScaffoldError};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Read-only map from project type to the directory new projects land in
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectTypeRegistry {
    types: BTreeMap<String, PathBuf>,
}

impl ProjectTypeRegistry {
    pub fn new<I, S, P>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, P)>,
        S: Into<String>,
        P: Into<PathBuf>,
    {
        Self {
            types: entries
                .into_iter()
                .map(|(name, path)| (name.into(), path.into()))
                .collect(),
        }
    }

    pub(crate) fn insert(&mut self, name: &str, path: PathBuf) {
        self.types.insert(name.to_string(), path);
    }

    pub fn get(&self, name: &str) -> Option<&Path> {
        self.types.get(name).map(PathBuf::as_path)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.types.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Path)> {
        self.types
            .iter()
            .map(|(name, path)| (name.as_str(), path.as_path()))
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Base directory for `name`, which must be registered and exist
    pub fn resolve(&self, name: &str) -> Result<&Path> {
        let Some(path) = self.get(name) else {
            let known = self.names().collect::<Vec<_>>();
            let hint = if known.is_empty() {
                "No project types are configured.".to_string()
            } else {
                format!("Known types: {}", known.join(", "))
            };
            return Err(ScaffoldError::validation(format!(
                "Unknown project type '{}'. {}",
                name, hint
            )));
        };

        if !path.is_dir() {
            return Err(ScaffoldError::validation(format!(
                "Base directory for project type '{}' does not exist: {}",
                name,
                path.display()
            )));
        }

        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_existing_type() {
        let dir = tempfile::tempdir().unwrap();
        let registry = ProjectTypeRegistry::new([("ds", dir.path())]);
        assert_eq!(registry.resolve("ds").unwrap(), dir.path());
    }

    #[test]
    fn test_unknown_type_lists_known_types() {
        let registry = ProjectTypeRegistry::new([("ds", "/a"), ("web", "/b")]);
        let err = registry.resolve("ml").unwrap_err();
        assert!(err.is_validation());
        let text = err.to_string();
        assert!(text.contains("'ml'"));
        assert!(text.contains("ds, web"));
    }

    #[test]
    fn test_empty_registry_message() {
        let registry = ProjectTypeRegistry::default();
        let err = registry.resolve("ds").unwrap_err();
        assert!(err.to_string().contains("No project types are configured"));
    }

    #[test]
    fn test_missing_base_directory() {
        let dir = tempfile::tempdir().unwrap();
        let gone = dir.path().join("gone");
        let registry = ProjectTypeRegistry::new([("ds", gone.clone())]);
        let err = registry.resolve("ds").unwrap_err();
        assert!(err.to_string().contains(&gone.display().to_string()));
    }
}
