//! README and .gitignore rendering

use std::path::Path;

/// File names looked up in the templates directory, first match wins
const GITIGNORE_TEMPLATES: &[&str] = &["gitignore", "python.gitignore", ".gitignore"];

/// Used when no gitignore template is configured or found
pub const DEFAULT_GITIGNORE: &str = "\
# Python
__pycache__/
*.py[cod]
*.egg-info/
.pytest_cache/
.ipynb_checkpoints/

# Environments
.venv/
.env

# Generated
output/

# OS
.DS_Store
";

pub fn readme_contents(project_name: &str) -> String {
    format!("# {}\n", project_name)
}

/// Contents for `.gitignore` plus whether a template file was used
pub fn gitignore_contents(templates_dir: Option<&Path>) -> (String, bool) {
    let Some(dir) = templates_dir else {
        return (DEFAULT_GITIGNORE.to_string(), false);
    };

    for name in GITIGNORE_TEMPLATES {
        let candidate = dir.join(name);
        match std::fs::read_to_string(&candidate) {
            Ok(content) => return (content, true),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => continue,
            Err(e) => {
                tracing::warn!(path = %candidate.display(), error = %e, "unreadable gitignore template");
            }
        }
    }

    (DEFAULT_GITIGNORE.to_string(), false)
}
