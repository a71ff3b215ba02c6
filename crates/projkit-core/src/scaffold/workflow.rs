//! The scaffolding pipeline

use crate::config::{Config, ProjectTypeRegistry, DEFAULT_BRANCH};
use crate::error::{ExecutionError, Result, ScaffoldError};
use crate::report::Reporter;
use crate::runner::{CommandRunner, Invocation};
use crate::runtime::tool::{install_hint, missing_tools, required_tools, ToolProbe};
use crate::runtime::{resolve_python_version, venv_python, VENV_DIR};
use crate::scaffold::{ProjectSpec, RemoteMode, Stage, ValidatedProject, PROJECT_SUBDIRS};
use crate::templates::{gitignore_contents, readme_contents, render_license, resolve_holder};
use chrono::Datelike;
use std::fs;
use std::path::{Path, PathBuf};

/// Message of the single commit every project starts with
pub const INITIAL_COMMIT_MESSAGE: &str = "Initial commit";

/// Name of the remote registered or created for the project
pub const REMOTE_NAME: &str = "origin";

type EditorLauncher<'a> = Box<dyn Fn(&Path, &str) -> std::io::Result<()> + 'a>;

/// Knobs that come from the user's configuration rather than the command line
#[derive(Debug, Clone)]
pub struct ScaffoldSettings {
    pub templates_dir: Option<PathBuf>,
    pub license_holder: Option<String>,
    pub default_branch: String,
    pub editor: String,
}

impl Default for ScaffoldSettings {
    fn default() -> Self {
        Self {
            templates_dir: None,
            license_holder: None,
            default_branch: DEFAULT_BRANCH.to_string(),
            editor: crate::config::DEFAULT_EDITOR.to_string(),
        }
    }
}

impl ScaffoldSettings {
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        Ok(Self {
            templates_dir: config.templates_dir()?,
            license_holder: config.license_holder.clone(),
            default_branch: config.default_branch().to_string(),
            editor: config.editor().to_string(),
        })
    }
}

/// Result of a successful run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldOutcome {
    pub project_dir: PathBuf,
    pub python_version: String,
    pub remote: RemoteMode,
    pub next_steps: Vec<String>,
}

/// Runs the scaffolding pipeline against injected tools and configuration
pub struct Scaffolder<'a, R: CommandRunner> {
    registry: &'a ProjectTypeRegistry,
    runner: R,
    probe: &'a dyn ToolProbe,
    reporter: &'a dyn Reporter,
    settings: ScaffoldSettings,
    launcher: EditorLauncher<'a>,
}

impl<'a, R: CommandRunner> Scaffolder<'a, R> {
    pub fn new(
        registry: &'a ProjectTypeRegistry,
        runner: R,
        probe: &'a dyn ToolProbe,
        reporter: &'a dyn Reporter,
    ) -> Self {
        Self {
            registry,
            runner,
            probe,
            reporter,
            settings: ScaffoldSettings::default(),
            launcher: Box::new(open_in_editor),
        }
    }

    pub fn with_settings(mut self, settings: ScaffoldSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Replace how the editor is launched after a successful run
    pub fn with_editor_launcher<F>(mut self, launcher: F) -> Self
    where
        F: Fn(&Path, &str) -> std::io::Result<()> + 'a,
    {
        self.launcher = Box::new(launcher);
        self
    }

    /// Create the project described by `spec`
    pub fn run(&self, spec: ProjectSpec) -> Result<ScaffoldOutcome> {
        self.reporter.stage(Stage::Validate);
        let project = self.validate(spec)?;
        self.reporter.success(&format!(
            "Creating {} with Python {}",
            project.target_dir.display(),
            project.python_version
        ));

        self.reporter.stage(Stage::Materialize);
        self.materialize(&project)?;

        self.reporter.stage(Stage::InitVcs);
        self.init_vcs(&project)?;

        self.reporter.stage(Stage::ProvisionRuntime);
        self.provision_runtime(&project)?;

        match &project.requirements {
            Some(requirements) => {
                self.reporter.stage(Stage::InstallDependencies);
                self.install_dependencies(&project, requirements)?;
            }
            None => self
                .reporter
                .skipped(Stage::InstallDependencies, "no requirements file given"),
        }

        self.reporter.stage(Stage::Commit);
        self.commit(&project)?;

        if project.spec.remote == RemoteMode::None {
            self.reporter.skipped(Stage::LinkRemote, "no remote requested");
        } else {
            self.reporter.stage(Stage::LinkRemote);
            self.link_remote(&project)?;
        }

        self.reporter.stage(Stage::Finish);
        Ok(self.finish(project))
    }

    /// Check everything that can be checked without side effects
    pub fn validate(&self, spec: ProjectSpec) -> Result<ValidatedProject> {
        if let Some(problem) = spec.name_error() {
            return Err(ScaffoldError::Validation(problem));
        }

        let base_dir = self.registry.resolve(&spec.project_type)?;

        let requirements = spec
            .requirements
            .as_deref()
            .map(resolve_requirements)
            .transpose()?;

        // Commands run inside the project, so relative paths would resolve twice
        let target_dir = std::path::absolute(base_dir.join(&spec.name)).map_err(|e| {
            ScaffoldError::validation(format!(
                "Cannot resolve project directory for '{}': {}",
                spec.name, e
            ))
        })?;
        if target_dir.symlink_metadata().is_ok() {
            return Err(ScaffoldError::validation(format!(
                "Directory already exists: {}",
                target_dir.display()
            )));
        }

        let missing = missing_tools(self.probe, &required_tools(&spec.remote));
        if !missing.is_empty() {
            return Err(ScaffoldError::validation(format!(
                "Missing required tools:\n{}",
                missing
                    .iter()
                    .map(|tool| format!("  - {} ({})", tool, install_hint(tool)))
                    .collect::<Vec<_>>()
                    .join("\n")
            )));
        }

        let python_version = resolve_python_version(&self.runner, spec.python_version.as_deref())?;

        Ok(ValidatedProject {
            spec,
            target_dir,
            python_version,
            requirements,
        })
    }

    fn materialize(&self, project: &ValidatedProject) -> Result<()> {
        let dir = &project.target_dir;

        // create_dir, not create_dir_all: never merge into a directory that appeared meanwhile
        fs::create_dir(dir).map_err(|e| {
            ExecutionError::io(format!("Failed to create {}", dir.display()), &e)
        })?;

        for sub in PROJECT_SUBDIRS {
            let path = dir.join(sub);
            fs::create_dir(&path).map_err(|e| {
                ExecutionError::io(format!("Failed to create {}", path.display()), &e)
            })?;
        }

        write_file(&dir.join("README.md"), &readme_contents(&project.spec.name))?;

        let templates_dir = self.settings.templates_dir.as_deref();
        let (gitignore, from_template) = gitignore_contents(templates_dir);
        if !from_template {
            self.reporter
                .info("No .gitignore template found, using the built-in default");
        }
        write_file(&dir.join(".gitignore"), &gitignore)?;

        if project.spec.license {
            let explicit = project
                .spec
                .author
                .as_deref()
                .or(self.settings.license_holder.as_deref());
            let holder = resolve_holder(&self.runner, explicit);
            let year = chrono::Local::now().year();
            write_file(&dir.join("LICENSE"), &render_license(templates_dir, year, &holder))?;
        }

        Ok(())
    }

    fn init_vcs(&self, project: &ValidatedProject) -> Result<()> {
        let dir = &project.target_dir;
        self.exec(
            Invocation::new("git", ["init"], "Failed to initialize git repository").in_dir(dir),
        )?;
        self.exec(
            Invocation::new(
                "git",
                ["branch", "-M", self.settings.default_branch.as_str()],
                format!("Failed to rename branch to {}", self.settings.default_branch),
            )
            .in_dir(dir),
        )
    }

    fn provision_runtime(&self, project: &ValidatedProject) -> Result<()> {
        let dir = &project.target_dir;
        let version = project.python_version.as_str();
        self.exec(
            Invocation::new(
                "pyenv",
                ["local", version],
                format!(
                    "Failed to pin Python {} (is it installed? try `pyenv install {}`)",
                    version, version
                ),
            )
            .in_dir(dir),
        )?;
        self.exec(
            Invocation::new(
                "pyenv",
                ["exec", "python", "-m", "venv", VENV_DIR],
                "Failed to create virtual environment",
            )
            .in_dir(dir),
        )
    }

    fn install_dependencies(&self, project: &ValidatedProject, requirements: &Path) -> Result<()> {
        let python = venv_python(&project.target_dir);
        let requirements = requirements.to_string_lossy();
        self.exec(
            Invocation::new(
                &python.to_string_lossy(),
                ["-m", "pip", "install", "-r", &*requirements],
                format!("Failed to install dependencies from {}", requirements),
            )
            .in_dir(&project.target_dir),
        )
    }

    fn commit(&self, project: &ValidatedProject) -> Result<()> {
        let dir = &project.target_dir;
        self.exec(Invocation::new("git", ["add", "."], "Failed to stage files").in_dir(dir))?;
        self.exec(
            Invocation::new(
                "git",
                ["commit", "-m", INITIAL_COMMIT_MESSAGE],
                "Failed to create initial commit",
            )
            .in_dir(dir),
        )
    }

    fn link_remote(&self, project: &ValidatedProject) -> Result<()> {
        let dir = &project.target_dir;
        let remote = &project.spec.remote;

        if let Some(visibility) = remote.visibility_flag() {
            self.exec(
                Invocation::new(
                    "gh",
                    [
                        "repo",
                        "create",
                        project.spec.name.as_str(),
                        visibility,
                        "--source",
                        ".",
                        "--remote",
                        REMOTE_NAME,
                        "--push",
                    ],
                    "Failed to create GitHub repository",
                )
                .in_dir(dir),
            )?;
            self.reporter
                .success(&format!("Created {} GitHub repository and pushed", remote));
        } else if let RemoteMode::Existing(url) = remote {
            self.exec(
                Invocation::new(
                    "git",
                    ["remote", "add", REMOTE_NAME, url.as_str()],
                    format!("Failed to add remote {}", url),
                )
                .in_dir(dir),
            )?;
            self.reporter.info(&format!(
                "Added remote {} -> {} (nothing pushed)",
                REMOTE_NAME, url
            ));
        }

        Ok(())
    }

    fn finish(&self, project: ValidatedProject) -> ScaffoldOutcome {
        let next_steps = next_steps(&project);

        if project.spec.open_editor {
            let editor = self.settings.editor.as_str();
            match (self.launcher)(project.target_dir.as_path(), editor) {
                Ok(()) => self.reporter.info(&format!("Opening in {}", editor)),
                Err(e) => self
                    .reporter
                    .warn(&format!("Could not launch {}: {}", editor, e)),
            }
        }

        ScaffoldOutcome {
            project_dir: project.target_dir,
            python_version: project.python_version,
            remote: project.spec.remote,
            next_steps,
        }
    }

    fn exec(&self, invocation: Invocation) -> Result<()> {
        self.runner.run(&invocation)?;
        Ok(())
    }
}

/// Make the manifest path absolute and make sure it is a file
fn resolve_requirements(path: &Path) -> Result<PathBuf> {
    let resolved = fs::canonicalize(path).map_err(|_| {
        ScaffoldError::validation(format!("Requirements file not found: {}", path.display()))
    })?;
    if !resolved.is_file() {
        return Err(ScaffoldError::validation(format!(
            "Requirements path is not a file: {}",
            path.display()
        )));
    }
    Ok(resolved)
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents)
        .map_err(|e| ExecutionError::io(format!("Failed to write {}", path.display()), &e))?;
    Ok(())
}

fn next_steps(project: &ValidatedProject) -> Vec<String> {
    let mut steps = Vec::new();
    let current = std::env::current_dir().ok();

    // Step 1: cd to directory if not current
    if current.as_deref() != Some(project.target_dir.as_path()) {
        steps.push(format!("cd {}", project.target_dir.display()));
    }

    // Step 2: activate the environment
    if cfg!(windows) {
        steps.push(format!("{}\\Scripts\\activate", VENV_DIR));
    } else {
        steps.push(format!("source {}/bin/activate", VENV_DIR));
    }

    if project.requirements.is_none() {
        steps.push("pip install <packages> && pip freeze > requirements.txt".to_string());
    }

    steps
}

/// Launch `editor` on `dir` without waiting for it
pub fn open_in_editor(dir: &Path, editor: &str) -> std::io::Result<()> {
    open::with_detached(dir, editor)
}
