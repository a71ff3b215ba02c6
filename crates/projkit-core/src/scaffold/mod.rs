//! Project scaffolding workflow
//!
//! A fixed pipeline, each stage running only after the previous one
//! succeeded:
//!
//! 1. Validate: inputs, tools and Python version, before touching disk
//! 2. Materialize: directories, README, `.gitignore`, optional LICENSE
//! 3. Init VCS: `git init` and the default branch
//! 4. Provision runtime: `pyenv local` and a `.venv`
//! 5. Install dependencies (when a requirements file was given)
//! 6. Commit
//! 7. Link remote (when a remote mode was given)
//! 8. Finish: next steps and the optional editor launch
//!
//! A failure stops the pipeline where it happened. Files created by earlier
//! stages are left in place.

pub mod remote;
pub mod spec;
pub mod workflow;

use std::fmt;

pub use remote::RemoteMode;
pub use spec::{ProjectSpec, ValidatedProject, PROJECT_SUBDIRS};
pub use workflow::{ScaffoldOutcome, Scaffolder};

/// Stages of the workflow, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Stage {
    Validate,
    Materialize,
    InitVcs,
    ProvisionRuntime,
    InstallDependencies,
    Commit,
    LinkRemote,
    Finish,
}

impl Stage {
    pub fn display_name(&self) -> &'static str {
        match self {
            Stage::Validate => "Validate",
            Stage::Materialize => "Create files",
            Stage::InitVcs => "Initialize git",
            Stage::ProvisionRuntime => "Provision Python",
            Stage::InstallDependencies => "Install dependencies",
            Stage::Commit => "Commit",
            Stage::LinkRemote => "Link remote",
            Stage::Finish => "Finish",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
