//! projkit core - scaffolding for Python projects on top of git, gh and pyenv
//!
//! The library does no version control or packaging itself. It validates a
//! project description, then sequences calls to the external tools and
//! stops at the first one that fails.
//!
//! # Architecture
//!
//! - **Runner** ([`runner`]) - executes one external command, turning a
//!   non-zero exit into an [`ExecutionError`] carrying the tool's stderr
//! - **Workflow** ([`scaffold`]) - the ordered scaffolding pipeline, built
//!   from an injected registry, runner, tool probe and reporter
//! - **Branch protection** ([`protect`]) - one `gh api` call
//! - **Terminal output** ([`tui`]) - cliclack-based reporter (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based reporter
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use projkit_core::{ProjectSpec, ProjectTypeRegistry, Scaffolder, SilentReporter, SystemRunner};
//! use projkit_core::runtime::PathProbe;
//!
//! let registry = ProjectTypeRegistry::new([("ds", "/home/me/Projects/ds")]);
//! let scaffolder = Scaffolder::new(&registry, SystemRunner, &PathProbe, &SilentReporter);
//! let outcome = scaffolder.run(ProjectSpec::new("weather", "ds"))?;
//! ```

pub mod config;
pub mod error;
pub mod protect;
pub mod report;
pub mod runner;
pub mod runtime;
pub mod scaffold;
pub mod templates;

#[cfg(feature = "tui")]
pub mod tui;

#[cfg(test)]
mod testing;

// Re-export main types for convenience
pub use config::{Config, ProjectTypeRegistry};
pub use error::{ExecutionError, ScaffoldError};
pub use protect::{protect, BranchProtection};
pub use report::{Reporter, SilentReporter};
pub use runner::{CommandRunner, Invocation, SystemRunner};
pub use scaffold::workflow::ScaffoldSettings;
pub use scaffold::{ProjectSpec, RemoteMode, ScaffoldOutcome, Scaffolder, Stage};
