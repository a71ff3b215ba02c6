//! projkit CLI - Python project scaffolding and branch protection

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use projkit_core::runtime::PathProbe;
use projkit_core::{
    tui, BranchProtection, Config, ProjectSpec, RemoteMode, ScaffoldSettings, Scaffolder,
    SystemRunner,
};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable holding the log filter
const LOG_ENV: &str = "PROJKIT_LOG";

#[derive(Parser, Debug)]
#[command(name = "projkit")]
#[command(about = "Scaffold Python projects with git, pyenv and GitHub")]
#[command(version)]
pub struct Args {
    /// Config file (defaults to $PROJKIT_CONFIG or the user config directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a new project
    New(NewArgs),
    /// Require pull requests on a GitHub branch (zero approvals, admins included)
    Protect(ProtectArgs),
    /// List configured project types
    Types,
}

#[derive(Parser, Debug)]
pub struct NewArgs {
    /// Project name (also the directory and GitHub repository name)
    pub name: String,

    /// Project type; selects the base directory
    #[arg(short = 't', long = "type")]
    pub project_type: String,

    /// Remote: 'public' or 'private' creates a GitHub repo and pushes, a URL is added as origin
    #[arg(long)]
    pub github: Option<RemoteMode>,

    /// Python version to pin (defaults to `pyenv global`)
    #[arg(long)]
    pub python: Option<String>,

    /// Requirements file to install into the new virtual environment
    #[arg(short, long)]
    pub requirements: Option<PathBuf>,

    /// Open the project in the configured editor when done
    #[arg(short, long)]
    pub editor: bool,

    /// Add a LICENSE file
    #[arg(long)]
    pub license: bool,

    /// Copyright holder for the LICENSE (defaults to config, then git user.name)
    #[arg(long, requires = "license")]
    pub author: Option<String>,
}

impl From<NewArgs> for ProjectSpec {
    fn from(args: NewArgs) -> Self {
        ProjectSpec {
            name: args.name,
            project_type: args.project_type,
            remote: args.github.unwrap_or_default(),
            python_version: args.python,
            requirements: args.requirements,
            open_editor: args.editor,
            license: args.license,
            author: args.author,
        }
    }
}

#[derive(Parser, Debug)]
pub struct ProtectArgs {
    /// Repository owner (user or organization)
    pub owner: String,

    /// Repository name
    pub repo: String,

    /// Branch to protect
    #[arg(short, long, default_value = projkit_core::protect::DEFAULT_PROTECTED_BRANCH)]
    pub branch: String,
}

/// Initialize logging with PROJKIT_LOG environment variable support
fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn new_project(config: &Config, args: NewArgs) -> Result<()> {
    let registry = config.registry()?;
    let settings = ScaffoldSettings::from_config(config)?;
    let reporter = tui::ClackReporter;

    tui::intro("projkit")?;

    let scaffolder =
        Scaffolder::new(&registry, SystemRunner, &PathProbe, &reporter).with_settings(settings);
    let outcome = scaffolder.run(args.into())?;

    tui::print_next_steps(&outcome)?;
    tui::finish("Happy coding!")?;
    Ok(())
}

fn protect_branch(args: ProtectArgs) -> Result<()> {
    let protection = BranchProtection::new(&args.owner, &args.repo).branch(&args.branch);
    tracing::info!(endpoint = %protection.endpoint(), "applying branch protection");

    protection.apply(&SystemRunner)?;

    println!(
        "{} {}/{} branch '{}' now requires pull requests",
        "Protected".green().bold(),
        args.owner,
        args.repo,
        args.branch
    );
    Ok(())
}

fn list_types(config: &Config) -> Result<()> {
    let registry = config.registry()?;
    if registry.is_empty() {
        let location = Config::default_path()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "$PROJKIT_CONFIG".to_string());
        println!(
            "{} No project types configured. Add `project_types` to {}",
            "Warning:".yellow(),
            location
        );
        return Ok(());
    }

    let width = registry.names().map(str::len).max().unwrap_or(0);
    for (name, path) in registry.iter() {
        let marker = if path.is_dir() {
            "".normal()
        } else {
            " (missing)".red()
        };
        println!(
            "  {:width$}  {}{}",
            name.cyan(),
            path.display(),
            marker,
            width = width
        );
    }
    Ok(())
}

fn main() -> Result<()> {
    init_logging();

    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let args = Args::parse();
    let config = Config::load(args.config.as_deref()).context("Failed to load configuration")?;

    match args.command {
        Command::New(new_args) => new_project(&config, new_args),
        Command::Protect(protect_args) => protect_branch(protect_args),
        Command::Types => list_types(&config),
    }
}
