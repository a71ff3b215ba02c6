//! External tool detection and Python runtime provisioning
//!
//! This module provides:
//! - Tool presence checks (git, gh, pyenv) behind an injectable probe
//! - pyenv version resolution and virtual environment commands

pub mod python;
pub mod tool;

pub use python::{resolve_python_version, venv_python, VENV_DIR};
pub use tool::{missing_tools, required_tools, PathProbe, ToolProbe};
