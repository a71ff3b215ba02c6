//! Files written into a freshly created project
//!
//! This module provides:
//! - README and `.gitignore` rendering (template file or built-in default)
//! - LICENSE rendering with year and copyright holder substitution

pub mod files;
pub mod license;

pub use files::{gitignore_contents, readme_contents, DEFAULT_GITIGNORE};
pub use license::{render_license, resolve_holder, HOLDER_PLACEHOLDER};
