//! LICENSE rendering
//!
//! Templates use the `[year]` / `[fullname]` placeholders that GitHub's
//! license templates use, so those files can be dropped in unchanged.

use crate::runner::{CommandRunner, Invocation};
use std::path::Path;

/// Holder written when neither an override nor a git identity is available
pub const HOLDER_PLACEHOLDER: &str = "YOUR NAME";

const LICENSE_TEMPLATE_FILE: &str = "LICENSE";

const MIT_LICENSE: &str = "\
MIT License

Copyright (c) [year] [fullname]

Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the \"Software\"), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:

The above copyright notice and this permission notice shall be included in all
copies or substantial portions of the Software.

THE SOFTWARE IS PROVIDED \"AS IS\", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
SOFTWARE.
";

/// Copyright holder: explicit override, then `git config user.name`, then a placeholder
pub fn resolve_holder<R: CommandRunner>(runner: &R, explicit: Option<&str>) -> String {
    if let Some(name) = explicit.map(str::trim).filter(|n| !n.is_empty()) {
        return name.to_string();
    }

    let query = Invocation::new(
        "git",
        ["config", "user.name"],
        "Failed to read git user.name",
    );
    match runner.capture(&query) {
        Ok(name) if !name.is_empty() => name,
        Ok(_) => HOLDER_PLACEHOLDER.to_string(),
        Err(e) => {
            tracing::debug!(error = %e, "no git identity for license holder");
            HOLDER_PLACEHOLDER.to_string()
        }
    }
}

/// Render the license text from `<templates_dir>/LICENSE` or the built-in MIT text
pub fn render_license(templates_dir: Option<&Path>, year: i32, holder: &str) -> String {
    let template = templates_dir
        .and_then(read_license_template)
        .unwrap_or_else(|| MIT_LICENSE.to_string());

    template
        .replace("[year]", &year.to_string())
        .replace("[fullname]", holder)
}

/// `<templates_dir>/LICENSE`, when present and readable
fn read_license_template(dir: &Path) -> Option<String> {
    let candidate = dir.join(LICENSE_TEMPLATE_FILE);
    match std::fs::read_to_string(&candidate) {
        Ok(content) => Some(content),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
        Err(e) => {
            tracing::warn!(path = %candidate.display(), error = %e, "unreadable license template");
            None
        }
    }
}
