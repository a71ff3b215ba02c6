//! Tool presence checks
//!
//! The workflow never looks at PATH directly; it asks a [`ToolProbe`].
//! Tests pass a closure instead of touching the host environment.

use crate::scaffold::RemoteMode;

/// Answers whether an executable can be located
pub trait ToolProbe {
    fn is_available(&self, tool: &str) -> bool;
}

impl<F> ToolProbe for F
where
    F: Fn(&str) -> bool,
{
    fn is_available(&self, tool: &str) -> bool {
        self(tool)
    }
}

/// Looks tools up on PATH
#[derive(Debug, Default, Clone, Copy)]
pub struct PathProbe;

impl ToolProbe for PathProbe {
    fn is_available(&self, tool: &str) -> bool {
        which::which(tool).is_ok()
    }
}

/// Tools the workflow shells out to for a given remote mode
pub fn required_tools(remote: &RemoteMode) -> Vec<&'static str> {
    let mut tools = vec!["git", "pyenv"];
    if remote.creates_repository() {
        tools.push("gh");
    }
    tools
}

/// Subset of `tools` the probe cannot find, in order
pub fn missing_tools<'a>(probe: &dyn ToolProbe, tools: &[&'a str]) -> Vec<&'a str> {
    tools
        .iter()
        .copied()
        .filter(|tool| !probe.is_available(tool))
        .collect()
}

/// Install hint shown next to a missing tool
pub fn install_hint(tool: &str) -> &'static str {
    match tool {
        "git" => "install from https://git-scm.com",
        "gh" => "install from https://cli.github.com",
        "pyenv" => "install from https://github.com/pyenv/pyenv",
        _ => "install it and make sure it is on PATH",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_tools_without_remote() {
        assert_eq!(required_tools(&RemoteMode::None), vec!["git", "pyenv"]);
    }

    #[test]
    fn test_required_tools_for_created_remotes() {
        assert!(required_tools(&RemoteMode::CreatePublic).contains(&"gh"));
        assert!(required_tools(&RemoteMode::CreatePrivate).contains(&"gh"));
    }

    #[test]
    fn test_existing_remote_does_not_need_gh() {
        let remote = RemoteMode::Existing("git@github.com:alice/repo.git".to_string());
        assert!(!required_tools(&remote).contains(&"gh"));
    }

    #[test]
    fn test_missing_tools_uses_probe() {
        let probe = |tool: &str| tool == "git";
        assert_eq!(
            missing_tools(&probe, &["git", "pyenv", "gh"]),
            vec!["pyenv", "gh"]
        );
    }

    #[test]
    fn test_path_probe_rejects_nonsense() {
        assert!(!PathProbe.is_available("projkit-definitely-not-a-real-tool"));
    }
}
