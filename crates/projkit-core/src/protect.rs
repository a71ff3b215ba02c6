//! GitHub branch protection through `gh api`
//!
//! Applies a solo-maintainer policy in one request: pull requests are
//! required but need zero approvals, admins are bound by the rules, and
//! status checks and push restrictions are cleared.

use crate::error::ExecutionError;
use crate::runner::{CommandRunner, Invocation};

pub const DEFAULT_PROTECTED_BRANCH: &str = "main";

/// Branch to protect
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchProtection {
    pub owner: String,
    pub repo: String,
    pub branch: String,
}

impl BranchProtection {
    pub fn new(owner: impl Into<String>, repo: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            repo: repo.into(),
            branch: DEFAULT_PROTECTED_BRANCH.to_string(),
        }
    }

    pub fn branch(mut self, branch: impl Into<String>) -> Self {
        self.branch = branch.into();
        self
    }

    pub fn endpoint(&self) -> String {
        format!(
            "repos/{}/{}/branches/{}/protection",
            self.owner, self.repo, self.branch
        )
    }

    /// The single `gh api` call that applies the policy
    pub fn invocation(&self) -> Invocation {
        let args = vec![
            "api".to_string(),
            "--method".to_string(),
            "PUT".to_string(),
            "-H".to_string(),
            "Accept: application/vnd.github+json".to_string(),
            self.endpoint(),
            "-F".to_string(),
            "required_pull_request_reviews[required_approving_review_count]=0".to_string(),
            "-F".to_string(),
            "enforce_admins=true".to_string(),
            "-F".to_string(),
            "required_status_checks=null".to_string(),
            "-F".to_string(),
            "restrictions=null".to_string(),
            "--silent".to_string(),
        ];
        Invocation::new(
            "gh",
            args,
            format!(
                "Failed to protect branch '{}' of {}/{}",
                self.branch, self.owner, self.repo
            ),
        )
    }

    /// Apply the policy. gh's diagnostics come back verbatim on failure.
    pub fn apply<R: CommandRunner>(&self, runner: &R) -> Result<(), ExecutionError> {
        runner.run(&self.invocation())
    }
}

/// Protect `branch` (default `main`) of `owner/repo`
pub fn protect<R: CommandRunner>(
    runner: &R,
    owner: &str,
    repo: &str,
    branch: Option<&str>,
) -> Result<(), ExecutionError> {
    let mut protection = BranchProtection::new(owner, repo);
    if let Some(branch) = branch {
        protection = protection.branch(branch);
    }
    protection.apply(runner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingRunner;

    #[test]
    fn test_protect_issues_single_request_for_main() {
        let runner = RecordingRunner::new();
        protect(&runner, "alice", "repo", None).unwrap();

        let calls = runner.calls.borrow();
        assert_eq!(calls.len(), 1);
        let call = &calls[0];
        assert_eq!(call.program, "gh");
        assert!(call.args.contains(&"PUT".to_string()));
        assert!(call
            .args
            .contains(&"repos/alice/repo/branches/main/protection".to_string()));
        assert!(call.args.contains(
            &"required_pull_request_reviews[required_approving_review_count]=0".to_string()
        ));
        assert!(call.args.contains(&"enforce_admins=true".to_string()));
        assert!(call.args.contains(&"required_status_checks=null".to_string()));
        assert!(call.args.contains(&"restrictions=null".to_string()));
    }

    #[test]
    fn test_protect_custom_branch() {
        let runner = RecordingRunner::new();
        protect(&runner, "alice", "repo", Some("develop")).unwrap();
        assert!(runner.command_lines()[0].contains("repos/alice/repo/branches/develop/protection"));
    }

    #[test]
    fn test_protect_surfaces_gh_stderr() {
        let protection = BranchProtection::new("alice", "missing");
        let runner = RecordingRunner::new().with_failure(
            &protection.invocation().command_line(),
            "gh: Not Found (HTTP 404)",
        );

        let err = protection.apply(&runner).unwrap_err();
        assert_eq!(err.detail, "gh: Not Found (HTTP 404)");
        assert!(err.message.contains("alice/missing"));
        assert_eq!(runner.calls.borrow().len(), 1);
    }
}
