//! How the new repository is connected to a hosted remote

use std::fmt;
use std::str::FromStr;
use url::Url;

/// Remote handling for a new project
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RemoteMode {
    /// Local repository only
    #[default]
    None,
    /// `gh repo create --public` and push
    CreatePublic,
    /// `gh repo create --private` and push
    CreatePrivate,
    /// Register an existing URL as `origin`; nothing is pushed
    Existing(String),
}

impl RemoteMode {
    /// Whether this mode creates a hosted repository with gh
    pub fn creates_repository(&self) -> bool {
        matches!(self, Self::CreatePublic | Self::CreatePrivate)
    }

    /// `--public` / `--private` flag for `gh repo create`
    pub fn visibility_flag(&self) -> Option<&'static str> {
        match self {
            Self::CreatePublic => Some("--public"),
            Self::CreatePrivate => Some("--private"),
            _ => None,
        }
    }
}

impl fmt::Display for RemoteMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "none"),
            Self::CreatePublic => write!(f, "public"),
            Self::CreatePrivate => write!(f, "private"),
            Self::Existing(url) => write!(f, "{}", url),
        }
    }
}

impl FromStr for RemoteMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s.to_lowercase().as_str() {
            "" | "none" => return Ok(Self::None),
            "public" => return Ok(Self::CreatePublic),
            "private" => return Ok(Self::CreatePrivate),
            _ => {}
        }

        if is_remote_url(s) {
            Ok(Self::Existing(s.to_string()))
        } else {
            Err(format!(
                "'{}' is not 'public', 'private' or a git remote URL",
                s
            ))
        }
    }
}

/// Accepts URL-style remotes (`https://`, `ssh://`, `git://`, `file://`)
/// and scp-like `user@host:path` remotes.
fn is_remote_url(s: &str) -> bool {
    if let Ok(url) = Url::parse(s) {
        return matches!(url.scheme(), "https" | "http" | "ssh" | "git" | "file")
            && (url.has_host() || url.scheme() == "file");
    }

    match s.split_once(':') {
        Some((user_host, path)) => {
            let host = user_host.rsplit('@').next().unwrap_or(user_host);
            !host.is_empty()
                && !path.is_empty()
                && !user_host.contains('/')
                && !host.contains(char::is_whitespace)
        }
        None => false,
    }
}
