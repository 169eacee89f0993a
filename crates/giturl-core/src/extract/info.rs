//! Repository coordinates decomposed from a web URL.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ExtractError;

/// Path segment that web viewers put in front of a branch name
/// (`host/owner/repo/tree/<branch>`).
const TREE_SEGMENT: &str = "tree";

/// Host, owner, repository name and optional branch of a Git repository.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RepoInfo {
    /// Host name as produced by URL parsing (domains are lowercased).
    pub host: String,
    /// First path segment. Empty when the URL has no path.
    pub owner: String,
    /// Remaining segments joined with `/`; several segments for nested groups.
    pub name: String,
    /// Branch taken from a `tree/<branch>` path, if any.
    pub branch: Option<String>,
}

impl RepoInfo {
    /// Decomposes an already-normalized web URL without normalizing it again.
    ///
    /// Returns `None` if `web_url` is not an absolute URL.
    ///
    /// ```
    /// use giturl_core::RepoInfo;
    ///
    /// let info = RepoInfo::from_web_url("https://github.com/rust-lang/cargo/tree/master").unwrap();
    /// assert_eq!(info.name, "cargo");
    /// assert_eq!(info.branch.as_deref(), Some("master"));
    /// ```
    pub fn from_web_url(web_url: &str) -> Option<Self> {
        url::Url::parse(web_url).ok().map(|u| Self::from_url(&u))
    }

    pub(super) fn from_url(url: &url::Url) -> Self {
        let segments: Vec<&str> = url.path().split('/').filter(|s| !s.is_empty()).collect();

        let host = url.host_str().unwrap_or_default().to_string();
        let owner = segments.first().copied().unwrap_or_default().to_string();

        let tree_branch = segments
            .iter()
            .position(|s| *s == TREE_SEGMENT)
            .and_then(|i| segments.get(i + 1).map(|branch| (i, *branch)));

        match tree_branch {
            Some((tree_idx, branch)) => Self {
                host,
                owner,
                // `tree` as the owner segment leaves no room for a name.
                name: segments.get(1..tree_idx).map(|s| s.join("/")).unwrap_or_default(),
                branch: Some(branch.to_string()),
            },
            None => Self {
                host,
                owner,
                name: segments.get(1..).map(|s| s.join("/")).unwrap_or_default(),
                branch: None,
            },
        }
    }

    /// `owner/name`, the usual short form of a repository.
    pub fn slug(&self) -> String {
        format!("{}/{}", self.owner, self.name)
    }
}

impl fmt::Display for RepoInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.host, self.owner, self.name)?;
        if let Some(branch) = &self.branch {
            write!(f, "@{}", branch)?;
        }
        Ok(())
    }
}

impl FromStr for RepoInfo {
    type Err = ExtractError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        super::try_extract(s)
    }
}
