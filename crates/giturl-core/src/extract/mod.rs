//! Extraction of repository coordinates (host, owner, name, branch).
//!
//! The source is normalized first, then the resulting web URL is split into
//! path segments. Failure is a value: `None` from [`extract_info`], or an
//! [`ExtractError`] from [`try_extract`].

mod error;
mod info;

pub use error::ExtractError;
pub use info::RepoInfo;

use crate::normalize::normalize;

/// Normalizes `source` and decomposes it, reporting why it failed.
pub fn try_extract(source: &str) -> Result<RepoInfo, ExtractError> {
    let web_url = normalize(source);
    if web_url.is_empty() {
        return Err(ExtractError::Empty);
    }

    let parsed = url::Url::parse(&web_url).map_err(|source| ExtractError::InvalidUrl {
        url: web_url.clone(),
        source,
    })?;

    Ok(RepoInfo::from_url(&parsed))
}

/// Normalizes `source` and decomposes it into [`RepoInfo`].
///
/// ```
/// use giturl_core::extract_info;
///
/// let info = extract_info("https://gitlab.com/group/subgroup/repo.git").unwrap();
/// assert_eq!(info.host, "gitlab.com");
/// assert_eq!(info.owner, "group");
/// assert_eq!(info.name, "subgroup/repo");
/// assert_eq!(info.branch, None);
///
/// assert!(extract_info("invalid-url").is_none());
/// ```
pub fn extract_info(source: &str) -> Option<RepoInfo> {
    match try_extract(source) {
        Ok(info) => Some(info),
        Err(e) => {
            tracing::debug!(source, error = %e, "no repository coordinates");
            None
        }
    }
}
