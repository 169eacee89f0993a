//! Hosts that always serve repository pages over https.

/// Hosting domains whose web URLs are always emitted with `https:`,
/// whatever scheme the source string used.
pub const SECURE_HOSTS: &[&str] = &[
    "github.com",
    "gist.github.com",
    "gitcafe.com",
    "bitbucket.org",
];

/// Exact (case-sensitive) membership test against [`SECURE_HOSTS`].
pub fn is_secure_host(host: &str) -> bool {
    SECURE_HOSTS.contains(&host)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_hosts() {
        assert!(is_secure_host("github.com"));
        assert!(is_secure_host("gist.github.com"));
        assert!(is_secure_host("gitcafe.com"));
        assert!(is_secure_host("bitbucket.org"));
    }

    #[test]
    fn unknown_or_differently_cased_hosts() {
        assert!(!is_secure_host("gitlab.com"));
        assert!(!is_secure_host("api.github.com"));
        assert!(!is_secure_host("GitHub.com"));
        assert!(!is_secure_host(""));
    }
}
