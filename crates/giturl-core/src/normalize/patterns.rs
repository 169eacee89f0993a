//! Compiled patterns for the normalization stages.

use regex::Regex;
use std::sync::OnceLock;

/// Leading credentials: `git@`, `user@`, `user:pass@`, or a whole
/// `https://user@` prefix (everything up to the first `@`).
pub(super) fn credentials() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[^@]+@").expect("credentials pattern"))
}

/// Leading `scheme://`, including compound schemes like `git+https://`.
pub(super) fn scheme_prefix() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[A-Za-z0-9_+]+://").expect("scheme prefix pattern"))
}

/// `host[:/]path`: host runs up to the first `:` or `/`, path is non-empty.
pub(super) fn host_path() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^([^:/]+)[:/](.+)$").expect("host/path pattern"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credentials_stop_at_first_at_sign() {
        assert_eq!(credentials().replace("git@github.com:a/b", ""), "github.com:a/b");
        assert_eq!(
            credentials().replace("https://u:p@host/a@b", ""),
            "host/a@b"
        );
    }

    #[test]
    fn scheme_prefix_variants() {
        for input in ["git://h/a", "git+https://h/a", "ssh://h/a", "HTTPS://h/a"] {
            assert_eq!(scheme_prefix().replace(input, ""), "h/a", "{input}");
        }
        assert_eq!(scheme_prefix().replace("h:a/b", ""), "h:a/b");
    }

    #[test]
    fn host_path_needs_separator_and_remainder() {
        let caps = host_path().captures("gitlab.com:edp/logger").unwrap();
        assert_eq!(&caps[1], "gitlab.com");
        assert_eq!(&caps[2], "edp/logger");

        assert!(host_path().captures("example.com/").is_none());
        assert!(host_path().captures("invalid-url").is_none());
        assert!(host_path().captures("/leading/slash").is_none());
    }
}
