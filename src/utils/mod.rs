//! Utility functions and helpers.

pub mod html;
pub mod http;

use url::Url;

/// Resolve a potentially relative URL against a base URL.
pub fn resolve_url(base: &Url, href: &str) -> String {
    base.join(href)
        .map(|u| u.to_string())
        .unwrap_or_else(|_| href.to_string())
}

/// Derive a subject key from a link: the second-to-last `/`-separated segment.
///
/// `https://site/kurser/matematik/` gives `matematik` (the last segment is the
/// empty string after the trailing slash), `https://site/kurser/matematik`
/// gives `kurser`. Returns `None` when the href has no `/` at all.
pub fn subject_key(href: &str) -> Option<&str> {
    let mut segments = href.rsplit('/');
    segments.next()?;
    segments.next()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_url() {
        let base = Url::parse("https://example.com/kurser/").unwrap();
        assert_eq!(
            resolve_url(&base, "/kurser/matematik/"),
            "https://example.com/kurser/matematik/"
        );
        assert_eq!(
            resolve_url(&base, "https://other.com/x/"),
            "https://other.com/x/"
        );
    }

    #[test]
    fn test_subject_key_trailing_slash() {
        assert_eq!(subject_key("https://example.com/foo/bar/"), Some("bar"));
    }

    #[test]
    fn test_subject_key_no_trailing_slash() {
        assert_eq!(subject_key("https://example.com/foo/bar"), Some("foo"));
    }

    #[test]
    fn test_subject_key_relative() {
        assert_eq!(subject_key("/kurser/svenska/"), Some("svenska"));
        assert_eq!(subject_key("svenska"), None);
    }
}
