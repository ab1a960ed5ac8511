//! Turning configured sitemap paths into absolute URLs.

use url::Url;

use crate::errors::Result;

/// Resolves a relative or absolute path to an absolute URL.
pub trait UrlResolver {
    fn resolve(&self, path: &str) -> String;
}

impl<F> UrlResolver for F
where
    F: Fn(&str) -> String,
{
    fn resolve(&self, path: &str) -> String {
        self(path)
    }
}

/// Prefixes that mark a path as already absolute.
const ABSOLUTE_PREFIXES: &[&str] = &["http://", "https://", "//", "mailto:", "tel:", "sms:", "#"];

/// Joins relative paths onto a fixed base URL, keeping any sub-path the base has.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseUrlResolver {
    base: String,
}

impl BaseUrlResolver {
    /// Fails if `base_url` is not a valid absolute URL.
    pub fn new(base_url: &str) -> Result<Self> {
        let base = Url::parse(base_url.trim())?;
        Ok(Self {
            base: base.as_str().trim_end_matches('/').to_string(),
        })
    }

    pub fn base(&self) -> &str {
        &self.base
    }
}

impl Default for BaseUrlResolver {
    fn default() -> Self {
        Self {
            base: "http://localhost".to_string(),
        }
    }
}

impl UrlResolver for BaseUrlResolver {
    fn resolve(&self, path: &str) -> String {
        if is_absolute(path) {
            return path.to_string();
        }
        let path = path.trim_start_matches('/');
        if path.is_empty() {
            self.base.clone()
        } else {
            format!("{}/{}", self.base, path)
        }
    }
}

fn is_absolute(path: &str) -> bool {
    let lowered = path.to_ascii_lowercase();
    ABSOLUTE_PREFIXES.iter().any(|prefix| lowered.starts_with(prefix)) || Url::parse(path).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_paths_join_base() {
        let resolver = BaseUrlResolver::new("https://example.com").unwrap();
        assert_eq!(resolver.resolve("sitemap.xml"), "https://example.com/sitemap.xml");
        assert_eq!(resolver.resolve("/sitemap.xml"), "https://example.com/sitemap.xml");
        assert_eq!(resolver.resolve("maps/news.xml"), "https://example.com/maps/news.xml");
        assert_eq!(resolver.resolve(""), "https://example.com");
    }

    #[test]
    fn test_base_sub_path_is_kept() {
        let resolver = BaseUrlResolver::new("https://example.com/app/").unwrap();
        assert_eq!(resolver.base(), "https://example.com/app");
        assert_eq!(resolver.resolve("sitemap.xml"), "https://example.com/app/sitemap.xml");
    }

    #[test]
    fn test_absolute_paths_pass_through() {
        let resolver = BaseUrlResolver::new("https://example.com").unwrap();
        assert_eq!(
            resolver.resolve("https://cdn.example.org/sitemap.xml"),
            "https://cdn.example.org/sitemap.xml"
        );
        assert_eq!(resolver.resolve("HTTP://other.com/s.xml"), "HTTP://other.com/s.xml");
        assert_eq!(resolver.resolve("//other.com/s.xml"), "//other.com/s.xml");
    }

    #[test]
    fn test_any_scheme_passes_through() {
        let resolver = BaseUrlResolver::new("https://example.com").unwrap();
        assert_eq!(resolver.resolve("ftp://other.org/s.xml"), "ftp://other.org/s.xml");
        assert_eq!(resolver.resolve("sitemaps/s.xml"), "https://example.com/sitemaps/s.xml");
    }

    #[test]
    fn test_invalid_base_url() {
        assert!(BaseUrlResolver::new("not a url").is_err());
        assert!(BaseUrlResolver::new("/relative").is_err());
    }

    #[test]
    fn test_default_is_localhost() {
        assert_eq!(BaseUrlResolver::default().resolve("sitemap.xml"), "http://localhost/sitemap.xml");
    }

    #[test]
    fn test_closure_resolver() {
        let resolver = |path: &str| format!("https://test.local/{}", path);
        assert_eq!(resolver.resolve("a.xml"), "https://test.local/a.xml");
    }
}
