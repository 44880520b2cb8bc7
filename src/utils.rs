use url::Url;

/// Scheme, host and port of a URL, e.g. `https://www.example.com`
pub fn origin(url: &Url) -> String {
    url.origin().ascii_serialization()
}

/// Resolves `target` against `base`; absolute targets are returned unchanged
pub fn resolve(base: &Url, target: &str) -> Result<String, url::ParseError> {
    match Url::parse(target) {
        Ok(absolute) => Ok(absolute.to_string()),
        Err(url::ParseError::RelativeUrlWithoutBase) => Ok(base.join(target)?.to_string()),
        Err(e) => Err(e),
    }
}

/// Path component of a page URL.
///
/// Input that is not an absolute URL is treated as a bare path with any query
/// or fragment removed.
pub fn url_path(url: &str) -> String {
    match Url::parse(url) {
        Ok(parsed) => parsed.path().to_string(),
        Err(_) => url
            .split(['?', '#'])
            .next()
            .unwrap_or_default()
            .to_string(),
    }
}

/// Host an anchor points at, "" for relative links.
///
/// Scheme-relative links (`//cdn.example.com/x`) report their host.
pub fn link_host(href: &str) -> String {
    let href = href.trim();
    let parsed = if href.starts_with("//") {
        Url::parse(&format!("http:{}", href))
    } else {
        Url::parse(href)
    };
    parsed
        .ok()
        .and_then(|u| u.host_str().map(str::to_string))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin() {
        let url = Url::parse("https://www.example.com/a/b?c=d").unwrap();
        assert_eq!(origin(&url), "https://www.example.com");

        let url = Url::parse("http://localhost:8080/x").unwrap();
        assert_eq!(origin(&url), "http://localhost:8080");
    }

    #[test]
    fn test_resolve() {
        let base = Url::parse("http://www.example.com/").unwrap();
        assert_eq!(
            resolve(&base, "/sitemap.xml").unwrap(),
            "http://www.example.com/sitemap.xml"
        );
        assert_eq!(
            resolve(&base, "https://cdn.test/sitemap.xml").unwrap(),
            "https://cdn.test/sitemap.xml"
        );
    }

    #[test]
    fn test_url_path() {
        assert_eq!(url_path("http://www.example.com"), "/");
        assert_eq!(url_path("http://www.example.com/a/b.html?x=1"), "/a/b.html");
        assert_eq!(url_path("/relative/path?q#frag"), "/relative/path");
    }

    #[test]
    fn test_link_host() {
        assert_eq!(link_host("https://other.test/x"), "other.test");
        assert_eq!(link_host("//cdn.test/lib.js"), "cdn.test");
        assert_eq!(link_host("/about"), "");
        assert_eq!(link_host("#top"), "");
        assert_eq!(link_host("mailto:someone@example.com"), "");
    }
}
