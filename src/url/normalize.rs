use crate::url::UrlFilter;
use crate::UrlError;
use url::Url;

/// Canonicalizes an absolute URL to `scheme://host[:port]/path`, lowercased
///
/// # Normalization Steps
///
/// 1. Reject anything that is not http(s) (`mailto:`, `javascript:`, `data:` ...)
/// 2. Reject URLs without a host
/// 3. Drop userinfo, query string and fragment
/// 4. Keep an explicit non-default port
/// 5. Lowercase the whole result, path included
///
/// Dot segments and default ports are already resolved by the `url` parser.
///
/// # Examples
///
/// ```
/// use table_scout::url::canonicalize;
/// use url::Url;
///
/// let url = Url::parse("HTTPS://Example.COM/Standings/Driver?season=2025#top").unwrap();
/// assert_eq!(canonicalize(&url).unwrap(), "https://example.com/standings/driver");
/// ```
pub fn canonicalize(url: &Url) -> Result<String, UrlError> {
    let scheme = url.scheme();
    if scheme != "http" && scheme != "https" {
        return Err(UrlError::UnsupportedScheme(scheme.to_string()));
    }

    let host = url
        .host_str()
        .ok_or_else(|| UrlError::MissingHost(url.to_string()))?;

    let canonical = match url.port() {
        Some(port) => format!("{}://{}:{}{}", scheme, host, port, url.path()),
        None => format!("{}://{}{}", scheme, host, url.path()),
    };

    Ok(canonical.to_lowercase())
}

/// Parses a string and canonicalizes it
pub fn canonicalize_str(url_str: &str) -> Result<String, UrlError> {
    let url = Url::parse(url_str).map_err(|e| UrlError::Parse(format!("{}: {}", url_str, e)))?;
    canonicalize(&url)
}

/// Resolves an href against its page and applies the crawl filter
///
/// Returns `None` for anything that should not enter the frontier: hrefs
/// that fail to resolve, non-web schemes, off-domain targets, excluded file
/// extensions and excluded paths. Never errors; a bad href is just dropped.
///
/// # Examples
///
/// ```
/// use table_scout::url::{normalize_and_filter, UrlFilter};
/// use table_scout::config::DomainMatch;
/// use url::Url;
///
/// let filter = UrlFilter::new("example.com", DomainMatch::Substring, &["pdf"], Some("news")).unwrap();
/// let base = Url::parse("http://example.com/standings/").unwrap();
///
/// assert_eq!(
///     normalize_and_filter(&base, "../Teams?page=2", &filter),
///     Some("http://example.com/teams".to_string())
/// );
/// assert_eq!(normalize_and_filter(&base, "/news/latest", &filter), None);
/// assert_eq!(normalize_and_filter(&base, "report.PDF", &filter), None);
/// assert_eq!(normalize_and_filter(&base, "mailto:info@example.com", &filter), None);
/// ```
pub fn normalize_and_filter(base: &Url, raw_href: &str, filter: &UrlFilter) -> Option<String> {
    let absolute = base.join(raw_href.trim()).ok()?;
    let canonical = canonicalize(&absolute).ok()?;

    if filter.accepts(&absolute, &canonical) {
        Some(canonical)
    } else {
        None
    }
}
