/// Checks whether a host belongs to a domain
///
/// The bare domain matches itself, and any depth of subdomain matches too:
/// "example.com" accepts "example.com", "live.example.com" and
/// "api.v2.example.com", but not "notexample.com" or "example.com.evil.net".
/// A leading "*." on the domain is tolerated and ignored.
///
/// # Examples
///
/// ```
/// use table_scout::url::matches_domain;
///
/// assert!(matches_domain("example.com", "example.com"));
/// assert!(matches_domain("example.com", "blog.example.com"));
/// assert!(matches_domain("*.example.com", "api.v2.example.com"));
/// assert!(!matches_domain("example.com", "example.org"));
/// assert!(!matches_domain("example.com", "badexample.com"));
/// ```
pub fn matches_domain(domain: &str, host: &str) -> bool {
    let base = domain.strip_prefix("*.").unwrap_or(domain);
    host == base || host.ends_with(&format!(".{}", base))
}
