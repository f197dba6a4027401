use url::Url;

/// Returns the host component of a URL, including a non-default port
///
/// The host is taken exactly as the URL parser produced it. The parser
/// already lowercases domains of special schemes and drops default ports
/// (`:80` for http, `:443` for https); nothing beyond that is normalized.
/// A URL without a host yields an empty string.
///
/// # Examples
///
/// ```
/// use url::Url;
/// use link_census::url::host_key;
///
/// let url = Url::parse("https://example.com/path").unwrap();
/// assert_eq!(host_key(&url), "example.com");
///
/// let url = Url::parse("http://127.0.0.1:8080/").unwrap();
/// assert_eq!(host_key(&url), "127.0.0.1:8080");
/// ```
pub fn host_key(url: &Url) -> String {
    match (url.host_str(), url.port()) {
        (Some(host), Some(port)) => format!("{}:{}", host, port),
        (Some(host), None) => host.to_string(),
        (None, _) => String::new(),
    }
}

/// Checks whether two URLs point at the same host
///
/// Used to keep the frontier inside the site being crawled: a discovered
/// link survives only if its host matches the seed's host. Comparison is
/// exact on [`host_key`], so `blog.example.com` and `example.com` are
/// different sites.
///
/// # Examples
///
/// ```
/// use url::Url;
/// use link_census::url::same_domain;
///
/// let seed = Url::parse("https://example.com").unwrap();
/// let about = Url::parse("https://example.com/about").unwrap();
/// let other = Url::parse("https://other.com/").unwrap();
///
/// assert!(same_domain(&seed, &about));
/// assert!(!same_domain(&seed, &other));
/// ```
pub fn same_domain(a: &Url, b: &Url) -> bool {
    host_key(a) == host_key(b)
}
