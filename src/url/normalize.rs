use crate::url::domain::host_key;
use crate::{UrlError, UrlResult};
use url::Url;

/// Normalizes a URL into the identity key used for visit bookkeeping
///
/// # Normalization Steps
///
/// 1. Parse the URL; reject if malformed
/// 2. Keep the host (with any non-default port) exactly as parsed
/// 3. Keep the path, with `.` and `..` segments already resolved by the parser
/// 4. Strip exactly one trailing slash from the path (root `/` becomes empty)
/// 5. Drop the scheme, credentials, query string and fragment
///
/// The key is never fetched; the crawler always requests the original URL.
///
/// # Arguments
///
/// * `url_str` - The absolute URL string to normalize
///
/// # Returns
///
/// * `Ok(String)` - The normalized key, e.g. `example.com/page`
/// * `Err(UrlError)` - The string is not an absolute URL
///
/// # Examples
///
/// ```
/// use link_census::url::normalize_url;
///
/// assert_eq!(normalize_url("https://yahoo.com/search?q=abc").unwrap(), "yahoo.com/search");
/// assert_eq!(normalize_url("https://google.com/search/deeper/../").unwrap(), "google.com/search");
/// ```
pub fn normalize_url(url_str: &str) -> UrlResult<String> {
    let url = Url::parse(url_str).map_err(|source| UrlError::Parse {
        url: url_str.to_string(),
        source,
    })?;

    let path = url.path();
    let path = path.strip_suffix('/').unwrap_or(path);

    Ok(format!("{}{}", host_key(&url), path))
}
