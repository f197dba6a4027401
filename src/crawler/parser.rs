//! HTML parser for extracting links
//!
//! Every `<a>` element carrying an `href` attribute contributes one absolute
//! URL, in document order. Nothing is filtered or deduplicated here:
//! fragment-only links such as `#top` resolve to the page itself and are
//! kept, and repeated anchors are all reported so the traversal can count
//! them.

use crate::{CensusError, UrlError, UrlResult};
use scraper::{Html, Selector};
use url::Url;

/// Extracts the absolute URLs of all anchors in an HTML document
///
/// # Arguments
///
/// * `html` - The HTML content to parse
/// * `base_url` - The URL of the page, used to resolve relative hrefs
///
/// # Returns
///
/// * `Ok(Vec<String>)` - Absolute URLs in document order
/// * `Err(CensusError)` - The base URL or an href could not be resolved
///
/// # Example
///
/// ```
/// use link_census::crawler::extract_links;
///
/// let html = r#"<html><body><a href="top/secret">Link</a></body></html>"#;
/// let links = extract_links(html, "https://google.com").unwrap();
/// assert_eq!(links, vec!["https://google.com/top/secret".to_string()]);
/// ```
pub fn extract_links(html: &str, base_url: &str) -> crate::Result<Vec<String>> {
    let base = Url::parse(base_url).map_err(|source| UrlError::Parse {
        url: base_url.to_string(),
        source,
    })?;

    let anchor_selector = Selector::parse("a[href]").map_err(|e| CensusError::HtmlParse {
        url: base_url.to_string(),
        message: e.to_string(),
    })?;

    let document = Html::parse_document(html);

    let mut links = Vec::new();
    for element in document.select(&anchor_selector) {
        if let Some(href) = element.value().attr("href") {
            links.push(resolve_link(href, &base)?);
        }
    }

    Ok(links)
}

/// Resolves an href against the page URL
fn resolve_link(href: &str, base: &Url) -> UrlResult<String> {
    base.join(href)
        .map(String::from)
        .map_err(|source| UrlError::Resolve {
            href: href.to_string(),
            base: base.to_string(),
            source,
        })
}
