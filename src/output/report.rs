//! Plain-text pages report
//!
//! Ranks pages by how many internal links point at them and closes with a
//! summary of distinct pages and total links.

use crate::crawler::PagesMap;

/// Returns the report as a list of lines
///
/// Pages are sorted by descending occurrence count; pages with equal counts
/// are ordered by normalized URL.
pub fn report_lines(pages: &PagesMap) -> Vec<String> {
    let mut sorted: Vec<(&String, &u32)> = pages.iter().collect();
    sorted.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));

    let mut lines = Vec::with_capacity(sorted.len() + 4);
    lines.push("Starting pages report...".to_string());
    lines.push(String::new());

    for (page, count) in &sorted {
        lines.push(format!(
            "Found {} internal {} to \"{}\"",
            count,
            plural(u64::from(**count), "link"),
            page
        ));
    }

    let total_pages = sorted.len() as u64;
    let total_links: u64 = sorted.iter().map(|(_, count)| u64::from(**count)).sum();

    lines.push(String::new());
    lines.push(format!(
        "Pages report completed. Crawled {} {} and found {} internal {}.",
        total_pages,
        plural(total_pages, "page"),
        total_links,
        plural(total_links, "link")
    ));

    lines
}

/// Formats the full report as a single string
///
/// # Example
///
/// ```
/// use link_census::crawler::PagesMap;
/// use link_census::output::format_report;
///
/// let mut pages = PagesMap::new();
/// pages.insert("example.com".to_string(), 2);
///
/// let report = format_report(&pages);
/// assert!(report.contains("Found 2 internal links to \"example.com\""));
/// ```
pub fn format_report(pages: &PagesMap) -> String {
    report_lines(pages).join("\n")
}

fn plural(count: u64, noun: &str) -> String {
    if count == 1 {
        noun.to_string()
    } else {
        format!("{}s", noun)
    }
}
