//! Integration tests for the crawler
//!
//! These tests use wiremock to create mock HTTP servers and run full crawls
//! through the reqwest-backed transport.

use link_census::config::{Config, CrawlerConfig};
use link_census::crawler::{fetch_page, Coordinator, CrawlErrorKind, CrawlStatus, HttpTransport};
use link_census::output::format_report;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Builds a transport with default settings
fn test_transport() -> HttpTransport {
    let config = Config::default();
    HttpTransport::from_config(&config.crawler, &config.user_agent)
        .expect("Failed to build transport")
}

/// An HTML response with the given body
fn html(body: impl Into<String>) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_raw(body.into(), "text/html")
}

/// Host (with port) of the mock server, as it appears in normalized URLs
fn host_of(mock_server: &MockServer) -> String {
    let url = url::Url::parse(&mock_server.uri()).expect("Failed to parse base URL");
    format!(
        "{}:{}",
        url.host_str().expect("Failed to extract host"),
        url.port().expect("Mock server has no port")
    )
}

#[tokio::test]
async fn test_full_crawl_single_domain() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();
    let host = host_of(&mock_server);

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html(format!(
            r##"<html><body>
            <a href="{}/page1">Page 1</a>
            <a href="/page2">Page 2</a>
            <a href="https://external.example/">Elsewhere</a>
            <a href="#top">Top</a>
            </body></html>"##,
            base_url
        )))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/page1"))
        .respond_with(html(
            r#"<html><body><a href="/">Home</a><a href="/page2/">Page 2</a></body></html>"#,
        ))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/page2"))
        .respond_with(html("<html><body>Content 2</body></html>"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let coordinator = Coordinator::new(test_transport(), &CrawlerConfig::default());
    let outcome = coordinator
        .run(&format!("{}/", base_url))
        .await
        .expect("Crawl failed");

    assert_eq!(outcome.status, CrawlStatus::Completed);
    assert_eq!(outcome.pages.len(), 3);
    assert_eq!(outcome.pages[&host], 3);
    assert_eq!(outcome.pages[&format!("{}/page1", host)], 1);
    assert_eq!(outcome.pages[&format!("{}/page2", host)], 2);
    assert!(!outcome.pages.contains_key("external.example"));
    assert_eq!(outcome.fetch_attempts, 3);
    assert_eq!(outcome.skipped, 0);

    let report = format_report(&outcome.pages);
    assert!(report.contains(&format!("Found 3 internal links to \"{}\"", host)));
    assert!(report.ends_with("Crawled 3 pages and found 6 internal links."));
}

#[tokio::test]
async fn test_bad_pages_are_skipped_not_fatal() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();
    let host = host_of(&mock_server);

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html(
            r#"<html><body>
            <a href="/missing">Missing</a>
            <a href="/data.json">Data</a>
            <a href="/empty">Empty</a>
            <a href="/blank">Blank</a>
            <a href="/ok">Ok</a>
            </body></html>"#,
        ))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/data.json"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("{}", "application/json"))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/empty"))
        .respond_with(ResponseTemplate::new(204).insert_header("content-type", "text/html"))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/blank"))
        .respond_with(html(""))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/ok"))
        .respond_with(html("<html><body>Fine</body></html>"))
        .expect(1)
        .mount(&mock_server)
        .await;

    // /missing is not mounted, so wiremock answers 404

    let coordinator = Coordinator::new(test_transport(), &CrawlerConfig::default());
    let outcome = coordinator
        .run(&format!("{}/", base_url))
        .await
        .expect("Crawl failed");

    assert_eq!(outcome.status, CrawlStatus::Completed);
    assert_eq!(outcome.pages.len(), 6);
    for page in ["missing", "data.json", "empty", "blank", "ok"] {
        assert_eq!(outcome.pages[&format!("{}/{}", host, page)], 1);
    }
    assert_eq!(outcome.fetch_attempts, 6);
    // 404 and 204 count as skips; the JSON content type and the blank page do not
    assert_eq!(outcome.skipped, 2);
}

#[tokio::test]
async fn test_fetch_page_classifies_http_responses() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();
    let transport = test_transport();

    Mock::given(method("GET"))
        .and(path("/page"))
        .respond_with(html("<p>hello</p>"))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/broken"))
        .respond_with(ResponseTemplate::new(500).set_body_raw("<p>oops</p>", "text/html"))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/image"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(vec![0u8, 1, 2], "image/png"))
        .mount(&mock_server)
        .await;

    let body = fetch_page(&transport, &format!("{}/page", base_url))
        .await
        .expect("Fetch failed");
    assert_eq!(body, "<p>hello</p>");

    let err = fetch_page(&transport, &format!("{}/broken", base_url))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), CrawlErrorKind::ErrorResponse);
    assert_eq!(err.response().map(|r| r.status), Some(500));

    let err = fetch_page(&transport, &format!("{}/image", base_url))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), CrawlErrorKind::UnexpectedContentType);
}

#[tokio::test]
async fn test_unreachable_seed_completes() {
    // Nothing listens on port 1
    let coordinator = Coordinator::new(test_transport(), &CrawlerConfig::default());
    let outcome = coordinator
        .run("http://127.0.0.1:1/")
        .await
        .expect("Crawl failed");

    assert_eq!(outcome.status, CrawlStatus::Completed);
    assert_eq!(outcome.pages.len(), 1);
    assert_eq!(outcome.pages["127.0.0.1:1"], 1);
    assert_eq!(outcome.skipped, 1);
}

#[tokio::test]
async fn test_slow_page_hits_fetch_deadline() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html("<p>late</p>").set_delay(Duration::from_secs(5)))
        .mount(&mock_server)
        .await;

    let config = CrawlerConfig {
        fetch_timeout: 200,
        ..CrawlerConfig::default()
    };
    let coordinator = Coordinator::new(test_transport(), &config);
    let outcome = coordinator
        .run(&format!("{}/", base_url))
        .await
        .expect("Crawl failed");

    assert_eq!(outcome.status, CrawlStatus::Completed);
    assert_eq!(outcome.pages.len(), 1);
    assert_eq!(outcome.skipped, 1);
}

#[tokio::test]
async fn test_cancellation_during_fetch_returns_partial_result() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();
    let host = host_of(&mock_server);

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html("<p>slow</p>").set_delay(Duration::from_secs(10)))
        .mount(&mock_server)
        .await;

    let token = CancellationToken::new();
    let coordinator = Coordinator::new(test_transport(), &CrawlerConfig::default())
        .with_cancellation(token.clone());

    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(100)).await;
        token.cancel();
    });

    let outcome = coordinator
        .run(&format!("{}/", base_url))
        .await
        .expect("Crawl failed");

    assert_eq!(outcome.status, CrawlStatus::Cancelled);
    assert_eq!(outcome.pages.len(), 1);
    assert_eq!(outcome.pages[&host], 1);
}
