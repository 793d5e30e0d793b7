//! Integration tests for the crawler
//!
//! These tests use wiremock to create mock HTTP servers and run the full
//! crawl cycle end-to-end through the real HTTP fetcher.

use std::time::Duration;
use table_scout::config::{
    ClassifierConfig, Config, CrawlerConfig, DomainMatch, FilterConfig, OutputConfig,
    UserAgentConfig,
};
use table_scout::crawler::run_crawl;
use table_scout::output::{MemorySink, TextFileSink};
use table_scout::{PageOutcome, ScoutError};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a test configuration confined to the mock server
fn create_test_config(seeds: Vec<String>, max_depth: u32, matches_path: &str) -> Config {
    Config {
        crawler: CrawlerConfig {
            seeds,
            max_depth,
            politeness_delay_ms: 0,
            request_timeout_secs: 5,
        },
        user_agent: UserAgentConfig {
            crawler_name: "TestBot".to_string(),
            crawler_version: "1.0.0".to_string(),
            contact_url: None,
            contact_email: Some("test@example.com".to_string()),
        },
        filter: FilterConfig {
            domain: "127.0.0.1".to_string(),
            match_mode: DomainMatch::Substring,
            exclude_paths: Some("(news|contact)".to_string()),
            excluded_extensions: vec!["pdf".to_string(), "jpg".to_string()],
        },
        classifier: ClassifierConfig {
            keywords: vec![
                "2025 F1 Academy Standings".to_string(),
                "points".to_string(),
            ],
            dynamic_table_id: "ponchoTable".to_string(),
        },
        output: OutputConfig {
            matches_path: matches_path.to_string(),
        },
    }
}

fn html_page(body: &str) -> ResponseTemplate {
    ResponseTemplate::new(200)
        .set_body_string(format!("<html><body>{}</body></html>", body))
        .insert_header("content-type", "text/html")
}

async fn mount_page(server: &MockServer, page_path: &str, body: &str) {
    Mock::given(method("GET"))
        .and(path(page_path))
        .respond_with(html_page(body))
        .expect(1)
        .mount(server)
        .await;
}

async fn requested_paths(server: &MockServer) -> Vec<String> {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .map(|request| request.url.path().to_string())
        .collect()
}

#[tokio::test]
async fn test_full_crawl_standings_site() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(
        &mock_server,
        "/",
        r#"<table><tr><th>2025 F1 Academy Standings</th></tr>
           <tr><td>1</td><td>Driver A</td></tr></table>
           <a href="/news/x">News</a>
           <a href="/teams">Teams</a>"#,
    )
    .await;
    mount_page(&mock_server, "/teams", "<p>Teams overview</p>").await;

    // Excluded by the path pattern: must never be requested
    Mock::given(method("GET"))
        .and(path("/news/x"))
        .respond_with(html_page("news"))
        .expect(0)
        .mount(&mock_server)
        .await;

    let temp_dir = tempfile::tempdir().unwrap();
    let matches_path = temp_dir.path().join("urls_with_tables.txt");
    let config = create_test_config(
        vec![format!("{}/", base_url)],
        3,
        matches_path.to_str().unwrap(),
    );

    let mut sink = TextFileSink::new(&matches_path);
    let report = run_crawl(config, &mut sink).await.expect("Crawl failed");

    assert_eq!(requested_paths(&mock_server).await, vec!["/", "/teams"]);
    assert_eq!(report.matches, vec![format!("{}/", base_url)]);

    let written = std::fs::read_to_string(&matches_path).unwrap();
    assert_eq!(written, format!("{}/", base_url));
}

#[tokio::test]
async fn test_matches_written_in_discovery_order() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();
    let table = "<table><tr><td>Points</td></tr></table>";

    mount_page(
        &mock_server,
        "/",
        &format!(r#"{}<a href="/b">B</a><a href="/a">A</a>"#, table),
    )
    .await;
    mount_page(&mock_server, "/b", table).await;
    mount_page(&mock_server, "/a", table).await;

    let temp_dir = tempfile::tempdir().unwrap();
    let matches_path = temp_dir.path().join("out").join("matches.txt");
    let config = create_test_config(
        vec![format!("{}/", base_url)],
        2,
        matches_path.to_str().unwrap(),
    );

    let mut sink = TextFileSink::new(&matches_path);
    run_crawl(config, &mut sink).await.expect("Crawl failed");

    let written = std::fs::read_to_string(&matches_path).unwrap();
    let lines: Vec<&str> = written.lines().collect();
    assert_eq!(
        lines,
        vec![
            format!("{}/", base_url),
            format!("{}/b", base_url),
            format!("{}/a", base_url),
        ]
    );
}

#[tokio::test]
async fn test_mixed_case_seed_requested_verbatim() {
    let mock_server = MockServer::start().await;
    let seed = format!("{}/Racing-Series/Standings/Driver", mock_server.uri());

    mount_page(
        &mock_server,
        "/Racing-Series/Standings/Driver",
        r#"<table><tr><th>2025 F1 Academy Standings</th></tr></table>
           <a href="/racing-series/standings/driver">Same page</a>"#,
    )
    .await;

    let config = create_test_config(vec![seed.clone()], 1, "unused.txt");

    let mut sink = MemorySink::new();
    let report = run_crawl(config, &mut sink).await.expect("Crawl failed");

    assert_eq!(
        requested_paths(&mock_server).await,
        vec!["/Racing-Series/Standings/Driver"]
    );
    assert_eq!(report.matches, vec![seed]);
}

#[tokio::test]
async fn test_seed_query_string_sent() {
    let mock_server = MockServer::start().await;
    let seed = format!("{}/standings?season=2025", mock_server.uri());

    Mock::given(method("GET"))
        .and(path("/standings"))
        .and(query_param("season", "2025"))
        .respond_with(html_page("<table><tr><td>Points</td></tr></table>"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = create_test_config(vec![seed.clone()], 0, "unused.txt");

    let mut sink = MemorySink::new();
    let report = run_crawl(config, &mut sink).await.expect("Crawl failed");

    assert_eq!(report.matches, vec![seed]);
}

#[tokio::test]
async fn test_timeout_does_not_stop_crawl() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(
        &mock_server,
        "/",
        r#"<a href="/slow">Slow</a><a href="/fast">Fast</a>"#,
    )
    .await;

    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(html_page("<table><tr><td>Points</td></tr></table>").set_delay(Duration::from_secs(3)))
        .mount(&mock_server)
        .await;

    mount_page(
        &mock_server,
        "/fast",
        "<table><tr><td>Points</td></tr></table>",
    )
    .await;

    let mut config = create_test_config(vec![format!("{}/", base_url)], 2, "unused.txt");
    config.crawler.request_timeout_secs = 1;

    let mut sink = MemorySink::new();
    let report = run_crawl(config, &mut sink).await.expect("Crawl failed");

    assert_eq!(report.matches, vec![format!("{}/fast", base_url)]);
    assert_eq!(report.stats.count(PageOutcome::FetchFailed), 1);
}

#[tokio::test]
async fn test_max_depth_zero_fetches_only_seed() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(
        &mock_server,
        "/",
        r#"<a href="/one">1</a><a href="/two">2</a>"#,
    )
    .await;

    Mock::given(method("GET"))
        .and(path("/one"))
        .respond_with(html_page(""))
        .expect(0)
        .mount(&mock_server)
        .await;

    let config = create_test_config(vec![format!("{}/", base_url)], 0, "unused.txt");

    let mut sink = MemorySink::new();
    let report = run_crawl(config, &mut sink).await.expect("Crawl failed");

    assert_eq!(requested_paths(&mock_server).await, vec!["/"]);
    assert!(report.matches.is_empty());
    assert_eq!(report.stats.count(PageOutcome::DepthExceeded), 2);
}

#[tokio::test]
async fn test_dynamic_table_marker_detected() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(
        &mock_server,
        "/live",
        r#"<div class="standings"><table id="ponchoTable"></table></div>
           <script src="/render.js"></script>"#,
    )
    .await;

    let config = create_test_config(vec![format!("{}/live", base_url)], 1, "unused.txt");

    let mut sink = MemorySink::new();
    let report = run_crawl(config, &mut sink).await.expect("Crawl failed");

    assert_eq!(report.matches, vec![format!("{}/live", base_url)]);
    assert_eq!(sink.recorded, report.matches);
}

#[tokio::test]
async fn test_error_status_continues_crawl() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(
        &mock_server,
        "/",
        r#"<a href="/gone">Gone</a><a href="/standings">Standings</a>"#,
    )
    .await;

    Mock::given(method("GET"))
        .and(path("/gone"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&mock_server)
        .await;

    mount_page(
        &mock_server,
        "/standings",
        "<table><tr><td>Points</td><td>120</td></tr></table>",
    )
    .await;

    let config = create_test_config(vec![format!("{}/", base_url)], 2, "unused.txt");

    let mut sink = MemorySink::new();
    let report = run_crawl(config, &mut sink).await.expect("Crawl failed");

    assert_eq!(
        requested_paths(&mock_server).await,
        vec!["/", "/gone", "/standings"]
    );
    assert_eq!(report.matches, vec![format!("{}/standings", base_url)]);
    assert_eq!(report.stats.count(PageOutcome::FetchFailed), 1);
}

#[tokio::test]
async fn test_shared_link_fetched_once() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(
        &mock_server,
        "/",
        r#"<a href="/a">A</a><a href="/b">B</a>"#,
    )
    .await;
    mount_page(
        &mock_server,
        "/a",
        r#"<a href="/shared">S</a><a href="/">Home</a>"#,
    )
    .await;
    mount_page(
        &mock_server,
        "/b",
        r##"<a href="/shared?from=b">S</a><a href="/a#top">A</a>"##,
    )
    .await;
    mount_page(&mock_server, "/shared", r#"<a href="/b">B</a>"#).await;

    let config = create_test_config(vec![format!("{}/", base_url)], 5, "unused.txt");

    let mut sink = MemorySink::new();
    let report = run_crawl(config, &mut sink).await.expect("Crawl failed");

    assert_eq!(
        requested_paths(&mock_server).await,
        vec!["/", "/a", "/b", "/shared"]
    );
    assert_eq!(report.stats.urls_enqueued, 4);
}

#[tokio::test]
async fn test_output_failure_is_fatal() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(
        &mock_server,
        "/",
        "<table><tr><td>Points</td></tr></table>",
    )
    .await;

    // The target is an existing directory, so writing the file fails
    let temp_dir = tempfile::tempdir().unwrap();
    let config = create_test_config(
        vec![format!("{}/", base_url)],
        1,
        temp_dir.path().to_str().unwrap(),
    );

    let mut sink = TextFileSink::new(temp_dir.path());
    let result = run_crawl(config, &mut sink).await;

    assert!(matches!(result, Err(ScoutError::Output(_))));
}
