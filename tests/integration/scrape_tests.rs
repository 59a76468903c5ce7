use acervo::catalog::CatalogScraper;
use acervo::config::Config;
use acervo::fetch::HttpClient;
use std::sync::Arc;
use std::time::{Duration, Instant};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Builds a client + scraper pair against a mock origin
fn build_scraper(base_url: &str, respect_robots: bool, max_concurrency: u32) -> CatalogScraper {
    let config: Config = toml::from_str(&format!(
        r#"
        [scrape]
        base-url = "{base_url}"
        respect-robots = {respect_robots}
        max-concurrency = {max_concurrency}
        request-timeout-secs = 5

        [cache]
        ttl-secs = 600
        max-entries = 64
    "#
    ))
    .expect("test config");
    let http = Arc::new(HttpClient::new(&config).expect("http client"));
    CatalogScraper::new(http, base_url)
}

fn html_response(body: &str) -> ResponseTemplate {
    ResponseTemplate::new(200)
        .set_body_string(body)
        .insert_header("content-type", "text/html; charset=utf-8")
}

#[tokio::test]
async fn test_home_end_to_end() {
    let server = MockServer::start().await;
    let body = r#"
        <html><body>
            <div class="featured">
                <a href="/title/abc" title="Abc"></a>
            </div>
            <div class="section">
                <h2>Top</h2>
                <a href="/title/xyz" title="Xyz"></a>
            </div>
        </body></html>
    "#;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html_response(body))
        .mount(&server)
        .await;

    let scraper = build_scraper(&server.uri(), false, 6);
    let home = scraper.fetch_home().await.unwrap();

    assert_eq!(home.featured.len(), 1);
    assert_eq!(home.featured[0].id, "title/abc");
    assert_eq!(home.featured[0].slug, "title/abc");
    assert_eq!(home.featured[0].title, "Abc");

    assert_eq!(home.sections.len(), 1);
    assert_eq!(home.sections[0].id, "top");
    assert_eq!(home.sections[0].title, "Top");
    assert_eq!(home.sections[0].items.len(), 1);
    assert_eq!(home.sections[0].items[0].id, "title/xyz");
}

#[tokio::test]
async fn test_home_served_from_cache_on_second_call() {
    let server = MockServer::start().await;
    let body = r#"<div class="section"><h2>Top</h2><a href="/t/1" title="One"></a></div>"#;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html_response(body))
        .expect(1)
        .mount(&server)
        .await;

    let scraper = build_scraper(&server.uri(), false, 6);
    let first = scraper.fetch_home().await.unwrap();
    let second = scraper.fetch_home().await.unwrap();
    assert_eq!(first, second);
    // The expect(1) on the mock verifies no second network call happened.
}

#[tokio::test]
async fn test_search_falls_back_to_path_form() {
    let server = MockServer::start().await;
    // Query-string form answers with a page containing no items.
    Mock::given(method("GET"))
        .and(path("/"))
        .and(query_param("s", "abc"))
        .respond_with(html_response("<p>no results markup</p>"))
        .expect(1)
        .mount(&server)
        .await;
    // Path form answers with a grid.
    Mock::given(method("GET"))
        .and(path("/search/abc"))
        .respond_with(html_response(
            r#"<div class="item"><a href="/title/found">Found</a></div>"#,
        ))
        .expect(1)
        .mount(&server)
        .await;

    let scraper = build_scraper(&server.uri(), false, 6);
    let items = scraper.search("abc").await.unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].slug, "title/found");
}

#[tokio::test]
async fn test_search_stops_at_first_matching_form() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .and(query_param("s", "abc"))
        .respond_with(html_response(
            r#"<div class="item"><a href="/title/first-form">First</a></div>"#,
        ))
        .expect(1)
        .mount(&server)
        .await;
    // The path form must never be tried.
    Mock::given(method("GET"))
        .and(path("/search/abc"))
        .respond_with(html_response("should not be fetched"))
        .expect(0)
        .mount(&server)
        .await;

    let scraper = build_scraper(&server.uri(), false, 6);
    let items = scraper.search("abc").await.unwrap();
    assert_eq!(items[0].slug, "title/first-form");
}

#[tokio::test]
async fn test_robots_disallow_fails_operation_with_451() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/robots.txt"))
        .respond_with(ResponseTemplate::new(200).set_body_string("Disallow: /private"))
        .expect(1)
        .mount(&server)
        .await;

    let scraper = build_scraper(&server.uri(), true, 6);
    let err = scraper.fetch_title("private/movie").await.unwrap_err();
    assert!(matches!(
        err,
        acervo::AcervoError::Status { status: 451, .. }
    ));

    // A second blocked call reuses the memoized policy (expect(1) above).
    let err = scraper.fetch_title("private/other").await.unwrap_err();
    assert!(matches!(
        err,
        acervo::AcervoError::Status { status: 451, .. }
    ));
}

#[tokio::test]
async fn test_concurrency_ceiling_throttles_fetches() {
    let server = MockServer::start().await;
    for i in 0..4 {
        Mock::given(method("GET"))
            .and(path(format!("/slow/{i}")))
            .respond_with(html_response("<p>slow</p>").set_delay(Duration::from_millis(150)))
            .mount(&server)
            .await;
    }

    let config: Config = toml::from_str(&format!(
        r#"
        [scrape]
        base-url = "{}"
        respect-robots = false
        max-concurrency = 2
    "#,
        server.uri()
    ))
    .unwrap();
    let http = HttpClient::new(&config).unwrap();

    let urls: Vec<String> = (0..4).map(|i| format!("{}/slow/{i}", server.uri())).collect();
    let start = Instant::now();
    let (a, b, c, d) = tokio::join!(
        http.get(&urls[0]),
        http.get(&urls[1]),
        http.get(&urls[2]),
        http.get(&urls[3]),
    );
    let elapsed = start.elapsed();

    for resp in [a.unwrap(), b.unwrap(), c.unwrap(), d.unwrap()] {
        assert_eq!(resp.status, 200);
    }
    // With 4 requests of 150ms each and only 2 slots, at least two
    // serialized batches must have run.
    assert!(
        elapsed >= Duration::from_millis(280),
        "4 slow fetches finished in {:?}; limiter not enforced",
        elapsed
    );
}

#[tokio::test]
async fn test_title_details_end_to_end() {
    let server = MockServer::start().await;
    let body = r#"
        <html><body>
            <h1>Grande Série</h1>
            <div class="synopsis">Nota 8,7. Uma saga lançada em 2019.</div>
            <div class="poster"><img src="/img/poster.jpg"></div>
            <div class="genres"><a>Drama</a><a>Aventura</a></div>
            <ul class="episodes">
                <li><a href="/serie/grande/ep-1">Episódio 1</a></li>
                <li><a href="/serie/grande/ep-2">Episódio 2</a></li>
            </ul>
        </body></html>
    "#;
    Mock::given(method("GET"))
        .and(path("/serie/grande"))
        .respond_with(html_response(body))
        .mount(&server)
        .await;

    let scraper = build_scraper(&server.uri(), false, 6);
    let details = scraper.fetch_title("serie/grande").await.unwrap();

    assert_eq!(details.item.title, "Grande Série");
    assert_eq!(details.item.slug, "serie/grande");
    assert_eq!(details.item.year, Some(2019));
    assert_eq!(details.item.rating, Some(8.7));
    assert_eq!(
        details.item.poster.as_ref().unwrap().url,
        format!("{}/img/poster.jpg", server.uri())
    );
    assert_eq!(details.genres, vec!["Drama", "Aventura"]);
    assert_eq!(details.episodes.len(), 2);
    assert_eq!(details.episodes[0].id, "serie/grande/ep-1");
    assert_eq!(details.episodes[1].number, Some(2));
}

#[tokio::test]
async fn test_stream_inline_sources() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/filme/x"))
        .respond_with(html_response(
            r#"<video><source src="/v/master.m3u8" type="application/x-mpegURL"></video>"#,
        ))
        .mount(&server)
        .await;

    let scraper = build_scraper(&server.uri(), false, 6);
    let resp = scraper.resolve_stream("filme/x", None).await.unwrap();
    assert_eq!(resp.item_id, "filme/x");
    assert_eq!(resp.streams.len(), 1);
    assert_eq!(
        resp.streams[0].url,
        format!("{}/v/master.m3u8", server.uri())
    );
    assert_eq!(
        resp.streams[0].mime_type.as_deref(),
        Some("application/x-mpegURL")
    );
}

#[tokio::test]
async fn test_stream_episode_follow_overrides_inline() {
    let server = MockServer::start().await;
    // Title page has both inline sources and a link to the episode page.
    Mock::given(method("GET"))
        .and(path("/serie/x"))
        .respond_with(html_response(
            r#"<video><source src="/inline/title.mp4"></video>
               <a href="/serie/x/ep-2">Episódio 2</a>"#,
        ))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/serie/x/ep-2"))
        .respond_with(html_response(
            r#"<p>player: https://cdn.example.com/serie-x-ep2.m3u8</p>"#,
        ))
        .mount(&server)
        .await;

    let scraper = build_scraper(&server.uri(), false, 6);
    let resp = scraper.resolve_stream("serie/x", Some("ep-2")).await.unwrap();

    // The episode page's stream replaces the inline candidates entirely.
    assert_eq!(resp.streams.len(), 1);
    assert_eq!(resp.streams[0].url, "https://cdn.example.com/serie-x-ep2.m3u8");
}

#[tokio::test]
async fn test_stream_episode_follow_failure_keeps_inline() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/serie/y"))
        .respond_with(html_response(
            r#"<video><source src="/inline/title.mp4"></video>
               <a href="/serie/y/ep-5">Episódio 5</a>"#,
        ))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/serie/y/ep-5"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let scraper = build_scraper(&server.uri(), false, 6);
    let resp = scraper.resolve_stream("serie/y", Some("ep-5")).await.unwrap();

    // A failed episode page leaves the inline results in place.
    assert_eq!(resp.streams.len(), 1);
    assert_eq!(
        resp.streams[0].url,
        format!("{}/inline/title.mp4", server.uri())
    );
}

#[tokio::test]
async fn test_sections_only_operation() {
    let server = MockServer::start().await;
    let body = r#"
        <div class="featured"><a href="/t/feat" title="Feat"></a></div>
        <section><h2>Lançamentos</h2><a href="/t/new" title="New"></a></section>
    "#;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html_response(body))
        .mount(&server)
        .await;

    let scraper = build_scraper(&server.uri(), false, 6);
    let sections = scraper.fetch_sections().await.unwrap();
    assert_eq!(sections.len(), 1);
    assert_eq!(sections[0].id, "lançamentos");
    assert_eq!(sections[0].items[0].slug, "t/new");
}
