mod common;

use common::{StubSource, create_test_server, create_test_state, sample_listing};

#[tokio::test]
async fn test_home_renders_grouped_listing() {
    let source = StubSource {
        listing: sample_listing(),
        ..Default::default()
    };
    let server = create_test_server(create_test_state(source));

    let response = server
        .get("/")
        .add_header("Host", "topnews.daily24.blog")
        .await;

    response.assert_status_ok();

    let body = response.text();
    assert!(body.contains("Top News Daily"));
    assert!(body.contains("NFL"));
    assert!(body.contains("Entertainment"));
    assert!(body.contains("Big Match Tonight"));
    assert!(body.contains("Festival Season Opens"));
}

#[tokio::test]
async fn test_home_article_links_embed_id() {
    let source = StubSource {
        listing: sample_listing(),
        ..Default::default()
    };
    let server = create_test_server(create_test_state(source));

    let response = server
        .get("/")
        .add_header("Host", "topnews.daily24.blog")
        .await;

    let body = response.text();
    assert!(body.contains(r#"href="/big-match-tonight-ab124bdc1534""#));
}

#[tokio::test]
async fn test_home_normalizes_thumbnail_urls() {
    let source = StubSource {
        listing: sample_listing(),
        ..Default::default()
    };
    let server = create_test_server(create_test_state(source));

    let response = server
        .get("/")
        .add_header("Host", "topnews.daily24.blog")
        .await;

    let body = response.text();
    assert!(body.contains("https://cdn.example.com/thumb.webp"));
    assert!(!body.contains("_300x300"));
}

#[tokio::test]
async fn test_home_degrades_on_listing_failure() {
    let source = StubSource {
        listing_fails: true,
        ..Default::default()
    };
    let server = create_test_server(create_test_state(source));

    let response = server
        .get("/")
        .add_header("Host", "topnews.daily24.blog")
        .await;

    // Degraded, not broken: the notice renders with a normal status.
    response.assert_status_ok();

    let body = response.text();
    assert!(body.contains("News is temporarily unavailable"));
    assert!(!body.contains("Big Match Tonight"));
}

#[tokio::test]
async fn test_home_sets_page_cache_control() {
    let source = StubSource {
        listing: sample_listing(),
        ..Default::default()
    };
    let server = create_test_server(create_test_state(source));

    let response = server
        .get("/")
        .add_header("Host", "topnews.daily24.blog")
        .await;

    let cache_control = response.header("cache-control");
    assert_eq!(
        cache_control,
        "public, max-age=60, s-maxage=300, stale-while-revalidate=600"
    );
}

#[tokio::test]
async fn test_home_unregistered_host_gets_generated_site_name() {
    let source = StubSource {
        listing: sample_listing(),
        ..Default::default()
    };
    let server = create_test_server(create_test_state(source));

    let response = server
        .get("/")
        .add_header("Host", "sports.example.com")
        .await;

    response.assert_status_ok();
    assert!(response.text().contains("Sports News"));
}

#[tokio::test]
async fn test_home_carries_tenant_header_scripts() {
    let source = StubSource {
        listing: sample_listing(),
        ..Default::default()
    };
    let server = create_test_server(create_test_state(source));

    let response = server
        .get("/")
        .add_header("Host", "topnews.daily24.blog")
        .await;

    let body = response.text();
    assert!(body.contains("googletagmanager.com"));
    assert!(body.contains("adsbygoogle.js"));
}
