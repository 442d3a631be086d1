mod common;

use common::{StubSource, create_test_server, create_test_state, create_test_state_with_ads_dir};

#[tokio::test]
async fn test_ads_txt_generated_for_host_without_file() {
    let server = create_test_server(create_test_state(StubSource::default()));

    let response = server
        .get("/ads.txt")
        .add_header("Host", "sports.example.com")
        .await;

    response.assert_status_ok();

    let body = response.text();
    assert!(body.contains("google.com, pub-7472198107183412, DIRECT, f08c47fec0942fa0"));
    assert!(body.contains("# Ads.txt for sports.example.com"));
}

#[tokio::test]
async fn test_ads_txt_serves_deployed_file() {
    let dir = tempfile::tempdir().unwrap();
    let file_body = "google.com, pub-999, DIRECT, f08c47fec0942fa0\n";
    std::fs::write(dir.path().join("sports.example.com.txt"), file_body).unwrap();

    let state = create_test_state_with_ads_dir(StubSource::default(), dir.path().to_path_buf());
    let server = create_test_server(state);

    let response = server
        .get("/ads.txt")
        .add_header("Host", "sports.example.com")
        .await;

    response.assert_status_ok();
    assert_eq!(response.text(), file_body);
}

#[tokio::test]
async fn test_ads_txt_host_lookup_is_lowercased() {
    let dir = tempfile::tempdir().unwrap();
    let file_body = "google.com, pub-999, DIRECT, f08c47fec0942fa0\n";
    std::fs::write(dir.path().join("sports.example.com.txt"), file_body).unwrap();

    let state = create_test_state_with_ads_dir(StubSource::default(), dir.path().to_path_buf());
    let server = create_test_server(state);

    let response = server
        .get("/ads.txt")
        .add_header("Host", "SPORTS.Example.COM")
        .await;

    assert_eq!(response.text(), file_body);
}

#[tokio::test]
async fn test_ads_txt_rejects_path_escaping_host() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("secret.txt"), "do not serve\n").unwrap();

    let state = create_test_state_with_ads_dir(StubSource::default(), dir.path().to_path_buf());
    let server = create_test_server(state);

    let response = server
        .get("/ads.txt")
        .add_header("Host", "../secret")
        .await;

    // The hostile host falls through to the generated default.
    response.assert_status_ok();

    let body = response.text();
    assert!(!body.contains("do not serve"));
    assert!(body.contains("google.com, pub-"));
}

#[tokio::test]
async fn test_ads_txt_content_type_and_cache_control() {
    let server = create_test_server(create_test_state(StubSource::default()));

    let response = server
        .get("/ads.txt")
        .add_header("Host", "sports.example.com")
        .await;

    let content_type = response.header("content-type");
    assert_eq!(content_type, "text/plain; charset=utf-8");

    let cache_control = response.header("cache-control");
    assert_eq!(cache_control, "public, max-age=86400");
}
