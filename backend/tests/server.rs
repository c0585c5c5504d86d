use std::fs;

use talenthub::{Application, HealthResponse, ServerConfig};
use tempfile::TempDir;

const INDEX_HTML: &str = "<!DOCTYPE html><html><body><div id=\"talenthub\"></div></body></html>";
const STYLES_CSS: &str = "footer { color: white; }";

struct TestApp {
    address: String,
    client: reqwest::Client,
    // Dropping the dir deletes the bundle, so keep it for the test's lifetime.
    _dist: TempDir,
}

async fn spawn_app_with(allowed_origins: &[&str]) -> TestApp {
    let dist = tempfile::tempdir().unwrap();
    fs::write(dist.path().join("index.html"), INDEX_HTML).unwrap();
    fs::write(dist.path().join("styles.css"), STYLES_CSS).unwrap();

    let config = ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        dist_dir: dist.path().to_path_buf(),
        allowed_origins: allowed_origins.iter().map(|o| o.to_string()).collect(),
    };

    let app = Application::build(&config).await.unwrap();
    let address = format!("http://127.0.0.1:{}", app.port());
    tokio::spawn(app.run_until_stopped());

    TestApp {
        address,
        client: reqwest::Client::new(),
        _dist: dist,
    }
}

async fn spawn_app() -> TestApp {
    spawn_app_with(&["*"]).await
}

#[tokio::test]
async fn health_check() {
    let app = spawn_app().await;

    let response = app
        .client
        .get(format!("{}/health", app.address))
        .send()
        .await
        .unwrap();

    assert!(response.status().is_success());
    let body: HealthResponse = response.json().await.unwrap();
    assert_eq!(body, HealthResponse::ok());
}

#[tokio::test]
async fn root_serves_index() {
    let app = spawn_app().await;

    let response = app.client.get(&app.address).send().await.unwrap();

    assert_eq!(response.status(), 200);
    assert_eq!(response.text().await.unwrap(), INDEX_HTML);
}

#[tokio::test]
async fn footer_routes_fall_back_to_index() {
    let app = spawn_app().await;

    for route in [
        "/jobs",
        "/dashboard",
        "/recruiter/jobs",
        "/recruiter/applications",
        "/careers",
        "/privacy",
        "/newsletter",
    ] {
        let response = app
            .client
            .get(format!("{}{}", app.address, route))
            .send()
            .await
            .unwrap();

        assert_eq!(response.status(), 200, "route {}", route);
        assert_eq!(response.text().await.unwrap(), INDEX_HTML, "route {}", route);
    }
}

#[tokio::test]
async fn existing_assets_are_served_as_is() {
    let app = spawn_app().await;

    let response = app
        .client
        .get(format!("{}/styles.css", app.address))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    let content_type = response
        .headers()
        .get("content-type")
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(content_type.starts_with("text/css"), "{}", content_type);
    assert_eq!(response.text().await.unwrap(), STYLES_CSS);
}

#[tokio::test]
async fn any_origin_is_allowed_by_default() {
    let app = spawn_app().await;

    let response = app
        .client
        .get(format!("{}/health", app.address))
        .header("Origin", "https://partner.example.com")
        .send()
        .await
        .unwrap();

    let allow_origin = response
        .headers()
        .get("access-control-allow-origin")
        .unwrap()
        .to_str()
        .unwrap();
    assert_eq!(allow_origin, "*");
}

#[tokio::test]
async fn only_listed_origins_are_allowed() {
    let app = spawn_app_with(&["https://talenthub.com"]).await;

    let allowed = app
        .client
        .get(format!("{}/health", app.address))
        .header("Origin", "https://talenthub.com")
        .send()
        .await
        .unwrap();
    assert_eq!(
        allowed.headers().get("access-control-allow-origin").unwrap(),
        "https://talenthub.com"
    );

    let other = app
        .client
        .get(format!("{}/health", app.address))
        .header("Origin", "https://elsewhere.example.com")
        .send()
        .await
        .unwrap();
    assert!(other.headers().get("access-control-allow-origin").is_none());
}
