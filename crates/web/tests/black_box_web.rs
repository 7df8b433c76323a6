use std::sync::Arc;

use chrono::{DateTime, Duration, TimeZone, Utc};
use reqwest::StatusCode;

use shoefront_catalog::{CatalogItem, NewCatalogItem, RecencyWindow};
use shoefront_core::{FixedClock, MinorUnits, Slug};
use shoefront_web::app::{build_app, AppState};

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn(items: Vec<CatalogItem>) -> Self {
        // Same router as prod, pinned clock, ephemeral port.
        let state = AppState::new(items, RecencyWindow::default(), Arc::new(FixedClock(now())))
            .expect("failed to build state");
        let app = build_app(Arc::new(state));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, handle }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
}

fn shoe(slug: &str, name: &str, sale_price: Option<u64>, released_days_ago: i64) -> CatalogItem {
    CatalogItem::new(NewCatalogItem {
        slug: Slug::parse(slug).unwrap(),
        name: name.to_string(),
        image_src: format!("/assets/{slug}.jpg"),
        price: MinorUnits::new(16500),
        sale_price: sale_price.map(MinorUnits::new),
        release_date: now() - Duration::days(released_days_ago),
        num_of_colors: 2,
    })
    .unwrap()
}

fn catalog() -> Vec<CatalogItem> {
    vec![
        shoe("sale-and-new", "Sale And New", Some(5000), 2),
        shoe("free-old", "Free Old", Some(0), 3650),
        shoe("fresh", "Fresh", None, 5),
        shoe("boundary", "Boundary", None, 30),
        shoe("vintage", "Vintage", None, 400),
    ]
}

#[tokio::test]
async fn health_is_ok() {
    let srv = TestServer::spawn(catalog()).await;

    let res = reqwest::get(format!("{}/health", srv.base_url)).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn api_lists_cards_in_catalog_order_with_variants() {
    let srv = TestServer::spawn(catalog()).await;

    let res = reqwest::get(format!("{}/api/shoes", srv.base_url)).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();

    let items = body["items"].as_array().unwrap();
    let summary: Vec<(&str, &str)> = items
        .iter()
        .map(|c| (c["slug"].as_str().unwrap(), c["variant"].as_str().unwrap()))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("sale-and-new", "on-sale"),
            ("free-old", "on-sale"),
            ("fresh", "new-release"),
            ("boundary", "default"),
            ("vintage", "default"),
        ]
    );

    assert_eq!(body["counts"]["on_sale"], 2);
    assert_eq!(body["counts"]["new_release"], 1);
    assert_eq!(body["counts"]["default"], 2);
    assert_eq!(body["recency_window_days"], 30);
}

#[tokio::test]
async fn api_returns_single_card_with_formatted_prices() {
    let srv = TestServer::spawn(catalog()).await;

    let res = reqwest::get(format!("{}/api/shoes/sale-and-new", srv.base_url))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let card: serde_json::Value = res.json().await.unwrap();

    assert_eq!(card["price"], "$165");
    assert_eq!(card["sale_price"], "$50");
    assert_eq!(card["price_style"], "struck");
    assert_eq!(card["badge"]["label"], "Sale");
    assert_eq!(card["color_label"], "2 Colors");
    assert_eq!(card["href"], "/shoe/sale-and-new");
}

#[tokio::test]
async fn api_unknown_slug_is_json_404() {
    let srv = TestServer::spawn(catalog()).await;

    let res = reqwest::get(format!("{}/api/shoes/nope", srv.base_url)).await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["error"], "not_found");
}

#[tokio::test]
async fn grid_page_renders_all_cards_as_html() {
    let srv = TestServer::spawn(catalog()).await;

    let res = reqwest::get(format!("{}/", srv.base_url)).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert!(res
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.starts_with("text/html")));

    let html = res.text().await.unwrap();
    for name in ["Sale And New", "Free Old", "Fresh", "Boundary", "Vintage"] {
        assert!(html.contains(&format!(">{name}</h3>")), "missing {name}");
    }
    assert_eq!(html.matches(">Sale</div>").count(), 2);
    assert_eq!(html.matches("Just Released!").count(), 1);
}

#[tokio::test]
async fn shoe_page_renders_one_card() {
    let srv = TestServer::spawn(catalog()).await;

    let res = reqwest::get(format!("{}/shoe/fresh", srv.base_url)).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let html = res.text().await.unwrap();
    assert!(html.contains("<title>Fresh</title>"));
    assert!(html.contains("Just Released!"));
    assert!(!html.contains(">Vintage</h3>"));
}

#[tokio::test]
async fn shoe_page_unknown_slug_is_html_404() {
    let srv = TestServer::spawn(catalog()).await;

    let res = reqwest::get(format!("{}/shoe/nope", srv.base_url)).await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let html = res.text().await.unwrap();
    assert!(html.contains("<h1>Not found</h1>"));
}
