// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::integration::helpers::{
    catalog_item, catalog_page, create_test_app, create_test_app_with_timeout,
};
use axum::http::StatusCode;
use catalogrs::config::settings::ItemFailurePolicy;
use catalogrs::domain::models::catalog_record::{CatalogRecord, StoredCatalogRecord};
use catalogrs::domain::repositories::catalog_record_repository::CatalogRecordRepository;
use serde_json::Value;
use std::time::Duration;
use tokio::net::TcpListener;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn record(i: usize) -> CatalogRecord {
    CatalogRecord::new(
        format!("dataset-{:03}", i),
        "Org",
        "Desc",
        format!("https://catalog.example/dataset/{}", i),
    )
}

#[tokio::test]
async fn list_all_is_empty_before_scraping() {
    let app = create_test_app("http://127.0.0.1:9/unused", ItemFailurePolicy::Abort).await;

    let response = app.server.get("/all/").await;

    response.assert_status_ok();
    let records: Vec<StoredCatalogRecord> = response.json();
    assert!(records.is_empty());
}

#[tokio::test]
async fn list_all_returns_at_most_one_hundred_records() {
    let app = create_test_app("http://127.0.0.1:9/unused", ItemFailurePolicy::Abort).await;
    app.repository
        .bulk_insert((0..105).map(record).collect())
        .await
        .unwrap();

    let records: Vec<StoredCatalogRecord> = app.server.get("/all/").await.json();

    assert_eq!(records.len(), 100);
    assert_eq!(records[0].name, "dataset-000");
    assert_eq!(records[99].name, "dataset-099");
}

#[tokio::test]
async fn scrape_returns_500_when_source_is_unreachable() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let app = create_test_app(&format!("http://{}/dataset", addr), ItemFailurePolicy::Abort).await;

    let response = app.server.get("/scrape/").await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn scrape_returns_500_when_source_returns_error_status() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/dataset"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;

    let app = create_test_app(
        &format!("{}/dataset", mock_server.uri()),
        ItemFailurePolicy::Abort,
    )
    .await;

    let response = app.server.get("/scrape/").await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn scrape_aborts_on_malformed_item() {
    let mock_server = MockServer::start().await;
    let page = catalog_page(&[
        catalog_item("Good", "/dataset/good", "Org —", "Desc"),
        r#"<li class="dataset-item has-organization"><div class="notes"></div></li>"#.to_string(),
    ]);
    Mock::given(method("GET"))
        .and(path("/dataset"))
        .respond_with(ResponseTemplate::new(200).set_body_string(page))
        .mount(&mock_server)
        .await;

    let app = create_test_app(
        &format!("{}/dataset", mock_server.uri()),
        ItemFailurePolicy::Abort,
    )
    .await;

    let response = app.server.get("/scrape/").await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(app.repository.list(0, 100).await.unwrap().is_empty());
}

#[tokio::test]
async fn scrape_skips_malformed_item_when_configured() {
    let mock_server = MockServer::start().await;
    let page = catalog_page(&[
        r#"<li class="dataset-item has-organization"><div class="notes"></div></li>"#.to_string(),
        catalog_item("Good", "/dataset/good", "Org —", "Desc"),
    ]);
    Mock::given(method("GET"))
        .and(path("/dataset"))
        .respond_with(ResponseTemplate::new(200).set_body_string(page))
        .mount(&mock_server)
        .await;

    let app = create_test_app(
        &format!("{}/dataset", mock_server.uri()),
        ItemFailurePolicy::Skip,
    )
    .await;

    let response = app.server.get("/scrape/").await;

    response.assert_status_ok();
    response.assert_json(&serde_json::json!(true));

    let stored = app.repository.list(0, 100).await.unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].name, "Good");
    assert_eq!(stored[0].organization, "Org");
}

#[tokio::test]
async fn scrape_times_out_on_stalled_source() {
    let mock_server = MockServer::start().await;
    let page = catalog_page(&[catalog_item("Slow", "/dataset/slow", "Org —", "Desc")]);
    Mock::given(method("GET"))
        .and(path("/dataset"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(page)
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&mock_server)
        .await;

    let app = create_test_app_with_timeout(
        &format!("{}/dataset", mock_server.uri()),
        ItemFailurePolicy::Abort,
        1,
    )
    .await;

    let response = app.server.get("/scrape/").await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert!(body["error"].is_string());
    assert!(app.repository.list(0, 100).await.unwrap().is_empty());
}
