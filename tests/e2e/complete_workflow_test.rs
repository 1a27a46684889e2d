// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! 完整工作流端到端测试
//!
//! 模拟目录站点返回两个条目，触发抓取后通过 `/all/` 读取结果

use crate::integration::helpers::{catalog_item, catalog_page, create_test_app};
use axum::http::StatusCode;
use catalogrs::config::settings::ItemFailurePolicy;
use catalogrs::domain::models::catalog_record::StoredCatalogRecord;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mock_catalog() -> MockServer {
    let mock_server = MockServer::start().await;
    let page = catalog_page(&[
        catalog_item(
            "Air Quality",
            "/dataset/air-quality",
            "Environment Agency —",
            "Hourly readings from monitoring stations",
        ),
        catalog_item("Bus Stops", "/dataset/bus-stops", "Transit Authority", ""),
    ]);

    Mock::given(method("GET"))
        .and(path("/dataset"))
        .and(header("content-type", "text/html"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "text/html; charset=utf-8")
                .set_body_string(page),
        )
        .mount(&mock_server)
        .await;

    mock_server
}

#[tokio::test]
async fn test_complete_scrape_workflow() {
    let mock_server = mock_catalog().await;
    let app = create_test_app(
        &format!("{}/dataset", mock_server.uri()),
        ItemFailurePolicy::Abort,
    )
    .await;

    // Step 1: trigger the scrape
    let scrape_response = app.server.get("/scrape/").await;
    scrape_response.assert_status_ok();
    let inserted: bool = scrape_response.json();
    assert!(inserted);

    // Step 2: read everything back
    let all_response = app.server.get("/all/").await;
    all_response.assert_status_ok();
    let records: Vec<StoredCatalogRecord> = all_response.json();

    assert_eq!(records.len(), 2);
    assert!(records[0].id < records[1].id);

    assert_eq!(records[0].name, "Air Quality");
    assert_eq!(records[0].organization, "Environment Agency");
    assert_eq!(
        records[0].description,
        "Hourly readings from monitoring stations"
    );
    assert_eq!(
        records[0].link,
        "https://catalog.example/dataset/air-quality"
    );

    assert_eq!(records[1].name, "Bus Stops");
    assert_eq!(records[1].organization, "Transit Authority");
    assert_eq!(records[1].description, "");
    assert_eq!(records[1].link, "https://catalog.example/dataset/bus-stops");
}

#[tokio::test]
async fn test_second_scrape_conflicts_on_unique_name() {
    let mock_server = mock_catalog().await;
    let app = create_test_app(
        &format!("{}/dataset", mock_server.uri()),
        ItemFailurePolicy::Abort,
    )
    .await;

    app.server.get("/scrape/").await.assert_status_ok();

    let second = app.server.get("/scrape/").await;
    assert_eq!(second.status_code(), StatusCode::INTERNAL_SERVER_ERROR);

    let records: Vec<StoredCatalogRecord> = app.server.get("/all/").await.json();
    assert_eq!(records.len(), 2);
}
