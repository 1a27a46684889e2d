// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum_test::TestServer;
use catalogrs::application::usecases::scrape_catalog::ScrapeCatalogUseCase;
use catalogrs::config::settings::{ItemFailurePolicy, Settings};
use catalogrs::domain::repositories::catalog_record_repository::CatalogRecordRepository;
use catalogrs::engines::reqwest_engine::ReqwestEngine;
use catalogrs::infrastructure::repositories::catalog_record_repo_impl::CatalogRecordRepositoryImpl;
use catalogrs::presentation::routes;
use migration::{Migrator, MigratorTrait};
use sea_orm::Database;
use std::sync::Arc;

pub const SOURCE_DOMAIN: &str = "https://catalog.example";

#[allow(dead_code)]
pub struct TestApp {
    pub server: TestServer,
    pub repository: Arc<CatalogRecordRepositoryImpl>,
}

/// 创建使用内存数据库的测试应用
///
/// # 参数
///
/// * `source_url` - 抓取的目录页面地址，通常指向 wiremock 服务
/// * `policy` - 条目提取失败策略
pub async fn create_test_app(source_url: &str, policy: ItemFailurePolicy) -> TestApp {
    create_test_app_with_timeout(source_url, policy, 5).await
}

/// 创建指定抓取超时（秒）的测试应用
pub async fn create_test_app_with_timeout(
    source_url: &str,
    policy: ItemFailurePolicy,
    timeout_secs: u64,
) -> TestApp {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    Migrator::up(&db, None).await.unwrap();
    let repository = Arc::new(CatalogRecordRepositoryImpl::new(Arc::new(db)));

    let mut settings = Settings::with_source(SOURCE_DOMAIN, source_url).unwrap();
    settings.scraper.timeout_secs = timeout_secs;
    settings.scraper.on_item_error = policy;

    let shared: Arc<dyn CatalogRecordRepository> = repository.clone();
    let use_case = ScrapeCatalogUseCase::new(&settings, Arc::new(ReqwestEngine), shared.clone())
        .expect("selectors should compile");

    let server = TestServer::new(routes::app(Arc::new(use_case), shared)).unwrap();

    TestApp { server, repository }
}

/// 生成一个目录条目片段
pub fn catalog_item(name: &str, href: &str, organization: &str, description: &str) -> String {
    format!(
        r#"<li class="dataset-item has-organization">
            <div class="dataset-content">
                <h3 class="dataset-heading"><a href="{href}">{name}</a></h3>
                <div class="notes">
                    <p class="dataset-organization">{organization}</p>
                    <div>{description}</div>
                </div>
            </div>
        </li>"#
    )
}

/// 用给定条目生成完整的目录页面
pub fn catalog_page(items: &[String]) -> String {
    format!(
        r#"<!DOCTYPE html>
        <html>
            <head><title>Datasets</title></head>
            <body>
                <ul class="dataset-list unstyled">{}</ul>
            </body>
        </html>"#,
        items.join("\n")
    )
}
