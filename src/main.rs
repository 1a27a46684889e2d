// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use catalogrs::application::usecases::scrape_catalog::ScrapeCatalogUseCase;
use catalogrs::config::settings::Settings;
use catalogrs::domain::repositories::catalog_record_repository::CatalogRecordRepository;
use catalogrs::engines::reqwest_engine::ReqwestEngine;
use catalogrs::engines::traits::ScraperEngine;
use catalogrs::infrastructure::database::connection;
use catalogrs::infrastructure::metrics;
use catalogrs::infrastructure::repositories::catalog_record_repo_impl::CatalogRecordRepositoryImpl;
use catalogrs::presentation::routes;
use catalogrs::utils::telemetry;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

/// 主函数
///
/// 应用程序入口点，负责初始化所有组件并启动服务
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize logging
    telemetry::init_telemetry();
    info!("Starting catalogrs...");

    // 2. Load configuration
    let settings = Settings::new()?;
    info!(
        "Configuration loaded, source page is {}",
        settings.source.url
    );

    metrics::init_metrics(&settings.metrics);

    // 3. Connect to database and apply migrations
    let db = Arc::new(connection::connect_and_migrate(&settings.database).await?);
    info!("Database connection established");

    // 4. Initialize components
    let repository: Arc<dyn CatalogRecordRepository> =
        Arc::new(CatalogRecordRepositoryImpl::new(db.clone()));
    let engine: Arc<dyn ScraperEngine> = Arc::new(ReqwestEngine);
    let use_case = Arc::new(ScrapeCatalogUseCase::new(
        &settings,
        engine,
        repository.clone(),
    )?);

    // 5. Start HTTP server
    let app = routes::app(use_case, repository);

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
