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

use axum::extract::{Extension, Json};
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::info;

use crate::{
    application::usecases::scrape_catalog::ScrapeCatalogUseCase,
    domain::models::catalog_record::StoredCatalogRecord,
    domain::repositories::catalog_record_repository::CatalogRecordRepository,
    presentation::errors::AppError,
};

/// `/all/` 固定返回的分页窗口
pub const LIST_SKIP: u64 = 0;
pub const LIST_LIMIT: u64 = 100;

/// 存活检查
pub async fn read_root() -> Json<Value> {
    Json(json!({ "Hello": "World" }))
}

/// 执行一次完整的抓取并写入数据库
///
/// # 返回值
///
/// 批量写入的结果；任何失败都返回 500
pub async fn scrape(
    Extension(use_case): Extension<Arc<ScrapeCatalogUseCase>>,
) -> Result<Json<bool>, AppError> {
    info!("Scrape triggered");
    let inserted = use_case.execute().await?;
    Ok(Json(inserted))
}

/// 返回已保存的目录记录
pub async fn list_all(
    Extension(repository): Extension<Arc<dyn CatalogRecordRepository>>,
) -> Result<Json<Vec<StoredCatalogRecord>>, AppError> {
    let records = repository.list(LIST_SKIP, LIST_LIMIT).await?;
    Ok(Json(records))
}
