// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::application::usecases::scrape_catalog::ScrapeCatalogUseCase;
use crate::domain::repositories::catalog_record_repository::CatalogRecordRepository;
use crate::presentation::handlers::catalog_handler;
use axum::{routing::get, Extension, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// 创建应用路由
///
/// # 返回值
///
/// 返回未绑定任何状态的路由
pub fn routes() -> Router {
    Router::new()
        .route("/", get(catalog_handler::read_root))
        .route("/scrape/", get(catalog_handler::scrape))
        .route("/all/", get(catalog_handler::list_all))
}

/// 创建带有依赖和请求追踪的完整应用
pub fn app(
    use_case: Arc<ScrapeCatalogUseCase>,
    repository: Arc<dyn CatalogRecordRepository>,
) -> Router {
    routes()
        .layer(Extension(use_case))
        .layer(Extension(repository))
        .layer(TraceLayer::new_for_http())
}
