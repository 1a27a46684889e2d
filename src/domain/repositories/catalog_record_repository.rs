// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::catalog_record::{CatalogRecord, StoredCatalogRecord};
use async_trait::async_trait;
use sea_orm::DbErr;
use thiserror::Error;

/// 仓库错误类型
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// 数据库错误，包括名称唯一约束冲突
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

/// 目录记录仓库特质
///
/// 定义目录记录的数据访问接口
#[async_trait]
pub trait CatalogRecordRepository: Send + Sync {
    /// 批量插入记录，成功时返回 `true`
    async fn bulk_insert(&self, records: Vec<CatalogRecord>) -> Result<bool, RepositoryError>;
    /// 插入单条记录并返回带ID的存储结果
    async fn create(&self, record: CatalogRecord) -> Result<StoredCatalogRecord, RepositoryError>;
    /// 按ID升序分页读取记录
    async fn list(&self, skip: u64, limit: u64)
        -> Result<Vec<StoredCatalogRecord>, RepositoryError>;
}
