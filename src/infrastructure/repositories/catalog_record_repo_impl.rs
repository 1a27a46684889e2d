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

use crate::domain::models::catalog_record::{CatalogRecord, StoredCatalogRecord};
use crate::domain::repositories::catalog_record_repository::{
    CatalogRecordRepository, RepositoryError,
};
use crate::infrastructure::database::entities::dataset as dataset_entity;
use async_trait::async_trait;
use sea_orm::*;
use std::sync::Arc;
use tracing::debug;

/// 目录记录仓库实现
pub struct CatalogRecordRepositoryImpl {
    /// 数据库连接
    db: Arc<DatabaseConnection>,
}

impl CatalogRecordRepositoryImpl {
    /// 创建新的目录记录仓库实例
    ///
    /// # 参数
    ///
    /// * `db` - 数据库连接
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CatalogRecordRepository for CatalogRecordRepositoryImpl {
    async fn bulk_insert(&self, records: Vec<CatalogRecord>) -> Result<bool, RepositoryError> {
        if records.is_empty() {
            return Ok(true);
        }

        let models = records.into_iter().map(dataset_entity::ActiveModel::from);
        let inserted = dataset_entity::Entity::insert_many(models)
            .exec_without_returning(self.db.as_ref())
            .await?;

        debug!("Inserted {} catalog records", inserted);
        Ok(true)
    }

    async fn create(&self, record: CatalogRecord) -> Result<StoredCatalogRecord, RepositoryError> {
        let model = dataset_entity::ActiveModel::from(record)
            .insert(self.db.as_ref())
            .await?;

        Ok(model.into())
    }

    async fn list(
        &self,
        skip: u64,
        limit: u64,
    ) -> Result<Vec<StoredCatalogRecord>, RepositoryError> {
        let models = dataset_entity::Entity::find()
            .order_by_asc(dataset_entity::Column::Id)
            .offset(skip)
            .limit(limit)
            .all(self.db.as_ref())
            .await?;

        Ok(models.into_iter().map(StoredCatalogRecord::from).collect())
    }
}
