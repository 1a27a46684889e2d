// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::catalog_record::{CatalogRecord, StoredCatalogRecord};
use sea_orm::entity::prelude::*;
use sea_orm::{NotSet, Set};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "datasets")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    pub organization: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub link: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<CatalogRecord> for ActiveModel {
    fn from(record: CatalogRecord) -> Self {
        Self {
            id: NotSet,
            name: Set(record.name),
            organization: Set(record.organization),
            description: Set(record.description),
            link: Set(record.link),
        }
    }
}

impl From<Model> for StoredCatalogRecord {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            organization: model.organization,
            description: model.description,
            link: model.link,
        }
    }
}
