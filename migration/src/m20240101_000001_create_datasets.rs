// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Datasets::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Datasets::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Datasets::Name).string().not_null().unique_key())
                    .col(ColumnDef::new(Datasets::Organization).string().not_null())
                    .col(ColumnDef::new(Datasets::Description).text().not_null())
                    .col(ColumnDef::new(Datasets::Link).string().not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Datasets::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Datasets {
    Table,
    Id,
    Name,
    Organization,
    Description,
    Link,
}
