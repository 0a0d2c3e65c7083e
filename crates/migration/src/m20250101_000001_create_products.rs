//! Create `products` table.
//! Product catalogue entries; `features` is a JSON array of strings.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Products::Table)
                    .if_not_exists()
                    .col(pk_auto(Products::Id))
                    .col(string_len(Products::Name, 255).not_null())
                    .col(string_len(Products::Category, 128).not_null())
                    .col(text(Products::Description).not_null())
                    .col(json_binary(Products::Features).not_null())
                    .col(string_len(Products::Price, 128).not_null())
                    .col(boolean(Products::IsActive).not_null().default(true))
                    .col(timestamp_with_time_zone(Products::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Products::UpdatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Products::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Products { Table, Id, Name, Category, Description, Features, Price, IsActive, CreatedAt, UpdatedAt }
