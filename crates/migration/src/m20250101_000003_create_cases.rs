//! Create `cases` table (customer case studies).
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Cases::Table)
                    .if_not_exists()
                    .col(pk_auto(Cases::Id))
                    .col(string_len(Cases::Title, 255).not_null())
                    .col(string_len(Cases::Industry, 128).not_null())
                    .col(text(Cases::Challenge).not_null())
                    .col(text(Cases::Solution).not_null())
                    .col(json_binary(Cases::Results).not_null())
                    .col(boolean(Cases::IsActive).not_null().default(true))
                    .col(timestamp_with_time_zone(Cases::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Cases::UpdatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Cases::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Cases { Table, Id, Title, Industry, Challenge, Solution, Results, IsActive, CreatedAt, UpdatedAt }
