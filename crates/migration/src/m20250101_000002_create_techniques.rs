//! Create `techniques` table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Techniques::Table)
                    .if_not_exists()
                    .col(pk_auto(Techniques::Id))
                    .col(string_len(Techniques::Name, 255).not_null())
                    .col(text(Techniques::Description).not_null())
                    .col(json_binary(Techniques::Features).not_null())
                    .col(string_len(Techniques::Category, 128).not_null())
                    .col(boolean(Techniques::IsActive).not_null().default(true))
                    .col(timestamp_with_time_zone(Techniques::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Techniques::UpdatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Techniques::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Techniques { Table, Id, Name, Description, Features, Category, IsActive, CreatedAt, UpdatedAt }
