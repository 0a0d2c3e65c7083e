//! Create `jobs` table.
//!
//! Open positions; `requirements`, `benefits` and `tags` are JSON arrays.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Jobs::Table)
                    .if_not_exists()
                    .col(pk_auto(Jobs::Id))
                    .col(string_len(Jobs::Title, 255).not_null())
                    .col(string_len(Jobs::Department, 128).not_null())
                    .col(string_len(Jobs::Location, 128).not_null())
                    .col(string_len(Jobs::Type, 64).not_null())
                    .col(string_len(Jobs::Salary, 128).not_null())
                    .col(text(Jobs::Description).not_null())
                    .col(json_binary(Jobs::Requirements).not_null())
                    .col(json_binary(Jobs::Benefits).not_null())
                    .col(json_binary(Jobs::Tags).not_null())
                    .col(timestamp_with_time_zone(Jobs::PostedDate).not_null())
                    .col(boolean(Jobs::IsActive).not_null().default(true))
                    .col(timestamp_with_time_zone(Jobs::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Jobs::UpdatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Jobs::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Jobs {
    Table,
    Id,
    Title,
    Department,
    Location,
    Type,
    Salary,
    Description,
    Requirements,
    Benefits,
    Tags,
    PostedDate,
    IsActive,
    CreatedAt,
    UpdatedAt,
}
