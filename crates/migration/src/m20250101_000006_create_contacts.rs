//! Create `contacts` table.
//!
//! Contact-form submissions. Rows are hard-deleted; `is_processed` tracks follow-up.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Contacts::Table)
                    .if_not_exists()
                    .col(pk_auto(Contacts::Id))
                    .col(string_len(Contacts::Name, 255).not_null())
                    .col(string_len(Contacts::Email, 255).not_null())
                    // Explicitly nullable optional fields
                    .col(ColumnDef::new(Contacts::Company).string_len(255).null())
                    .col(ColumnDef::new(Contacts::Phone).string_len(64).null())
                    .col(text(Contacts::Message).not_null())
                    .col(string_len(Contacts::Interest, 128).not_null())
                    .col(boolean(Contacts::IsProcessed).not_null().default(false))
                    .col(timestamp_with_time_zone(Contacts::CreatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Contacts::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Contacts { Table, Id, Name, Email, Company, Phone, Message, Interest, IsProcessed, CreatedAt }
