use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

const VISIBILITY_INDEXES: [(&str, &str, &str); 5] = [
    ("idx_products_is_active", "products", "is_active"),
    ("idx_techniques_is_active", "techniques", "is_active"),
    ("idx_cases_is_active", "cases", "is_active"),
    ("idx_jobs_is_active", "jobs", "is_active"),
    ("idx_news_is_published", "news", "is_published"),
];

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Public listings filter on the visibility flag
        for (name, table, column) in VISIBILITY_INDEXES {
            manager
                .create_index(
                    Index::create()
                        .name(name)
                        .table(Alias::new(table))
                        .col(Alias::new(column))
                        .to_owned(),
                )
                .await?;
        }

        // Contacts: inbox ordering by submission time
        manager
            .create_index(
                Index::create()
                    .name("idx_contacts_created_at")
                    .table(Contacts::Table)
                    .col(Contacts::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_contacts_created_at").table(Contacts::Table).to_owned())
            .await?;
        for (name, table, _) in VISIBILITY_INDEXES {
            manager
                .drop_index(Index::drop().name(name).table(Alias::new(table)).to_owned())
                .await?;
        }
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Contacts { Table, CreatedAt }
