//! Migrator registering one migration per content table.
//! Indexes are applied last.
pub use sea_orm_migration::prelude::*;

mod m20250101_000001_create_products;
mod m20250101_000002_create_techniques;
mod m20250101_000003_create_cases;
mod m20250101_000004_create_jobs;
mod m20250101_000005_create_news;
mod m20250101_000006_create_contacts;
mod m20250101_000010_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250101_000001_create_products::Migration),
            Box::new(m20250101_000002_create_techniques::Migration),
            Box::new(m20250101_000003_create_cases::Migration),
            Box::new(m20250101_000004_create_jobs::Migration),
            Box::new(m20250101_000005_create_news::Migration),
            Box::new(m20250101_000006_create_contacts::Migration),
            // Indexes should always be applied last
            Box::new(m20250101_000010_add_indexes::Migration),
        ]
    }
}
