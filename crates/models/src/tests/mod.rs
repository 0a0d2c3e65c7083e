
use migration::MigratorTrait;
use sea_orm::DatabaseConnection;

/// Fresh in-memory database with every migration applied.
pub(crate) async fn setup_test_db() -> anyhow::Result<DatabaseConnection> {
    let db = crate::db::connect_in_memory().await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}
