//! Database migrations.
//!
//! Uses SQLx embedded migrations, applied at startup unless
//! `DB_MIGRATE_ON_STARTUP=0`.

use sqlx::PgPool;

static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");

pub async fn run(pool: &PgPool) -> anyhow::Result<()> {
    MIGRATOR.run(pool).await?;
    Ok(())
}
