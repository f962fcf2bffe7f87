/// Schema migrations
///
/// Migrations live in `migrations/` at the crate root, one
/// `{timestamp}_{name}.sql` file each, and are embedded into the binary
/// with `sqlx::migrate!`. Applied versions are recorded in the
/// `_sqlx_migrations` table, so re-running is a no-op.
///
/// # Example
///
/// ```no_run
/// use warden_core::db::migrations::{ensure_database_exists, run_migrations};
/// use warden_core::db::pool::{create_pool, DatabaseConfig};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let url = std::env::var("DATABASE_URL")?;
///
/// ensure_database_exists(&url).await?;
/// let pool = create_pool(DatabaseConfig { url, ..Default::default() }).await?;
/// run_migrations(&pool).await?;
/// # Ok(())
/// # }
/// ```

use sqlx::{migrate::MigrateDatabase, postgres::PgPool, Postgres};
use tracing::{debug, info, warn};

/// Applies every migration not yet recorded in `_sqlx_migrations`
///
/// # Errors
///
/// Returns an error when a migration statement fails or an already-applied
/// migration was edited on disk (checksum mismatch)
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    info!("Applying pending database migrations");

    if let Err(e) = sqlx::migrate!("./migrations").run(pool).await {
        warn!("Migration failed: {}", e);
        return Err(e);
    }

    info!("Database schema is up to date");
    Ok(())
}

/// Creates the target database when it does not exist yet
///
/// A convenience for development and tests; production databases are
/// expected to be provisioned ahead of time.
///
/// # Errors
///
/// Returns an error when the server is unreachable or the connecting role
/// may not create databases
pub async fn ensure_database_exists(database_url: &str) -> Result<(), sqlx::Error> {
    if Postgres::database_exists(database_url).await? {
        debug!("Database already exists");
        return Ok(());
    }

    info!("Database does not exist, creating it");
    Postgres::create_database(database_url).await?;
    info!("Database created");
    Ok(())
}

// Migration tests that need a live database are in tests/pg_store_tests.rs
