//! Database connection pool and migration management.

use sqlx::{Pool, Postgres};

/// Type alias for the PostgreSQL connection pool shared across handlers.
pub type DbPool = Pool<Postgres>;

/// Create a new PostgreSQL connection pool.
///
/// The pool is the only path to the store: every handler borrows a
/// connection for the single statement it runs and returns it immediately.
/// Connections are created lazily and reused across requests.
///
/// # Errors
///
/// Returns an error if the connection string is invalid, the server is
/// unreachable, or authentication fails.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    sqlx::postgres::PgPoolOptions::new()
        // Limit concurrent connections
        .max_connections(5)
        .connect(database_url)
        .await
}

/// Run database migrations from the `migrations/` directory.
///
/// Migration files follow the `<timestamp>_<name>.sql` convention and are
/// tracked in the `_sqlx_migrations` table, so each runs only once.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    // The macro embeds migrations at compile time from ./migrations
    sqlx::migrate!("./migrations").run(pool).await
}
