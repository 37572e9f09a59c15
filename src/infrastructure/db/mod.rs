use std::time::Duration;

use sqlx::{Executor, Pool, Postgres};

use crate::bootstrap::config::Config;

pub type PgPool = Pool<Postgres>;

/// Connects with explicit pool sizing and timeouts: a bounded acquire wait
/// plus a per-connection statement timeout, so no request can hang on the
/// database longer than configured.
pub async fn connect_pool(cfg: &Config) -> anyhow::Result<PgPool> {
    let statement_timeout = format!("SET statement_timeout = {}", cfg.db_statement_timeout_ms);
    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(cfg.db_max_connections)
        .acquire_timeout(Duration::from_secs(cfg.db_acquire_timeout_secs))
        .after_connect(move |conn, _meta| {
            let statement_timeout = statement_timeout.clone();
            Box::pin(async move {
                conn.execute(statement_timeout.as_str()).await?;
                Ok(())
            })
        })
        .connect(&cfg.database_url)
        .await?;
    Ok(pool)
}

pub async fn migrate(pool: &PgPool) -> anyhow::Result<()> {
    // Uses compile-time embedded migrations under ./migrations
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}

pub mod repositories;
