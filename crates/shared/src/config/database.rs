use sqlx::{
    Pool, Postgres,
    postgres::{PgConnectOptions, PgPoolOptions, PgSslMode},
};
use std::str::FromStr;

pub type ConnectionPool = Pool<Postgres>;

pub struct ConnectionManager;

impl ConnectionManager {
    // Certificate verification stays on unless DATABASE_SSL_MODE weakens it.
    pub async fn new_pool(
        connection_string: &str,
        ssl_mode: &str,
    ) -> anyhow::Result<ConnectionPool> {
        let ssl_mode = PgSslMode::from_str(ssl_mode)
            .map_err(|err| anyhow::anyhow!("Invalid DATABASE_SSL_MODE: {}", err))?;

        let options = PgConnectOptions::from_str(connection_string)
            .map_err(|err| anyhow::anyhow!("Invalid DATABASE_URL: {}", err))?
            .ssl_mode(ssl_mode);

        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await
            .map_err(|err| anyhow::anyhow!("Failed to create database connection pool: {}", err))?;

        Ok(pool)
    }
}
