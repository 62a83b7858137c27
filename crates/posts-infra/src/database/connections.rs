#[cfg(feature = "mysql")]
use std::sync::Arc;
#[cfg(feature = "mysql")]
use std::time::Duration;

#[cfg(feature = "mysql")]
use sea_orm::{ConnectOptions, Database, DbConn, DbErr};

/// Configuration for the posts database pool.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
}

impl DatabaseConfig {
    /// Build a `mysql://` URL from its parts. An empty password is omitted.
    pub fn mysql_url(host: &str, port: u16, user: &str, password: &str, database: &str) -> String {
        if password.is_empty() {
            format!("mysql://{user}@{host}:{port}/{database}")
        } else {
            format!("mysql://{user}:{password}@{host}:{port}/{database}")
        }
    }

    /// The URL without its credentials, safe to log.
    pub fn redacted_url(&self) -> String {
        match (self.url.split_once("://"), self.url.rfind('@')) {
            (Some((scheme, _)), Some(at)) => format!("{}://***@{}", scheme, &self.url[at + 1..]),
            _ => self.url.clone(),
        }
    }
}

/// Pooled connection to the posts database.
///
/// Created once at startup and shared by every worker and repository.
#[cfg(feature = "mysql")]
#[derive(Clone)]
pub struct DatabasePool {
    conn: Arc<DbConn>,
}

#[cfg(feature = "mysql")]
impl DatabasePool {
    /// Open the pool and verify that the server answers.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, DbErr> {
        tracing::info!(database = %config.redacted_url(), "Initializing database pool...");

        let opts = ConnectOptions::new(&config.url)
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .connect_timeout(Duration::from_secs(10))
            .idle_timeout(Duration::from_secs(300))
            .sqlx_logging(true)
            .to_owned();

        let conn = Database::connect(opts).await?;
        conn.ping().await?;

        tracing::info!("Connected to MySQL (pool: {})", config.max_connections);

        Ok(Self {
            conn: Arc::new(conn),
        })
    }

    /// Shared handle to the connection, for repositories.
    pub fn connection(&self) -> Arc<DbConn> {
        Arc::clone(&self.conn)
    }

    /// Round-trip to the server, used by the health endpoint.
    pub async fn ping(&self) -> Result<(), DbErr> {
        self.conn.ping().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(url: &str) -> DatabaseConfig {
        DatabaseConfig {
            url: url.to_string(),
            max_connections: 10,
            min_connections: 1,
        }
    }

    #[test]
    fn test_mysql_url() {
        assert_eq!(
            DatabaseConfig::mysql_url("db", 3306, "app", "s3cret", "blog"),
            "mysql://app:s3cret@db:3306/blog"
        );
        assert_eq!(
            DatabaseConfig::mysql_url("localhost", 3307, "root", "", "blog"),
            "mysql://root@localhost:3307/blog"
        );
    }

    #[test]
    fn test_redacted_url_hides_credentials() {
        let cfg = config("mysql://app:s3cret@db:3306/blog");
        assert_eq!(cfg.redacted_url(), "mysql://***@db:3306/blog");

        let cfg = config("mysql://db:3306/blog");
        assert_eq!(cfg.redacted_url(), "mysql://db:3306/blog");
    }
}
