/// Configuration management for warden
///
/// This module loads configuration from environment variables and provides
/// a type-safe configuration struct. There is no server to configure; the
/// only knobs are the database connection.
///
/// # Environment Variables
///
/// - `DATABASE_URL`: PostgreSQL connection string (required)
/// - `DATABASE_MAX_CONNECTIONS`: Pool size ceiling (default: 10)
/// - `DATABASE_MIN_CONNECTIONS`: Idle connections to keep warm (default: 2)
/// - `RUST_LOG`: Log level filter (default: info)
///
/// # Example
///
/// ```no_run
/// use warden_core::config::Config;
///
/// # fn example() -> anyhow::Result<()> {
/// let config = Config::from_env()?;
/// println!("Pool ceiling: {}", config.database.max_connections);
/// # Ok(())
/// # }
/// ```

use crate::db::pool::DatabaseConfig;
use std::env;

/// Complete application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Database configuration
    pub database: DatabaseConfig,
}

impl Config {
    /// Loads configuration from environment variables
    ///
    /// Reads a `.env` file first if one is present (for development).
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `DATABASE_URL` is missing
    /// - An optional variable has a non-numeric value
    ///
    /// # Example
    ///
    /// ```no_run
    /// use warden_core::config::Config;
    ///
    /// # fn example() -> anyhow::Result<()> {
    /// let config = Config::from_env()?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_env() -> anyhow::Result<Self> {
        // Load .env file if present (for development)
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL")
            .map_err(|_| anyhow::anyhow!("DATABASE_URL environment variable is required"))?;

        let max_connections = env::var("DATABASE_MAX_CONNECTIONS")
            .unwrap_or_else(|_| "10".to_string())
            .parse::<u32>()?;

        let min_connections = env::var("DATABASE_MIN_CONNECTIONS")
            .unwrap_or_else(|_| "2".to_string())
            .parse::<u32>()?;

        Ok(Self {
            database: DatabaseConfig {
                url: database_url,
                max_connections,
                min_connections,
                ..Default::default()
            },
        })
    }
}
