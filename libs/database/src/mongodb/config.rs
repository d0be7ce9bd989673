#[cfg(feature = "config")]
use core_config::{ConfigError, FromEnv, env_parse_or};

/// Database used when none is configured.
pub const DEFAULT_DATABASE: &str = "ecommerce";

/// MongoDB connection settings
///
/// ```ignore
/// use database::mongodb::MongoConfig;
///
/// let config = MongoConfig::with_database("mongodb://localhost:27017", "ecommerce")
///     .with_app_name("storefront-api");
/// ```
#[derive(Clone, Debug)]
pub struct MongoConfig {
    /// Format: mongodb://[username:password@]host[:port][/database][?options]
    pub url: String,
    pub database: String,
    /// Reported to the server in connection handshakes
    pub app_name: Option<String>,
    pub max_pool_size: u32,
    pub min_pool_size: u32,
    pub connect_timeout_secs: u64,
    pub server_selection_timeout_secs: u64,
}

impl MongoConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    pub fn with_database(url: impl Into<String>, database: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            database: database.into(),
            ..Self::default()
        }
    }

    pub fn with_app_name(mut self, app_name: impl Into<String>) -> Self {
        self.app_name = Some(app_name.into());
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn database(&self) -> &str {
        &self.database
    }
}

impl Default for MongoConfig {
    fn default() -> Self {
        Self {
            url: "mongodb://localhost:27017".to_string(),
            database: DEFAULT_DATABASE.to_string(),
            app_name: None,
            max_pool_size: 50,
            min_pool_size: 2,
            connect_timeout_secs: 10,
            server_selection_timeout_secs: 30,
        }
    }
}

/// Environment variables:
/// - `MONGODB_URL` or `MONGO_URL` (required)
/// - `MONGODB_DATABASE` or `MONGO_DATABASE` (default: `ecommerce`)
/// - `MONGODB_APP_NAME`
/// - `MONGODB_MAX_POOL_SIZE` (default: 50), `MONGODB_MIN_POOL_SIZE` (default: 2)
/// - `MONGODB_CONNECT_TIMEOUT_SECS` (default: 10)
/// - `MONGODB_SERVER_SELECTION_TIMEOUT_SECS` (default: 30)
#[cfg(feature = "config")]
impl FromEnv for MongoConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let url = std::env::var("MONGODB_URL")
            .or_else(|_| std::env::var("MONGO_URL"))
            .map_err(|_| ConfigError::MissingEnvVar("MONGODB_URL or MONGO_URL".to_string()))?;

        let database = std::env::var("MONGODB_DATABASE")
            .or_else(|_| std::env::var("MONGO_DATABASE"))
            .unwrap_or_else(|_| DEFAULT_DATABASE.to_string());

        let defaults = Self::default();

        Ok(Self {
            url,
            database,
            app_name: std::env::var("MONGODB_APP_NAME").ok(),
            max_pool_size: env_parse_or("MONGODB_MAX_POOL_SIZE", defaults.max_pool_size)?,
            min_pool_size: env_parse_or("MONGODB_MIN_POOL_SIZE", defaults.min_pool_size)?,
            connect_timeout_secs: env_parse_or(
                "MONGODB_CONNECT_TIMEOUT_SECS",
                defaults.connect_timeout_secs,
            )?,
            server_selection_timeout_secs: env_parse_or(
                "MONGODB_SERVER_SELECTION_TIMEOUT_SECS",
                defaults.server_selection_timeout_secs,
            )?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_keeps_defaults() {
        let config = MongoConfig::new("mongodb://db:27017");
        assert_eq!(config.url(), "mongodb://db:27017");
        assert_eq!(config.database(), DEFAULT_DATABASE);
        assert_eq!(config.max_pool_size, 50);
        assert!(config.app_name.is_none());
    }

    #[test]
    fn test_with_database_and_app_name() {
        let config = MongoConfig::with_database("mongodb://db:27017", "shop_test")
            .with_app_name("storefront-api");
        assert_eq!(config.database(), "shop_test");
        assert_eq!(config.app_name.as_deref(), Some("storefront-api"));
    }

    #[cfg(feature = "config")]
    #[test]
    fn test_from_env_primary_names() {
        temp_env::with_vars(
            [
                ("MONGODB_URL", Some("mongodb://primary:27017")),
                ("MONGODB_DATABASE", Some("shop")),
                ("MONGODB_MAX_POOL_SIZE", Some("8")),
            ],
            || {
                let config = MongoConfig::from_env().unwrap();
                assert_eq!(config.url, "mongodb://primary:27017");
                assert_eq!(config.database, "shop");
                assert_eq!(config.max_pool_size, 8);
            },
        );
    }

    #[cfg(feature = "config")]
    #[test]
    fn test_from_env_fallback_names_and_default_database() {
        temp_env::with_vars(
            [
                ("MONGODB_URL", None::<&str>),
                ("MONGO_URL", Some("mongodb://fallback:27017")),
                ("MONGODB_DATABASE", None::<&str>),
                ("MONGO_DATABASE", None::<&str>),
            ],
            || {
                let config = MongoConfig::from_env().unwrap();
                assert_eq!(config.url, "mongodb://fallback:27017");
                assert_eq!(config.database, DEFAULT_DATABASE);
            },
        );
    }

    #[cfg(feature = "config")]
    #[test]
    fn test_from_env_missing_url() {
        temp_env::with_vars(
            [("MONGODB_URL", None::<&str>), ("MONGO_URL", None::<&str>)],
            || {
                let err = MongoConfig::from_env().unwrap_err();
                assert!(err.to_string().contains("MONGODB_URL"));
            },
        );
    }

    #[cfg(feature = "config")]
    #[test]
    fn test_from_env_bad_pool_size() {
        temp_env::with_vars(
            [
                ("MONGODB_URL", Some("mongodb://primary:27017")),
                ("MONGODB_MIN_POOL_SIZE", Some("lots")),
            ],
            || {
                let err = MongoConfig::from_env().unwrap_err();
                assert!(err.to_string().contains("MONGODB_MIN_POOL_SIZE"));
            },
        );
    }
}
