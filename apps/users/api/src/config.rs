use core_config::{AppInfo, FromEnv, app_info, server::ServerConfig};
use database::postgres::PostgresConfig;

pub use core_config::Environment;

/// Application-specific configuration
/// Composes shared config components from the `config` library
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub server: ServerConfig,
    /// `None` when `DATABASE_URL` is unset; users are then kept in memory.
    pub database: Option<PostgresConfig>,
    pub environment: Environment,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let server = ServerConfig::from_env()?;
        let database = PostgresConfig::from_env_optional()?;

        let config = Self {
            app: app_info!(),
            server,
            database,
            environment,
        };
        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> eyre::Result<()> {
        if self.environment.is_production() && self.server.allowed_origins.is_empty() {
            eyre::bail!("CORS_ALLOWED_ORIGIN must be set when APP_ENV=production");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_database() {
        temp_env::with_vars(
            [
                ("APP_ENV", None::<&str>),
                ("HOST", None),
                ("PORT", None),
                ("DATABASE_URL", None),
                ("CORS_ALLOWED_ORIGIN", None),
            ],
            || {
                let config = Config::from_env().unwrap();

                assert_eq!(config.environment, Environment::Development);
                assert_eq!(config.server.address(), "0.0.0.0:8080");
                assert!(config.database.is_none());
                assert_eq!(config.app.name, "users_api");
            },
        );
    }

    #[test]
    fn test_database_url_enables_postgres() {
        temp_env::with_vars(
            [
                ("APP_ENV", None),
                ("DATABASE_URL", Some("postgres://app:secret@db:5432/users")),
                ("DB_MAX_CONNECTIONS", Some("20")),
                ("CORS_ALLOWED_ORIGIN", None),
            ],
            || {
                let config = Config::from_env().unwrap();
                let database = config.database.expect("postgres config");

                assert_eq!(database.url(), "postgres://app:secret@db:5432/users");
                assert_eq!(database.max_connections, 20);
            },
        );
    }

    #[test]
    fn test_production_requires_cors_origins() {
        temp_env::with_vars(
            [
                ("APP_ENV", Some("production")),
                ("DATABASE_URL", None),
                ("CORS_ALLOWED_ORIGIN", None),
            ],
            || {
                let err = Config::from_env().unwrap_err();
                assert!(err.to_string().contains("CORS_ALLOWED_ORIGIN"));
            },
        );
    }

    #[test]
    fn test_production_with_origins() {
        temp_env::with_vars(
            [
                ("APP_ENV", Some("production")),
                ("DATABASE_URL", None),
                (
                    "CORS_ALLOWED_ORIGIN",
                    Some("https://app.example.com,https://admin.example.com"),
                ),
            ],
            || {
                let config = Config::from_env().unwrap();
                assert!(config.environment.is_production());
                assert_eq!(config.server.allowed_origins.len(), 2);
            },
        );
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        temp_env::with_vars(
            [("APP_ENV", None), ("PORT", Some("eighty")), ("DATABASE_URL", None)],
            || {
                assert!(Config::from_env().is_err());
            },
        );
    }
}
