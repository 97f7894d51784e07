use crate::server::error::config::ConfigError;

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8000";
const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 10;

/// Runtime configuration read from environment variables.
pub struct Config {
    pub database_url: String,
    pub bind_address: String,
    /// Shared secret required on mutating routes; `None` disables the check
    pub api_key: Option<String>,
    pub database_max_connections: u32,
    /// Apply pending migrations before serving requests
    pub run_migrations: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup so parsing can be tested
    /// without touching the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let bind_address =
            lookup("BIND_ADDRESS").unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string());

        let api_key = lookup("API_KEY").filter(|key| !key.is_empty());

        let database_max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
            None => DEFAULT_DATABASE_MAX_CONNECTIONS,
            Some(value) => match value.trim().parse::<u32>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(ConfigError::InvalidEnvValue {
                        var: "DATABASE_MAX_CONNECTIONS".to_string(),
                        reason: format!("expected a positive integer, got {:?}", value),
                    })
                }
            },
        };

        let run_migrations = match lookup("RUN_MIGRATIONS") {
            None => true,
            Some(value) => match value.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" => true,
                "0" | "false" | "no" => false,
                _ => {
                    return Err(ConfigError::InvalidEnvValue {
                        var: "RUN_MIGRATIONS".to_string(),
                        reason: format!("expected true or false, got {:?}", value),
                    })
                }
            },
        };

        Ok(Self {
            database_url,
            bind_address,
            api_key,
            database_max_connections,
            run_migrations,
        })
    }
}
