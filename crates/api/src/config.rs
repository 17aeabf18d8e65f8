use std::str::FromStr;
use std::time::Duration;

use axum::http::HeaderValue;
use folio_db::DatabaseConfig;

/// Invalid environment value detected at startup.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must be {expected}, got '{value}'")]
    Invalid {
        var: &'static str,
        expected: &'static str,
        value: String,
    },

    #[error("Invalid CORS origin '{0}'")]
    CorsOrigin(String),
}

/// Which origins the CORS layer accepts.
#[derive(Debug, Clone, PartialEq)]
pub enum CorsOrigins {
    /// `*`: any origin, without credentials.
    Any,
    List(Vec<HeaderValue>),
}

/// Output format of the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    pub cors_origins: CorsOrigins,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    pub database: DatabaseConfig,
    /// Apply the embedded migrations on startup (default: `false`).
    pub run_migrations: bool,
    pub log_format: LogFormat,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                   | Default       |
    /// |---------------------------|---------------|
    /// | `HOST` (IP or hostname)   | `0.0.0.0`     |
    /// | `PORT`                    | `3000`        |
    /// | `CORS_ORIGINS`            | `*`           |
    /// | `REQUEST_TIMEOUT_SECS`    | `30`          |
    /// | `DATABASE_URL`            | unset         |
    /// | `DB_HOST`                 | `localhost`   |
    /// | `DB_PORT`                 | `3306`        |
    /// | `DB_USER`                 | `root`        |
    /// | `DB_PASSWORD`             | empty         |
    /// | `DB_NAME`                 | `portfolio`   |
    /// | `DB_MAX_CONNECTIONS`      | `2`           |
    /// | `DB_ACQUIRE_TIMEOUT_SECS` | `10`          |
    /// | `RUN_MIGRATIONS`          | `false`       |
    /// | `LOG_FORMAT`              | `pretty`      |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an explicit variable source.
    pub fn from_vars<F>(var: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let text = |key: &str, default: &str| var(key).unwrap_or_else(|| default.to_string());

        let database = DatabaseConfig {
            url: var("DATABASE_URL").filter(|u| !u.is_empty()),
            host: text("DB_HOST", "localhost"),
            port: parse(&var, "DB_PORT", 3306, "a valid port")?,
            user: text("DB_USER", "root"),
            password: text("DB_PASSWORD", ""),
            database: text("DB_NAME", "portfolio"),
            max_connections: parse(&var, "DB_MAX_CONNECTIONS", 2, "a positive integer")?,
            acquire_timeout: Duration::from_secs(parse(
                &var,
                "DB_ACQUIRE_TIMEOUT_SECS",
                10,
                "a number of seconds",
            )?),
        };
        if database.max_connections == 0 {
            return Err(ConfigError::Invalid {
                var: "DB_MAX_CONNECTIONS",
                expected: "a positive integer",
                value: "0".into(),
            });
        }

        Ok(Self {
            host: text("HOST", "0.0.0.0"),
            port: parse(&var, "PORT", 3000, "a valid port")?,
            cors_origins: parse_cors_origins(&text("CORS_ORIGINS", "*"))?,
            request_timeout_secs: parse(
                &var,
                "REQUEST_TIMEOUT_SECS",
                30,
                "a number of seconds",
            )?,
            database,
            run_migrations: parse_bool(&var, "RUN_MIGRATIONS")?,
            log_format: parse_log_format(&var)?,
        })
    }

    /// Bind the HTTP listener on `host:port`, resolving `host` if needed.
    pub async fn bind(&self) -> std::io::Result<tokio::net::TcpListener> {
        tokio::net::TcpListener::bind((self.host.as_str(), self.port)).await
    }
}

fn parse<F, T>(
    var: &F,
    key: &'static str,
    default: T,
    expected: &'static str,
) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match var(key) {
        None => Ok(default),
        Some(value) => {
            let parsed = value.trim().parse::<T>();
            parsed.map_err(|_| ConfigError::Invalid {
                var: key,
                expected,
                value,
            })
        }
    }
}

fn parse_bool<F>(var: &F, key: &'static str) -> Result<bool, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match var(key).as_deref().map(str::trim) {
        None | Some("") => Ok(false),
        Some("1") | Some("true") | Some("TRUE") | Some("yes") => Ok(true),
        Some("0") | Some("false") | Some("FALSE") | Some("no") => Ok(false),
        Some(other) => Err(ConfigError::Invalid {
            var: key,
            expected: "true or false",
            value: other.to_string(),
        }),
    }
}

fn parse_log_format<F>(var: &F) -> Result<LogFormat, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match var("LOG_FORMAT").as_deref().map(str::trim) {
        None | Some("") | Some("pretty") => Ok(LogFormat::Pretty),
        Some("json") => Ok(LogFormat::Json),
        Some(other) => Err(ConfigError::Invalid {
            var: "LOG_FORMAT",
            expected: "pretty or json",
            value: other.to_string(),
        }),
    }
}

/// Parse the comma-separated `CORS_ORIGINS` value. `*` anywhere in the list
/// means any origin.
fn parse_cors_origins(raw: &str) -> Result<CorsOrigins, ConfigError> {
    let entries: Vec<&str> = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();

    if entries.is_empty() || entries.contains(&"*") {
        return Ok(CorsOrigins::Any);
    }

    entries
        .into_iter()
        .map(|origin| {
            HeaderValue::from_str(origin).map_err(|_| ConfigError::CorsOrigin(origin.to_string()))
        })
        .collect::<Result<Vec<_>, _>>()
        .map(CorsOrigins::List)
}
