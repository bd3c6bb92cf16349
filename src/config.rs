/*
 * Responsibility
 * - Environment/config loading (signing secret, token lifetimes, CORS, ...)
 * - Validation of configuration values (startup fails on bad config)
 */
use std::fmt;
use std::net::SocketAddr;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Production,
}

impl AppEnv {
    pub fn from_env() -> Self {
        match std::env::var("APP_ENV")
            .unwrap_or_else(|_| "development".to_string())
            .to_ascii_lowercase()
            .as_str()
        {
            "production" | "prod" => Self::Production,
            _ => Self::Development,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Missing(&'static str),
    Invalid(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Missing(key) => write!(f, "missing configuration: {}", key),
            ConfigError::Invalid(key) => write!(f, "invalid configuration: {}", key),
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Clone, Debug)]
pub struct Config {
    pub addr: SocketAddr,
    pub app_env: AppEnv,
    pub cors_allowed_origins: Vec<String>,

    /// Symmetric signing key for session tokens. Loaded once; immutable for
    /// the process lifetime.
    pub token_secret: String,
    /// Token lifetimes (milliseconds).
    pub access_token_ttl_ms: u64,
    pub refresh_token_ttl_ms: u64,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let port: u16 = std::env::var("PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(3000);

        let addr: SocketAddr = SocketAddr::from_str(&format!("0.0.0.0:{}", port))
            .map_err(|_| ConfigError::Invalid("PORT"))?;

        let app_env = AppEnv::from_env();

        let cors_allowed_origins = std::env::var("CORS_ALLOWED_ORIGINS")
            .unwrap_or_default()
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>();

        let token_secret = std::env::var("AUTH_TOKEN_SECRET")
            .map_err(|_| ConfigError::Missing("AUTH_TOKEN_SECRET"))?;
        if token_secret.trim().is_empty() {
            return Err(ConfigError::Invalid("AUTH_TOKEN_SECRET"));
        }

        let access_token_ttl_ms = ttl_ms("ACCESS_TOKEN_TTL_MS", 3_600_000)?;
        let refresh_token_ttl_ms = ttl_ms("REFRESH_TOKEN_TTL_MS", 604_800_000)?;

        Ok(Config {
            addr,
            app_env,
            cors_allowed_origins,
            token_secret,
            access_token_ttl_ms,
            refresh_token_ttl_ms,
        })
    }
}

/// A zero TTL would mint tokens that are expired at issuance, so it is
/// rejected here rather than surfacing as mystery 401s later.
fn ttl_ms(key: &'static str, default: u64) -> Result<u64, ConfigError> {
    let ttl = match std::env::var(key) {
        Ok(raw) => raw.parse::<u64>().map_err(|_| ConfigError::Invalid(key))?,
        Err(_) => default,
    };

    if ttl == 0 {
        return Err(ConfigError::Invalid(key));
    }

    Ok(ttl)
}
