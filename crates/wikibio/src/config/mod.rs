use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub wikipedia: WikipediaConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let endpoint = env::var("WIKIPEDIA_API_URL")
            .unwrap_or_else(|_| WikipediaConfig::DEFAULT_ENDPOINT.to_string());
        let revision_limit = env::var("WIKIPEDIA_RV_LIMIT")
            .unwrap_or_else(|_| WikipediaConfig::DEFAULT_REVISION_LIMIT.to_string())
            .parse::<u32>()
            .map_err(|_| ConfigError::InvalidRevisionLimit)?;
        let format_version = env::var("WIKIPEDIA_FORMAT_VERSION")
            .unwrap_or_else(|_| WikipediaConfig::DEFAULT_FORMAT_VERSION.to_string())
            .parse::<u8>()
            .map_err(|_| ConfigError::InvalidFormatVersion)?;

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            wikipedia: WikipediaConfig {
                endpoint,
                revision_limit,
                format_version,
            },
        })
    }
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing and metrics controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Options for the encyclopedia content source.
#[derive(Debug, Clone)]
pub struct WikipediaConfig {
    /// Base URL of the MediaWiki action API queried for article revisions.
    pub endpoint: String,
    /// Revisions requested per article; the lookup reads only the newest.
    pub revision_limit: u32,
    /// Response format version; 2 yields the flattened `query.pages` array.
    pub format_version: u8,
}

impl WikipediaConfig {
    pub const DEFAULT_ENDPOINT: &'static str = "https://en.wikipedia.org/w/api.php";
    pub const DEFAULT_REVISION_LIMIT: u32 = 1;
    pub const DEFAULT_FORMAT_VERSION: u8 = 2;
}

impl Default for WikipediaConfig {
    fn default() -> Self {
        Self {
            endpoint: Self::DEFAULT_ENDPOINT.to_string(),
            revision_limit: Self::DEFAULT_REVISION_LIMIT,
            format_version: Self::DEFAULT_FORMAT_VERSION,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidRevisionLimit,
    InvalidFormatVersion,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidRevisionLimit => {
                write!(f, "WIKIPEDIA_RV_LIMIT must be a valid u32")
            }
            ConfigError::InvalidFormatVersion => {
                write!(f, "WIKIPEDIA_FORMAT_VERSION must be a valid u8")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidHost { source } => Some(source),
            _ => None,
        }
    }
}
