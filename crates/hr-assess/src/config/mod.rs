use std::env;
use std::fmt;
use std::fs;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use crate::workflows::assessment::rubric::ScoringRubric;

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

/// Shared code HR staff type into the console. Not a security boundary.
pub const DEFAULT_HR_ACCESS_CODE: &str = "hr-2024";

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub assessment: AssessmentSettings,
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

        let access_code = env::var("HR_ACCESS_CODE")
            .ok()
            .map(|code| code.trim().to_string())
            .filter(|code| !code.is_empty())
            .unwrap_or_else(|| DEFAULT_HR_ACCESS_CODE.to_string());
        let rubric_path = env::var("SCORING_RUBRIC_PATH")
            .ok()
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            assessment: AssessmentSettings {
                access_code,
                rubric_path,
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

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Quiz and HR console settings.
#[derive(Debug, Clone)]
pub struct AssessmentSettings {
    pub access_code: String,
    pub rubric_path: Option<PathBuf>,
}

impl AssessmentSettings {
    /// Resolve the scoring rubric, reading the override file when one is configured.
    pub fn scoring_rubric(&self) -> Result<ScoringRubric, ConfigError> {
        let Some(path) = &self.rubric_path else {
            return Ok(ScoringRubric::standard());
        };

        let raw = fs::read(path).map_err(|source| ConfigError::RubricUnreadable {
            path: path.clone(),
            source,
        })?;
        serde_json::from_slice(&raw).map_err(|source| ConfigError::InvalidRubric {
            path: path.clone(),
            source,
        })
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost {
        source: std::net::AddrParseError,
    },
    RubricUnreadable {
        path: PathBuf,
        source: std::io::Error,
    },
    InvalidRubric {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::RubricUnreadable { path, .. } => {
                write!(
                    f,
                    "SCORING_RUBRIC_PATH '{}' could not be read",
                    path.display()
                )
            }
            ConfigError::InvalidRubric { path, .. } => {
                write!(
                    f,
                    "SCORING_RUBRIC_PATH '{}' is not a valid rubric document",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidPort => None,
            ConfigError::InvalidHost { source } => Some(source),
            ConfigError::RubricUnreadable { source, .. } => Some(source),
            ConfigError::InvalidRubric { source, .. } => Some(source),
        }
    }
}
