use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;

use crate::workflows::claims::TriageConfig;

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
    pub triage: TriageConfig,
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

        let triage = load_triage(TriageConfig::default())?;
        validate_routing(&triage)?;

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            triage,
        })
    }
}

fn load_triage(defaults: TriageConfig) -> Result<TriageConfig, ConfigError> {
    Ok(TriageConfig {
        labor_rate: env_parsed("APP_LABOR_RATE", defaults.labor_rate)?,
        paint_cost: env_parsed("APP_PAINT_COST", defaults.paint_cost)?,
        auto_max_severity: env_parsed("APP_AUTO_MAX_SEVERITY", defaults.auto_max_severity)?,
        auto_max_cost: env_parsed("APP_AUTO_MAX_COST", defaults.auto_max_cost)?,
        auto_min_confidence: env_parsed("APP_AUTO_MIN_CONFIDENCE", defaults.auto_min_confidence)?,
        specialist_min_severity: env_parsed(
            "APP_SPECIALIST_MIN_SEVERITY",
            defaults.specialist_min_severity,
        )?,
        specialist_min_cost: env_parsed("APP_SPECIALIST_MIN_COST", defaults.specialist_min_cost)?,
    })
}

fn env_parsed<T: FromStr>(key: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::InvalidNumber { key }),
        Err(_) => Ok(default),
    }
}

/// Rejects threshold combinations that would make the specialist band
/// unreachable or overlap the auto-approve band.
fn validate_routing(triage: &TriageConfig) -> Result<(), ConfigError> {
    if triage.auto_max_severity >= triage.specialist_min_severity {
        return Err(ConfigError::InconsistentRouting {
            detail: "APP_AUTO_MAX_SEVERITY must be below APP_SPECIALIST_MIN_SEVERITY",
        });
    }
    if triage.auto_max_cost >= triage.specialist_min_cost {
        return Err(ConfigError::InconsistentRouting {
            detail: "APP_AUTO_MAX_COST must be below APP_SPECIALIST_MIN_COST",
        });
    }
    if !(0.0..=1.0).contains(&triage.auto_min_confidence) {
        return Err(ConfigError::InconsistentRouting {
            detail: "APP_AUTO_MIN_CONFIDENCE must be within [0, 1]",
        });
    }
    if triage.labor_rate < 0.0 || triage.paint_cost < 0.0 {
        return Err(ConfigError::InconsistentRouting {
            detail: "APP_LABOR_RATE and APP_PAINT_COST must be non-negative",
        });
    }
    Ok(())
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

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidNumber { key: &'static str },
    InconsistentRouting { detail: &'static str },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidNumber { key } => {
                write!(f, "{key} must be a valid number")
            }
            ConfigError::InconsistentRouting { detail } => {
                write!(f, "inconsistent routing thresholds: {detail}")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidPort
            | ConfigError::InvalidNumber { .. }
            | ConfigError::InconsistentRouting { .. } => None,
            ConfigError::InvalidHost { source } => Some(source),
        }
    }
}
