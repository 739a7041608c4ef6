use std::env;
use std::fmt;

use chrono::Datelike;

use crate::appraisal::domain::{
    DEFAULT_SENSITIVITY_PCT, MAX_SENSITIVITY_PCT, MIN_SENSITIVITY_PCT,
};

/// Distinguishes runtime behavior for different stages of the tool.
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

/// Top-level configuration for the appraisal tool.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub market: MarketDefaults,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let sensitivity_pct = match env::var("APP_SENSITIVITY") {
            Ok(raw) => parse_sensitivity(&raw)?,
            Err(_) => DEFAULT_SENSITIVITY_PCT,
        };

        let current_year = match env::var("APP_CURRENT_YEAR") {
            Ok(raw) => raw
                .trim()
                .parse::<i32>()
                .map_err(|_| ConfigError::InvalidCurrentYear(raw))?,
            Err(_) => chrono::Local::now().year(),
        };

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            market: MarketDefaults {
                sensitivity_pct,
                current_year,
            },
            telemetry: TelemetryConfig { log_level },
        })
    }
}

fn parse_sensitivity(raw: &str) -> Result<f64, ConfigError> {
    let value = raw
        .trim()
        .parse::<f64>()
        .map_err(|_| ConfigError::InvalidSensitivity(raw.to_string()))?;

    if (MIN_SENSITIVITY_PCT..=MAX_SENSITIVITY_PCT).contains(&value) {
        Ok(value)
    } else {
        Err(ConfigError::InvalidSensitivity(raw.to_string()))
    }
}

/// Defaults applied when a snapshot or flag does not say otherwise.
#[derive(Debug, Clone)]
pub struct MarketDefaults {
    pub sensitivity_pct: f64,
    pub current_year: i32,
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidSensitivity(String),
    InvalidCurrentYear(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidSensitivity(value) => write!(
                f,
                "APP_SENSITIVITY must be a number between {} and {} (got '{}')",
                MIN_SENSITIVITY_PCT, MAX_SENSITIVITY_PCT, value
            ),
            ConfigError::InvalidCurrentYear(value) => {
                write!(f, "APP_CURRENT_YEAR must be a year (got '{}')", value)
            }
        }
    }
}

impl std::error::Error for ConfigError {}
