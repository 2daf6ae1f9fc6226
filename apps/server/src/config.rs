use std::{net::SocketAddr, str::FromStr, time::Duration};

use anyhow::{anyhow, Context};
use chrono::NaiveDate;
use networth_core::projection::ProjectionConfig;

pub const PRODUCTION_BACKEND_URL: &str = "https://api-v2.jswarrior.com";
pub const DEVELOPMENT_BACKEND_URL: &str = "http://localhost:4001";

/// Deployment mode, selects the default backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Production,
    Development,
    Staging,
    Testing,
}

impl Mode {
    pub fn default_backend_url(self) -> &'static str {
        match self {
            Mode::Development => DEVELOPMENT_BACKEND_URL,
            Mode::Production | Mode::Staging | Mode::Testing => PRODUCTION_BACKEND_URL,
        }
    }
}

impl FromStr for Mode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "PRODUCTION" => Ok(Mode::Production),
            "DEVELOPMENT" => Ok(Mode::Development),
            "STAGING" => Ok(Mode::Staging),
            "TESTING" => Ok(Mode::Testing),
            other => Err(anyhow!("Unknown mode '{}'", other)),
        }
    }
}

pub struct Config {
    pub mode: Mode,
    pub backend_url: String,
    pub session_cookie: Option<String>,
    pub listen_addr: SocketAddr,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
    pub static_dir: String,
    pub projection: ProjectionConfig,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let mode: Mode = std::env::var("NW_MODE")
            .unwrap_or_else(|_| "PRODUCTION".to_string())
            .parse()
            .context("Invalid NW_MODE")?;
        let backend_url = std::env::var("NW_BACKEND_URL")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| mode.default_backend_url().to_string());
        let session_cookie = std::env::var("NW_SESSION_COOKIE")
            .ok()
            .filter(|s| !s.trim().is_empty());
        let listen_addr: SocketAddr = std::env::var("NW_LISTEN_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:8080".to_string())
            .parse()
            .context("Invalid NW_LISTEN_ADDR")?;
        let cors_allow = std::env::var("NW_CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|_| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let timeout_ms: u64 = env_parse("NW_REQUEST_TIMEOUT_MS", 30000)?;
        let static_dir = std::env::var("NW_STATIC_DIR").unwrap_or_else(|_| "dist".into());

        Ok(Self {
            mode,
            backend_url,
            session_cookie,
            listen_addr,
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
            static_dir,
            projection: projection_from_env()?,
        })
    }
}

fn projection_from_env() -> anyhow::Result<ProjectionConfig> {
    let defaults = ProjectionConfig::default();

    let start_date = match env_opt("NW_PROJECTION_START") {
        Some(raw) => NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
            .with_context(|| format!("Invalid NW_PROJECTION_START '{}'", raw))?,
        None => defaults.start_date,
    };

    let config = ProjectionConfig {
        start_date,
        initial_value: env_parse("NW_PROJECTION_INITIAL_VALUE", defaults.initial_value)?,
        annual_rate_percent: env_parse("NW_PROJECTION_ANNUAL_RATE", defaults.annual_rate_percent)?,
        monthly_contribution: env_parse(
            "NW_PROJECTION_MONTHLY_CONTRIBUTION",
            defaults.monthly_contribution,
        )?,
        step_days: env_parse("NW_PROJECTION_STEP_DAYS", defaults.step_days)?,
        total_days: env_parse("NW_PROJECTION_TOTAL_DAYS", defaults.total_days)?,
    };

    let amounts = [
        ("NW_PROJECTION_INITIAL_VALUE", config.initial_value),
        ("NW_PROJECTION_ANNUAL_RATE", config.annual_rate_percent),
        ("NW_PROJECTION_MONTHLY_CONTRIBUTION", config.monthly_contribution),
    ];
    if let Some((name, _)) = amounts.iter().find(|(_, v)| !v.is_finite()) {
        return Err(anyhow!("{} must be a finite number", name));
    }
    if config.step_days == 0 {
        return Err(anyhow!("NW_PROJECTION_STEP_DAYS must be positive"));
    }

    Ok(config)
}

fn env_opt(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|s| !s.trim().is_empty())
}

fn env_parse<T>(name: &str, default: T) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env_opt(name) {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("Invalid {} '{}'", name, raw)),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_parsing() {
        assert_eq!("production".parse::<Mode>().unwrap(), Mode::Production);
        assert_eq!(" DEVELOPMENT ".parse::<Mode>().unwrap(), Mode::Development);
        assert_eq!("Staging".parse::<Mode>().unwrap(), Mode::Staging);
        assert!("local".parse::<Mode>().is_err());
    }

    #[test]
    fn test_mode_selects_backend() {
        assert_eq!(Mode::Development.default_backend_url(), DEVELOPMENT_BACKEND_URL);
        assert_eq!(Mode::Production.default_backend_url(), PRODUCTION_BACKEND_URL);
        assert_eq!(Mode::Testing.default_backend_url(), PRODUCTION_BACKEND_URL);
    }

    #[test]
    fn test_invalid_request_timeout_fails_startup() {
        std::env::set_var("NW_REQUEST_TIMEOUT_MS", "soon");
        let result = Config::from_env();
        std::env::remove_var("NW_REQUEST_TIMEOUT_MS");

        let err = result.err().expect("invalid timeout must be rejected");
        assert!(err.to_string().contains("NW_REQUEST_TIMEOUT_MS"));
    }
}
