use std::str::FromStr;

use anyhow::{Context, Result};

use crate::drafts::triage::TriageThresholds;

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub triage: TriageThresholds,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = TriageThresholds::default();
        Ok(Config {
            port: env_or("PORT", 8080)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            triage: TriageThresholds {
                min_personalization: env_or(
                    "READY_MIN_PERSONALIZATION",
                    defaults.min_personalization,
                )?,
                min_compliance: env_or("READY_MIN_COMPLIANCE", defaults.min_compliance)?,
            },
        })
    }
}

fn env_or<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has an invalid value: {raw:?}")),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_or_default_when_unset() {
        let v: u32 = env_or("OUTREACH_TEST_UNSET_VARIABLE", 42).unwrap();
        assert_eq!(v, 42);
    }

    #[test]
    fn test_env_or_parses_and_rejects() {
        std::env::set_var("OUTREACH_TEST_PORT_OK", " 9090 ");
        let port: u16 = env_or("OUTREACH_TEST_PORT_OK", 8080).unwrap();
        assert_eq!(port, 9090);

        std::env::set_var("OUTREACH_TEST_PORT_BAD", "eighty");
        let err = env_or::<u16>("OUTREACH_TEST_PORT_BAD", 8080).unwrap_err();
        assert!(err.to_string().contains("OUTREACH_TEST_PORT_BAD"));
    }
}
