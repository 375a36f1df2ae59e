use crate::adapters::numbers_api::{DEFAULT_FACTS_ENDPOINT, DEFAULT_FACT_TIMEOUT_SECS};
use crate::core::input::MAX_MAGNITUDE;
use crate::core::ConfigProvider;
use crate::utils::error::{ClassifierError, Result};
use std::env;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct LambdaConfig {
    pub facts_endpoint: String,
    pub fact_timeout_secs: u64,
    pub max_magnitude: u64,
}

impl LambdaConfig {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            facts_endpoint: env::var("FACTS_ENDPOINT")
                .unwrap_or_else(|_| DEFAULT_FACTS_ENDPOINT.to_string()),
            fact_timeout_secs: parse_env("FACT_TIMEOUT_SECS", DEFAULT_FACT_TIMEOUT_SECS)?,
            max_magnitude: parse_env("MAX_MAGNITUDE", MAX_MAGNITUDE)?,
        })
    }
}

fn parse_env(name: &str, default: u64) -> Result<u64> {
    match env::var(name) {
        Ok(value) => value
            .trim()
            .parse()
            .map_err(|_| ClassifierError::InvalidConfigValueError {
                field: name.to_string(),
                value,
                reason: "must be a non-negative integer".to_string(),
            }),
        Err(_) => Ok(default),
    }
}

impl ConfigProvider for LambdaConfig {
    fn facts_endpoint(&self) -> &str {
        &self.facts_endpoint
    }

    fn fact_timeout(&self) -> Duration {
        Duration::from_secs(self.fact_timeout_secs)
    }

    fn max_magnitude(&self) -> u64 {
        self.max_magnitude
    }
}

impl crate::utils::validation::Validate for LambdaConfig {
    fn validate(&self) -> Result<()> {
        use crate::utils::validation::*;

        validate_url("FACTS_ENDPOINT", &self.facts_endpoint)?;
        validate_range("FACT_TIMEOUT_SECS", self.fact_timeout_secs, 1, 60)?;
        validate_range("MAX_MAGNITUDE", self.max_magnitude, 1, MAX_MAGNITUDE)?;

        tracing::info!("✅ Lambda configuration validation passed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::validation::Validate;

    #[test]
    fn test_from_env_defaults_and_overrides() {
        env::remove_var("FACTS_ENDPOINT");
        env::set_var("FACT_TIMEOUT_SECS", "3");
        env::remove_var("MAX_MAGNITUDE");

        let config = LambdaConfig::from_env().unwrap();
        assert_eq!(config.facts_endpoint, DEFAULT_FACTS_ENDPOINT);
        assert_eq!(config.fact_timeout(), Duration::from_secs(3));
        assert_eq!(config.max_magnitude, MAX_MAGNITUDE);
        assert!(config.validate().is_ok());

        env::set_var("FACT_TIMEOUT_SECS", "soon");
        assert!(LambdaConfig::from_env().is_err());

        env::remove_var("FACT_TIMEOUT_SECS");
    }
}
