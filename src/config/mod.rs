#[cfg(feature = "cli")]
pub mod cli;
#[cfg(feature = "lambda")]
pub mod lambda;

use crate::adapters::numbers_api::{DEFAULT_FACTS_ENDPOINT, DEFAULT_FACT_TIMEOUT_SECS};
use crate::core::input::MAX_MAGNITUDE;
use crate::core::ConfigProvider;
use crate::utils::error::{ClassifierError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_range, validate_url, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8000;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub server: ListenConfig,
    pub facts: FactsConfig,
    pub limits: LimitsConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListenConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ListenConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FactsConfig {
    pub endpoint: String,
    pub timeout_seconds: u64,
}

impl Default for FactsConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_FACTS_ENDPOINT.to_string(),
            timeout_seconds: DEFAULT_FACT_TIMEOUT_SECS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LimitsConfig {
    pub max_magnitude: u64,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_magnitude: MAX_MAGNITUDE,
        }
    }
}

impl ServerConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = substitute_env_vars(content)?;
        Ok(toml::from_str(&processed_content)?)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

/// 替換環境變數 (例如 ${FACTS_ENDPOINT})，未設定的保持原樣
fn substitute_env_vars(content: &str) -> Result<String> {
    use regex::Regex;

    let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ClassifierError::ConfigError {
        message: format!("Invalid substitution pattern: {}", e),
    })?;

    let result = re.replace_all(content, |caps: &regex::Captures| {
        let var_name = &caps[1];
        std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
    });

    Ok(result.to_string())
}

impl ConfigProvider for ServerConfig {
    fn facts_endpoint(&self) -> &str {
        &self.facts.endpoint
    }

    fn fact_timeout(&self) -> Duration {
        Duration::from_secs(self.facts.timeout_seconds)
    }

    fn max_magnitude(&self) -> u64 {
        self.limits.max_magnitude
    }
}

impl Validate for ServerConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("server.host", &self.server.host)?;
        validate_url("facts.endpoint", &self.facts.endpoint)?;
        validate_range("facts.timeout_seconds", self.facts.timeout_seconds, 1, 60)?;
        validate_range("limits.max_magnitude", self.limits.max_magnitude, 1, MAX_MAGNITUDE)?;

        tracing::info!("✅ Server configuration validation passed");
        Ok(())
    }
}
