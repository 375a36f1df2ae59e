use crate::config::ServerConfig;
use crate::utils::error::Result;
use clap::Parser;

/// 命令列參數；有設定的值覆蓋 TOML 檔案內容
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "number-classifier")]
#[command(about = "HTTP API that classifies integers and adds a fun fact")]
pub struct ServerArgs {
    /// Path to TOML configuration file
    #[arg(short, long, env = "CLASSIFIER_CONFIG")]
    pub config: Option<String>,

    #[arg(long, env = "CLASSIFIER_HOST")]
    pub host: Option<String>,

    #[arg(long, env = "CLASSIFIER_PORT")]
    pub port: Option<u16>,

    /// Base URL of the numbers trivia service
    #[arg(long, env = "FACTS_ENDPOINT")]
    pub facts_endpoint: Option<String>,

    #[arg(long, env = "FACT_TIMEOUT_SECS")]
    pub fact_timeout_secs: Option<u64>,

    /// Reject numbers whose absolute value exceeds this
    #[arg(long, env = "MAX_MAGNITUDE")]
    pub max_magnitude: Option<u64>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ServerArgs {
    pub fn into_config(self) -> Result<ServerConfig> {
        let mut config = match &self.config {
            Some(path) => {
                tracing::info!("📁 Loading configuration from: {}", path);
                ServerConfig::from_file(path)?
            }
            None => ServerConfig::default(),
        };

        if let Some(host) = self.host {
            config.server.host = host;
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(endpoint) = self.facts_endpoint {
            config.facts.endpoint = endpoint;
        }
        if let Some(timeout) = self.fact_timeout_secs {
            config.facts.timeout_seconds = timeout;
        }
        if let Some(max_magnitude) = self.max_magnitude {
            config.limits.max_magnitude = max_magnitude;
        }

        Ok(config)
    }
}
