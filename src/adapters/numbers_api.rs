use crate::domain::model::fallback_fact;
use crate::domain::ports::{ConfigProvider, FactSource};
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

pub const DEFAULT_FACTS_ENDPOINT: &str = "http://numbersapi.com";
pub const DEFAULT_FACT_TIMEOUT_SECS: u64 = 5;

/// 從 numbersapi 取得數學趣聞，任何失敗都換成預設句子
#[derive(Debug, Clone)]
pub struct NumbersApiFactFetcher {
    client: Client,
    base_url: String,
}

impl NumbersApiFactFetcher {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        Self::new(config.facts_endpoint(), config.fact_timeout())
    }

    /// `{base}/{|n|}/math`
    pub fn fact_url(&self, number: i64) -> String {
        format!(
            "{}/{}/math",
            self.base_url.trim_end_matches('/'),
            number.unsigned_abs()
        )
    }

    async fn fetch(&self, number: i64) -> Result<Option<String>> {
        let url = self.fact_url(number);
        tracing::debug!("Requesting fun fact from: {}", url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        tracing::debug!("Facts API response status: {}", status);

        if !status.is_success() {
            tracing::warn!("⚠️ Facts API returned {} for {}", status, number);
            return Ok(None);
        }

        let text = response.text().await?;
        if text.trim().is_empty() {
            tracing::warn!("⚠️ Facts API returned an empty body for {}", number);
            return Ok(None);
        }
        Ok(Some(text))
    }
}

#[async_trait]
impl FactSource for NumbersApiFactFetcher {
    async fn fun_fact(&self, number: i64) -> String {
        match self.fetch(number).await {
            Ok(Some(fact)) => fact,
            Ok(None) => fallback_fact(number),
            Err(e) => {
                tracing::warn!("⚠️ Facts API request failed for {}: {}", number, e);
                fallback_fact(number)
            }
        }
    }
}
