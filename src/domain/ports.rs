use async_trait::async_trait;
use std::time::Duration;

/// 數字趣聞來源。永遠回傳非空字串，失敗時自行替換成預設句子。
#[async_trait]
pub trait FactSource: Send + Sync {
    async fn fun_fact(&self, number: i64) -> String;
}

pub trait ConfigProvider: Send + Sync {
    fn facts_endpoint(&self) -> &str;
    fn fact_timeout(&self) -> Duration;
    fn max_magnitude(&self) -> u64;
}
