//! API Gateway proxy 事件與分類服務之間的轉接，供 Lambda 部署使用。

use crate::adapters::http::{CLASSIFY_ROUTE, HEALTH_ROUTE};
use crate::core::service::ClassificationService;
use crate::domain::ports::FactSource;
use crate::utils::error::ClassifierError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GatewayRequest {
    #[serde(default)]
    pub path: Option<String>,
    /// HTTP API (payload v2) 使用 rawPath
    #[serde(default)]
    pub raw_path: Option<String>,
    #[serde(default)]
    pub query_string_parameters: Option<HashMap<String, String>>,
}

impl GatewayRequest {
    pub fn route(&self) -> &str {
        self.raw_path
            .as_deref()
            .or(self.path.as_deref())
            .unwrap_or(CLASSIFY_ROUTE)
    }

    pub fn number(&self) -> Option<&str> {
        self.query_string_parameters
            .as_ref()
            .and_then(|params| params.get("number"))
            .map(String::as_str)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GatewayResponse {
    pub status_code: u16,
    pub headers: HashMap<String, String>,
    pub body: String,
    pub is_base64_encoded: bool,
}

impl GatewayResponse {
    fn json<T: Serialize>(status_code: u16, body: &T) -> Self {
        let mut headers = HashMap::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());
        headers.insert("Access-Control-Allow-Origin".to_string(), "*".to_string());
        headers.insert("Access-Control-Allow-Methods".to_string(), "*".to_string());
        headers.insert("Access-Control-Allow-Headers".to_string(), "*".to_string());

        Self {
            status_code,
            headers,
            body: serde_json::to_string(body).unwrap_or_else(|_| "{}".to_string()),
            is_base64_encoded: false,
        }
    }

    fn from_error(err: &ClassifierError) -> Self {
        Self::json(err.status_code(), &err.error_body())
    }
}

pub async fn handle_gateway_request<F: FactSource + 'static>(
    service: &ClassificationService<F>,
    request: GatewayRequest,
) -> GatewayResponse {
    match request.route() {
        CLASSIFY_ROUTE => {}
        HEALTH_ROUTE => return GatewayResponse::json(200, &serde_json::json!({ "status": "ok" })),
        other => {
            tracing::debug!("No route for {}", other);
            return GatewayResponse::json(404, &serde_json::json!({ "error": true }));
        }
    }

    let raw = request.number().unwrap_or_default().to_string();
    let service = service.clone();

    // 獨立 task 執行，panic 轉成 500 而不是讓整個呼叫失敗
    let outcome = tokio::spawn(async move { service.classify_raw(&raw).await }).await;

    match outcome {
        Ok(Ok(result)) => GatewayResponse::json(200, &result),
        Ok(Err(e)) => GatewayResponse::from_error(&e),
        Err(join_error) => {
            let err = ClassifierError::Internal {
                message: join_error.to_string(),
            };
            tracing::error!("❌ Request failed: {}", err);
            GatewayResponse::from_error(&err)
        }
    }
}
