use crate::core::service::ClassificationService;
use crate::domain::ports::FactSource;
use crate::utils::error::{ClassifierError, InputError};
use axum::{
    body::Body,
    extract::{rejection::QueryRejection, Query, RawQuery, State},
    http::{Request, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use std::any::Any;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any as AnyOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

pub const CLASSIFY_ROUTE: &str = "/api/classify-number";
pub const HEALTH_ROUTE: &str = "/health";

#[derive(Debug, Deserialize)]
pub struct ClassifyQuery {
    pub number: Option<String>,
}

impl IntoResponse for ClassifierError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        if status.is_server_error() {
            tracing::error!("❌ Request failed: {}", self);
        } else {
            tracing::debug!("Rejected input: {}", self);
        }
        (status, Json(self.error_body())).into_response()
    }
}

/// 公開唯讀 API，允許所有來源、方法與標頭
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AnyOrigin)
        .allow_methods(AnyOrigin)
        .allow_headers(AnyOrigin)
}

pub fn router<F: FactSource + 'static>(service: ClassificationService<F>) -> Router {
    Router::new()
        .route(CLASSIFY_ROUTE, get(classify_number::<F>))
        .route(HEALTH_ROUTE, get(health))
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http().make_span_with(request_span))
        .layer(cors_layer())
        .with_state(service)
}

/// 每個請求一個 span，route 與 query 跟著該請求的所有日誌輸出
fn request_span(request: &Request<Body>) -> tracing::Span {
    tracing::info_span!(
        "request",
        method = %request.method(),
        route = request.uri().path(),
        query = request.uri().query().unwrap_or(""),
    )
}

async fn classify_number<F: FactSource + 'static>(
    State(service): State<ClassificationService<F>>,
    RawQuery(raw_query): RawQuery,
    query: Result<Query<ClassifyQuery>, QueryRejection>,
) -> Response {
    let raw = match query {
        // 缺少參數視同無法解析的輸入
        Ok(Query(query)) => query.number.unwrap_or_default(),
        Err(rejection) => {
            tracing::debug!("Malformed query string: {}", rejection);
            return ClassifierError::from(InputError::Unparsable {
                raw: raw_query.unwrap_or_default(),
            })
            .into_response();
        }
    };

    match service.classify_raw(&raw).await {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(e) => e.into_response(),
    }
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };

    ClassifierError::Internal { message: detail }.into_response()
}
