use anyhow::Result;
use async_trait::async_trait;
use httpmock::prelude::*;
use number_classifier::adapters::gateway::{handle_gateway_request, GatewayRequest};
use number_classifier::core::FactSource;
use number_classifier::{ClassificationService, NumbersApiFactFetcher};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::time::Duration;

fn request(path: &str, number: Option<&str>) -> GatewayRequest {
    GatewayRequest {
        path: Some(path.to_string()),
        raw_path: None,
        query_string_parameters: number.map(|n| {
            let mut params = HashMap::new();
            params.insert("number".to_string(), n.to_string());
            params
        }),
    }
}

#[tokio::test]
async fn test_gateway_classify() -> Result<()> {
    let server = MockServer::start();
    let facts_mock = server.mock(|when, then| {
        when.method(GET).path("/371/math");
        then.status(200).body("371 is an Armstrong number.");
    });
    let fetcher = NumbersApiFactFetcher::new(server.base_url(), Duration::from_secs(2))?;
    let service = ClassificationService::new(fetcher);

    let response =
        handle_gateway_request(&service, request("/api/classify-number", Some("371"))).await;

    facts_mock.assert();
    assert_eq!(response.status_code, 200);
    assert_eq!(
        response.headers.get("Access-Control-Allow-Origin").map(String::as_str),
        Some("*")
    );
    let body: Value = serde_json::from_str(&response.body)?;
    assert_eq!(body["properties"], json!(["armstrong", "odd"]));
    assert_eq!(body["digit_sum"], 11);
    Ok(())
}

#[tokio::test]
async fn test_gateway_bad_input() -> Result<()> {
    let service = ClassificationService::new(NumbersApiFactFetcher::new(
        "http://127.0.0.1:1",
        Duration::from_secs(1),
    )?);

    let response =
        handle_gateway_request(&service, request("/api/classify-number", Some("abc"))).await;
    assert_eq!(response.status_code, 400);
    let body: Value = serde_json::from_str(&response.body)?;
    assert_eq!(body, json!({"number": "abc", "error": true}));

    let response = handle_gateway_request(&service, request("/api/classify-number", None)).await;
    assert_eq!(response.status_code, 400);
    Ok(())
}

#[tokio::test]
async fn test_gateway_event_deserialization() -> Result<()> {
    let event: GatewayRequest = serde_json::from_value(json!({
        "rawPath": "/api/classify-number",
        "queryStringParameters": { "number": "-3.9" },
        "headers": { "host": "example.com" }
    }))?;

    assert_eq!(event.route(), "/api/classify-number");
    assert_eq!(event.number(), Some("-3.9"));
    Ok(())
}

#[tokio::test]
async fn test_gateway_unknown_route() -> Result<()> {
    let service = ClassificationService::new(NumbersApiFactFetcher::new(
        "http://127.0.0.1:1",
        Duration::from_secs(1),
    )?);

    let response = handle_gateway_request(&service, request("/api/other", Some("1"))).await;
    assert_eq!(response.status_code, 404);

    let response = handle_gateway_request(&service, request("/health", None)).await;
    assert_eq!(response.status_code, 200);
    Ok(())
}

struct PanickingFacts;

#[async_trait]
impl FactSource for PanickingFacts {
    async fn fun_fact(&self, _number: i64) -> String {
        panic!("facts source exploded");
    }
}

#[tokio::test]
async fn test_gateway_panic_becomes_500() -> Result<()> {
    let service = ClassificationService::new(PanickingFacts);

    let response =
        handle_gateway_request(&service, request("/api/classify-number", Some("10"))).await;

    assert_eq!(response.status_code, 500);
    let body: Value = serde_json::from_str(&response.body)?;
    assert_eq!(body["error"], true);
    assert!(body.get("number").is_none());
    Ok(())
}
