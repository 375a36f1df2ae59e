use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use number_classifier::adapters::gateway::{handle_gateway_request, GatewayRequest, GatewayResponse};
use number_classifier::utils::{logger, validation::Validate};
use number_classifier::{ClassificationService, LambdaConfig, NumbersApiFactFetcher};

async fn function_handler(
    service: &ClassificationService<NumbersApiFactFetcher>,
    event: LambdaEvent<GatewayRequest>,
) -> Result<GatewayResponse, Error> {
    tracing::debug!("Request {} for {}", event.context.request_id, event.payload.route());
    Ok(handle_gateway_request(service, event.payload).await)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    logger::init_lambda_logger();

    // 冷啟動時建立一次，之後每次呼叫共用
    let config = LambdaConfig::from_env()?;
    config.validate()?;

    let fetcher = NumbersApiFactFetcher::from_config(&config)?;
    let service = ClassificationService::from_config(fetcher, &config);

    tracing::info!("🚀 number-classifier Lambda ready");
    run(service_fn(|event: LambdaEvent<GatewayRequest>| {
        function_handler(&service, event)
    }))
    .await
}
