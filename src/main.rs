use clap::Parser;
use number_classifier::utils::error::ErrorSeverity;
use number_classifier::utils::{logger, validation::Validate};
use number_classifier::{
    router, ClassificationService, ClassifierError, NumbersApiFactFetcher, ServerArgs,
    ServerConfig,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = ServerArgs::parse();

    // 初始化日誌
    logger::init_server_logger(args.verbose);

    tracing::info!("🚀 Starting number-classifier");
    if args.verbose {
        tracing::debug!("CLI args: {:?}", args);
    }

    let config = match load_config(args) {
        Ok(config) => config,
        Err(e) => exit_with(e),
    };

    if let Err(e) = serve(config).await {
        exit_with(e);
    }

    Ok(())
}

fn load_config(args: ServerArgs) -> number_classifier::Result<ServerConfig> {
    let config = args.into_config()?;
    // 驗證配置
    config.validate()?;
    Ok(config)
}

async fn serve(config: ServerConfig) -> number_classifier::Result<()> {
    let fetcher = NumbersApiFactFetcher::from_config(&config)?;
    let service = ClassificationService::from_config(fetcher, &config);
    let app = router(service);

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| ClassifierError::ServerError {
            message: format!("Failed to bind to {}: {}", addr, e),
        })?;

    tracing::info!("📡 Listening on http://{}", addr);
    tracing::info!("🔢 Facts endpoint: {}", config.facts.endpoint);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ClassifierError::ServerError {
            message: e.to_string(),
        })?;

    tracing::info!("👋 Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}

fn exit_with(e: ClassifierError) -> ! {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    // 根據錯誤嚴重程度決定退出碼
    let exit_code = match e.severity() {
        ErrorSeverity::Low | ErrorSeverity::High => 1,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}
