use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_DIRECTIVES: &str = "number_classifier=info";
const VERBOSE_DIRECTIVES: &str = "number_classifier=debug,tower_http=debug,info";

/// `RUST_LOG` 優先，否則使用預設的 directives
pub fn env_filter(verbose: bool) -> EnvFilter {
    let directives = if verbose {
        VERBOSE_DIRECTIVES
    } else {
        DEFAULT_DIRECTIVES
    };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directives))
}

/// 伺服器模式：request span 結束時輸出一行，附帶 method/route/query 與耗時
pub fn init_server_logger(verbose: bool) {
    tracing_subscriber::registry()
        .with(env_filter(verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_span_events(FmtSpan::CLOSE)
                .compact(),
        )
        .init();
}

pub fn init_lambda_logger() {
    tracing_subscriber::registry()
        .with(env_filter(false))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .without_time()
                .json()
                // 只保留目前 span 的欄位，與事件欄位同層
                .with_current_span(true)
                .with_span_list(false)
                .flatten_event(true),
        )
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_filter_defaults() {
        std::env::remove_var("RUST_LOG");

        assert_eq!(env_filter(false).to_string(), DEFAULT_DIRECTIVES);
        assert!(env_filter(true).to_string().contains("tower_http=debug"));
    }
}
