pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::ServerArgs;

#[cfg(feature = "lambda")]
pub use config::lambda::LambdaConfig;

pub use adapters::{http::router, numbers_api::NumbersApiFactFetcher};
pub use config::ServerConfig;
pub use core::service::ClassificationService;
pub use domain::model::{ClassificationResult, ErrorBody};
pub use utils::error::{ClassifierError, InputError, Result};
