pub mod classifier;
pub mod input;
pub mod service;

pub use crate::domain::model::ClassificationResult;
pub use crate::domain::ports::{ConfigProvider, FactSource};
pub use crate::utils::error::Result;
