// Adapters layer: concrete implementations for external systems (http server, lambda gateway, facts api)

pub mod gateway;
pub mod http;
pub mod numbers_api;
