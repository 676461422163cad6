mod app_config;

pub use app_config::{AppConfig, LogFormat, LoggingConfig, ServerConfig, VectorizerConfig};
