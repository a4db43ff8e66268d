//! Configuration management for the detection service

mod app_config;

pub use app_config::{
    AppConfig, DetectionConfig, LoggingConfig, ServerConfig, CONFIG_PATH_ENV, DEV_SESSION_SECRET,
};
