//! 配置错误定义

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid tick interval: {0} ms")]
    InvalidTickInterval(u64),

    #[error("Invalid collapse duration: {0} ms")]
    InvalidDuration(u64),

    #[error("Invalid canvas extent: {width} x {height}")]
    InvalidCanvas { width: f64, height: f64 },

    #[error("Invalid marker radius: {0}")]
    InvalidMarkerRadius(f64),

    #[error("Invalid precision: {0} decimal places")]
    InvalidPrecision(u32),
}
