//! 引擎配置
//!
//! 所有字段都有默认值，JSON 配置文件中只需写出要覆盖的项：
//!
//! ```json
//! { "marker_radius": 6.0, "collapse": { "duration_ms": 1500 } }
//! ```

use crate::error::ConfigError;
use crate::math::DEFAULT_PRECISION;
use crate::properties::Color;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// 允许的最大小数位数
const MAX_PRECISION: u32 = 10;

/// 画布范围（清屏区域）
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasExtent {
    pub width: f64,
    pub height: f64,
}

impl Default for CanvasExtent {
    fn default() -> Self {
        Self {
            width: 600.0,
            height: 400.0,
        }
    }
}

/// 收缩动画配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollapseConfig {
    /// 每步间隔（毫秒）
    pub tick_interval_ms: u64,
    /// 动画总时长（毫秒）
    pub duration_ms: u64,
}

impl CollapseConfig {
    /// 动画总步数，总时长不是间隔整数倍时向上取整
    pub fn tick_count(&self) -> u32 {
        if self.tick_interval_ms == 0 {
            return 0;
        }
        let ticks = self.duration_ms.div_ceil(self.tick_interval_ms);
        u32::try_from(ticks).unwrap_or(u32::MAX)
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::InvalidTickInterval(self.tick_interval_ms));
        }
        if self.duration_ms == 0 {
            return Err(ConfigError::InvalidDuration(self.duration_ms));
        }
        Ok(())
    }
}

impl Default for CollapseConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: 25,
            duration_ms: 3000,
        }
    }
}

/// 引擎配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// 画布范围
    pub canvas: CanvasExtent,
    /// 交点标记半径
    pub marker_radius: f64,
    /// 交点标记颜色
    pub marker_color: Color,
    /// 点击坐标、交点、收缩长度保留的小数位数
    pub precision: u32,
    /// 收缩动画
    pub collapse: CollapseConfig,
    /// 日志级别（trace/debug/info/warn/error）
    pub log_level: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            canvas: CanvasExtent::default(),
            marker_radius: 4.0,
            marker_color: Color::RED,
            precision: DEFAULT_PRECISION,
            collapse: CollapseConfig::default(),
            log_level: "info".to_string(),
        }
    }
}

impl EngineConfig {
    /// 从 JSON 字符串解析并校验
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// 从 JSON 文件加载并校验
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&json)?;
        tracing::info!("Loaded config from: {}", path.display());
        Ok(config)
    }

    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let CanvasExtent { width, height } = self.canvas;
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(ConfigError::InvalidCanvas { width, height });
        }
        if !(self.marker_radius.is_finite() && self.marker_radius > 0.0) {
            return Err(ConfigError::InvalidMarkerRadius(self.marker_radius));
        }
        if self.precision > MAX_PRECISION {
            return Err(ConfigError::InvalidPrecision(self.precision));
        }
        self.collapse.validate()
    }
}
