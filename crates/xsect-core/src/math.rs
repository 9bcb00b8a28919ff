//! 数学基础类型
//!
//! 基于 nalgebra 的 2D 点别名，以及引擎统一使用的舍入规则。

use serde::{Deserialize, Serialize};

/// 2D 点
pub type Point2 = nalgebra::Point2<f64>;

/// 浮点比较容差
pub const EPSILON: f64 = 1e-10;

/// 默认保留的小数位数（点击坐标、交点、收缩长度）
pub const DEFAULT_PRECISION: u32 = 2;

/// 四舍五入到指定小数位（远离零方向舍入半数）
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    let rounded = (value * factor).round() / factor;
    // 避免产生 -0.0
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// 轴对齐包围盒（闭区间）
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox2 {
    pub min: Point2,
    pub max: Point2,
}

impl BoundingBox2 {
    pub fn new(min: Point2, max: Point2) -> Self {
        Self { min, max }
    }

    pub fn from_points(points: impl IntoIterator<Item = Point2>) -> Self {
        let mut iter = points.into_iter();
        let first = iter.next().unwrap_or_else(Point2::origin);
        let mut bbox = Self::new(first, first);
        for p in iter {
            bbox.expand_to_include(&p);
        }
        bbox
    }

    pub fn expand_to_include(&mut self, point: &Point2) {
        self.min.x = self.min.x.min(point.x);
        self.min.y = self.min.y.min(point.y);
        self.max.x = self.max.x.max(point.x);
        self.max.y = self.max.y.max(point.y);
    }

    /// 边界上的点也算包含
    pub fn contains(&self, point: &Point2) -> bool {
        self.min.x <= point.x
            && point.x <= self.max.x
            && self.min.y <= point.y
            && point.y <= self.max.y
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }
}
