//! XSECT 核心几何引擎
//!
//! 提供线段图元、两两求交以及对称收缩动画。
//!
//! # 架构设计
//!
//! - `geometry`: 点与线段，访问器返回值快照
//! - `intersection`: 所有线段对的交点计算
//! - `collapse`: 固定步长的收缩动画状态机
//! - `config`: 引擎配置（JSON）
//!
//! # 示例
//!
//! ```rust
//! use xsect_core::prelude::*;
//!
//! let segments = vec![
//!     Segment::from_endpoints(Point2::new(0.0, 0.0), Point2::new(10.0, 0.0)),
//!     Segment::from_endpoints(Point2::new(5.0, -5.0), Point2::new(5.0, 5.0)),
//! ];
//!
//! let points = IntersectionFinder::default().find_all(&segments);
//! assert_eq!(points[0].get_point(), Coord::new(5.0, 0.0));
//! ```

pub mod collapse;
pub mod config;
pub mod error;
pub mod geometry;
pub mod intersection;
pub mod math;
pub mod properties;

pub mod prelude {
    //! 常用类型的便捷导入
    pub use crate::collapse::{CollapseAnimator, CollapseState, IntervalTicker, TickOutcome, Ticker};
    pub use crate::config::{CanvasExtent, CollapseConfig, EngineConfig};
    pub use crate::error::ConfigError;
    pub use crate::geometry::{Coord, Point, Segment, SegmentCoords};
    pub use crate::intersection::IntersectionFinder;
    pub use crate::math::{round_to, BoundingBox2, Point2, EPSILON};
    pub use crate::properties::Color;
}
