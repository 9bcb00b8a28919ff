//! 线段求交
//!
//! 对当前所有线段两两求交（每个无序对只计算一次），
//! 交点需要同时落在两条线段的闭包围盒内。
//! 结果每次整体重算，不做去重。

use crate::geometry::{Point, Segment};
use crate::math::{round_to, Point2, DEFAULT_PRECISION};

/// 交点查找器
#[derive(Debug, Clone, Copy)]
pub struct IntersectionFinder {
    /// 交点坐标保留的小数位数
    precision: u32,
}

impl IntersectionFinder {
    pub fn new(precision: u32) -> Self {
        Self { precision }
    }

    /// 计算所有线段对的交点
    ///
    /// 外层下标严格大于内层下标；输出按外层升序、内层升序排列。
    pub fn find_all(&self, segments: &[Segment]) -> Vec<Point> {
        let mut points = Vec::new();
        for i in 0..segments.len() {
            for j in 0..i {
                if let Some(p) = self.segment_intersection(&segments[i], &segments[j]) {
                    points.push(Point::from_point2(p));
                }
            }
        }
        tracing::debug!(
            segments = segments.len(),
            intersections = points.len(),
            "intersections recomputed"
        );
        points
    }

    /// 线段-线段交点（行列式法）
    ///
    /// 支撑直线平行或共线时返回 `None`。
    pub fn segment_intersection(&self, l1: &Segment, l2: &Segment) -> Option<Point2> {
        let (a1, b1) = (l1.start(), l1.end());
        let (a2, b2) = (l2.start(), l2.end());

        let c1x = a1.x - b1.x;
        let c1y = a1.y - b1.y;
        let c2x = a2.x - b2.x;
        let c2y = a2.y - b2.y;

        let d = c1x * c2y - c1y * c2x;
        if d == 0.0 {
            return None;
        }

        let u1 = a1.x * b1.y - a1.y * b1.x;
        let u2 = a2.x * b2.y - a2.y * b2.x;

        let px = round_to((u1 * c2x - c1x * u2) / d, self.precision);
        let py = round_to((u1 * c2y - c1y * u2) / d, self.precision);
        let p = Point2::new(px, py);

        if l1.bounding_box().contains(&p) && l2.bounding_box().contains(&p) {
            Some(p)
        } else {
            None
        }
    }
}

impl Default for IntersectionFinder {
    fn default() -> Self {
        Self::new(DEFAULT_PRECISION)
    }
}
