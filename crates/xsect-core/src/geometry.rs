//! 几何图元定义
//!
//! - 点 (Point)
//! - 线段 (Segment)
//!
//! 访问器总是返回值快照（[`Coord`] / [`SegmentCoords`]），
//! 调用方修改快照不会影响绘图状态。

use crate::math::{BoundingBox2, Point2};
use serde::{Deserialize, Serialize};

/// 坐标快照
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Coord {
    pub x: f64,
    pub y: f64,
}

impl Coord {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<Point2> for Coord {
    fn from(p: Point2) -> Self {
        Self { x: p.x, y: p.y }
    }
}

/// 线段两端点的坐标快照
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SegmentCoords {
    pub a: Coord,
    pub b: Coord,
}

/// 点
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    position: Point2,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            position: Point2::new(x, y),
        }
    }

    pub fn from_point2(position: Point2) -> Self {
        Self { position }
    }

    /// 覆盖两个坐标
    pub fn set_point(&mut self, x: f64, y: f64) {
        self.position = Point2::new(x, y);
    }

    /// 返回坐标快照
    pub fn get_point(&self) -> Coord {
        Coord::from(self.position)
    }

    pub fn position(&self) -> Point2 {
        self.position
    }
}

impl Default for Point {
    fn default() -> Self {
        Self {
            position: Point2::origin(),
        }
    }
}

/// 线段
///
/// 两个端点由线段独占，端点 `b` 在构造后为原点，需要显式设置。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    a: Point,
    b: Point,
}

impl Segment {
    /// 以 `(x, y)` 作为端点 `a` 创建线段
    pub fn new(x: f64, y: f64) -> Self {
        let mut a = Point::default();
        a.set_point(x, y);
        Self {
            a,
            b: Point::default(),
        }
    }

    /// 由两个端点直接创建
    pub fn from_endpoints(a: Point2, b: Point2) -> Self {
        Self {
            a: Point::from_point2(a),
            b: Point::from_point2(b),
        }
    }

    pub fn set_point_a(&mut self, x: f64, y: f64) {
        self.a.set_point(x, y);
    }

    pub fn set_point_b(&mut self, x: f64, y: f64) {
        self.b.set_point(x, y);
    }

    /// 返回两端点坐标快照
    pub fn get_coordinates(&self) -> SegmentCoords {
        SegmentCoords {
            a: self.a.get_point(),
            b: self.b.get_point(),
        }
    }

    pub fn start(&self) -> Point2 {
        self.a.position()
    }

    pub fn end(&self) -> Point2 {
        self.b.position()
    }

    /// 计算线段长度
    pub fn length(&self) -> f64 {
        (self.end() - self.start()).norm()
    }

    /// 计算线段中点
    pub fn midpoint(&self) -> Point2 {
        nalgebra::center(&self.start(), &self.end())
    }

    pub fn bounding_box(&self) -> BoundingBox2 {
        BoundingBox2::from_points([self.start(), self.end()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::EPSILON;

    #[test]
    fn test_point_set_and_get() {
        let mut p = Point::new(1.0, 2.0);
        assert_eq!(p.get_point(), Coord::new(1.0, 2.0));
        p.set_point(-3.5, 4.25);
        assert_eq!(p.get_point(), Coord::new(-3.5, 4.25));
    }

    #[test]
    fn test_point_snapshot_is_a_copy() {
        let p = Point::new(1.0, 2.0);
        let mut snapshot = p.get_point();
        snapshot.x = 100.0;
        assert_eq!(p.get_point().x, 1.0);
    }

    #[test]
    fn test_segment_new_defaults_b_to_origin() {
        let seg = Segment::new(7.0, 8.0);
        let coords = seg.get_coordinates();
        assert_eq!(coords.a, Coord::new(7.0, 8.0));
        assert_eq!(coords.b, Coord::new(0.0, 0.0));
    }

    #[test]
    fn test_segment_setters() {
        let mut seg = Segment::new(0.0, 0.0);
        seg.set_point_b(3.0, 4.0);
        assert!((seg.length() - 5.0).abs() < EPSILON);

        seg.set_point_a(3.0, 0.0);
        let coords = seg.get_coordinates();
        assert_eq!(coords.a, Coord::new(3.0, 0.0));
        assert_eq!(coords.b, Coord::new(3.0, 4.0));
        assert!((seg.length() - 4.0).abs() < EPSILON);
    }

    #[test]
    fn test_segment_snapshot_does_not_alias() {
        let seg = Segment::from_endpoints(Point2::new(0.0, 0.0), Point2::new(10.0, 0.0));
        let mut coords = seg.get_coordinates();
        coords.b.x = -1.0;
        assert_eq!(seg.get_coordinates().b.x, 10.0);
    }

    #[test]
    fn test_segment_midpoint() {
        let seg = Segment::from_endpoints(Point2::new(-2.0, 4.0), Point2::new(6.0, 0.0));
        let mid = seg.midpoint();
        assert!((mid.x - 2.0).abs() < EPSILON);
        assert!((mid.y - 2.0).abs() < EPSILON);
    }
}
