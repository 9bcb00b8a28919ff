//! 绘图状态
//!
//! 线段列表（最新的在最前）、交点列表、点击阶段以及收缩动画，
//! 全部放在一个显式的状态结构里，由事件处理函数就地修改。

use xsect_core::collapse::CollapseAnimator;
use xsect_core::config::EngineConfig;
use xsect_core::geometry::{Point, Segment};
use xsect_core::math::round_to;

use crate::event::EventResult;

/// 点击阶段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClickPhase {
    /// 等待新线段的第一点
    #[default]
    AwaitingFirstClick,
    /// 等待第二点以完成当前线段
    AwaitingSecondClick,
}

impl ClickPhase {
    /// 当前阶段的提示文本
    pub fn prompt(&self) -> &'static str {
        match self {
            ClickPhase::AwaitingFirstClick => "指定第一点:",
            ClickPhase::AwaitingSecondClick => "指定下一点:",
        }
    }
}

/// 绘图状态
#[derive(Debug, Clone)]
pub struct DrawingState {
    /// 线段列表，最新的在最前
    pub(crate) segments: Vec<Segment>,
    /// 最近一次重算的交点
    pub(crate) intersections: Vec<Point>,
    pub(crate) phase: ClickPhase,
    /// 自上次收缩以来是否完成过线段
    pub(crate) collapse_armed: bool,
    pub(crate) collapse: CollapseAnimator,
}

impl DrawingState {
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            segments: Vec::new(),
            intersections: Vec::new(),
            phase: ClickPhase::AwaitingFirstClick,
            collapse_armed: false,
            collapse: CollapseAnimator::new(&config.collapse, config.precision),
        }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn intersections(&self) -> &[Point] {
        &self.intersections
    }

    pub fn phase(&self) -> ClickPhase {
        self.phase
    }

    pub fn collapse(&self) -> &CollapseAnimator {
        &self.collapse
    }

    /// 收缩按钮是否可用：完成过线段且没有进行中的动画
    pub fn collapse_enabled(&self) -> bool {
        self.collapse_armed && !self.collapse.is_animating()
    }

    /// 点击：第一次点击开始新线段，第二次点击完成它
    ///
    /// 点击坐标按 `precision` 舍入。
    pub fn on_click(&mut self, x: f64, y: f64, precision: u32) -> EventResult {
        let x = round_to(x, precision);
        let y = round_to(y, precision);

        match self.phase {
            ClickPhase::AwaitingFirstClick => {
                let mut segment = Segment::new(x, y);
                segment.set_point_b(x, y);
                self.segments.insert(0, segment);
                self.phase = ClickPhase::AwaitingSecondClick;
                tracing::debug!(x, y, "segment started");
                EventResult::SegmentStarted
            }
            ClickPhase::AwaitingSecondClick => {
                // 动画结束时会重置阶段，这里总有一条进行中的线段
                let Some(current) = self.segments.first_mut() else {
                    self.phase = ClickPhase::AwaitingFirstClick;
                    return EventResult::Ignored;
                };
                current.set_point_b(x, y);
                self.phase = ClickPhase::AwaitingFirstClick;
                self.collapse_armed = true;
                tracing::info!(segments = self.segments.len(), "segment completed");
                EventResult::SegmentCompleted
            }
        }
    }

    /// 指针移动：只在等待第二点时更新进行中线段的端点 `b`
    pub fn on_move(&mut self, x: f64, y: f64) -> EventResult {
        if self.phase != ClickPhase::AwaitingSecondClick {
            return EventResult::Ignored;
        }
        match self.segments.first_mut() {
            Some(current) => {
                current.set_point_b(x, y);
                EventResult::Updated
            }
            None => EventResult::Ignored,
        }
    }

    /// 收缩触发：按钮不可用时忽略
    pub fn on_collapse(&mut self) -> EventResult {
        if !self.collapse_enabled() {
            return EventResult::Ignored;
        }
        self.collapse.start();
        self.collapse_armed = false;
        EventResult::CollapseStarted
    }

    /// 动画结束后的清理
    pub(crate) fn finish_collapse(&mut self) {
        self.segments.clear();
        self.intersections.clear();
        self.phase = ClickPhase::AwaitingFirstClick;
        self.collapse_armed = false;
    }
}

impl Default for DrawingState {
    fn default() -> Self {
        Self::new(&EngineConfig::default())
    }
}
