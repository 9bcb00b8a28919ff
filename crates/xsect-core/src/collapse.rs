//! 对称收缩动画
//!
//! 以固定步长推进的有限状态机：每一步把所有线段从两端向中点等量收缩，
//! 总时长到达后清空线段列表。
//!
//! ```text
//! Idle ──start──▶ Animating(tick, slices) ──最后一步──▶ Done ──start──▶ Animating ...
//! ```
//!
//! 时间推进通过 [`Ticker`] 注入，测试可以直接调用 [`CollapseAnimator::tick`]
//! 逐步驱动，无需等待真实时钟。

use crate::config::CollapseConfig;
use crate::geometry::{Segment, SegmentCoords};
use crate::math::{round_to, DEFAULT_PRECISION};
use std::time::Duration;

/// 动画状态
#[derive(Debug, Clone, PartialEq)]
pub enum CollapseState {
    /// 未开始
    Idle,
    /// 进行中
    Animating {
        /// 已完成的步数
        tick: u32,
        /// 每条线段每步从单端去掉的长度（首步计算，之后保持不变）
        slices: Vec<f64>,
    },
    /// 已结束，线段已清空
    Done,
}

/// 单步推进的结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// 没有进行中的动画
    Idle,
    /// 线段已收缩，动画继续
    Shrunk { tick: u32 },
    /// 最后一步完成，线段列表已清空
    Finished,
}

/// 收缩动画器
#[derive(Debug, Clone)]
pub struct CollapseAnimator {
    tick_count: u32,
    precision: u32,
    state: CollapseState,
}

impl CollapseAnimator {
    pub fn new(config: &CollapseConfig, precision: u32) -> Self {
        Self {
            tick_count: config.tick_count(),
            precision,
            state: CollapseState::Idle,
        }
    }

    pub fn state(&self) -> &CollapseState {
        &self.state
    }

    /// 动画总步数
    pub fn tick_count(&self) -> u32 {
        self.tick_count
    }

    pub fn is_animating(&self) -> bool {
        matches!(self.state, CollapseState::Animating { .. })
    }

    /// 已完成的步数（未在动画中时为 0）
    pub fn current_tick(&self) -> u32 {
        match &self.state {
            CollapseState::Animating { tick, .. } => *tick,
            _ => 0,
        }
    }

    /// 开始动画，已经在进行中时返回 `false`
    pub fn start(&mut self) -> bool {
        if self.is_animating() {
            return false;
        }
        self.state = CollapseState::Animating {
            tick: 0,
            slices: Vec::new(),
        };
        tracing::info!(ticks = self.tick_count, "collapse started");
        true
    }

    /// 推进一步
    ///
    /// 先收缩所有线段，最后一步再清空列表；调用方随后负责重算交点与重绘。
    /// 动画开始后新加入的线段（位于列表头部）不参与收缩，结束时一并清除。
    pub fn tick(&mut self, segments: &mut Vec<Segment>) -> TickOutcome {
        let precision = self.precision;
        let tick_count = self.tick_count;

        let CollapseState::Animating { tick, slices } = &mut self.state else {
            return TickOutcome::Idle;
        };

        *tick += 1;
        if *tick == 1 {
            *slices = segments
                .iter()
                .map(|s| slice_length(s, tick_count, precision))
                .collect();
        }

        let added = segments.len().saturating_sub(slices.len());
        for (segment, slice) in segments.iter_mut().skip(added).zip(slices.iter()) {
            shrink_segment(segment, *slice, precision);
        }

        let current = *tick;
        tracing::debug!(tick = current, segments = segments.len(), "collapse tick");

        if current >= tick_count {
            segments.clear();
            self.state = CollapseState::Done;
            tracing::info!("collapse finished");
            TickOutcome::Finished
        } else {
            TickOutcome::Shrunk { tick: current }
        }
    }
}

impl Default for CollapseAnimator {
    fn default() -> Self {
        Self::new(&CollapseConfig::default(), DEFAULT_PRECISION)
    }
}

/// 每步单端收缩量：总长度 / 步数 / 2
fn slice_length(segment: &Segment, tick_count: u32, precision: u32) -> f64 {
    let length = round_to(segment.length(), precision);
    round_to(length / f64::from(tick_count.max(1)) / 2.0, precision)
}

/// 两端各向内移动，保持中点不变
///
/// 零长度线段视为已收缩完毕，不做处理；单端收缩量不超过当前长度的一半，
/// 线段最多退化为中点，不会翻转。
fn shrink_segment(segment: &mut Segment, slice: f64, precision: u32) {
    let SegmentCoords { a, b } = segment.get_coordinates();

    let old_length = round_to(segment.length(), precision);
    if old_length <= 0.0 {
        return;
    }
    let new_length = round_to(old_length - slice, precision).max(old_length / 2.0);

    let x = (b.x - a.x).abs();
    let y = (b.y - a.y).abs();
    let dx = x - x * new_length / old_length;
    let dy = y - y * new_length / old_length;

    let (ax, bx) = if b.x > a.x {
        (a.x + dx, b.x - dx)
    } else {
        (a.x - dx, b.x + dx)
    };
    let (ay, by) = if b.y > a.y {
        (a.y + dy, b.y - dy)
    } else {
        (a.y - dy, b.y + dy)
    };

    segment.set_point_a(ax, ay);
    segment.set_point_b(bx, by);
}

/// 时间源：把流逝的时间换算为应执行的步数
pub trait Ticker: Send {
    /// 累计 `elapsed`，返回本次应执行的步数
    fn advance(&mut self, elapsed: Duration) -> u32;

    /// 丢弃累计的时间
    fn reset(&mut self);
}

/// 固定间隔计时器
#[derive(Debug, Clone)]
pub struct IntervalTicker {
    interval: Duration,
    accumulated: Duration,
}

impl IntervalTicker {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            accumulated: Duration::ZERO,
        }
    }
}

impl Ticker for IntervalTicker {
    fn advance(&mut self, elapsed: Duration) -> u32 {
        if self.interval.is_zero() {
            return 0;
        }
        self.accumulated += elapsed;
        let mut due = 0;
        while self.accumulated >= self.interval {
            self.accumulated -= self.interval;
            due += 1;
        }
        due
    }

    fn reset(&mut self) {
        self.accumulated = Duration::ZERO;
    }
}
