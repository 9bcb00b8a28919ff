//! 渲染接口
//!
//! 引擎只向 [`RenderSink`] 发出绘制命令，不关心具体的绘图表面。
//! [`RecordingSink`] 把命令记录下来，用于测试和即时模式界面的重放。

use xsect_core::config::{CanvasExtent, EngineConfig};
use xsect_core::geometry::{Coord, Point, Segment};
use xsect_core::properties::Color;

/// 绘图表面
pub trait RenderSink {
    /// 清空画布
    fn clear(&mut self, extent: CanvasExtent);

    /// 从 `a` 到 `b` 画线
    fn stroke_segment(&mut self, a: Coord, b: Coord);

    /// 在 `at` 处画实心圆形标记
    fn fill_marker(&mut self, at: Coord, radius: f64, color: Color);
}

/// 绘制命令
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RenderCommand {
    Clear { width: f64, height: f64 },
    StrokeSegment { a: Coord, b: Coord },
    FillMarker { at: Coord, radius: f64, color: Color },
}

/// 记录所有绘制命令
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    commands: Vec<RenderCommand>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[RenderCommand] {
        &self.commands
    }

    /// 最近一次清屏之后的命令（含清屏本身）
    pub fn last_frame(&self) -> &[RenderCommand] {
        let start = self
            .commands
            .iter()
            .rposition(|c| matches!(c, RenderCommand::Clear { .. }))
            .unwrap_or(0);
        &self.commands[start..]
    }

    /// 清屏次数
    pub fn clear_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, RenderCommand::Clear { .. }))
            .count()
    }

    /// 只保留最近一帧
    pub fn retain_last_frame(&mut self) {
        let start = self.commands.len() - self.last_frame().len();
        self.commands.drain(..start);
    }

    /// 把记录的命令重放到另一个表面
    pub fn replay(&self, sink: &mut impl RenderSink) {
        for command in &self.commands {
            match *command {
                RenderCommand::Clear { width, height } => {
                    sink.clear(CanvasExtent { width, height })
                }
                RenderCommand::StrokeSegment { a, b } => sink.stroke_segment(a, b),
                RenderCommand::FillMarker { at, radius, color } => {
                    sink.fill_marker(at, radius, color)
                }
            }
        }
    }

    pub fn take(&mut self) -> Vec<RenderCommand> {
        std::mem::take(&mut self.commands)
    }
}

impl RenderSink for RecordingSink {
    fn clear(&mut self, extent: CanvasExtent) {
        self.commands.push(RenderCommand::Clear {
            width: extent.width,
            height: extent.height,
        });
    }

    fn stroke_segment(&mut self, a: Coord, b: Coord) {
        self.commands.push(RenderCommand::StrokeSegment { a, b });
    }

    fn fill_marker(&mut self, at: Coord, radius: f64, color: Color) {
        self.commands.push(RenderCommand::FillMarker { at, radius, color });
    }
}

/// 完整重绘：清屏、所有线段、所有交点标记
pub fn render_scene(
    segments: &[Segment],
    intersections: &[Point],
    config: &EngineConfig,
    sink: &mut dyn RenderSink,
) {
    sink.clear(config.canvas);
    for segment in segments {
        let coords = segment.get_coordinates();
        sink.stroke_segment(coords.a, coords.b);
    }
    for point in intersections {
        sink.fill_marker(point.get_point(), config.marker_radius, config.marker_color);
    }
}
