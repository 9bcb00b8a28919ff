//! 图形引擎
//!
//! 把输入事件和动画步进串起来：修改状态 → 重算交点 → 重绘。
//! 所有入口都在单线程内同步执行完毕，一步之内先更新全部线段，
//! 再求交、再绘制，不会出现半步的画面。

use std::time::Duration;

use xsect_core::collapse::{IntervalTicker, TickOutcome, Ticker};
use xsect_core::config::EngineConfig;
use xsect_core::intersection::IntersectionFinder;

use crate::event::{EventResult, InputEvent, MouseButton};
use crate::render::{render_scene, RenderSink};
use crate::state::DrawingState;

/// 图形引擎
pub struct Engine {
    config: EngineConfig,
    finder: IntersectionFinder,
    state: DrawingState,
    ticker: Box<dyn Ticker>,
}

impl Engine {
    pub fn new(config: EngineConfig) -> Self {
        let ticker = Box::new(IntervalTicker::new(config.collapse.tick_interval()));
        Self::with_ticker(config, ticker)
    }

    /// 使用自定义时间源
    pub fn with_ticker(config: EngineConfig, ticker: Box<dyn Ticker>) -> Self {
        Self {
            finder: IntersectionFinder::new(config.precision),
            state: DrawingState::new(&config),
            config,
            ticker,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn state(&self) -> &DrawingState {
        &self.state
    }

    pub fn collapse_enabled(&self) -> bool {
        self.state.collapse_enabled()
    }

    pub fn is_animating(&self) -> bool {
        self.state.collapse.is_animating()
    }

    /// 处理一个输入事件
    pub fn handle_event(&mut self, event: InputEvent, sink: &mut dyn RenderSink) -> EventResult {
        let result = match event {
            InputEvent::Click {
                x,
                y,
                button: MouseButton::Left,
            } => self.state.on_click(x, y, self.config.precision),
            InputEvent::Click { .. } => EventResult::Ignored,
            InputEvent::Move { x, y } => self.state.on_move(x, y),
            InputEvent::Collapse => {
                let result = self.state.on_collapse();
                if result == EventResult::CollapseStarted {
                    self.ticker.reset();
                }
                result
            }
        };

        if result.changed() {
            self.refresh(sink);
        }
        result
    }

    /// 推进动画一步
    pub fn tick(&mut self, sink: &mut dyn RenderSink) -> TickOutcome {
        let outcome = self.state.collapse.tick(&mut self.state.segments);
        match outcome {
            TickOutcome::Idle => {}
            TickOutcome::Shrunk { .. } => self.refresh(sink),
            TickOutcome::Finished => {
                self.state.finish_collapse();
                sink.clear(self.config.canvas);
            }
        }
        outcome
    }

    /// 按流逝的时间推进动画，返回执行的步数
    pub fn advance(&mut self, elapsed: Duration, sink: &mut dyn RenderSink) -> u32 {
        if !self.is_animating() {
            return 0;
        }
        let due = self.ticker.advance(elapsed);
        let mut executed = 0;
        for _ in 0..due {
            executed += 1;
            if self.tick(sink) == TickOutcome::Finished {
                self.ticker.reset();
                break;
            }
        }
        executed
    }

    /// 重算交点并完整重绘
    pub fn refresh(&mut self, sink: &mut dyn RenderSink) {
        self.state.intersections = self.finder.find_all(&self.state.segments);
        render_scene(
            &self.state.segments,
            &self.state.intersections,
            &self.config,
            sink,
        );
    }

    /// 状态栏文本
    pub fn status(&self) -> String {
        let mut status = format!(
            "线段: {}  交点: {}",
            self.state.segments.len(),
            self.state.intersections.len()
        );
        if self.is_animating() {
            status.push_str(&format!(
                "  收缩中 {}/{}",
                self.state.collapse.current_tick(),
                self.state.collapse.tick_count()
            ));
        } else {
            status.push_str("  ");
            status.push_str(self.state.phase.prompt());
        }
        status
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{RecordingSink, RenderCommand};
    use crate::state::ClickPhase;
    use xsect_core::geometry::Coord;

    fn draw(engine: &mut Engine, sink: &mut RecordingSink, from: (f64, f64), to: (f64, f64)) {
        engine.handle_event(InputEvent::click(from.0, from.1), sink);
        engine.handle_event(InputEvent::click(to.0, to.1), sink);
    }

    fn intersection_coords(engine: &Engine) -> Vec<Coord> {
        engine
            .state()
            .intersections()
            .iter()
            .map(|p| p.get_point())
            .collect()
    }

    #[test]
    fn test_drag_updates_intersections() {
        let mut engine = Engine::default();
        let mut sink = RecordingSink::new();
        draw(&mut engine, &mut sink, (0.0, 0.0), (10.0, 0.0));

        engine.handle_event(InputEvent::click(5.0, -5.0), &mut sink);
        assert!(engine.state().intersections().is_empty());

        engine.handle_event(InputEvent::pointer_move(5.0, 5.0), &mut sink);
        assert_eq!(intersection_coords(&engine), vec![Coord::new(5.0, 0.0)]);

        // 拖回去，交点消失
        engine.handle_event(InputEvent::pointer_move(5.0, -1.0), &mut sink);
        assert!(engine.state().intersections().is_empty());
    }

    #[test]
    fn test_every_change_redraws_full_frame() {
        let mut engine = Engine::default();
        let mut sink = RecordingSink::new();
        draw(&mut engine, &mut sink, (0.0, 0.0), (10.0, 0.0));
        draw(&mut engine, &mut sink, (5.0, -5.0), (5.0, 5.0));

        assert_eq!(sink.clear_count(), 4);
        let frame = sink.last_frame();
        assert_eq!(frame.len(), 4);
        assert!(matches!(frame[0], RenderCommand::Clear { .. }));
        assert_eq!(
            frame[3],
            RenderCommand::FillMarker {
                at: Coord::new(5.0, 0.0),
                radius: 4.0,
                color: xsect_core::properties::Color::RED,
            }
        );
    }

    #[test]
    fn test_ignored_events_do_not_render() {
        let mut engine = Engine::default();
        let mut sink = RecordingSink::new();
        engine.handle_event(InputEvent::pointer_move(1.0, 1.0), &mut sink);
        engine.handle_event(InputEvent::Collapse, &mut sink);
        engine.handle_event(
            InputEvent::Click {
                x: 1.0,
                y: 1.0,
                button: MouseButton::Right,
            },
            &mut sink,
        );
        assert!(sink.commands().is_empty());
        assert!(engine.state().segments().is_empty());
    }

    #[test]
    fn test_collapse_runs_to_empty() {
        let mut engine = Engine::default();
        let mut sink = RecordingSink::new();
        draw(&mut engine, &mut sink, (0.0, 0.0), (10.0, 0.0));
        draw(&mut engine, &mut sink, (5.0, -5.0), (5.0, 5.0));
        assert!(engine.collapse_enabled());

        assert_eq!(
            engine.handle_event(InputEvent::Collapse, &mut sink),
            EventResult::CollapseStarted
        );
        assert!(!engine.collapse_enabled());

        let mut ticks = 0;
        while engine.tick(&mut sink) != TickOutcome::Finished {
            ticks += 1;
        }
        assert_eq!(ticks + 1, 120);
        assert!(engine.state().segments().is_empty());
        assert!(engine.state().intersections().is_empty());
        assert_eq!(sink.last_frame(), &[RenderCommand::Clear { width: 600.0, height: 400.0 }]);
        assert!(!engine.collapse_enabled());
        assert_eq!(engine.tick(&mut sink), TickOutcome::Idle);
    }

    #[test]
    fn test_advance_uses_interval() {
        let mut engine = Engine::default();
        let mut sink = RecordingSink::new();
        draw(&mut engine, &mut sink, (0.0, 0.0), (100.0, 0.0));

        assert_eq!(engine.advance(Duration::from_millis(100), &mut sink), 0);

        engine.handle_event(InputEvent::Collapse, &mut sink);
        assert_eq!(engine.advance(Duration::from_millis(60), &mut sink), 2);
        assert_eq!(engine.state().collapse().current_tick(), 2);

        // 一次给足时间，最多执行到结束
        assert_eq!(engine.advance(Duration::from_secs(10), &mut sink), 118);
        assert!(!engine.is_animating());
        assert!(engine.state().segments().is_empty());
    }

    #[test]
    fn test_drawing_during_collapse() {
        let mut engine = Engine::default();
        let mut sink = RecordingSink::new();
        draw(&mut engine, &mut sink, (0.0, 0.0), (100.0, 0.0));
        engine.handle_event(InputEvent::Collapse, &mut sink);
        engine.tick(&mut sink);

        // 动画期间仍可开始新线段
        engine.handle_event(InputEvent::click(50.0, -50.0), &mut sink);
        engine.handle_event(InputEvent::pointer_move(50.0, 50.0), &mut sink);
        assert_eq!(engine.state().segments().len(), 2);
        assert_eq!(intersection_coords(&engine), vec![Coord::new(50.0, 0.0)]);
        assert_eq!(engine.state().phase(), ClickPhase::AwaitingSecondClick);

        while engine.tick(&mut sink) != TickOutcome::Finished {}

        // 进行中的线段随动画一起清除，下一次点击重新开始
        assert!(engine.state().segments().is_empty());
        assert_eq!(engine.state().phase(), ClickPhase::AwaitingFirstClick);
        assert_eq!(
            engine.handle_event(InputEvent::click(1.0, 1.0), &mut sink),
            EventResult::SegmentStarted
        );
    }

    #[test]
    fn test_status_text() {
        let mut engine = Engine::default();
        let mut sink = RecordingSink::new();
        assert_eq!(engine.status(), "线段: 0  交点: 0  指定第一点:");

        draw(&mut engine, &mut sink, (0.0, 0.0), (10.0, 0.0));
        engine.handle_event(InputEvent::Collapse, &mut sink);
        engine.tick(&mut sink);
        assert_eq!(engine.status(), "线段: 1  交点: 0  收缩中 1/120");
    }
}
