//! XSECT 交互层
//!
//! 绘图状态机、输入事件处理与渲染命令，不依赖任何具体的窗口系统。

pub mod engine;
pub mod event;
pub mod render;
pub mod state;

pub use engine::Engine;
pub use event::{EventResult, InputEvent, MouseButton};
pub use render::{render_scene, RecordingSink, RenderCommand, RenderSink};
pub use state::{ClickPhase, DrawingState};
