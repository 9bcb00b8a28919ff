//! 输入事件与处理结果

/// 鼠标按钮
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// 输入事件，坐标相对画布原点
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// 鼠标点击（只处理左键）
    Click { x: f64, y: f64, button: MouseButton },
    /// 指针移动
    Move { x: f64, y: f64 },
    /// 收缩按钮
    Collapse,
}

impl InputEvent {
    /// 左键点击
    pub fn click(x: f64, y: f64) -> Self {
        InputEvent::Click {
            x,
            y,
            button: MouseButton::Left,
        }
    }

    pub fn pointer_move(x: f64, y: f64) -> Self {
        InputEvent::Move { x, y }
    }
}

/// 事件处理结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// 事件被忽略，状态未变
    Ignored,
    /// 进行中的线段已更新
    Updated,
    /// 开始了新线段
    SegmentStarted,
    /// 完成了当前线段
    SegmentCompleted,
    /// 收缩动画已开始
    CollapseStarted,
}

impl EventResult {
    /// 状态是否发生变化（需要重算与重绘）
    pub fn changed(&self) -> bool {
        !matches!(self, EventResult::Ignored)
    }
}
