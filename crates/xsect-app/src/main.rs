//! XSECT 主应用程序入口
//! 使用 eframe 作为应用框架：画布点击画线，实时显示交点，按钮触发收缩动画

use std::time::Duration;

use anyhow::Result;
use eframe::egui;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use xsect_core::config::{CanvasExtent, EngineConfig};
use xsect_core::geometry::Coord;
use xsect_core::properties::Color;
use xsect_ui::{Engine, InputEvent, RecordingSink, RenderSink};

/// 画布背景色
const BACKGROUND: egui::Color32 = egui::Color32::WHITE;

/// 线段颜色
const STROKE_COLOR: egui::Color32 = egui::Color32::BLACK;

/// 基于 egui Painter 的绘图表面，坐标相对画布左上角
struct PainterSink<'a> {
    painter: &'a egui::Painter,
    origin: egui::Pos2,
}

impl PainterSink<'_> {
    fn to_screen(&self, c: Coord) -> egui::Pos2 {
        self.origin + egui::vec2(c.x as f32, c.y as f32)
    }
}

impl RenderSink for PainterSink<'_> {
    fn clear(&mut self, extent: CanvasExtent) {
        let rect = egui::Rect::from_min_size(
            self.origin,
            egui::vec2(extent.width as f32, extent.height as f32),
        );
        self.painter.rect_filled(rect, 0.0, BACKGROUND);
    }

    fn stroke_segment(&mut self, a: Coord, b: Coord) {
        self.painter.line_segment(
            [self.to_screen(a), self.to_screen(b)],
            egui::Stroke::new(1.0, STROKE_COLOR),
        );
    }

    fn fill_marker(&mut self, at: Coord, radius: f64, color: Color) {
        self.painter.circle(
            self.to_screen(at),
            radius as f32,
            egui::Color32::from_rgb(color.r, color.g, color.b),
            egui::Stroke::new(1.0, STROKE_COLOR),
        );
    }
}

/// XSECT 应用程序
struct XsectApp {
    engine: Engine,
    /// 最近一帧的绘制命令（即时模式下每帧重放）
    display: RecordingSink,
    /// 上一次上报的指针位置（画布坐标）
    last_pointer: Option<egui::Pos2>,
}

impl XsectApp {
    fn new(config: EngineConfig) -> Self {
        let mut app = Self {
            engine: Engine::new(config),
            display: RecordingSink::new(),
            last_pointer: None,
        };
        app.engine.refresh(&mut app.display);
        app
    }

    fn dispatch(&mut self, event: InputEvent) {
        self.engine.handle_event(event, &mut self.display);
        self.display.retain_last_frame();
    }

    /// 画布：把鼠标事件转换为引擎事件，再重放显示列表
    fn show_canvas(&mut self, ui: &mut egui::Ui) {
        let canvas = self.engine.config().canvas;
        let size = egui::vec2(canvas.width as f32, canvas.height as f32);
        let (response, painter) = ui.allocate_painter(size, egui::Sense::click());
        let origin = response.rect.min;

        if response.clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                let local = pos - origin;
                self.dispatch(InputEvent::click(f64::from(local.x), f64::from(local.y)));
            }
        }

        // 只在位置变化时上报移动
        let pointer = response.hover_pos().map(|pos| (pos - origin).to_pos2());
        if pointer != self.last_pointer {
            if let Some(local) = pointer {
                self.dispatch(InputEvent::pointer_move(f64::from(local.x), f64::from(local.y)));
            }
            self.last_pointer = pointer;
        }

        let mut sink = PainterSink {
            painter: &painter,
            origin,
        };
        self.display.replay(&mut sink);
    }
}

impl eframe::App for XsectApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // 推进收缩动画
        if self.engine.is_animating() {
            let dt = ctx.input(|i| i.stable_dt);
            self.engine
                .advance(Duration::from_secs_f32(dt.max(0.0)), &mut self.display);
            self.display.retain_last_frame();
            // 请求持续重绘（实现动画效果）
            ctx.request_repaint();
        }

        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                let button = egui::Button::new("收缩 (Collapse)");
                if ui.add_enabled(self.engine.collapse_enabled(), button).clicked() {
                    self.dispatch(InputEvent::Collapse);
                    ctx.request_repaint();
                }
            });
        });

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.label(self.engine.status());
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.show_canvas(ui);
        });
    }
}

/// 候选中文字体路径（按平台）
const CJK_FONT_PATHS: &[&str] = &[
    // macOS
    "/System/Library/Fonts/PingFang.ttc",
    "/System/Library/Fonts/STHeiti Light.ttc",
    "/System/Library/Fonts/Hiragino Sans GB.ttc",
    // Linux
    "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/truetype/droid/DroidSansFallbackFull.ttf",
    // Windows
    "C:\\Windows\\Fonts\\msyh.ttc",
    "C:\\Windows\\Fonts\\simsun.ttc",
];

/// 把中文字体注册为比例字体和等宽字体的首选字体
fn install_chinese_font(fonts: &mut egui::FontDefinitions, font_data: Vec<u8>) {
    fonts.font_data.insert(
        "chinese".to_owned(),
        std::sync::Arc::new(egui::FontData::from_owned(font_data)),
    );
    for family in [egui::FontFamily::Proportional, egui::FontFamily::Monospace] {
        fonts
            .families
            .entry(family)
            .or_default()
            .insert(0, "chinese".to_owned());
    }
}

/// 设置中文字体支持，找不到系统字体时保留默认字体
fn setup_chinese_fonts(ctx: &egui::Context) {
    let mut fonts = egui::FontDefinitions::default();

    for path in CJK_FONT_PATHS {
        if let Ok(font_data) = std::fs::read(path) {
            install_chinese_font(&mut fonts, font_data);
            info!("Loaded Chinese font from: {}", path);
            break;
        }
    }

    ctx.set_fonts(fonts);
}

/// 读取配置：第一个命令行参数为 JSON 配置路径，缺省使用默认配置
fn load_config() -> Result<EngineConfig> {
    match std::env::args().nth(1) {
        Some(path) => Ok(EngineConfig::load(path)?),
        None => Ok(EngineConfig::default()),
    }
}

fn main() -> Result<()> {
    let config = load_config()?;

    // 初始化日志
    let level = config.log_level.parse::<Level>().unwrap_or(Level::INFO);
    tracing::subscriber::set_global_default(
        FmtSubscriber::builder().with_max_level(level).finish()
    )?;

    info!("Starting XSECT...");
    info!(
        "Canvas {}x{}, collapse {} ms in {} ticks",
        config.canvas.width,
        config.canvas.height,
        config.collapse.duration_ms,
        config.collapse.tick_count()
    );

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([
                config.canvas.width as f32 + 40.0,
                config.canvas.height as f32 + 100.0,
            ])
            .with_title("XSECT"),
        ..Default::default()
    };

    eframe::run_native(
        "XSECT",
        native_options,
        Box::new(move |cc| {
            setup_chinese_fonts(&cc.egui_ctx);
            Ok(Box::new(XsectApp::new(config)))
        }),
    )
    .map_err(|e| {
        tracing::error!("Failed to start UI: {}", e);
        anyhow::anyhow!("eframe error: {}", e)
    })?;

    Ok(())
}
