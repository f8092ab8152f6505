//! Rendering module
//!
//! Drawing goes through the [`Canvas`] trait: an immediate-mode 2D surface
//! working in logical arena coordinates. The backend maps logical space to
//! its display pixels.

pub mod scene;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use scene::draw_frame;
#[cfg(target_arch = "wasm32")]
pub use web::WebCanvas;

use glam::Vec2;

/// Stroke style for lines
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineStyle<'a> {
    pub color: &'a str,
    pub width: f32,
    /// Dash and gap lengths; `None` for a solid line
    pub dash: Option<(f32, f32)>,
}

/// Immediate-mode 2D drawing surface
pub trait Canvas {
    /// Clear a region to transparent
    fn clear(&mut self, x: f32, y: f32, w: f32, h: f32);
    fn draw_circle(&mut self, cx: f32, cy: f32, r: f32, color: &str);
    fn draw_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: &str);
    fn draw_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, style: LineStyle<'_>);
    /// Filled triangle (arrow heads)
    fn draw_triangle(&mut self, a: Vec2, b: Vec2, c: Vec2, color: &str);
    fn draw_text(&mut self, text: &str, x: f32, y: f32, font: &str, color: &str);
    /// Current display surface size in pixels
    fn surface_size(&self) -> (f32, f32);
}

/// Canvas that discards everything (headless runs)
#[derive(Debug, Default)]
pub struct NullCanvas;

impl Canvas for NullCanvas {
    fn clear(&mut self, _x: f32, _y: f32, _w: f32, _h: f32) {}
    fn draw_circle(&mut self, _cx: f32, _cy: f32, _r: f32, _color: &str) {}
    fn draw_rect(&mut self, _x: f32, _y: f32, _w: f32, _h: f32, _color: &str) {}
    fn draw_line(&mut self, _x1: f32, _y1: f32, _x2: f32, _y2: f32, _style: LineStyle<'_>) {}
    fn draw_triangle(&mut self, _a: Vec2, _b: Vec2, _c: Vec2, _color: &str) {}
    fn draw_text(&mut self, _text: &str, _x: f32, _y: f32, _font: &str, _color: &str) {}
    fn surface_size(&self) -> (f32, f32) {
        (crate::consts::ARENA_WIDTH, crate::consts::ARENA_HEIGHT)
    }
}

/// Display size that fits a container while keeping the arena aspect ratio.
///
/// Width is capped at 95% of the container and at the logical width; if the
/// resulting height overflows 95% of the container height, height becomes
/// the limiting dimension.
pub fn fit_to_container(container_w: f32, container_h: f32, logical: (f32, f32)) -> (f32, f32) {
    let aspect = logical.0 / logical.1;
    let mut width = (container_w * 0.95).min(logical.0);
    let mut height = width / aspect;

    if height > container_h * 0.95 {
        height = container_h * 0.95;
        width = height * aspect;
    }

    (width, height)
}

/// Map a point on the displayed surface back into logical arena space
pub fn to_logical(display: Vec2, display_size: (f32, f32), logical: (f32, f32)) -> Vec2 {
    if display_size.0 <= 0.0 || display_size.1 <= 0.0 {
        return display;
    }
    Vec2::new(
        display.x * logical.0 / display_size.0,
        display.y * logical.1 / display_size.1,
    )
}
