//! Browser canvas backend (CanvasRenderingContext2d)

use glam::Vec2;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::{Canvas, LineStyle, fit_to_container};

/// 2D canvas context working in logical arena coordinates.
///
/// The backing store is the logical size; CSS scales the element to fit
/// its container.
pub struct WebCanvas {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
    logical: (f32, f32),
}

impl WebCanvas {
    pub fn new(canvas: HtmlCanvasElement, logical: (f32, f32)) -> Result<Self, JsValue> {
        canvas.set_width(logical.0 as u32);
        canvas.set_height(logical.1 as u32);

        let context = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;

        log::info!("Canvas ready: {}x{} logical", logical.0, logical.1);

        Ok(Self {
            canvas,
            context,
            logical,
        })
    }

    pub fn element(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    /// Refit the displayed size to the parent element (call on resize)
    pub fn fit_to_parent(&self) -> Result<(), JsValue> {
        let Some(parent) = self.canvas.parent_element() else {
            return Ok(());
        };
        let (w, h) = fit_to_container(
            parent.client_width() as f32,
            parent.client_height() as f32,
            self.logical,
        );
        let style = self.canvas.style();
        style.set_property("width", &format!("{w}px"))?;
        style.set_property("height", &format!("{h}px"))?;
        log::debug!("Canvas resized to {w:.0}x{h:.0}");
        Ok(())
    }
}

impl Canvas for WebCanvas {
    fn clear(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.context
            .clear_rect(x as f64, y as f64, w as f64, h as f64);
    }

    fn draw_circle(&mut self, cx: f32, cy: f32, r: f32, color: &str) {
        self.context.begin_path();
        if let Err(e) = self.context.arc(
            cx as f64,
            cy as f64,
            r as f64,
            0.0,
            std::f64::consts::TAU,
        ) {
            log::warn!("arc failed: {e:?}");
            return;
        }
        self.context.set_fill_style_str(color);
        self.context.fill();
        self.context.close_path();
    }

    fn draw_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: &str) {
        self.context.set_fill_style_str(color);
        self.context
            .fill_rect(x as f64, y as f64, w as f64, h as f64);
    }

    fn draw_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, style: LineStyle<'_>) {
        self.context.save();
        self.context.set_stroke_style_str(style.color);
        self.context.set_line_width(style.width as f64);
        if let Some((dash, gap)) = style.dash {
            let pattern = js_sys::Array::of2(&(dash as f64).into(), &(gap as f64).into());
            if let Err(e) = self.context.set_line_dash(&pattern) {
                log::warn!("set_line_dash failed: {e:?}");
            }
        }
        self.context.begin_path();
        self.context.move_to(x1 as f64, y1 as f64);
        self.context.line_to(x2 as f64, y2 as f64);
        self.context.stroke();
        self.context.restore();
    }

    fn draw_triangle(&mut self, a: Vec2, b: Vec2, c: Vec2, color: &str) {
        self.context.set_fill_style_str(color);
        self.context.begin_path();
        self.context.move_to(a.x as f64, a.y as f64);
        self.context.line_to(b.x as f64, b.y as f64);
        self.context.line_to(c.x as f64, c.y as f64);
        self.context.close_path();
        self.context.fill();
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32, font: &str, color: &str) {
        self.context.set_font(font);
        self.context.set_fill_style_str(color);
        if let Err(e) = self.context.fill_text(text, x as f64, y as f64) {
            log::warn!("fill_text failed: {e:?}");
        }
    }

    fn surface_size(&self) -> (f32, f32) {
        let rect = self.canvas.get_bounding_client_rect();
        (rect.width() as f32, rect.height() as f32)
    }
}
