use crate::constants::*;
use crate::dom;
use crate::layout::{backing_px, view_transform};
use std::f64::consts::PI;
use tactile_core::constants::DIAL_VIEW_SIZE;
use tactile_core::{
    content_size, knob_angle_degrees, knob_radius, tick_segment, ticks, DialController, Tick,
};
use web_sys as web;

pub struct DialView {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    readout: Option<web::Element>,
    ticks: Vec<Tick>,
}

impl DialView {
    pub fn attach(document: &web::Document, id: &str, dial: &DialController) -> Option<Self> {
        let canvas: web::HtmlCanvasElement = dom::element_by_id(document, id)?;
        let ctx = dom::canvas_2d(&canvas)?;
        // Backing store follows the laid-out size times the device pixel ratio.
        let css_px = canvas.get_bounding_client_rect().width();
        if let (Some(w), true) = (web::window(), css_px > 0.0) {
            let px = backing_px(css_px, w.device_pixel_ratio());
            canvas.set_width(px);
            canvas.set_height(px);
        }
        let readout = document.get_element_by_id(&format!("{id}{DIAL_VALUE_SUFFIX}"));
        let config = dial.config();
        _ = canvas.set_attribute("role", "slider");
        _ = canvas.set_attribute("tabindex", "0");
        _ = canvas.set_attribute("aria-valuemin", &config.min.to_string());
        _ = canvas.set_attribute("aria-valuemax", &config.max.to_string());
        Some(Self {
            ticks: ticks(config),
            canvas,
            ctx,
            readout,
        })
    }

    pub fn canvas(&self) -> &web::HtmlCanvasElement {
        &self.canvas
    }

    pub fn draw(&self, dial: &DialController) {
        let ctx = &self.ctx;
        let value = dial.value();
        let view = DIAL_VIEW_SIZE as f64;
        let center = view / 2.0;
        let (scale, offset) = view_transform(
            self.canvas.width() as f64,
            view,
            content_size(DIAL_VIEW_SIZE) as f64,
        );

        _ = ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0);
        ctx.clear_rect(
            0.0,
            0.0,
            self.canvas.width() as f64,
            self.canvas.height() as f64,
        );
        _ = ctx.set_transform(scale, 0.0, 0.0, scale, offset, offset);

        ctx.set_line_width(TICK_LINE_WIDTH);
        ctx.set_line_cap("round");
        for tick in &self.ticks {
            let (from, to) = tick_segment(tick, DIAL_VIEW_SIZE);
            if tick.is_active(value) {
                ctx.set_stroke_style_str(TICK_ACTIVE_COLOR);
                ctx.set_shadow_color(TICK_ACTIVE_COLOR);
                ctx.set_shadow_blur(TICK_GLOW_BLUR);
            } else {
                ctx.set_stroke_style_str(TICK_IDLE_COLOR);
                ctx.set_shadow_blur(0.0);
            }
            ctx.begin_path();
            ctx.move_to(from.x as f64, from.y as f64);
            ctx.line_to(to.x as f64, to.y as f64);
            ctx.stroke();
        }
        ctx.set_shadow_blur(0.0);

        ctx.begin_path();
        _ = ctx.arc(
            center,
            center,
            knob_radius(DIAL_VIEW_SIZE) as f64,
            0.0,
            2.0 * PI,
        );
        ctx.set_fill_style_str(KNOB_FILL_COLOR);
        ctx.fill();
        ctx.set_stroke_style_str(KNOB_EDGE_COLOR);
        ctx.stroke();

        // Pointer starts an eighth of the view out from center, rotated with the value.
        ctx.save();
        _ = ctx.translate(center, center);
        _ = ctx.rotate(knob_angle_degrees(dial.config(), value).to_radians());
        ctx.set_stroke_style_str(POINTER_COLOR);
        ctx.set_line_width(POINTER_LINE_WIDTH);
        ctx.begin_path();
        ctx.move_to(view / 8.0, 0.0);
        ctx.line_to(view / 8.0 + POINTER_LENGTH, 0.0);
        ctx.stroke();
        ctx.restore();

        let text = value.to_string();
        _ = self.canvas.set_attribute("aria-valuenow", &text);
        if let Some(el) = &self.readout {
            el.set_text_content(Some(&text));
        }
    }
}
