use tactile_core::{Frame, Stroke};
use web_sys as web;

/// Replay a frame's display list onto a 2D context.
pub fn paint_frame(ctx: &web::CanvasRenderingContext2d, frame: &Frame) {
    ctx.set_shadow_blur(0.0);
    ctx.set_fill_style_str(&frame.background.to_css());
    ctx.fill_rect(0.0, 0.0, frame.width as f64, frame.height as f64);
    for stroke in &frame.strokes {
        paint_stroke(ctx, stroke);
    }
    ctx.set_shadow_blur(0.0);
}

fn paint_stroke(ctx: &web::CanvasRenderingContext2d, stroke: &Stroke) {
    let mut points = stroke.points.iter();
    let Some(first) = points.next() else {
        return;
    };
    ctx.set_stroke_style_str(&stroke.color.to_css());
    ctx.set_line_width(stroke.width as f64);
    match stroke.glow {
        Some(glow) => {
            ctx.set_shadow_blur(glow.blur as f64);
            ctx.set_shadow_color(&glow.color.to_css());
        }
        None => ctx.set_shadow_blur(0.0),
    }
    ctx.begin_path();
    ctx.move_to(first.x as f64, first.y as f64);
    for p in points {
        ctx.line_to(p.x as f64, p.y as f64);
    }
    ctx.stroke();
}
