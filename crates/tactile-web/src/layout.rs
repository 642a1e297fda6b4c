/// Scale and offset mapping the cropped dial view box onto a canvas of
/// `canvas_px` square pixels.
#[inline]
pub fn view_transform(canvas_px: f64, view: f64, content: f64) -> (f64, f64) {
    let scale = canvas_px / content;
    let offset = -((view - content) / 2.0) * scale;
    (scale, offset)
}

/// Backing-store size for a square element of `css_px` at device pixel ratio `dpr`.
#[inline]
pub fn backing_px(css_px: f64, dpr: f64) -> u32 {
    let px = (css_px * dpr).round();
    if px.is_finite() && px >= 1.0 {
        px as u32
    } else {
        1
    }
}
