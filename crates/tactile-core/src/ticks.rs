use crate::constants::{
    DIAL_MAJOR_TICK_LEN, DIAL_MINOR_TICK_LEN, DIAL_SWEEP_DEGREES, DIAL_TICK_GAP,
};
use crate::dial::{normalize, DialConfig};
use glam::Vec2;

/// One graduation mark around the dial.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tick {
    /// Even ticks are long, odd ticks short.
    pub major: bool,
    pub value: f64,
    /// Degrees clockwise from the +X axis, in `[0, 270]`.
    pub angle_degrees: f64,
}

impl Tick {
    /// Lit when the dial sits at or past this mark.
    #[inline]
    pub fn is_active(&self, value: f64) -> bool {
        self.value <= value
    }
}

/// `(max - min) / step + 1` marks spread over the sweep. A fractional step
/// count is truncated, so the last interval may be uneven. A zero, negative
/// or non-finite step count yields no marks.
pub fn ticks(config: &DialConfig) -> Vec<Tick> {
    let steps = config.range() / config.step;
    if !steps.is_finite() || steps < 0.0 {
        return Vec::new();
    }
    let count = (steps.floor() as usize).saturating_add(1);
    let last = count.saturating_sub(1).max(1) as f64;
    (0..count)
        .map(|index| Tick {
            major: index % 2 == 0,
            value: config.min + index as f64 * config.step,
            angle_degrees: index as f64 / last * DIAL_SWEEP_DEGREES,
        })
        .collect()
}

/// Pointer rotation for the current value.
#[inline]
pub fn knob_angle_degrees(config: &DialConfig, value: f64) -> f64 {
    normalize(config, value) * DIAL_SWEEP_DEGREES
}

/// Knob radius inside a square view of side `view`.
#[inline]
pub fn knob_radius(view: f32) -> f32 {
    view / 4.0
}

/// Start and end of a tick mark inside a square view of side `view`.
/// Coordinates are rounded to 1e-6 to keep output stable.
pub fn tick_segment(tick: &Tick, view: f32) -> (Vec2, Vec2) {
    let c = view as f64 / 2.0;
    let start_radius = (knob_radius(view) + DIAL_TICK_GAP) as f64;
    let length = f64::from(if tick.major {
        DIAL_MAJOR_TICK_LEN
    } else {
        DIAL_MINOR_TICK_LEN
    });
    let (sin, cos) = tick.angle_degrees.to_radians().sin_cos();
    let x1 = c + start_radius * cos;
    let y1 = c + start_radius * sin;
    let x2 = x1 + length * cos;
    let y2 = y1 + length * sin;
    (
        Vec2::new(round6(x1), round6(y1)),
        Vec2::new(round6(x2), round6(y2)),
    )
}

/// Side of the square that just fits the knob plus its longest ticks.
#[inline]
pub fn content_size(view: f32) -> f32 {
    (knob_radius(view) + DIAL_TICK_GAP + DIAL_MAJOR_TICK_LEN) * 2.0
}

fn round6(v: f64) -> f32 {
    ((v * 1e6).round() / 1e6) as f32
}
