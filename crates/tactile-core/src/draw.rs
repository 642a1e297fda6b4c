//! Backend-neutral display list produced once per frame.
//!
//! The waveform step never touches a drawing API. It emits a [`Frame`] that a
//! front-end replays onto whatever surface it owns (a 2D canvas on the web).
//! Coordinates are surface pixels with the origin at the top-left and Y
//! increasing downward.

use glam::Vec2;
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub fn from_rgba8(c: [u8; 4]) -> Self {
        Self {
            r: c[0],
            g: c[1],
            b: c[2],
            a: c[3] as f32 / 255.0,
        }
    }

    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// CSS color string, `#rrggbb` when opaque and `rgba(..)` otherwise.
    pub fn to_css(&self) -> String {
        if self.a >= 1.0 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
        }
    }
}

/// Soft shadow drawn around a stroke.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Glow {
    pub blur: f32,
    pub color: Color,
}

/// One stroked polyline. Grid and axis lines stay inline; waveform paths spill.
#[derive(Clone, Debug, PartialEq)]
pub struct Stroke {
    pub color: Color,
    pub width: f32,
    pub glow: Option<Glow>,
    pub points: SmallVec<[Vec2; 2]>,
}

impl Stroke {
    pub fn line(from: Vec2, to: Vec2, color: Color, width: f32) -> Self {
        let mut points = SmallVec::new();
        points.push(from);
        points.push(to);
        Self {
            color,
            width,
            glow: None,
            points,
        }
    }

    pub fn polyline(points: Vec<Vec2>, color: Color, width: f32) -> Self {
        Self {
            color,
            width,
            glow: None,
            points: SmallVec::from_vec(points),
        }
    }

    pub fn with_glow(mut self, glow: Glow) -> Self {
        self.glow = Some(glow);
        self
    }
}

/// Everything needed to paint one frame: a cleared background plus strokes in
/// paint order.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    pub width: f32,
    pub height: f32,
    pub background: Color,
    pub strokes: Vec<Stroke>,
}

impl Frame {
    pub fn new(width: f32, height: f32, background: Color) -> Self {
        Self {
            width,
            height,
            background,
            strokes: Vec::new(),
        }
    }

    pub fn push(&mut self, stroke: Stroke) {
        self.strokes.push(stroke);
    }
}
