//! Oscilloscope waveform synthesis.
//!
//! A [`WaveformRenderer`] owns the smoothed [`WaveformState`] and turns the
//! live [`WaveParams`] into a [`Frame`] once per display frame. Amplitude and
//! sine/square morph are eased toward their targets so toggling a switch
//! animates the trace instead of snapping it.

use crate::constants::*;
use crate::draw::{Color, Frame, Glow, Stroke};
use glam::Vec2;
use std::f32::consts::PI;
use std::time::Duration;

/// Live inputs read every frame. No validation happens here; callers keep
/// `phase_degrees` within -180..=180 and `frequency` positive.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WaveParams {
    pub power_on: bool,
    pub phase_degrees: f32,
    /// Whole cycles across the visible width.
    pub frequency: u32,
    pub square: bool,
    pub double_amplitude: bool,
}

impl Default for WaveParams {
    fn default() -> Self {
        Self {
            power_on: true,
            phase_degrees: 0.0,
            frequency: 2,
            square: false,
            double_amplitude: false,
        }
    }
}

impl WaveParams {
    #[inline]
    pub fn phase_radians(&self) -> f32 {
        self.phase_degrees / 180.0 * PI
    }

    #[inline]
    pub fn target_amplitude(&self, config: &ScopeConfig) -> f32 {
        if self.double_amplitude {
            config.double_amplitude
        } else {
            config.base_amplitude
        }
    }

    #[inline]
    pub fn target_morph(&self) -> f32 {
        if self.square {
            1.0
        } else {
            0.0
        }
    }
}

/// Surface size and tuning for the renderer. Defaults come from `constants`.
#[derive(Clone, Debug, PartialEq)]
pub struct ScopeConfig {
    pub width: u32,
    pub height: u32,
    pub grid_spacing: f32,
    pub samples_per_pixel: u32,
    pub smoothing_rate: f32,
    pub amplitude_snap: f32,
    pub morph_snap: f32,
    /// Morph progress above which a square target is drawn with right-angle
    /// edges instead of the interpolated trace.
    pub square_edge_threshold: f32,
    pub base_amplitude: f32,
    pub double_amplitude: f32,
}

impl Default for ScopeConfig {
    fn default() -> Self {
        Self {
            width: SURFACE_WIDTH,
            height: SURFACE_HEIGHT,
            grid_spacing: GRID_SPACING,
            samples_per_pixel: SAMPLES_PER_PIXEL,
            smoothing_rate: SMOOTHING_RATE,
            amplitude_snap: AMPLITUDE_SNAP,
            morph_snap: MORPH_SNAP,
            square_edge_threshold: SQUARE_EDGE_THRESHOLD,
            base_amplitude: BASE_AMPLITUDE,
            double_amplitude: DOUBLE_AMPLITUDE,
        }
    }
}

impl ScopeConfig {
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_square_edge_threshold(mut self, threshold: f32) -> Self {
        self.square_edge_threshold = threshold;
        self
    }
}

/// Per-surface smoothed state. Only advanced while powered.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WaveformState {
    pub current_amplitude: f32,
    /// 0 = sine, 1 = square.
    pub morph_progress: f32,
}

impl WaveformState {
    pub fn new(config: &ScopeConfig) -> Self {
        Self {
            current_amplitude: config.base_amplitude,
            morph_progress: 0.0,
        }
    }

    /// Advance one display frame at the configured per-frame rate.
    pub fn advance(&mut self, params: &WaveParams, config: &ScopeConfig) {
        self.advance_with_rate(params, config, config.smoothing_rate);
    }

    /// Advance by wall-clock time. The per-frame rate is tuned for
    /// `REFERENCE_FRAME_RATE`; other frame intervals compound it so the
    /// easing speed does not depend on the display refresh rate.
    pub fn advance_by(&mut self, params: &WaveParams, config: &ScopeConfig, dt: Duration) {
        let frames = dt.as_secs_f32() * REFERENCE_FRAME_RATE;
        let keep = (1.0 - config.smoothing_rate).clamp(0.0, 1.0);
        let rate = 1.0 - keep.powf(frames);
        self.advance_with_rate(params, config, rate.clamp(0.0, 1.0));
    }

    fn advance_with_rate(&mut self, params: &WaveParams, config: &ScopeConfig, rate: f32) {
        self.current_amplitude = approach(
            self.current_amplitude,
            params.target_amplitude(config),
            rate,
            config.amplitude_snap,
        );
        self.morph_progress = approach(
            self.morph_progress,
            params.target_morph(),
            rate,
            config.morph_snap,
        );
    }
}

/// Exponential step toward `target`, snapping once the gap is within `snap`.
#[inline]
pub fn approach(current: f32, target: f32, rate: f32, snap: f32) -> f32 {
    let diff = target - current;
    if diff.abs() > snap {
        current + diff * rate
    } else {
        target
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WaveSample {
    pub x: f32,
    pub sine_y: f32,
    pub square_y: f32,
}

impl WaveSample {
    /// Blend between the sine and square sample. Exact at both ends:
    /// `morph == 0` yields `sine_y`, `morph == 1` yields `square_y`.
    #[inline]
    pub fn morphed_y(&self, morph: f32) -> f32 {
        self.sine_y * (1.0 - morph) + self.square_y * morph
    }
}

/// Sample `width * samples_per_pixel + 1` points spanning the full width.
pub fn sample_wave(
    width: f32,
    samples_per_pixel: u32,
    params: &WaveParams,
    amplitude: f32,
) -> Vec<WaveSample> {
    let total = (width * samples_per_pixel as f32) as usize;
    if total == 0 {
        return Vec::new();
    }
    let phase = params.phase_radians();
    let cycles = params.frequency as f32;
    (0..=total)
        .map(|i| {
            let progress = i as f32 / total as f32;
            let angle = progress * PI * cycles * 2.0 - PI / 2.0 + phase;
            let sine_y = angle.sin() * amplitude;
            let square_y = if sine_y > 0.0 {
                amplitude
            } else if sine_y < 0.0 {
                -amplitude
            } else {
                0.0
            };
            WaveSample {
                x: progress * width,
                sine_y,
                square_y,
            }
        })
        .collect()
}

/// Straight segments through the morphed samples.
pub fn interpolated_path(samples: &[WaveSample], morph: f32, center_y: f32) -> Vec<Vec2> {
    samples
        .iter()
        .map(|s| Vec2::new(s.x, center_y + s.morphed_y(morph)))
        .collect()
}

/// Square trace with explicit right-angle edges: at each sign flip the path
/// runs horizontally to the edge at the old level, then vertically to the new.
pub fn square_edge_path(samples: &[WaveSample], amplitude: f32, center_y: f32) -> Vec<Vec2> {
    let Some(first) = samples.first() else {
        return Vec::new();
    };
    let mut points = Vec::with_capacity(samples.len() + 16);
    points.push(Vec2::new(first.x, center_y + first.square_y));
    for pair in samples.windows(2) {
        let (prev, curr) = (pair[0], pair[1]);
        if (curr.square_y - prev.square_y).abs() > amplitude {
            points.push(Vec2::new(curr.x, center_y + prev.square_y));
        }
        points.push(Vec2::new(curr.x, center_y + curr.square_y));
    }
    points
}

/// Pure frame step: `(state, params, dt) -> (state', frame)`.
///
/// `dt == None` advances one reference frame at the per-frame rate.
pub fn step(
    state: WaveformState,
    params: &WaveParams,
    config: &ScopeConfig,
    dt: Option<Duration>,
) -> (WaveformState, Frame) {
    let width = config.width as f32;
    let height = config.height as f32;
    let center_y = height / 2.0;
    let mut frame = Frame::new(width, height, Color::from_rgba8(BACKGROUND_COLOR));
    let accent = Color::from_rgba8(ACCENT_COLOR);

    if !params.power_on {
        frame.push(Stroke::line(
            Vec2::new(0.0, center_y),
            Vec2::new(width, center_y),
            accent.with_alpha(OFF_LINE_ALPHA),
            OFF_LINE_WIDTH,
        ));
        return (state, frame);
    }

    push_grid(&mut frame, config);

    let mut next = state;
    match dt {
        Some(dt) => next.advance_by(params, config, dt),
        None => next.advance(params, config),
    }

    let amplitude = next.current_amplitude;
    let samples = sample_wave(width, config.samples_per_pixel, params, amplitude);
    let points = if params.square && next.morph_progress > config.square_edge_threshold {
        square_edge_path(&samples, amplitude, center_y)
    } else {
        interpolated_path(&samples, next.morph_progress, center_y)
    };
    frame.push(
        Stroke::polyline(points, accent, WAVE_LINE_WIDTH).with_glow(Glow {
            blur: WAVE_GLOW_BLUR,
            color: accent,
        }),
    );
    (next, frame)
}

fn push_grid(frame: &mut Frame, config: &ScopeConfig) {
    let width = config.width as f32;
    let height = config.height as f32;
    let grid = Color::rgb(255, 255, 255).with_alpha(GRID_ALPHA);
    let axis = Color::rgb(255, 255, 255).with_alpha(AXIS_ALPHA);
    let spacing = config.grid_spacing.max(1.0);

    let mut y = 0.0;
    while y < height {
        frame.push(Stroke::line(
            Vec2::new(0.0, y),
            Vec2::new(width, y),
            grid,
            GRID_LINE_WIDTH,
        ));
        y += spacing;
    }
    let mut x = 0.0;
    while x < width {
        frame.push(Stroke::line(
            Vec2::new(x, 0.0),
            Vec2::new(x, height),
            grid,
            GRID_LINE_WIDTH,
        ));
        x += spacing;
    }

    frame.push(Stroke::line(
        Vec2::new(0.0, height / 2.0),
        Vec2::new(width, height / 2.0),
        axis,
        AXIS_LINE_WIDTH,
    ));
    frame.push(Stroke::line(
        Vec2::new(width / 2.0, 0.0),
        Vec2::new(width / 2.0, height),
        axis,
        AXIS_LINE_WIDTH,
    ));
}

/// Owns the smoothed state for one mounted surface.
pub struct WaveformRenderer {
    config: ScopeConfig,
    state: WaveformState,
}

impl WaveformRenderer {
    pub fn new(config: ScopeConfig) -> Self {
        let state = WaveformState::new(&config);
        Self { config, state }
    }

    pub fn config(&self) -> &ScopeConfig {
        &self.config
    }

    pub fn state(&self) -> WaveformState {
        self.state
    }

    /// Render one frame, advancing smoothing by one reference frame.
    pub fn render(&mut self, params: &WaveParams) -> Frame {
        let (state, frame) = step(self.state, params, &self.config, None);
        self.state = state;
        frame
    }

    /// Render one frame, advancing smoothing by elapsed time.
    pub fn render_by(&mut self, params: &WaveParams, dt: Duration) -> Frame {
        let (state, frame) = step(self.state, params, &self.config, Some(dt));
        self.state = state;
        frame
    }
}

impl Default for WaveformRenderer {
    fn default() -> Self {
        Self::new(ScopeConfig::default())
    }
}
