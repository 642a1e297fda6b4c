// Shared visual and interaction tuning constants for the oscilloscope and dials.

// Render surface
pub const SURFACE_WIDTH: u32 = 900;
pub const SURFACE_HEIGHT: u32 = 350;
pub const GRID_SPACING: f32 = 30.0;

// Waveform sampling
pub const SAMPLES_PER_PIXEL: u32 = 4; // oversampling factor across the width

// Smoothing (fraction of the remaining gap closed per frame)
pub const SMOOTHING_RATE: f32 = 0.15;
pub const REFERENCE_FRAME_RATE: f32 = 60.0; // frame rate the per-frame rate is tuned for
pub const AMPLITUDE_SNAP: f32 = 0.5; // amplitude units
pub const MORPH_SNAP: f32 = 0.01;

// Morph progress above which a square target is drawn with explicit edges
pub const SQUARE_EDGE_THRESHOLD: f32 = 0.95;

// Amplitude targets (pixels from center)
pub const BASE_AMPLITUDE: f32 = 60.0;
pub const DOUBLE_AMPLITUDE: f32 = 120.0;

// Palette
pub const BACKGROUND_COLOR: [u8; 4] = [0x0a, 0x0a, 0x0a, 255];
pub const ACCENT_COLOR: [u8; 4] = [0xff, 0x40, 0x00, 255];
pub const OFF_LINE_ALPHA: f32 = 0.15;
pub const GRID_ALPHA: f32 = 0.04;
pub const AXIS_ALPHA: f32 = 0.3;

// Stroke widths
pub const OFF_LINE_WIDTH: f32 = 2.0;
pub const GRID_LINE_WIDTH: f32 = 1.0;
pub const AXIS_LINE_WIDTH: f32 = 2.0;
pub const WAVE_LINE_WIDTH: f32 = 3.0;
pub const WAVE_GLOW_BLUR: f32 = 10.0;

// Dial geometry (view box units)
pub const DIAL_VIEW_SIZE: f32 = 96.0;
pub const DIAL_SWEEP_DEGREES: f64 = 270.0;
pub const DIAL_TICK_GAP: f32 = 5.0; // distance from knob edge to tick start
pub const DIAL_MAJOR_TICK_LEN: f32 = 10.0;
pub const DIAL_MINOR_TICK_LEN: f32 = 5.0;
pub const DIAL_PAGE_STEPS: f64 = 10.0; // steps moved by PageUp/PageDown

// Dial audio cue pool
pub const CUE_POOL_SIZE: usize = 5;
pub const CUE_VOLUME: f64 = 0.5;

// Switch settle delays before the new value reaches the panel
pub const LIGHT_SWITCH_SETTLE_MS: u32 = 200;
pub const TOGGLE_SETTLE_MS: u32 = 300;
pub const PUSH_BUTTON_RELEASE_MS: u32 = 100;

// Indicator lamp diameter mapping
pub const INDICATOR_BASE_PX: f64 = 8.0;
pub const INDICATOR_SPAN_PX: f64 = 47.0;

// Sound assets (served from the site root)
pub const DIAL_TICK_CUE: &str = "/click.ogg";
pub const SWITCH_ON_CUE: &str = "/switch-on.ogg";
pub const SWITCH_OFF_CUE: &str = "/switch-off.ogg";
pub const TOGGLE_ON_CUE: &str = "/toggle-on.ogg";
pub const TOGGLE_OFF_CUE: &str = "/toggle-off.ogg";
pub const PUSH_ON_CUE: &str = "/1.ogg";
pub const PUSH_OFF_CUE: &str = "/2.ogg";

// Panel dial ranges
pub const PHASE_DIAL: [f64; 4] = [-180.0, 180.0, 10.0, 0.0]; // min, max, step, initial
pub const FREQUENCY_DIAL: [f64; 4] = [10.0, 110.0, 10.0, 10.0];
pub const PHASE_SPAN_DEGREES: f64 = 360.0;
pub const FREQUENCY_BASE_CYCLES: f64 = 1.0;
pub const FREQUENCY_SPAN_CYCLES: f64 = 10.0;
