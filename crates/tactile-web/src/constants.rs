// Element ids and front-end-only tuning for the showcase page.

// Elements
pub const SCOPE_CANVAS_ID: &str = "scope-canvas";
pub const PHASE_DIAL_ID: &str = "phase-dial";
pub const FREQUENCY_DIAL_ID: &str = "frequency-dial";
pub const POWER_SWITCH_ID: &str = "power-switch";
pub const GAIN_TOGGLE_ID: &str = "gain-toggle";
pub const SCHMITT_BUTTON_ID: &str = "schmitt-button";
pub const POWER_INDICATOR_ID: &str = "power-indicator";
pub const DIAL_VALUE_SUFFIX: &str = "-value"; // dial readout element is `<dial id>-value`

// State classes toggled on controls
pub const ACTIVE_CLASS: &str = "active";
pub const PRESSED_CLASS: &str = "pressed";
pub const ENABLED_CLASS: &str = "enabled";

// Frame timing
pub const MAX_FRAME_DT_SEC: f32 = 0.25; // clamp after a hidden tab resumes

// Dial palette
pub const TICK_ACTIVE_COLOR: &str = "#ff4000";
pub const TICK_IDLE_COLOR: &str = "rgba(255, 255, 255, 0.25)";
pub const TICK_GLOW_BLUR: f64 = 4.0;
pub const KNOB_FILL_COLOR: &str = "#1a1a1a";
pub const KNOB_EDGE_COLOR: &str = "#333333";
pub const POINTER_COLOR: &str = "#ff4000";
pub const TICK_LINE_WIDTH: f64 = 1.5;
pub const POINTER_LINE_WIDTH: f64 = 3.0;
pub const POINTER_LENGTH: f64 = 10.0;
