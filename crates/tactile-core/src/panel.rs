//! The oscilloscope's control panel: maps dial ratios and switch states onto
//! the renderer's [`WaveParams`].

use crate::constants::*;
use crate::dial::DialConfig;
use crate::wave::WaveParams;

pub fn phase_dial_config() -> DialConfig {
    let [min, max, step, initial] = PHASE_DIAL;
    DialConfig::new(min, max, step, initial)
}

pub fn frequency_dial_config() -> DialConfig {
    let [min, max, step, initial] = FREQUENCY_DIAL;
    DialConfig::new(min, max, step, initial)
}

/// 0..1 → -180..180 degrees.
#[inline]
pub fn phase_from_normalized(normalized: f64) -> f32 {
    (normalized * PHASE_SPAN_DEGREES - PHASE_SPAN_DEGREES / 2.0) as f32
}

/// 0..1 → 1..11 whole cycles.
#[inline]
pub fn frequency_from_normalized(normalized: f64) -> u32 {
    (FREQUENCY_BASE_CYCLES + normalized * FREQUENCY_SPAN_CYCLES)
        .round()
        .max(FREQUENCY_BASE_CYCLES) as u32
}

/// Diameter of the power indicator lamp for a 0..1 level.
#[inline]
pub fn indicator_size_px(level: f64) -> f64 {
    INDICATOR_BASE_PX + level * INDICATOR_SPAN_PX
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PanelInput {
    Phase(f64),
    Frequency(f64),
    Power(bool),
    Gain(bool),
    Schmitt(bool),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ControlPanel {
    params: WaveParams,
}

impl ControlPanel {
    pub fn params(&self) -> &WaveParams {
        &self.params
    }

    pub fn apply(&mut self, input: PanelInput) {
        match input {
            PanelInput::Phase(n) => self.params.phase_degrees = phase_from_normalized(n),
            PanelInput::Frequency(n) => self.params.frequency = frequency_from_normalized(n),
            PanelInput::Power(on) => self.params.power_on = on,
            PanelInput::Gain(on) => self.params.double_amplitude = on,
            PanelInput::Schmitt(on) => self.params.square = on,
        }
        log::debug!("[panel] {:?} -> {:?}", input, self.params);
    }

    pub fn indicator_size_px(&self) -> f64 {
        indicator_size_px(if self.params.power_on { 1.0 } else { 0.0 })
    }
}
