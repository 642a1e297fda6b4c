//! Rotary dial input: pointer/touch drags and keyboard stepping reduced to a
//! quantized value in `[min, max]`.
//!
//! States are Idle and Dragging. A drag is owned by exactly one pointer
//! identity; events from any other pointer or touch are ignored until the
//! owning pointer releases or is cancelled.

use crate::constants::DIAL_PAGE_STEPS;
use crate::cue::{CuePool, CueSink};
use thiserror::Error;

#[derive(Clone, Debug, PartialEq)]
pub struct DialConfig {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub initial: f64,
    /// Combined pointer travel (right + up) that spans the whole range.
    pub pixels_per_full_range: f64,
}

impl DialConfig {
    /// Sensitivity defaults to one pixel per value unit.
    pub fn new(min: f64, max: f64, step: f64, initial: f64) -> Self {
        Self {
            min,
            max,
            step,
            initial,
            pixels_per_full_range: max - min,
        }
    }

    pub fn with_pixels_per_full_range(mut self, pixels: f64) -> Self {
        self.pixels_per_full_range = pixels;
        self
    }

    #[inline]
    pub fn range(&self) -> f64 {
        self.max - self.min
    }

    /// Optional precondition check. The controller itself never validates.
    pub fn validate(&self) -> Result<(), DialConfigError> {
        let all = [
            self.min,
            self.max,
            self.step,
            self.initial,
            self.pixels_per_full_range,
        ];
        if all.iter().any(|v| !v.is_finite()) {
            return Err(DialConfigError::NonFinite);
        }
        if self.max <= self.min {
            return Err(DialConfigError::EmptyRange {
                min: self.min,
                max: self.max,
            });
        }
        if self.step <= 0.0 {
            return Err(DialConfigError::NonPositiveStep(self.step));
        }
        if self.pixels_per_full_range <= 0.0 {
            return Err(DialConfigError::NonPositiveSensitivity(
                self.pixels_per_full_range,
            ));
        }
        if self.initial < self.min || self.initial > self.max {
            return Err(DialConfigError::InitialOutOfRange(self.initial));
        }
        Ok(())
    }

    /// True when the range divides into whole steps, so every tick is evenly
    /// spaced and `max` itself is a reachable step.
    pub fn has_whole_steps(&self) -> bool {
        let steps = self.range() / self.step;
        (steps - steps.round()).abs() < 1e-9
    }
}

impl Default for DialConfig {
    fn default() -> Self {
        Self::new(0.0, 100.0, 10.0, 0.0)
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum DialConfigError {
    #[error("dial range is empty or inverted (min {min}, max {max})")]
    EmptyRange { min: f64, max: f64 },
    #[error("dial step must be positive, got {0}")]
    NonPositiveStep(f64),
    #[error("dial sensitivity must be positive, got {0} px")]
    NonPositiveSensitivity(f64),
    #[error("initial value {0} lies outside the dial range")]
    InitialOutOfRange(f64),
    #[error("dial configuration contains a non-finite value")]
    NonFinite,
}

/// Identity of the pointer driving a drag. Mouse and touch share one path.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerId {
    Mouse,
    Touch(i32),
}

/// Position of a pointer in client pixels (Y down).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerSample {
    pub id: PointerId,
    pub x: f64,
    pub y: f64,
}

impl PointerSample {
    pub fn mouse(x: f64, y: f64) -> Self {
        Self {
            id: PointerId::Mouse,
            x,
            y,
        }
    }

    pub fn touch(identifier: i32, x: f64, y: f64) -> Self {
        Self {
            id: PointerId::Touch(identifier),
            x,
            y,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragOrigin {
    pub pointer: PointerId,
    pub x: f64,
    pub y: f64,
    pub value_at_start: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DialKey {
    StepUp,
    StepDown,
    PageUp,
    PageDown,
    Home,
    End,
}

impl DialKey {
    /// Map a DOM `KeyboardEvent.key` name. Unmapped keys return `None` and
    /// should keep their default behavior.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowRight" | "ArrowUp" => Some(Self::StepUp),
            "ArrowLeft" | "ArrowDown" => Some(Self::StepDown),
            "PageUp" => Some(Self::PageUp),
            "PageDown" => Some(Self::PageDown),
            "Home" => Some(Self::Home),
            "End" => Some(Self::End),
            _ => None,
        }
    }
}

/// A committed value change.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DialChange {
    pub value: f64,
    /// `(value - min) / (max - min)`.
    pub normalized: f64,
    /// The change moved into a different quantization step.
    pub tick_crossed: bool,
}

pub struct DialController {
    config: DialConfig,
    value: f64,
    drag: Option<DragOrigin>,
    last_tick: i64,
}

impl DialController {
    pub fn new(config: DialConfig) -> Self {
        let value = config.initial;
        let last_tick = tick_index(&config, value);
        Self {
            config,
            value,
            drag: None,
            last_tick,
        }
    }

    pub fn config(&self) -> &DialConfig {
        &self.config
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn normalized(&self) -> f64 {
        normalize(&self.config, self.value)
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn drag_origin(&self) -> Option<&DragOrigin> {
        self.drag.as_ref()
    }

    /// Tick index of the last value a step cue was considered for.
    pub fn last_tick(&self) -> i64 {
        self.last_tick
    }

    /// Start a drag. Ignored (returns false) while another drag is active.
    pub fn begin_drag(&mut self, at: PointerSample) -> bool {
        if self.drag.is_some() {
            return false;
        }
        self.drag = Some(DragOrigin {
            pointer: at.id,
            x: at.x,
            y: at.y,
            value_at_start: self.value,
        });
        log::debug!("[dial] begin drag {:?} at value {}", at.id, self.value);
        true
    }

    /// Map pointer travel since drag start to a new quantized value.
    /// Moves from pointers other than the owner are ignored.
    pub fn drag_move(&mut self, at: PointerSample) -> Option<DialChange> {
        let origin = self.drag.filter(|d| d.pointer == at.id)?;
        let delta = (at.x - origin.x) + (origin.y - at.y);
        let delta_value = delta * self.config.range() / self.config.pixels_per_full_range;
        let next = clamp_to_range(
            &self.config,
            quantize(&self.config, origin.value_at_start + delta_value),
        );
        self.commit(next)
    }

    /// Release the drag if `pointer` owns it.
    pub fn end_drag(&mut self, pointer: PointerId) -> bool {
        match self.drag {
            Some(d) if d.pointer == pointer => {
                self.drag = None;
                log::debug!("[dial] end drag {:?} at value {}", pointer, self.value);
                true
            }
            _ => false,
        }
    }

    /// Cancellation follows the same ownership rule as release.
    pub fn cancel_drag(&mut self, pointer: PointerId) -> bool {
        self.end_drag(pointer)
    }

    pub fn key(&mut self, key: DialKey) -> Option<DialChange> {
        let step = self.config.step;
        // Stepping keys land back on the step grid measured from `min`.
        let next = match key {
            DialKey::StepUp => quantize(&self.config, self.value + step),
            DialKey::StepDown => quantize(&self.config, self.value - step),
            DialKey::PageUp => quantize(&self.config, self.value + step * DIAL_PAGE_STEPS),
            DialKey::PageDown => quantize(&self.config, self.value - step * DIAL_PAGE_STEPS),
            DialKey::Home => self.config.min,
            DialKey::End => self.config.max,
        };
        self.commit(clamp_to_range(&self.config, next))
    }

    fn commit(&mut self, next: f64) -> Option<DialChange> {
        if next == self.value {
            return None;
        }
        self.value = next;
        let tick = tick_index(&self.config, next);
        let tick_crossed = tick != self.last_tick;
        self.last_tick = tick;
        Some(DialChange {
            value: next,
            normalized: normalize(&self.config, next),
            tick_crossed,
        })
    }
}

/// Nearest multiple of `step` measured from `min`.
#[inline]
pub fn quantize(config: &DialConfig, raw: f64) -> f64 {
    config.min + ((raw - config.min) / config.step).round() * config.step
}

#[inline]
pub fn clamp_to_range(config: &DialConfig, value: f64) -> f64 {
    value.max(config.min).min(config.max)
}

#[inline]
pub fn normalize(config: &DialConfig, value: f64) -> f64 {
    (value - config.min) / config.range()
}

#[inline]
pub fn tick_index(config: &DialConfig, value: f64) -> i64 {
    ((value - config.min) / config.step).round() as i64
}

/// Controller wired to a step-cue pool and a normalized-value listener.
pub struct RotaryDial<S> {
    controller: DialController,
    cues: CuePool<S>,
    on_change: Option<Box<dyn FnMut(f64)>>,
}

impl<S: CueSink> RotaryDial<S> {
    pub fn new(config: DialConfig, cues: CuePool<S>) -> Self {
        Self {
            controller: DialController::new(config),
            cues,
            on_change: None,
        }
    }

    pub fn with_listener(mut self, on_change: impl FnMut(f64) + 'static) -> Self {
        self.on_change = Some(Box::new(on_change));
        self
    }

    pub fn controller(&self) -> &DialController {
        &self.controller
    }

    pub fn cues(&self) -> &CuePool<S> {
        &self.cues
    }

    /// Send the current normalized value to the listener without a cue.
    pub fn publish_current(&mut self) {
        let normalized = self.controller.normalized();
        if let Some(cb) = self.on_change.as_mut() {
            cb(normalized);
        }
    }

    pub fn begin_drag(&mut self, at: PointerSample) -> bool {
        self.controller.begin_drag(at)
    }

    pub fn drag_move(&mut self, at: PointerSample) -> Option<DialChange> {
        let change = self.controller.drag_move(at);
        self.dispatch(change)
    }

    pub fn end_drag(&mut self, pointer: PointerId) -> bool {
        self.controller.end_drag(pointer)
    }

    pub fn cancel_drag(&mut self, pointer: PointerId) -> bool {
        self.controller.cancel_drag(pointer)
    }

    pub fn key(&mut self, key: DialKey) -> Option<DialChange> {
        let change = self.controller.key(key);
        self.dispatch(change)
    }

    fn dispatch(&mut self, change: Option<DialChange>) -> Option<DialChange> {
        let c = change?;
        if c.tick_crossed {
            if let Some(i) = self.cues.trigger() {
                log::debug!("[dial] step cue {} at value {}", i, c.value);
            }
        }
        if let Some(cb) = self.on_change.as_mut() {
            cb(c.normalized);
        }
        Some(c)
    }
}
