//! Two-state controls feeding the panel: the light switch and toggle (flip on
//! activation, value lands after a settle delay) and the latching push button
//! (flips on press, plays a release cue shortly after letting go).

use crate::constants::*;

/// Keys that activate a focused switch or button.
#[inline]
pub fn is_activation_key(key: &str) -> bool {
    matches!(key, "Enter" | " ")
}

/// Result of flipping a [`LatchingSwitch`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SwitchFlip {
    pub on: bool,
    pub cue: &'static str,
    /// Delay before `on` should reach whatever the switch controls.
    pub settle_ms: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LatchingSwitch {
    on: bool,
    on_cue: &'static str,
    off_cue: &'static str,
    settle_ms: u32,
}

impl LatchingSwitch {
    pub fn light_switch(initial: bool) -> Self {
        Self {
            on: initial,
            on_cue: SWITCH_ON_CUE,
            off_cue: SWITCH_OFF_CUE,
            settle_ms: LIGHT_SWITCH_SETTLE_MS,
        }
    }

    pub fn toggle(initial: bool) -> Self {
        Self {
            on: initial,
            on_cue: TOGGLE_ON_CUE,
            off_cue: TOGGLE_OFF_CUE,
            settle_ms: TOGGLE_SETTLE_MS,
        }
    }

    pub fn is_on(&self) -> bool {
        self.on
    }

    pub fn activate(&mut self) -> SwitchFlip {
        self.on = !self.on;
        SwitchFlip {
            on: self.on,
            cue: if self.on { self.on_cue } else { self.off_cue },
            settle_ms: self.settle_ms,
        }
    }
}

/// Immediate result of pressing the push button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ButtonPress {
    pub enabled: bool,
    pub cue: &'static str,
}

/// Latching push button. Each press toggles `enabled`; a release starts a
/// short releasing phase during which presses are ignored.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PushButton {
    enabled: bool,
    pressed: bool,
    releasing: bool,
    key_held: bool,
}

impl PushButton {
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    pub fn is_releasing(&self) -> bool {
        self.releasing
    }

    pub fn press(&mut self) -> Option<ButtonPress> {
        if self.releasing {
            return None;
        }
        self.pressed = true;
        self.enabled = !self.enabled;
        Some(ButtonPress {
            enabled: self.enabled,
            cue: if self.enabled {
                PUSH_ON_CUE
            } else {
                PUSH_OFF_CUE
            },
        })
    }

    /// Begin releasing. Returns the delay after which
    /// [`finish_release`](Self::finish_release) should run.
    pub fn release(&mut self) -> Option<u32> {
        if !self.pressed || self.releasing {
            return None;
        }
        self.releasing = true;
        Some(PUSH_BUTTON_RELEASE_MS)
    }

    /// End the releasing phase and name the spring-back cue.
    pub fn finish_release(&mut self) -> &'static str {
        self.pressed = false;
        self.releasing = false;
        if self.enabled {
            PUSH_OFF_CUE
        } else {
            PUSH_ON_CUE
        }
    }

    /// Key auto-repeat is ignored until the key comes back up.
    pub fn key_down(&mut self) -> Option<ButtonPress> {
        if self.key_held {
            return None;
        }
        self.key_held = true;
        self.press()
    }

    pub fn key_up(&mut self) -> Option<u32> {
        self.key_held = false;
        self.release()
    }
}
