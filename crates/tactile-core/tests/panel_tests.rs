// Host-side tests for dial tick geometry, panel mappings and switches.

use tactile_core::*;

#[test]
fn ticks_cover_range_with_alternating_sizes() {
    let t = ticks(&DialConfig::new(0.0, 100.0, 10.0, 20.0));
    assert_eq!(t.len(), 11);
    assert_eq!(t[0].value, 0.0);
    assert_eq!(t[10].value, 100.0);
    assert_eq!(t[0].angle_degrees, 0.0);
    assert_eq!(t[10].angle_degrees, 270.0);
    assert!((t[5].angle_degrees - 135.0).abs() < 1e-12);
    assert!(t[0].major && !t[1].major && t[2].major);
}

#[test]
fn active_ticks_follow_value() {
    let t = ticks(&DialConfig::new(0.0, 100.0, 10.0, 20.0));
    let lit = t.iter().filter(|tick| tick.is_active(20.0)).count();
    assert_eq!(lit, 3);
}

#[test]
fn fractional_step_count_truncates() {
    let t = ticks(&DialConfig::new(0.0, 100.0, 30.0, 0.0));
    assert_eq!(t.len(), 4);
    assert_eq!(t[3].value, 90.0);
    assert_eq!(t[3].angle_degrees, 270.0);
}

#[test]
fn degenerate_step_yields_no_ticks() {
    let zero_step = DialConfig {
        step: 0.0,
        ..DialConfig::new(0.0, 100.0, 10.0, 0.0)
    };
    assert!(ticks(&zero_step).is_empty());

    let flat = DialConfig {
        step: 0.0,
        ..DialConfig::new(5.0, 5.0, 10.0, 5.0)
    };
    assert!(ticks(&flat).is_empty());

    let negative = DialConfig::new(0.0, 100.0, -10.0, 0.0);
    assert!(ticks(&negative).is_empty());
}

#[test]
fn tick_segment_geometry() {
    let first = Tick {
        major: true,
        value: 0.0,
        angle_degrees: 0.0,
    };
    let (a, b) = tick_segment(&first, 96.0);
    // Center 48, knob radius 24, gap 5 -> starts at x = 77.
    assert_eq!((a.x, a.y), (77.0, 48.0));
    assert_eq!((b.x, b.y), (87.0, 48.0));

    let down = Tick {
        major: false,
        value: 10.0,
        angle_degrees: 90.0,
    };
    let (a, b) = tick_segment(&down, 96.0);
    assert_eq!((a.x, a.y), (48.0, 77.0));
    assert_eq!((b.x, b.y), (48.0, 82.0));
}

#[test]
fn knob_angle_spans_sweep() {
    let c = DialConfig::new(-180.0, 180.0, 10.0, 0.0);
    assert_eq!(knob_angle_degrees(&c, -180.0), 0.0);
    assert_eq!(knob_angle_degrees(&c, 0.0), 135.0);
    assert_eq!(knob_angle_degrees(&c, 180.0), 270.0);
    assert_eq!(content_size(96.0), 78.0);
}

#[test]
fn phase_and_frequency_mappings() {
    assert_eq!(phase_from_normalized(0.0), -180.0);
    assert_eq!(phase_from_normalized(0.5), 0.0);
    assert_eq!(phase_from_normalized(1.0), 180.0);
    assert_eq!(frequency_from_normalized(0.0), 1);
    assert_eq!(frequency_from_normalized(0.1), 2);
    assert_eq!(frequency_from_normalized(1.0), 11);
}

#[test]
fn panel_dials_publish_initial_params() {
    let phase = DialController::new(phase_dial_config());
    let freq = DialController::new(frequency_dial_config());
    let mut panel = ControlPanel::default();
    panel.apply(PanelInput::Phase(phase.normalized()));
    panel.apply(PanelInput::Frequency(freq.normalized()));
    assert_eq!(panel.params().phase_degrees, 0.0);
    assert_eq!(panel.params().frequency, 1);
    assert!(panel.params().power_on);
}

#[test]
fn panel_switches_drive_wave_params() {
    let mut panel = ControlPanel::default();
    panel.apply(PanelInput::Power(false));
    panel.apply(PanelInput::Gain(true));
    panel.apply(PanelInput::Schmitt(true));
    let p = panel.params();
    assert!(!p.power_on && p.double_amplitude && p.square);
    assert_eq!(panel.indicator_size_px(), 8.0);
    panel.apply(PanelInput::Power(true));
    assert_eq!(panel.indicator_size_px(), 55.0);
}

#[test]
fn latching_switch_flips_and_names_cue() {
    let mut power = LatchingSwitch::light_switch(true);
    let off = power.activate();
    assert_eq!(
        off,
        SwitchFlip {
            on: false,
            cue: "/switch-off.ogg",
            settle_ms: 200
        }
    );
    assert!(power.activate().on);

    let mut gain = LatchingSwitch::toggle(false);
    let on = gain.activate();
    assert!(on.on);
    assert_eq!(on.cue, "/toggle-on.ogg");
    assert_eq!(on.settle_ms, 300);
}

#[test]
fn activation_keys() {
    assert!(is_activation_key("Enter"));
    assert!(is_activation_key(" "));
    assert!(!is_activation_key("a"));
}

#[test]
fn push_button_press_release_cycle() {
    let mut b = PushButton::default();
    let press = b.press().expect("press");
    assert_eq!(press, ButtonPress { enabled: true, cue: "/1.ogg" });
    assert_eq!(b.release(), Some(100));
    assert!(b.is_releasing());
    assert_eq!(b.press(), None, "presses are ignored while releasing");
    assert_eq!(b.release(), None);
    assert_eq!(b.finish_release(), "/2.ogg");
    assert!(!b.is_pressed());

    let press = b.press().expect("press");
    assert_eq!(press, ButtonPress { enabled: false, cue: "/2.ogg" });
    b.release();
    assert_eq!(b.finish_release(), "/1.ogg");
}

#[test]
fn push_button_ignores_key_repeat() {
    let mut b = PushButton::default();
    assert!(b.key_down().is_some());
    assert!(b.key_down().is_none());
    assert!(b.is_enabled());
    assert_eq!(b.key_up(), Some(100));
    b.finish_release();
    assert!(b.key_down().is_some());
    assert!(!b.is_enabled());
}

#[test]
fn release_without_press_is_ignored() {
    let mut b = PushButton::default();
    assert_eq!(b.release(), None);
}
