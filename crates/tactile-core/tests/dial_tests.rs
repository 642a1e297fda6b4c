// Host-side tests for the rotary dial state machine, keyboard stepping and
// the step-cue pool.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use tactile_core::*;

fn default_dial() -> DialController {
    DialController::new(DialConfig::new(0.0, 100.0, 10.0, 20.0))
}

#[derive(Clone, Default)]
struct CountingCue {
    plays: Rc<Cell<usize>>,
}

impl CueSink for CountingCue {
    fn rewind_and_play(&mut self) {
        self.plays.set(self.plays.get() + 1);
    }
}

#[test]
fn keyboard_scenario() {
    let mut dial = default_dial();

    let up = dial.key(DialKey::StepUp).expect("change");
    assert_eq!(up.value, 30.0);
    assert!((up.normalized - 0.30).abs() < 1e-12);

    let home = dial.key(DialKey::Home).expect("change");
    assert_eq!(home.value, 0.0);
    assert_eq!(home.normalized, 0.0);

    let page = dial.key(DialKey::PageUp).expect("change");
    assert_eq!(page.value, 100.0);
    assert_eq!(page.normalized, 1.0);
}

#[test]
fn keyboard_clamps_and_reports_no_change_at_bounds() {
    let mut dial = default_dial();
    assert_eq!(dial.key(DialKey::End).map(|c| c.value), Some(100.0));
    assert_eq!(dial.key(DialKey::StepUp), None);
    assert_eq!(dial.key(DialKey::PageUp), None);
    assert_eq!(dial.key(DialKey::PageDown).map(|c| c.value), Some(0.0));
    assert_eq!(dial.key(DialKey::StepDown), None);
    assert_eq!(dial.value(), 0.0);
}

#[test]
fn fractional_key_steps_land_exactly_on_grid() {
    let config = DialConfig::new(0.0, 1.0, 0.1, 0.0);
    let mut dial = DialController::new(config.clone());
    for k in 1..=10 {
        let c = dial.key(DialKey::StepUp).expect("change");
        assert_eq!(c.value, config.min + k as f64 * config.step, "after {k} steps");
    }
    assert_eq!(dial.value(), 1.0);
    assert_eq!(dial.normalized(), 1.0);
    assert_eq!(dial.key(DialKey::StepUp), None);

    for k in (0..10).rev() {
        let c = dial.key(DialKey::StepDown).expect("change");
        assert_eq!(c.value, config.min + k as f64 * config.step, "down to {k}");
    }

    let mut paged = DialController::new(config);
    assert_eq!(paged.key(DialKey::PageUp).map(|c| c.value), Some(1.0));
}

#[test]
fn stationary_drag_after_key_steps_reports_no_change() {
    let mut dial = DialController::new(DialConfig::new(0.0, 1.0, 0.1, 0.0));
    for _ in 0..8 {
        dial.key(DialKey::StepUp);
    }
    assert_eq!(dial.value(), 8.0 * 0.1);
    assert!(dial.begin_drag(PointerSample::mouse(40.0, 40.0)));
    assert_eq!(dial.drag_move(PointerSample::mouse(40.0, 40.0)), None);
}

#[test]
fn key_names_map_to_dial_keys() {
    assert_eq!(DialKey::from_key("ArrowUp"), Some(DialKey::StepUp));
    assert_eq!(DialKey::from_key("ArrowRight"), Some(DialKey::StepUp));
    assert_eq!(DialKey::from_key("ArrowDown"), Some(DialKey::StepDown));
    assert_eq!(DialKey::from_key("ArrowLeft"), Some(DialKey::StepDown));
    assert_eq!(DialKey::from_key("PageUp"), Some(DialKey::PageUp));
    assert_eq!(DialKey::from_key("PageDown"), Some(DialKey::PageDown));
    assert_eq!(DialKey::from_key("Home"), Some(DialKey::Home));
    assert_eq!(DialKey::from_key("End"), Some(DialKey::End));
    assert_eq!(DialKey::from_key("Tab"), None);
    assert_eq!(DialKey::from_key(""), None);
}

#[test]
fn drag_scenario_with_custom_sensitivity() {
    let config = DialConfig::new(0.0, 100.0, 10.0, 20.0).with_pixels_per_full_range(150.0);
    let mut dial = DialController::new(config);
    assert!(dial.begin_drag(PointerSample::mouse(100.0, 100.0)));
    let change = dial
        .drag_move(PointerSample::mouse(130.0, 100.0))
        .expect("change");
    assert_eq!(change.value, 40.0);
    assert!((change.normalized - 0.40).abs() < 1e-12);
}

#[test]
fn drag_up_and_right_both_increase() {
    let mut dial = default_dial();
    dial.begin_drag(PointerSample::mouse(0.0, 0.0));
    // 10 right + 20 up = 30 px = 30 units at the default sensitivity.
    let c = dial.drag_move(PointerSample::mouse(10.0, -20.0)).expect("change");
    assert_eq!(c.value, 50.0);
    // Moving back down-left past the origin lowers the value and clamps.
    let c = dial.drag_move(PointerSample::mouse(-100.0, 100.0)).expect("change");
    assert_eq!(c.value, 0.0);
}

#[test]
fn drag_quantizes_to_nearest_step() {
    let mut dial = default_dial();
    dial.begin_drag(PointerSample::mouse(0.0, 0.0));
    assert_eq!(dial.drag_move(PointerSample::mouse(4.0, 0.0)), None, "rounds back to 20");
    assert_eq!(
        dial.drag_move(PointerSample::mouse(6.0, 0.0)).map(|c| c.value),
        Some(30.0)
    );
    assert_eq!(
        dial.drag_move(PointerSample::mouse(500.0, 0.0)).map(|c| c.value),
        Some(100.0)
    );
}

#[test]
fn drag_is_relative_to_value_at_start() {
    let mut dial = default_dial();
    dial.begin_drag(PointerSample::mouse(50.0, 50.0));
    dial.drag_move(PointerSample::mouse(80.0, 50.0));
    assert_eq!(dial.value(), 50.0);
    assert!(dial.end_drag(PointerId::Mouse));
    assert!(!dial.is_dragging());

    dial.begin_drag(PointerSample::mouse(0.0, 0.0));
    assert_eq!(dial.drag_origin().map(|d| d.value_at_start), Some(50.0));
    dial.drag_move(PointerSample::mouse(-10.0, 0.0));
    assert_eq!(dial.value(), 40.0);
}

#[test]
fn moves_without_drag_are_ignored() {
    let mut dial = default_dial();
    assert_eq!(dial.drag_move(PointerSample::mouse(300.0, 0.0)), None);
    assert_eq!(dial.value(), 20.0);
    assert!(!dial.end_drag(PointerId::Mouse));
}

#[test]
fn touch_drag_isolation() {
    let mut dial = default_dial();
    assert!(dial.begin_drag(PointerSample::touch(5, 10.0, 10.0)));
    let origin = *dial.drag_origin().expect("origin");

    assert!(!dial.begin_drag(PointerSample::touch(7, 90.0, 90.0)));
    assert_eq!(dial.drag_origin(), Some(&origin));

    assert_eq!(dial.drag_move(PointerSample::touch(7, 200.0, 10.0)), None);
    assert_eq!(dial.value(), 20.0);

    assert!(!dial.end_drag(PointerId::Touch(7)));
    assert!(!dial.cancel_drag(PointerId::Touch(7)));
    assert!(!dial.end_drag(PointerId::Mouse));
    assert!(dial.is_dragging());

    let c = dial.drag_move(PointerSample::touch(5, 30.0, 10.0)).expect("change");
    assert_eq!(c.value, 40.0);
    assert!(dial.end_drag(PointerId::Touch(5)));
    assert!(!dial.is_dragging());
}

#[test]
fn touch_cancel_releases_owner() {
    let mut dial = default_dial();
    dial.begin_drag(PointerSample::touch(3, 0.0, 0.0));
    assert!(dial.cancel_drag(PointerId::Touch(3)));
    assert!(!dial.is_dragging());
    assert!(dial.begin_drag(PointerSample::mouse(0.0, 0.0)));
}

#[test]
fn values_stay_quantized_through_mixed_input() {
    let configs = [
        DialConfig::new(0.0, 100.0, 10.0, 20.0),
        DialConfig::new(-180.0, 180.0, 10.0, 0.0),
        DialConfig::new(0.0, 270.0, 27.0, 135.0),
        DialConfig::new(0.0, 100.0, 1.0, 50.0).with_pixels_per_full_range(77.0),
        DialConfig::new(10.0, 110.0, 10.0, 10.0),
    ];
    // Small LCG keeps the input sequence deterministic.
    let mut seed: u64 = 0x2545_F491_4F6C_DD1D;
    let mut next = move || {
        seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        (seed >> 33) as u32
    };
    let keys = [
        DialKey::StepUp,
        DialKey::StepDown,
        DialKey::PageUp,
        DialKey::PageDown,
        DialKey::Home,
        DialKey::End,
    ];
    for config in configs {
        let mut dial = DialController::new(config.clone());
        for _ in 0..500 {
            match next() % 4 {
                0 => {
                    dial.key(keys[next() as usize % keys.len()]);
                }
                1 => {
                    let x = (next() % 400) as f64;
                    let y = (next() % 400) as f64;
                    dial.begin_drag(PointerSample::mouse(x, y));
                }
                2 => {
                    let x = (next() % 400) as f64 - 50.0;
                    let y = (next() % 400) as f64 - 50.0;
                    dial.drag_move(PointerSample::mouse(x, y));
                }
                _ => {
                    dial.end_drag(PointerId::Mouse);
                }
            }
            let v = dial.value();
            assert!(v >= config.min && v <= config.max, "{v} out of range");
            let k = (v - config.min) / config.step;
            assert!((k - k.round()).abs() < 1e-9, "{v} is not on a step");
        }
    }
}

#[test]
fn tick_crossing_is_reported_once_per_step_change() {
    let mut dial = default_dial();
    assert_eq!(dial.last_tick(), 2);
    let c = dial.key(DialKey::StepUp).expect("change");
    assert!(c.tick_crossed);
    assert_eq!(dial.last_tick(), 3);

    dial.begin_drag(PointerSample::mouse(0.0, 0.0));
    let c = dial.drag_move(PointerSample::mouse(40.0, 0.0)).expect("change");
    assert_eq!(c.value, 70.0);
    assert!(c.tick_crossed);
    assert_eq!(dial.drag_move(PointerSample::mouse(41.0, 0.0)), None);
}

#[test]
fn rotary_dial_plays_one_cue_per_crossing_and_notifies() {
    let plays = Rc::new(Cell::new(0));
    let players = (0..5)
        .map(|_| CountingCue {
            plays: plays.clone(),
        })
        .collect();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let seen_cb = seen.clone();
    let mut dial = RotaryDial::new(
        DialConfig::new(0.0, 100.0, 10.0, 20.0),
        CuePool::new(players),
    )
    .with_listener(move |n| seen_cb.borrow_mut().push(n));

    dial.publish_current();
    dial.key(DialKey::StepUp);
    dial.key(DialKey::StepUp);
    dial.key(DialKey::End);
    dial.key(DialKey::End);

    assert_eq!(plays.get(), 3);
    assert_eq!(dial.cues().next_index(), 3);
    let seen = seen.borrow();
    assert_eq!(seen.len(), 4);
    assert!((seen[0] - 0.2).abs() < 1e-12);
    assert!((seen[1] - 0.3).abs() < 1e-12);
    assert!((seen[2] - 0.4).abs() < 1e-12);
    assert_eq!(seen[3], 1.0);
}

#[test]
fn cue_pool_round_robin_wraps() {
    let mut pool = CuePool::new((0..3).map(|_| CountingCue::default()).collect());
    let used: Vec<_> = (0..7).filter_map(|_| pool.trigger()).collect();
    assert_eq!(used, vec![0, 1, 2, 0, 1, 2, 0]);
    let counts: Vec<_> = pool.players().iter().map(|p| p.plays.get()).collect();
    assert_eq!(counts, vec![3, 2, 2]);
}

#[test]
fn empty_cue_pool_is_silent() {
    let mut pool: CuePool<CountingCue> = CuePool::empty();
    assert!(pool.is_empty());
    assert_eq!(pool.trigger(), None);
}

#[test]
fn config_validation() {
    assert!(DialConfig::default().validate().is_ok());
    assert_eq!(
        DialConfig::new(5.0, 5.0, 1.0, 5.0).validate(),
        Err(DialConfigError::EmptyRange { min: 5.0, max: 5.0 })
    );
    assert_eq!(
        DialConfig::new(0.0, 10.0, 0.0, 0.0).validate(),
        Err(DialConfigError::NonPositiveStep(0.0))
    );
    assert_eq!(
        DialConfig::new(0.0, 10.0, 1.0, 0.0)
            .with_pixels_per_full_range(-1.0)
            .validate(),
        Err(DialConfigError::NonPositiveSensitivity(-1.0))
    );
    assert_eq!(
        DialConfig::new(0.0, 10.0, 1.0, 11.0).validate(),
        Err(DialConfigError::InitialOutOfRange(11.0))
    );
    assert_eq!(
        DialConfig::new(0.0, f64::NAN, 1.0, 0.0).validate(),
        Err(DialConfigError::NonFinite)
    );
}

#[test]
fn whole_step_detection() {
    assert!(DialConfig::new(0.0, 100.0, 10.0, 0.0).has_whole_steps());
    assert!(DialConfig::new(0.0, 270.0, 27.0, 0.0).has_whole_steps());
    assert!(!DialConfig::new(0.0, 100.0, 30.0, 0.0).has_whole_steps());
}
