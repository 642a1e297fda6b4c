use crate::audio::{self, CuePlayer, HtmlAudioCue};
use crate::constants::*;
use crate::dial_view::DialView;
use crate::dom;
use crate::input;
use std::cell::RefCell;
use std::rc::Rc;
use tactile_core::constants::{CUE_POOL_SIZE, CUE_VOLUME, DIAL_TICK_CUE};
use tactile_core::{
    is_activation_key, ButtonPress, ControlPanel, DialConfig, DialKey, LatchingSwitch, PanelInput,
    PointerId, PushButton, RotaryDial,
};
use web_sys as web;

struct DialWidget {
    dial: RotaryDial<HtmlAudioCue>,
    view: DialView,
}

impl DialWidget {
    fn redraw(&self) {
        self.view.draw(self.dial.controller());
    }
}

/// Wire a rotary dial canvas to the panel. Invalid configuration or a
/// missing canvas leaves the dial inert.
pub fn wire_dial(
    document: &web::Document,
    canvas_id: &str,
    config: DialConfig,
    to_input: fn(f64) -> PanelInput,
    panel: Rc<RefCell<ControlPanel>>,
) {
    if let Err(e) = config.validate() {
        log::warn!("[dial] #{}: {}; dial disabled", canvas_id, e);
        return;
    }
    let cues = audio::build_cue_pool(DIAL_TICK_CUE, CUE_POOL_SIZE, CUE_VOLUME);
    let dial = RotaryDial::new(config, cues)
        .with_listener(move |n| panel.borrow_mut().apply(to_input(n)));
    let Some(view) = DialView::attach(document, canvas_id, dial.controller()) else {
        log::warn!("[dial] #{} has no 2D canvas; dial disabled", canvas_id);
        return;
    };
    let widget = Rc::new(RefCell::new(DialWidget { dial, view }));
    {
        let mut w = widget.borrow_mut();
        w.dial.publish_current();
        w.redraw();
    }

    wire_dial_mouse(document, &widget);
    wire_dial_touch(&widget);
    wire_dial_keys(&widget);
}

fn wire_dial_mouse(document: &web::Document, widget: &Rc<RefCell<DialWidget>>) {
    let canvas = widget.borrow().view.canvas().clone();

    let w = widget.clone();
    let doc = document.clone();
    dom::listen(&canvas, "mousedown", move |ev: web::MouseEvent| {
        let mut w = w.borrow_mut();
        if w.dial.begin_drag(dom::mouse_sample(&ev)) {
            dom::set_body_cursor(&doc, "grabbing");
        }
        _ = w.view.canvas().focus();
        ev.prevent_default();
    });

    let Some(window) = web::window() else {
        return;
    };

    let w = widget.clone();
    dom::listen(&window, "mousemove", move |ev: web::MouseEvent| {
        let mut w = w.borrow_mut();
        if w.dial.drag_move(dom::mouse_sample(&ev)).is_some() {
            w.redraw();
        }
    });

    let w = widget.clone();
    let doc = document.clone();
    dom::listen(&window, "mouseup", move |_ev: web::MouseEvent| {
        if w.borrow_mut().dial.end_drag(PointerId::Mouse) {
            dom::set_body_cursor(&doc, "");
        }
    });
}

fn wire_dial_touch(widget: &Rc<RefCell<DialWidget>>) {
    let canvas = widget.borrow().view.canvas().clone();

    let w = widget.clone();
    dom::listen(&canvas, "touchstart", move |ev: web::TouchEvent| {
        if let Some(touch) = dom::changed_touches(&ev).first() {
            w.borrow_mut().dial.begin_drag(dom::touch_sample(touch));
        }
        ev.prevent_default();
    });

    let Some(window) = web::window() else {
        return;
    };

    let w = widget.clone();
    dom::listen(&window, "touchmove", move |ev: web::TouchEvent| {
        let mut w = w.borrow_mut();
        let owner = w.dial.controller().drag_origin().map(|d| d.pointer);
        let touches = dom::changed_touches(&ev);
        let ids: Vec<i32> = touches.iter().map(|t| t.identifier()).collect();
        if let Some(i) = input::owner_index(&ids, owner) {
            if w.dial.drag_move(dom::touch_sample(&touches[i])).is_some() {
                w.redraw();
            }
            ev.prevent_default();
        }
    });

    for (event, cancel) in [("touchend", false), ("touchcancel", true)] {
        let w = widget.clone();
        dom::listen(&window, event, move |ev: web::TouchEvent| {
            let mut w = w.borrow_mut();
            for touch in dom::changed_touches(&ev) {
                let id = PointerId::Touch(touch.identifier());
                if cancel {
                    w.dial.cancel_drag(id);
                } else {
                    w.dial.end_drag(id);
                }
            }
        });
    }
}

fn wire_dial_keys(widget: &Rc<RefCell<DialWidget>>) {
    let canvas = widget.borrow().view.canvas().clone();
    let w = widget.clone();
    dom::listen(&canvas, "keydown", move |ev: web::KeyboardEvent| {
        let Some(key) = DialKey::from_key(&ev.key()) else {
            return;
        };
        ev.prevent_default();
        let mut w = w.borrow_mut();
        if w.dial.key(key).is_some() {
            w.redraw();
        }
    });
}

fn refresh_indicator(document: &web::Document, panel: &ControlPanel) {
    let size = format!("{}px", panel.indicator_size_px());
    if let Some(el) = dom::element_by_id::<web::HtmlElement>(document, POWER_INDICATOR_ID) {
        _ = el.style().set_property("width", &size);
        _ = el.style().set_property("height", &size);
    }
}

/// Light switch or toggle: flips on click or Enter/Space and reaches the
/// panel after the switch's settle delay.
pub fn wire_latching_switch(
    document: &web::Document,
    element_id: &str,
    switch: LatchingSwitch,
    to_input: fn(bool) -> PanelInput,
    panel: Rc<RefCell<ControlPanel>>,
) {
    let Some(el) = document.get_element_by_id(element_id) else {
        log::warn!("[switch] missing #{}", element_id);
        return;
    };
    _ = el.set_attribute("role", "switch");
    _ = el.set_attribute("tabindex", "0");
    _ = el.set_attribute("aria-checked", &switch.is_on().to_string());
    dom::set_class(&el, ACTIVE_CLASS, switch.is_on());
    refresh_indicator(document, &panel.borrow());

    let switch = Rc::new(RefCell::new(switch));
    let player = Rc::new(CuePlayer::new());
    let activate: Rc<dyn Fn()> = {
        let el = el.clone();
        let doc = document.clone();
        Rc::new(move || {
            let flip = switch.borrow_mut().activate();
            _ = el.set_attribute("aria-checked", &flip.on.to_string());
            dom::set_class(&el, ACTIVE_CLASS, flip.on);
            player.play(flip.cue);
            let panel = panel.clone();
            let doc = doc.clone();
            dom::set_timeout(flip.settle_ms, move || {
                panel.borrow_mut().apply(to_input(flip.on));
                refresh_indicator(&doc, &panel.borrow());
            });
        })
    };

    let on_click = activate.clone();
    dom::listen(&el, "click", move |_ev: web::MouseEvent| on_click());
    dom::listen(&el, "keydown", move |ev: web::KeyboardEvent| {
        if is_activation_key(&ev.key()) {
            ev.prevent_default();
            activate();
        }
    });
}

/// Latching push button: state and cue on press, spring-back cue shortly
/// after release.
pub fn wire_push_button(
    document: &web::Document,
    element_id: &str,
    to_input: fn(bool) -> PanelInput,
    panel: Rc<RefCell<ControlPanel>>,
) {
    let Some(el) = document.get_element_by_id(element_id) else {
        log::warn!("[button] missing #{}", element_id);
        return;
    };
    let button = Rc::new(RefCell::new(PushButton::default()));

    let on_press: Rc<dyn Fn(Option<ButtonPress>)> = {
        let el = el.clone();
        Rc::new(move |press| {
            let Some(press) = press else {
                return;
            };
            dom::set_class(&el, PRESSED_CLASS, true);
            dom::set_class(&el, ENABLED_CLASS, press.enabled);
            audio::play_one_shot(press.cue);
            panel.borrow_mut().apply(to_input(press.enabled));
        })
    };
    let on_release: Rc<dyn Fn(Option<u32>)> = {
        let el = el.clone();
        let button = button.clone();
        Rc::new(move |delay| {
            let Some(delay) = delay else {
                return;
            };
            let el = el.clone();
            let button = button.clone();
            dom::set_timeout(delay, move || {
                let cue = button.borrow_mut().finish_release();
                dom::set_class(&el, PRESSED_CLASS, false);
                audio::play_one_shot(cue);
            });
        })
    };

    {
        let (button, on_press) = (button.clone(), on_press.clone());
        dom::listen(&el, "mousedown", move |_ev: web::MouseEvent| {
            let press = button.borrow_mut().press();
            on_press(press);
        });
    }
    for event in ["mouseup", "mouseleave"] {
        let (button, on_release) = (button.clone(), on_release.clone());
        dom::listen(&el, event, move |_ev: web::MouseEvent| {
            let delay = button.borrow_mut().release();
            on_release(delay);
        });
    }
    {
        let button = button.clone();
        dom::listen(&el, "keydown", move |ev: web::KeyboardEvent| {
            if is_activation_key(&ev.key()) {
                ev.prevent_default();
                let press = button.borrow_mut().key_down();
                on_press(press);
            }
        });
    }
    dom::listen(&el, "keyup", move |ev: web::KeyboardEvent| {
        if is_activation_key(&ev.key()) {
            ev.prevent_default();
            let delay = button.borrow_mut().key_up();
            on_release(delay);
        }
    });
}
