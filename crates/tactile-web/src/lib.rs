#![cfg(target_arch = "wasm32")]
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use tactile_core::{
    frequency_dial_config, phase_dial_config, ControlPanel, LatchingSwitch, PanelInput,
    ScopeConfig, WaveformRenderer,
};
use wasm_bindgen::prelude::*;
use web_sys as web;

mod audio;
mod canvas;
mod constants;
mod dial_view;
mod dom;
mod events;
mod frame;
mod input;
mod layout;

use constants::*;
use frame::{AnimationHandle, FrameContext};

thread_local! {
    static ANIMATION: RefCell<Option<AnimationHandle>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("tactile-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

/// Cancel the oscilloscope loop. Safe to call more than once.
#[wasm_bindgen]
pub fn stop() {
    let handle = ANIMATION.with(|a| a.borrow_mut().take());
    if let Some(handle) = handle {
        handle.cancel();
    }
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let panel = Rc::new(RefCell::new(ControlPanel::default()));

    events::wire_dial(
        &document,
        PHASE_DIAL_ID,
        phase_dial_config(),
        PanelInput::Phase,
        panel.clone(),
    );
    events::wire_dial(
        &document,
        FREQUENCY_DIAL_ID,
        frequency_dial_config(),
        PanelInput::Frequency,
        panel.clone(),
    );
    let power_on = panel.borrow().params().power_on;
    let gain_on = panel.borrow().params().double_amplitude;
    events::wire_latching_switch(
        &document,
        POWER_SWITCH_ID,
        LatchingSwitch::light_switch(power_on),
        PanelInput::Power,
        panel.clone(),
    );
    events::wire_latching_switch(
        &document,
        GAIN_TOGGLE_ID,
        LatchingSwitch::toggle(gain_on),
        PanelInput::Gain,
        panel.clone(),
    );
    events::wire_push_button(&document, SCHMITT_BUTTON_ID, PanelInput::Schmitt, panel.clone());

    dom::listen(&window, "pagehide", |ev: web::PageTransitionEvent| {
        if input::stops_on_pagehide(ev.persisted()) {
            stop();
        }
    });

    // A missing or non-2D scope canvas leaves the controls working without a display.
    let Some(scope) = dom::element_by_id::<web::HtmlCanvasElement>(&document, SCOPE_CANVAS_ID)
    else {
        log::warn!("missing #{}; oscilloscope disabled", SCOPE_CANVAS_ID);
        return Ok(());
    };
    let Some(ctx) = dom::canvas_2d(&scope) else {
        log::warn!("#{} has no 2D context; oscilloscope disabled", SCOPE_CANVAS_ID);
        return Ok(());
    };

    let config = ScopeConfig::default().with_size(scope.width(), scope.height());
    let handle = frame::start_loop(FrameContext {
        renderer: WaveformRenderer::new(config),
        panel,
        ctx,
        last_instant: Instant::now(),
    })
    .ok_or_else(|| anyhow::anyhow!("requestAnimationFrame unavailable"))?;
    log::info!(
        "[frame] oscilloscope running at {}x{}",
        scope.width(),
        scope.height()
    );
    ANIMATION.with(|a| *a.borrow_mut() = Some(handle));
    Ok(())
}
