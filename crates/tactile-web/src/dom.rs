use tactile_core::PointerSample;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Look up an element by id and cast it; `None` when missing or of another type.
#[inline]
pub fn element_by_id<T: JsCast>(document: &web::Document, id: &str) -> Option<T> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<T>().ok())
}

pub fn canvas_2d(canvas: &web::HtmlCanvasElement) -> Option<web::CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|ctx| ctx.dyn_into::<web::CanvasRenderingContext2d>().ok())
}

/// Attach a listener that lives for the rest of the page.
pub fn listen<E>(target: &web::EventTarget, event: &str, mut handler: impl FnMut(E) + 'static)
where
    E: FromWasmAbi + 'static,
{
    let closure = Closure::wrap(Box::new(move |ev: E| handler(ev)) as Box<dyn FnMut(E)>);
    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Run `f` once after `delay_ms`. Silently skipped without a window.
pub fn set_timeout(delay_ms: u32, f: impl FnOnce() + 'static) {
    if let Some(w) = web::window() {
        let cb = Closure::once_into_js(f);
        _ = w.set_timeout_with_callback_and_timeout_and_arguments_0(
            cb.unchecked_ref(),
            delay_ms as i32,
        );
    }
}

pub fn set_body_cursor(document: &web::Document, cursor: &str) {
    if let Some(body) = document.body() {
        _ = body.style().set_property("cursor", cursor);
    }
}

#[inline]
pub fn set_class(el: &web::Element, class: &str, on: bool) {
    _ = el.class_list().toggle_with_force(class, on);
}

#[inline]
pub fn mouse_sample(ev: &web::MouseEvent) -> PointerSample {
    PointerSample::mouse(ev.client_x() as f64, ev.client_y() as f64)
}

#[inline]
pub fn touch_sample(touch: &web::Touch) -> PointerSample {
    PointerSample::touch(
        touch.identifier(),
        touch.client_x() as f64,
        touch.client_y() as f64,
    )
}

/// Touches whose state changed in this event.
pub fn changed_touches(ev: &web::TouchEvent) -> Vec<web::Touch> {
    let list = ev.changed_touches();
    (0..list.length()).filter_map(|i| list.get(i)).collect()
}
