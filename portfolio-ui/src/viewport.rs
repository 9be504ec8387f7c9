use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

/// Keeps the `--vh` custom property equal to 1% of the real inner height so
/// mobile browsers with collapsing toolbars render full-height views
/// correctly. Installed once at startup; the listeners live for the page
/// lifetime.
pub fn install() {
    if let Err(err) = try_install() {
        log::warn!("viewport height manager unavailable: {err:?}");
    }
}

fn try_install() -> Result<(), JsValue> {
    apply_viewport_height()?;

    let on_change = Closure::<dyn FnMut()>::new(|| {
        if let Err(err) = apply_viewport_height() {
            log::warn!("failed to refresh viewport height: {err:?}");
        }
    });

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("window unavailable"))?;
    window.add_event_listener_with_callback("resize", on_change.as_ref().unchecked_ref())?;
    window
        .add_event_listener_with_callback("orientationchange", on_change.as_ref().unchecked_ref())?;

    // Page-lifetime listeners: intentionally leaked.
    on_change.forget();
    Ok(())
}

fn apply_viewport_height() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("window unavailable"))?;
    let inner_height = window.inner_height()?.as_f64().unwrap_or_default();
    let vh = inner_height * 0.01;

    let root: web_sys::HtmlElement = window
        .document()
        .ok_or_else(|| JsValue::from_str("document unavailable"))?
        .document_element()
        .ok_or_else(|| JsValue::from_str("document element unavailable"))?
        .dyn_into()
        .map_err(|_| JsValue::from_str("document element is not an html element"))?;

    root.style().set_property("--vh", &format!("{vh}px"))
}
