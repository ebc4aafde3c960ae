//! Thin `web-sys` glue shared by the managers.
//!
//! ERROR HANDLING
//! ==============
//! Missing elements are `None`, never errors. DOM calls that return
//! `Result<_, JsValue>` go through [`report`], which logs and moves on.

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{
    Document, Element, EventTarget, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, Window,
};

pub fn window() -> Option<Window> {
    web_sys::window()
}

pub fn document() -> Option<Document> {
    window().and_then(|w| w.document())
}

/// Log a failed DOM call and continue.
pub fn report<T>(result: Result<T, JsValue>, context: &str) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            log::warn!("{context} failed: {err:?}");
            None
        }
    }
}

/// First element matching `selector`.
pub fn query(selector: &str) -> Option<Element> {
    let document = document()?;
    report(document.query_selector(selector), selector).flatten()
}

/// All elements matching `selector`, in document order.
pub fn query_all(selector: &str) -> Vec<Element> {
    let Some(document) = document() else {
        return Vec::new();
    };
    let Some(nodes) = report(document.query_selector_all(selector), selector) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn by_id(id: &str) -> Option<Element> {
    document()?.get_element_by_id(id)
}

pub fn as_html(element: &Element) -> Option<HtmlElement> {
    element.dyn_ref::<HtmlElement>().cloned()
}

/// Set inline style properties on an element.
pub fn set_styles(element: &Element, styles: &[(&str, &str)]) {
    let Some(html) = as_html(element) else {
        return;
    };
    let style = html.style();
    for (property, value) in styles {
        report(style.set_property(property, value), "style.setProperty");
    }
}

pub fn add_class(element: &Element, class: &str) {
    report(element.class_list().add_1(class), "classList.add");
}

pub fn remove_class(element: &Element, class: &str) {
    report(element.class_list().remove_1(class), "classList.remove");
}

/// Add or remove `class` so its presence matches `on`.
pub fn toggle_class(element: &Element, class: &str, on: bool) {
    report(element.class_list().toggle_with_force(class, on), "classList.toggle");
}

pub fn set_attr(element: &Element, name: &str, value: &str) {
    report(element.set_attribute(name, value), "setAttribute");
}

/// Attach a typed listener for the lifetime of the page.
///
/// Managers are never torn down, so the closure is leaked on purpose.
pub fn listen<E, F>(target: &EventTarget, event: &str, mut handler: F)
where
    E: JsCast + 'static,
    F: FnMut(E) + 'static,
{
    let callback = Closure::<dyn FnMut(web_sys::Event)>::new(move |event: web_sys::Event| {
        handler(event.unchecked_into::<E>());
    });
    report(
        target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref()),
        "addEventListener",
    );
    callback.forget();
}

/// Create an intersection observer whose callback receives each batch of
/// entries in delivery order.
///
/// Returns `None` when the browser cannot construct one; callers fall back
/// to scroll-driven checks.
pub fn intersection_observer<F>(root_margin: Option<&str>, threshold: f64, mut on_batch: F) -> Option<IntersectionObserver>
where
    F: FnMut(Vec<IntersectionObserverEntry>, &IntersectionObserver) + 'static,
{
    let options = IntersectionObserverInit::new();
    if let Some(margin) = root_margin {
        options.set_root_margin(margin);
    }
    options.set_threshold(&JsValue::from_f64(threshold));

    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            let batch = entries
                .iter()
                .map(|entry| entry.unchecked_into::<IntersectionObserverEntry>())
                .collect::<Vec<_>>();
            on_batch(batch, &observer);
        },
    );
    let observer = report(
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options),
        "IntersectionObserver",
    )?;
    callback.forget();
    Some(observer)
}

/// Viewport size in CSS pixels, falling back to the root element's client
/// size when `innerWidth`/`innerHeight` are unavailable.
pub fn viewport_size() -> (f64, f64) {
    let Some(window) = window() else {
        return (0.0, 0.0);
    };
    let inner = |value: Result<JsValue, JsValue>| value.unwrap_or(JsValue::UNDEFINED).as_f64().filter(|v| *v > 0.0);
    let root = window.document().and_then(|doc| doc.document_element());
    let width = inner(window.inner_width())
        .or_else(|| root.as_ref().map(|el| f64::from(el.client_width())))
        .unwrap_or(0.0);
    let height = inner(window.inner_height())
        .or_else(|| root.as_ref().map(|el| f64::from(el.client_height())))
        .unwrap_or(0.0);
    (width, height)
}

pub fn viewport_width() -> f64 {
    viewport_size().0
}

pub fn scroll_y() -> f64 {
    window()
        .and_then(|w| report(w.scroll_y(), "scrollY"))
        .unwrap_or(0.0)
}
