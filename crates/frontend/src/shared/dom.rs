//! Thin helpers over `web_sys` shared by the page behaviors.
//!
//! Lookups return `Option`/`Vec` and swallow selector errors: a missing node
//! is never an error on these pages.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Event, EventTarget, HtmlInputElement};

/// `querySelectorAll` collected into elements, in document order.
pub fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    let Ok(nodes) = document.query_selector_all(selector) else {
        log::warn!("invalid selector `{}`", selector);
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// `<input>` elements matching `selector`, of any type; other elements
/// are skipped.
pub fn query_inputs(document: &Document, selector: &str) -> Vec<HtmlInputElement> {
    query_all(document, selector)
        .into_iter()
        .filter_map(|el| el.dyn_into::<HtmlInputElement>().ok())
        .collect()
}

/// Element the event was dispatched on, if it is one.
pub fn event_target_element(event: &Event) -> Option<Element> {
    event.target()?.dyn_into::<Element>().ok()
}

/// `target.closest(selector)` for the event target.
pub fn closest_to_target(event: &Event, selector: &str) -> Option<Element> {
    event_target_element(event)?.closest(selector).ok().flatten()
}

pub fn set_text(document: &Document, id: &str, text: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        el.set_text_content(Some(text));
    }
}

/// Adds or removes `class` so that its presence equals `on`.
pub fn toggle_class(el: &Element, class: &str, on: bool) {
    let _ = el.class_list().toggle_with_force(class, on);
}

/// `<body>`, or the document itself on a page without one.
pub fn delegation_root(document: &Document) -> EventTarget {
    match document.body() {
        Some(body) => body.into(),
        None => document.clone().into(),
    }
}

/// Registers `handler` for `event_type` for the lifetime of the page.
pub fn listen<F>(target: &EventTarget, event_type: &str, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref())?;
    // Listeners are never removed, the closure has to outlive this call.
    closure.forget();
    Ok(())
}
