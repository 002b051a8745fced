pub mod app;
pub mod domain;
pub mod shared;
pub mod usecases;

use contracts::shared::conventions::UiConventions;
use leptos::prelude::*;
use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::JsValue;
use web_sys::{Document, Window};

use crate::app::App;
use crate::shared::{config, dom};
use crate::usecases::{u601_selection_counter, u602_tab_switcher};

/// `<body data-grimorio-demo>` asks for the built-in demo page.
const DEMO_ATTR: &str = "data-grimorio-demo";

/// Attaches both page behaviors to the current document, using the page's
/// `#grimorio-config` overrides if any.
pub fn attach_page(window: &Window, document: &Document) {
    let conv = config::load_conventions(document);
    attach_with(window, document, conv);
}

/// Each behavior is wired independently, a failure in one does not prevent
/// the other.
fn attach_with(window: &Window, document: &Document, conv: UiConventions) {
    if let Err(e) = u601_selection_counter::attach(document, conv.selection) {
        log::error!("selection counter not attached: {:?}", e);
    }
    if let Err(e) = u602_tab_switcher::attach(window, document, conv.tabs) {
        log::error!("tab switcher not attached: {:?}", e);
    }
}

/// Renders the demo page into `<body>` and attaches the behaviors to it.
/// Markup and behaviors share the same conventions.
pub fn mount_demo(window: &Window, document: &Document) {
    let conv = config::load_conventions(document);
    let conventions = conv.clone();
    leptos::mount::mount_to_body(move || view! { <App conventions=conventions /> });
    attach_with(window, document, conv);
}

fn on_ready(window: &Window, document: &Document) {
    let demo = document
        .body()
        .map(|body| body.has_attribute(DEMO_ATTR))
        .unwrap_or(false);
    if demo {
        mount_demo(window, document);
    } else {
        attach_page(window, document);
    }
}

/// Runs the page setup now if the document is parsed, otherwise on
/// `DOMContentLoaded`.
pub fn attach_when_ready() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    if document.ready_state() != "loading" {
        on_ready(&window, &document);
        return Ok(());
    }

    let target = document.clone();
    dom::listen(&target, "DOMContentLoaded", move |_| on_ready(&window, &document))
}

#[wasm_bindgen(start)]
pub fn start() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    if let Err(e) = attach_when_ready() {
        log::error!("grimorio: page behaviors not attached: {:?}", e);
    }
}
