//! Live counters and select/clear-all buttons for the selection form.
//!
//! Nothing is cached between events: every change or bulk click recounts all
//! configured groups straight from the DOM.

use std::rc::Rc;

use contracts::shared::selection::{BulkAction, SelectionConventions};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Event, HtmlInputElement};

use crate::shared::dom;

pub struct SelectionCounter {
    document: Document,
    conv: SelectionConventions,
}

impl SelectionCounter {
    pub fn new(document: Document, conv: SelectionConventions) -> Self {
        Self { document, conv }
    }

    /// Number of checked boxes named `{group}[]`.
    pub fn count(&self, group: &str) -> usize {
        dom::query_all(&self.document, &self.conv.checked_selector(group)).len()
    }

    /// Rewrites `#count-{group}` for every group; absent counters are skipped.
    pub fn update_counters(&self) {
        for group in &self.conv.groups {
            let count = self.count(group);
            log::trace!("selection: {} = {}", group, count);
            dom::set_text(
                &self.document,
                &self.conv.counter_id(group),
                &self.conv.counter_label(count),
            );
        }
    }

    /// Checks or clears every box of `group`, then recounts.
    pub fn apply_bulk(&self, group: &str, action: BulkAction) {
        let inputs = dom::query_inputs(&self.document, &self.conv.group_selector(group));
        log::debug!("selection: {:?} {} ({} inputs)", action, group, inputs.len());
        for input in &inputs {
            input.set_checked(action.checked());
        }
        self.update_counters();
    }

    fn on_change(&self, event: &Event) {
        let Some(input) = event
            .target()
            .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
        else {
            return;
        };
        if input.type_() != "checkbox" {
            return;
        }
        if self.conv.group_of_input(&input.name()).is_some() {
            self.update_counters();
        }
    }

    fn on_click(&self, event: &Event) {
        let Some(button) = dom::closest_to_target(event, &self.conv.bulk_button_selector()) else {
            return;
        };
        let group = button.get_attribute(&self.conv.bulk_attr).unwrap_or_default();
        let action = BulkAction::from_attr(button.get_attribute(&self.conv.action_attr).as_deref());
        self.apply_bulk(&group, action);
    }
}

/// Wires change/click delegation on `<body>` and paints the initial counts.
pub fn attach(document: &Document, conv: SelectionConventions) -> Result<Rc<SelectionCounter>, JsValue> {
    let counter = Rc::new(SelectionCounter::new(document.clone(), conv));

    let root = dom::delegation_root(document);

    let this = Rc::clone(&counter);
    dom::listen(&root, "change", move |event| this.on_change(&event))?;

    let this = Rc::clone(&counter);
    dom::listen(&root, "click", move |event| this.on_click(&event))?;

    counter.update_counters();
    log::debug!("selection: attached for {:?}", counter.conv.groups);
    Ok(counter)
}
