//! Tab/panel switcher driven by the URL fragment.
//!
//! Exactly one panel is visible at a time. `#slug` selects `panel-slug`;
//! without a fragment the first panel wins. Tab clicks push the new fragment
//! and activate directly, since `pushState` does not fire `hashchange`.

use std::rc::Rc;

use contracts::shared::tabs::TabConventions;
use wasm_bindgen::JsValue;
use web_sys::{Document, Element, Event, Window};

use crate::shared::dom;

pub struct TabSwitcher {
    window: Window,
    conv: TabConventions,
    /// Snapshot taken at attach time, in document order.
    tabs: Vec<Element>,
    panels: Vec<Element>,
}

impl TabSwitcher {
    pub fn new(window: Window, document: &Document, conv: TabConventions) -> Self {
        let tabs = dom::query_all(document, &conv.tab_selector());
        let panels = dom::query_all(document, &conv.panel_selector());
        Self {
            window,
            conv,
            tabs,
            panels,
        }
    }

    /// Shows the panel whose id is `panel_id` and marks its tab as selected.
    /// An unknown id hides every panel and deselects every tab.
    pub fn activate_by_id(&self, panel_id: &str) {
        for panel in &self.panels {
            dom::toggle_class(panel, &self.conv.hidden_class, panel.id() != panel_id);
        }
        for tab in &self.tabs {
            let active = tab.get_attribute(&self.conv.target_attr).as_deref() == Some(panel_id);
            dom::toggle_class(tab, &self.conv.active_class, active);
            let _ = tab.set_attribute("aria-selected", if active { "true" } else { "false" });
        }
    }

    /// Activates the panel named by the current fragment, or the first panel.
    pub fn activate_from_hash(&self) {
        let hash = self.window.location().hash().unwrap_or_default();
        let fragment = self.conv.fragment_of(&hash);
        let first_panel_id = self.panels.first().map(|p| p.id());
        match self.conv.resolve_target(&fragment, first_panel_id.as_deref()) {
            Some(target) => {
                log::debug!("tabs: activate {} (hash `{}`)", target, hash);
                self.activate_by_id(&target);
            }
            None => log::debug!("tabs: no panel to activate"),
        }
    }

    fn on_click(&self, event: &Event) {
        let Some(tab) = dom::closest_to_target(event, &self.conv.tab_selector()) else {
            return;
        };
        // An empty target is treated like a missing one.
        let Some(target) = tab
            .get_attribute(&self.conv.target_attr)
            .filter(|t| !t.is_empty())
        else {
            return;
        };
        let url = format!("#{}", self.conv.slug_of(&target));
        let pushed = self
            .window
            .history()
            .and_then(|history| history.push_state_with_url(&JsValue::NULL, "", Some(&url)));
        if let Err(e) = pushed {
            log::warn!("tabs: pushState to {} failed: {:?}", url, e);
        }
        self.activate_by_id(&target);
    }
}

/// Wires tab clicks and `hashchange`, then activates from the load-time
/// fragment.
pub fn attach(window: &Window, document: &Document, conv: TabConventions) -> Result<Rc<TabSwitcher>, JsValue> {
    let switcher = Rc::new(TabSwitcher::new(window.clone(), document, conv));
    log::debug!(
        "tabs: attached ({} tabs, {} panels)",
        switcher.tabs.len(),
        switcher.panels.len()
    );

    let root = dom::delegation_root(document);

    let this = Rc::clone(&switcher);
    dom::listen(&root, "click", move |event| this.on_click(&event))?;

    let this = Rc::clone(&switcher);
    dom::listen(window, "hashchange", move |_| this.activate_from_hash())?;

    switcher.activate_from_hash();
    Ok(switcher)
}
