//! Markup conventions of the tabbed grimório page.
//!
//! A tab points at its panel through `data-target`, panels are identified as
//! `panel-{slug}` and the URL fragment carries the bare slug, so `#fireball`
//! deep-links to `panel-fireball`.

use serde::{Deserialize, Serialize};

pub const PANEL_PREFIX: &str = "panel-";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TabConventions {
    pub tab_class: String,
    pub panel_class: String,
    pub target_attr: String,
    pub active_class: String,
    pub hidden_class: String,
    pub panel_prefix: String,
}

impl Default for TabConventions {
    fn default() -> Self {
        Self {
            tab_class: "tab".to_string(),
            panel_class: "tabpanel".to_string(),
            target_attr: "data-target".to_string(),
            active_class: "active".to_string(),
            hidden_class: "hidden".to_string(),
            panel_prefix: PANEL_PREFIX.to_string(),
        }
    }
}

impl TabConventions {
    pub fn tab_selector(&self) -> String {
        format!(".{}", self.tab_class)
    }

    pub fn panel_selector(&self) -> String {
        format!(".{}", self.panel_class)
    }

    /// `location.hash` without its `#`. Only the first `#` is dropped.
    pub fn fragment_of(&self, hash: &str) -> String {
        hash.replacen('#', "", 1)
    }

    pub fn panel_id_for(&self, slug: &str) -> String {
        format!("{}{}", self.panel_prefix, slug)
    }

    /// Strips one leading panel prefix; ids without it are their own slug.
    pub fn slug_of<'a>(&self, panel_id: &'a str) -> &'a str {
        panel_id
            .strip_prefix(self.panel_prefix.as_str())
            .unwrap_or(panel_id)
    }

    /// Panel to show for a fragment. An empty fragment falls back to the
    /// first panel in document order; `None` means nothing to activate.
    pub fn resolve_target(&self, fragment: &str, first_panel_id: Option<&str>) -> Option<String> {
        if !fragment.is_empty() {
            return Some(self.panel_id_for(fragment));
        }
        first_panel_id
            .filter(|id| !id.is_empty())
            .map(str::to_string)
    }
}
