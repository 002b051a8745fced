//! Page-level configuration: every markup convention both behaviors rely on.
//!
//! Defaults describe the markup rendered by the grimório templates. A page
//! can override any subset through an inline JSON block, e.g.
//!
//! ```json
//! {"tabs": {"panel_class": "pane"}, "selection": {"groups": ["spells"]}}
//! ```

use anyhow::Context;
use serde::{Deserialize, Serialize};

use super::selection::SelectionConventions;
use super::tabs::TabConventions;

/// Id of the `<script type="application/json">` element holding overrides.
pub const CONFIG_ELEMENT_ID: &str = "grimorio-config";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConventions {
    pub selection: SelectionConventions,
    pub tabs: TabConventions,
}

impl UiConventions {
    pub fn from_json(raw: &str) -> anyhow::Result<Self> {
        serde_json::from_str(raw).context("invalid grimorio config JSON")
    }
}
