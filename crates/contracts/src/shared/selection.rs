//! Markup conventions of the selection form.
//!
//! Checkboxes of one group share the name `{group}[]`, the counter of a group
//! lives in the element with id `count-{group}`, and bulk buttons carry
//! `data-bulk="{group}"` plus `data-action`.

use serde::{Deserialize, Serialize};

pub const GROUP_SPELLS: &str = "spells";
pub const GROUP_RUNES: &str = "runes";

/// Localized suffix written after the number of checked boxes.
pub const COUNTER_SUFFIX: &str = "selecionadas";

/// The only `data-action` value that checks a group.
pub const ACTION_SELECT: &str = "select";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectionConventions {
    /// Groups that are counted on every change, in display order.
    pub groups: Vec<String>,
    pub counter_id_prefix: String,
    pub counter_suffix: String,
    pub bulk_attr: String,
    pub action_attr: String,
}

impl Default for SelectionConventions {
    fn default() -> Self {
        Self {
            groups: vec![GROUP_SPELLS.to_string(), GROUP_RUNES.to_string()],
            counter_id_prefix: "count-".to_string(),
            counter_suffix: COUNTER_SUFFIX.to_string(),
            bulk_attr: "data-bulk".to_string(),
            action_attr: "data-action".to_string(),
        }
    }
}

impl SelectionConventions {
    /// `spells` -> `spells[]`
    pub fn input_name(&self, group: &str) -> String {
        format!("{}[]", group)
    }

    /// Reverse of [`Self::input_name`], restricted to the configured groups.
    pub fn group_of_input<'a>(&self, name: &'a str) -> Option<&'a str> {
        let group = name.strip_suffix("[]")?;
        self.groups.iter().any(|g| g == group).then_some(group)
    }

    pub fn counter_id(&self, group: &str) -> String {
        format!("{}{}", self.counter_id_prefix, group)
    }

    pub fn counter_label(&self, count: usize) -> String {
        format!("{} {}", count, self.counter_suffix)
    }

    /// Selector for every checkbox of a group, checked or not.
    pub fn group_selector(&self, group: &str) -> String {
        format!("input[name=\"{}\"]", self.input_name(group))
    }

    /// Selector for the checked boxes of a group.
    pub fn checked_selector(&self, group: &str) -> String {
        format!("{}:checked", self.group_selector(group))
    }

    /// Selector for the buttons that trigger a bulk toggle.
    pub fn bulk_button_selector(&self) -> String {
        format!("button[{}]", self.bulk_attr)
    }
}

/// What a bulk button does to its group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BulkAction {
    Select,
    Deselect,
}

impl BulkAction {
    /// Anything other than exactly `select`, a missing attribute included,
    /// clears the group.
    pub fn from_attr(value: Option<&str>) -> Self {
        match value {
            Some(ACTION_SELECT) => BulkAction::Select,
            _ => BulkAction::Deselect,
        }
    }

    /// Checked state every box of the group ends up in.
    pub fn checked(self) -> bool {
        matches!(self, BulkAction::Select)
    }
}
