//! Selection form: one fieldset per group with bulk buttons and a counter.
//!
//! Only markup is rendered here; counting and bulk toggling are attached
//! afterwards by `u601_selection_counter`, exactly as on a server-rendered
//! page.

use contracts::shared::catalog::Catalog;
use contracts::shared::selection::{SelectionConventions, ACTION_SELECT, GROUP_RUNES, GROUP_SPELLS};
use leptos::prelude::*;

/// A checkbox row: value, label, secondary text.
#[derive(Clone, Debug)]
pub struct SelectionItem {
    pub slug: String,
    pub name: String,
    pub detail: String,
}

#[component]
pub fn SelectionForm(catalog: Catalog, conventions: SelectionConventions) -> impl IntoView {
    let spells = catalog
        .spells
        .into_iter()
        .map(|s| SelectionItem {
            slug: s.slug,
            name: s.name,
            detail: s.school,
        })
        .collect::<Vec<_>>();
    let runes = catalog
        .runes
        .into_iter()
        .map(|r| SelectionItem {
            slug: r.slug,
            name: r.name,
            detail: r.domain,
        })
        .collect::<Vec<_>>();

    view! {
        <form class="selection" id="selection-form" on:submit=|ev: leptos::ev::SubmitEvent| ev.prevent_default()>
            <SelectionGroup conventions=conventions.clone() group=GROUP_SPELLS legend="Magias" items=spells />
            <SelectionGroup conventions=conventions group=GROUP_RUNES legend="Runas" items=runes />
        </form>
    }
}

#[component]
pub fn SelectionGroup(
    conventions: SelectionConventions,
    /// Group name, used for `{group}[]` and `count-{group}`
    group: &'static str,
    legend: &'static str,
    items: Vec<SelectionItem>,
) -> impl IntoView {
    let conv = conventions;
    let input_name = conv.input_name(group);
    let counter_id = conv.counter_id(group);
    let initial_label = conv.counter_label(0);

    view! {
        <fieldset class="selection__group">
            <legend>{legend}</legend>
            <div class="selection__toolbar">
                <button type="button" class="button" data-bulk=group data-action=ACTION_SELECT>
                    "Selecionar todas"
                </button>
                <button type="button" class="button button--secondary" data-bulk=group data-action="clear">
                    "Limpar"
                </button>
                <span class="selection__count" id=counter_id>{initial_label}</span>
            </div>
            <ul class="selection__list">
                {items
                    .into_iter()
                    .map(|item| {
                        let SelectionItem { slug, name, detail } = item;
                        let input_name = input_name.clone();
                        view! {
                            <li>
                                <label>
                                    <input type="checkbox" name=input_name value=slug />
                                    " "
                                    {name}
                                    " "
                                    <small>{detail}</small>
                                </label>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </fieldset>
    }
}
