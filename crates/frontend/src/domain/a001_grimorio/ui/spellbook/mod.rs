//! Grimório page: one tab and one panel per spell.
//!
//! Panels are rendered visible; `u602_tab_switcher` hides all but the one
//! named by the URL fragment once it is attached.

use contracts::shared::catalog::Spell;
use contracts::shared::tabs::TabConventions;
use leptos::prelude::*;

#[component]
pub fn Spellbook(spells: Vec<Spell>, conventions: TabConventions) -> impl IntoView {
    let conv = conventions;
    let tab_class = conv.tab_class.clone();
    let panel_class = conv.panel_class.clone();

    let tabs = spells
        .iter()
        .map(|spell| {
            let target = conv.panel_id_for(&spell.slug);
            view! {
                <button
                    type="button"
                    class=tab_class.clone()
                    role="tab"
                    data-target=target
                    aria-selected="false"
                >
                    {spell.name.clone()}
                </button>
            }
        })
        .collect_view();

    let panels = spells
        .into_iter()
        .map(|spell| {
            let id = conv.panel_id_for(&spell.slug);
            view! {
                <section class=panel_class.clone() role="tabpanel" id=id>
                    <h2>{spell.name}</h2>
                    <p class="spellbook__school">{spell.school}</p>
                </section>
            }
        })
        .collect_view();

    view! {
        <div class="spellbook">
            <nav class="spellbook__tabs" role="tablist">{tabs}</nav>
            {panels}
        </div>
    }
}
