use crate::domain::a001_grimorio::ui::selection::SelectionForm;
use crate::domain::a001_grimorio::ui::spellbook::Spellbook;
use contracts::shared::catalog::Catalog;
use contracts::shared::conventions::UiConventions;
use leptos::prelude::*;

/// Demo host page: the selection form followed by the grimório tabs.
/// Rendered with the same conventions the page behaviors are attached with.
#[component]
pub fn App(conventions: UiConventions) -> impl IntoView {
    let catalog = Catalog::demo().unwrap_or_else(|e| {
        log::error!("demo catalog unavailable: {:#}", e);
        Catalog::default()
    });
    let spells = catalog.spells.clone();
    let UiConventions { selection, tabs } = conventions;

    view! {
        <main class="grimorio-demo">
            <SelectionForm catalog=catalog conventions=selection />
            <Spellbook spells=spells conventions=tabs />
        </main>
    }
}
