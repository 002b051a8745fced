use contracts::shared::conventions::{UiConventions, CONFIG_ELEMENT_ID};
use web_sys::Document;

/// Conventions for this page: defaults, overridden by the inline JSON block
/// `#grimorio-config` when the page provides one.
pub fn load_conventions(document: &Document) -> UiConventions {
    let Some(raw) = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content())
    else {
        return UiConventions::default();
    };

    match UiConventions::from_json(&raw) {
        Ok(conv) => {
            log::debug!("grimorio: using page conventions from #{}", CONFIG_ELEMENT_ID);
            conv
        }
        Err(e) => {
            log::warn!("grimorio: {:#}, falling back to defaults", e);
            UiConventions::default()
        }
    }
}
