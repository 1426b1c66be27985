/// Configuration for the frontend enhancers
use site_enhance_shared::{config::CONFIG_ELEMENT_ID, EnhanceConfig};
use web_sys::Document;

/// Read the optional embedded JSON config, falling back to defaults.
pub fn load(document: &Document) -> EnhanceConfig {
    let raw = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content())
        .unwrap_or_default();

    match EnhanceConfig::from_json(&raw) {
        Ok(config) => config,
        Err(err) => {
            web_sys::console::error_1(&format!("Ignoring {CONFIG_ELEMENT_ID}: {err}").into());
            EnhanceConfig::default()
        },
    }
}
