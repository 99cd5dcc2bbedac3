pub mod app;
pub mod domain;
pub mod layout;
pub mod shared;

use app::App;
use contracts::shared::settings::{load_settings, UiSettings};
use leptos::prelude::*;
use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();

    // Settings overrides live in the page data, so read it with the default element id.
    let defaults = UiSettings::default();
    let page = shared::page_data::read_page_data(&defaults.page.data_element_id);
    let overrides = page
        .as_ref()
        .ok()
        .and_then(|p| p.as_ref())
        .and_then(|p| p.settings.as_ref());
    let (settings, settings_error) = match load_settings(overrides) {
        Ok(settings) => (settings, None),
        Err(e) => (defaults, Some(e)),
    };

    let level = settings
        .logging
        .level
        .parse::<log::Level>()
        .unwrap_or(log::Level::Debug);
    _ = console_log::init_with_level(level);

    if let Some(e) = settings_error {
        log::error!("Invalid settings, using defaults: {:#}", e);
    }

    let page = match page {
        Ok(Some(page)) => page,
        Ok(None) => {
            log::warn!("No page data found in #{}", settings.page.data_element_id);
            Default::default()
        }
        Err(e) => {
            log::error!("{}", e);
            return;
        }
    };

    leptos::mount::mount_to_body(move || view! { <App page=page settings=settings /> });
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}
