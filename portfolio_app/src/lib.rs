use leptos::prelude::*;
use leptos::mount::mount_to_body;
use leptos_router::components::{Router, Routes, Route};
use leptos_router::path;
use wasm_bindgen::prelude::*;

mod components;
mod live;

use components::{HomePage, NotFound, PlatformRoute};
use portfolio_common::DashboardConfig;

const CONFIG_JSON: &str = include_str!("../dashboard.json");

#[wasm_bindgen(start)]
pub fn main() {
    let (config, config_error) = match DashboardConfig::from_json(CONFIG_JSON) {
        Ok(config) => (config, None),
        Err(e) => (DashboardConfig::default(), Some(e)),
    };
    _ = console_log::init_with_level(config.level().unwrap_or(log::Level::Info));
    console_error_panic_hook::set_once();
    if let Some(e) = config_error {
        log::error!("{}, falling back to defaults", e);
    }

    mount_to_body(move || view! { <App config/> });
}

#[component]
pub fn App(config: DashboardConfig) -> impl IntoView {
    provide_context(config);

    view! {
        <Router>
            <Routes fallback=|| view! { <NotFound/> }>
                <Route path=path!("/") view=HomePage />
                <Route path=path!("/:slug") view=PlatformRoute />
            </Routes>
        </Router>
    }
}
