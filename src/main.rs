//! Task List Frontend Entry Point

mod app;
mod components;
mod config;
mod context;
mod store;

use app::App;
use config::{AppConfig, EMBEDDED_CONFIG};
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let loaded = AppConfig::from_json(EMBEDDED_CONFIG);
    let config = loaded.as_ref().cloned().unwrap_or_default();

    match rolling_logger::init_logger("Tasklist", config.logger_options()) {
        Ok(logs) => {
            // Replay the retained lines ahead of the panic message
            std::panic::set_hook(Box::new(move |info| {
                web_sys::console::error_1(&format!("Recent log:\n{}", logs.dump()).into());
                console_error_panic_hook::hook(info);
            }));
        }
        Err(e) => web_sys::console::error_1(&format!("Failed to init logger: {}", e).into()),
    }
    if let Err(e) = loaded {
        rolling_logger::error(&format!("Falling back to default config: {}", e));
    }

    rolling_logger::info("Mounting app");
    mount_to_body(move || view! { <App config=config /> });
}
