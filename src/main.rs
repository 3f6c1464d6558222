//! BlackWilbur Storefront - Main Entry Point
//!
//! Serves the storefront with server-side rendering when built with the
//! `server` feature, otherwise launches the client.
//! Uses dioxus::serve() pattern for dx serve compatibility.

use blackwilbur_storefront::app::App;

// Server entry point - NO #[tokio::main], dioxus::serve() creates its own runtime
#[cfg(feature = "server")]
fn main() {
    use anyhow::Context;
    use blackwilbur_storefront::config::HeaderConfig;

    // Initialize tracing BEFORE dioxus::serve
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("Starting BlackWilbur storefront...");

    dioxus::serve(|| async move {
        // Fail loudly at startup instead of silently serving defaults
        let config = HeaderConfig::from_json(include_str!("../assets/header.json"))
            .context("embedded assets/header.json is invalid")?;
        tracing::info!(
            categories = config.categories.len(),
            hide_threshold_px = config.hide_threshold_px,
            "Header config loaded"
        );

        Ok(dioxus::server::router(App))
    });
}

// WASM entry point (browser) - no server feature
#[cfg(all(not(feature = "server"), target_arch = "wasm32"))]
fn main() {
    web_sys::console::log_1(&"[WASM] BlackWilbur storefront - WASM initialized!".into());
    dioxus::launch(App);
}

// Native client (desktop) - no server feature, not WASM
#[cfg(all(not(feature = "server"), not(target_arch = "wasm32")))]
fn main() {
    dioxus::launch(App);
}
