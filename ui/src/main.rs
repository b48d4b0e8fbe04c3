//! Organization Auth Console Entry Point
//!
//! Initializes logging and mounts the Leptos app to the DOM.

use leptos::*;
use orgauth_ui::App;
use tracing_wasm::WASMLayerConfigBuilder;

fn main() {
    let config = WASMLayerConfigBuilder::default()
        .set_max_level(tracing::Level::DEBUG)
        .build();
    tracing_wasm::set_as_global_default_with_config(config);

    tracing::info!("Starting organization auth console");

    mount_to_body(|| view! { <App /> });
}
