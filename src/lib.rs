#![cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

mod carousel;
mod constants;
mod css;
mod dom;
mod events;
mod timer;

use carousel::CarouselSelectors;

/// Mount one carousel, logging absence as "not on this page".
fn mount_logged(document: &web_sys::Document, selectors: &CarouselSelectors) -> bool {
    match carousel::mount(document, selectors) {
        Ok(_) => true,
        Err(e) => {
            log::info!("[carousel] skipped: {}", e);
            false
        }
    }
}

/// Mount an additional carousel from JavaScript. Each call owns its own state.
#[wasm_bindgen]
pub fn mount_carousel(container_id: &str, prev_id: &str, next_id: &str, dots_id: &str) -> bool {
    let Some(document) = dom::window_document() else {
        log::warn!("[carousel] no document");
        return false;
    };
    let selectors = CarouselSelectors {
        container_id: container_id.to_string(),
        prev_id: prev_id.to_string(),
        next_id: next_id.to_string(),
        dots_id: dots_id.to_string(),
    };
    mount_logged(&document, &selectors)
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("landing-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web_sys::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    dom::dom_content_loaded(&document).await?;

    mount_logged(&document, &CarouselSelectors::default());
    Ok(())
}
