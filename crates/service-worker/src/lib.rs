use asset_cache::{Manifest, StaticAssetCache, WebPlatform};
use console_error_panic_hook::set_once as set_panic_hook;
use wasm_bindgen::{prelude::wasm_bindgen, JsValue};
use wasm_bindgen_futures::{future_to_promise, JsFuture};
use web_sys::{
    console::{error_1, log_1},
    js_sys::Promise,
    FetchEvent, Request, Response, ServiceWorkerGlobalScope,
};

use crate::utils::tracing::configure_tracing_once as configure_tracing;

mod utils;

macro_rules! console_log {
    ($($t:tt)*) => (log_1(&JsValue::from(format_args!($($t)*).to_string())))
}

macro_rules! console_error {
    ($($t:tt)*) => (error_1(&JsValue::from(format_args!($($t)*).to_string())))
}

fn worker(sw: ServiceWorkerGlobalScope) -> StaticAssetCache<WebPlatform> {
    StaticAssetCache::new(WebPlatform::new(sw), Manifest::default())
}

async fn install(sw: ServiceWorkerGlobalScope) -> Result<JsValue, JsValue> {
    let worker = worker(sw);
    console_log!("Installing into cache {}", worker.cache_name());

    worker.handle_install().await.map_err(|e| {
        let message = format!("Install failed: {e}");
        console_error!("{message}");
        JsValue::from(message)
    })?;

    Ok(JsValue::undefined())
}

#[wasm_bindgen]
pub fn worker_install(sw: ServiceWorkerGlobalScope) -> Result<Promise, JsValue> {
    set_panic_hook();
    configure_tracing();

    Ok(future_to_promise(install(sw)))
}

async fn activate(sw: ServiceWorkerGlobalScope) -> Result<JsValue, JsValue> {
    // Claim the clients so already open pages are controlled without a reload
    JsFuture::from(sw.clients().claim()).await?;

    Ok(JsValue::undefined())
}

#[wasm_bindgen]
pub fn worker_activate(sw: ServiceWorkerGlobalScope) -> Promise {
    set_panic_hook();
    configure_tracing();

    future_to_promise(activate(sw))
}

async fn fetch(sw: ServiceWorkerGlobalScope, request: Request) -> Result<JsValue, JsValue> {
    let response: Response = worker(sw).handle_fetch(&request).await.map_err(|e| {
        console_error!("Fetch failed for {}: {e}", request.url());
        JsValue::from(e)
    })?;

    Ok(JsValue::from(&response))
}

#[wasm_bindgen]
pub fn worker_fetch(sw: ServiceWorkerGlobalScope, event: FetchEvent) -> Result<(), JsValue> {
    set_panic_hook();
    configure_tracing();

    let response = future_to_promise(fetch(sw, event.request()));
    event.respond_with(&response)?;

    Ok(())
}
