//! Snapshot Listener
//!
//! Subscribes to the host's snapshot event and feeds each payload into the
//! sink.

use todo_bridge::{ViewStateSink, SNAPSHOT_EVENT};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = ["window", "__TAURI__", "event"])]
    async fn listen(event: &str, handler: &Closure<dyn FnMut(JsValue)>) -> Result<JsValue, JsValue>;
}

fn js_error(value: JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

fn event_payload(event: &JsValue) -> Result<serde_json::Value, String> {
    let payload = js_sys::Reflect::get(event, &JsValue::from_str("payload")).map_err(js_error)?;
    serde_wasm_bindgen::from_value(payload).map_err(|e| e.to_string())
}

/// Start applying pushed snapshots to `sink`.
///
/// `on_applied` gets the new revision, or the reason a push was rejected.
/// The listener stays registered for the life of the page.
pub async fn listen_snapshots<F>(sink: ViewStateSink, on_applied: F) -> Result<(), String>
where
    F: Fn(Result<u64, String>) + 'static,
{
    let handler = Closure::<dyn FnMut(JsValue)>::new(move |event: JsValue| {
        let result = event_payload(&event)
            .and_then(|value| sink.apply_value(value).map_err(|e| e.to_string()));
        on_applied(result);
    });

    listen(SNAPSHOT_EVENT, &handler).await.map_err(js_error)?;
    handler.forget();
    Ok(())
}
