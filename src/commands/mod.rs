//! Tauri Bridge Bindings
//!
//! The view's side of the host channel: one fire-and-forget command and
//! one snapshot event listener.

mod snapshot;

use serde::Serialize;
use todo_bridge::{HostChannel, INVOKE_COMMAND};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::{spawn_local, JsFuture};

pub use snapshot::listen_snapshots;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = ["window", "__TAURI__", "core"])]
    fn invoke(cmd: &str, args: JsValue) -> Result<js_sys::Promise, JsValue>;
}

#[derive(Serialize)]
struct InvokeArgs<'a> {
    payload: &'a str,
}

/// Sends encoded commands to the Tauri host
#[derive(Debug, Clone, Copy, Default)]
pub struct TauriChannel;

impl HostChannel for TauriChannel {
    fn send(&self, payload: String) {
        let args = match serde_wasm_bindgen::to_value(&InvokeArgs { payload: &payload }) {
            Ok(args) => args,
            Err(e) => {
                web_sys::console::error_1(&format!("[BRIDGE] Could not wrap payload: {}", e).into());
                return;
            }
        };

        // Hand over now, only watch for the promise rejecting afterwards.
        match invoke(INVOKE_COMMAND, args) {
            Ok(promise) => spawn_local(async move {
                if let Err(e) = JsFuture::from(promise).await {
                    web_sys::console::error_2(&"[BRIDGE] Host rejected command:".into(), &e);
                }
            }),
            Err(e) => web_sys::console::error_2(&"[BRIDGE] Host channel unavailable:".into(), &e),
        }
    }
}
