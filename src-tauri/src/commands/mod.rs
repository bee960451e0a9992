//! Commands Layer
//!
//! Tauri command handlers that bridge frontend to backend services.

mod bridge_cmd;

pub use bridge_cmd::*;
