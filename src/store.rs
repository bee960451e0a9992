//! UI State Store
//!
//! What the rendering layer reacts to. Tasks themselves live in the bridge
//! view-model; the store only carries the revision that tells components
//! to re-read it.

use leptos::prelude::*;
use reactive_stores::Store;
use todo_bridge::Phase;

#[derive(Clone, Debug, Default, Store)]
pub struct UiState {
    /// Revision of the last applied snapshot
    pub revision: u64,
    /// Bridge lifecycle, mirrored for rendering
    pub phase: Phase,
    /// Last rejected push, cleared by the next good one
    pub last_error: Option<String>,
}

/// Type alias for the store
pub type UiStore = Store<UiState>;

/// Get the UI store from context
pub fn use_ui_store() -> UiStore {
    expect_context::<UiStore>()
}
