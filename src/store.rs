//! Widget State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::widget::{TimerWidget, TimerWidgetStoreFields};

/// Type alias for the store
pub type WidgetStore = Store<TimerWidget>;

/// Get the widget store from context
pub fn use_widget_store() -> WidgetStore {
    expect_context::<WidgetStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Start when stopped, pause when running
pub fn store_toggle_running(store: &WidgetStore) {
    let mut widget = store.write();
    widget.toggle_running();
    log::info!(
        "[TIMER] {} at {}",
        if widget.countdown.is_running() { "started" } else { "paused" },
        widget.countdown.display()
    );
}

/// Reset the countdown to 20:00, stopped
pub fn store_reset(store: &WidgetStore) {
    store.countdown().write().reset();
    log::info!("[TIMER] reset");
}

/// Apply one elapsed second
pub fn store_tick(store: &WidgetStore) {
    store.countdown().write().tick();
}

/// Select a task, resetting the countdown
pub fn store_select_task(store: &WidgetStore, label: &str) {
    store.write().select_task(label);
    log::info!("[TASKS] selected {:?}", label);
}

/// Flip a task's completion flag
pub fn store_toggle_completion(store: &WidgetStore, label: &str) {
    let done = store.tasks().write().toggle_completion(label);
    log::info!("[TASKS] {:?} completed={}", label, done);
}
