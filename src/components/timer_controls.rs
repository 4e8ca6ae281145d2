//! Timer Controls Component
//!
//! Start/Pause toggle and Reset.

use leptos::prelude::*;

use crate::store::{store_reset, store_toggle_running, use_widget_store};
use crate::widget::TimerWidgetStoreFields;

/// Start/Pause is disabled once the countdown hits zero; Reset never is
#[component]
pub fn TimerControls() -> impl IntoView {
    let store = use_widget_store();
    let is_running = move || store.countdown().read().is_running();
    let can_start = move || store.countdown().read().can_start();

    view! {
        <div class="timer-controls">
            <button
                class=move || if is_running() { "control-btn pause" } else { "control-btn start" }
                disabled=move || !can_start()
                on:click=move |_| store_toggle_running(&store)
            >
                {move || if is_running() { "⏸ Pause" } else { "▶ Start" }}
            </button>
            <button class="control-btn reset" on:click=move |_| store_reset(&store)>
                "↺ Reset"
            </button>
        </div>
    }
}
