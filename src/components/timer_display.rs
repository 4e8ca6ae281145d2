//! Timer Display Component
//!
//! `MM:SS` clock with the urgent style and the time's-up notice.

use leptos::prelude::*;

use crate::store::use_widget_store;
use crate::widget::TimerWidgetStoreFields;

#[component]
pub fn TimerDisplay() -> impl IntoView {
    let store = use_widget_store();

    // Urgent is display-only: last minute turns red
    let clock_class = move || {
        if store.countdown().read().is_urgent() {
            "clock urgent"
        } else {
            "clock"
        }
    };

    view! {
        <div class="timer-display">
            <div class=clock_class>{move || store.countdown().read().display()}</div>
            <Show when=move || store.countdown().read().is_expired()>
                <div class="times-up">
                    <p class="times-up-title">"Time's up!"</p>
                    <p>"Take a break or move to the next task."</p>
                </div>
            </Show>
        </div>
    }
}
