//! Current Task Banner Component

use leptos::prelude::*;

use crate::store::use_widget_store;
use crate::widget::TimerWidgetStoreFields;

/// Shows the selected task; hidden while nothing is selected
#[component]
pub fn CurrentTaskBanner() -> impl IntoView {
    let store = use_widget_store();
    let current = move || store.tasks().read().current().map(str::to_string);

    view! {
        <Show when=move || current().is_some()>
            <div class="current-task">
                <p class="current-task-label">"Current Task:"</p>
                <p class="current-task-name">{move || current().unwrap_or_default()}</p>
            </div>
        </Show>
    }
}
