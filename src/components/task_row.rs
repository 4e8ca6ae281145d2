//! Task Row Component
//!
//! One checklist row: completion toggle on the left, select action on the label.

use leptos::prelude::*;

use crate::store::{store_select_task, store_toggle_completion, use_widget_store};
use crate::widget::TimerWidgetStoreFields;

#[component]
pub fn TaskRow(label: &'static str) -> impl IntoView {
    let store = use_widget_store();
    let is_completed = move || store.tasks().read().is_completed(label);
    let is_selected = move || store.tasks().read().is_selected(label);

    let row_class = move || {
        let mut class = String::from("task-row");
        if is_selected() {
            class.push_str(" selected");
        }
        if is_completed() {
            class.push_str(" completed");
        }
        class
    };

    // Completed styling wins over selected
    let label_class = move || {
        if is_completed() {
            "task-label done"
        } else if is_selected() {
            "task-label current"
        } else {
            "task-label"
        }
    };

    view! {
        <div class=row_class>
            <button
                class=move || if is_completed() { "task-check checked" } else { "task-check" }
                title=move || if is_completed() { "Mark not done" } else { "Mark done" }
                on:click=move |_| store_toggle_completion(&store, label)
            >
                {move || if is_completed() { "✓" } else { "" }}
            </button>
            <button class=label_class on:click=move |_| store_select_task(&store, label)>
                {label}
            </button>
        </div>
    }
}
