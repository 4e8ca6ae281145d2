//! Task Checklist Component
//!
//! Scrollable list of the fixed tasks with a completion count.

use leptos::prelude::*;

use crate::components::TaskRow;
use crate::store::use_widget_store;
use crate::widget::TimerWidgetStoreFields;

#[component]
pub fn TaskChecklist() -> impl IntoView {
    let store = use_widget_store();
    // The label list is fixed, so read it once without tracking
    let labels = store.tasks().read_untracked().tasks();

    view! {
        <div class="task-checklist">
            <p class="task-checklist-title">"Tasks:"</p>
            <div class="task-rows">
                {labels.iter().map(|label| view! { <TaskRow label=*label /> }).collect_view()}
            </div>
            <p class="task-count">
                {move || format!("{} of {} completed", store.tasks().read().completed_count(), labels.len())}
            </p>
        </div>
    }
}
