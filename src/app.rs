//! Task Timer App
//!
//! Single card: header with current task, countdown panel, task checklist.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{CurrentTaskBanner, TaskChecklist, TimerPanel};
use crate::widget::TimerWidget;

#[component]
pub fn App() -> impl IntoView {
    // All widget state lives in one store, provided to every child
    let store = Store::new(TimerWidget::new());
    provide_context(store);

    view! {
        <div class="app-layout">
            <main class="timer-card">
                <header class="timer-header">
                    <h1>"⏱ 20-Minute Task Timer"</h1>
                    <CurrentTaskBanner />
                </header>

                <TimerPanel />

                <TaskChecklist />
            </main>
        </div>
    }
}
