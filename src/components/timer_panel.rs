//! Timer Panel Component
//!
//! Clock and controls, plus ownership of the tick interval.

use leptos::prelude::*;

use crate::components::{TimerControls, TimerDisplay};
use crate::config::TICK_INTERVAL_MS;
use crate::store::{store_tick, use_widget_store};
use crate::ticker::{BrowserScheduler, Ticker};
use crate::widget::TimerWidgetStoreFields;

/// Countdown panel. The interval is armed only while the countdown runs
/// and is cancelled on every way out, including unmount.
#[component]
pub fn TimerPanel() -> impl IntoView {
    let store = use_widget_store();
    let ticker = StoredValue::new_local(Ticker::new(BrowserScheduler, TICK_INTERVAL_MS));

    let is_running = Memo::new(move |_| store.countdown().read().is_running());

    Effect::new(move |_| {
        let running = is_running.get();
        ticker.update_value(|t| t.sync(running, move || store_tick(&store)));
    });

    on_cleanup(move || {
        ticker.try_update_value(|t| t.disarm());
    });

    let panel_class = move || format!("timer-panel {}", store.countdown().read().phase().as_str());

    view! {
        <section class=panel_class>
            <TimerDisplay />
            <TimerControls />
        </section>
    }
}
