//! Timer Widget State
//!
//! The one piece of state behind the panel: a countdown plus the checklist.
//! Wrapped in a `reactive_stores` store so components can subscribe to
//! either half independently.

use reactive_stores::Store;

use crate::tasks::TaskList;
use crate::timer::Countdown;

#[derive(Debug, Clone, Default, Store)]
pub struct TimerWidget {
    pub countdown: Countdown,
    pub tasks: TaskList,
}

impl TimerWidget {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select a task and put the countdown back to Idle
    pub fn select_task(&mut self, label: &str) {
        self.tasks.select(label);
        self.countdown.reset();
    }

    /// Flip completion; never touches the selection or countdown
    pub fn toggle_completion(&mut self, label: &str) -> bool {
        self.tasks.toggle_completion(label)
    }

    /// Start when idle or paused, pause when running
    pub fn toggle_running(&mut self) {
        if self.countdown.is_running() {
            self.countdown.pause();
        } else {
            self.countdown.start();
        }
    }
}
