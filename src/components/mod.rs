//! UI Components
//!
//! Leptos components for the timer panel and task checklist.

mod timer_panel;
mod timer_display;
mod timer_controls;
mod current_task;
mod task_checklist;
mod task_row;

pub use timer_panel::TimerPanel;
pub use timer_display::TimerDisplay;
pub use timer_controls::TimerControls;
pub use current_task::CurrentTaskBanner;
pub use task_checklist::TaskChecklist;
pub use task_row::TaskRow;
