//! Task Checklist
//!
//! Fixed task labels with per-label completion and a single selection.

use std::collections::HashMap;

use crate::config::TASKS;

/// Checklist state. Completion and selection are independent.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskList {
    tasks: &'static [&'static str],
    /// Populated on first toggle; a missing key means not completed
    completed: HashMap<String, bool>,
    current: Option<String>,
}

impl TaskList {
    pub fn new() -> Self {
        Self::with_tasks(TASKS)
    }

    pub fn with_tasks(tasks: &'static [&'static str]) -> Self {
        Self {
            tasks,
            completed: HashMap::new(),
            current: None,
        }
    }

    pub fn tasks(&self) -> &'static [&'static str] {
        self.tasks
    }

    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    pub fn contains(&self, label: &str) -> bool {
        self.tasks.contains(&label)
    }

    pub fn is_selected(&self, label: &str) -> bool {
        self.current.as_deref() == Some(label)
    }

    pub fn is_completed(&self, label: &str) -> bool {
        self.completed.get(label).copied().unwrap_or(false)
    }

    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|label| self.is_completed(label)).count()
    }

    /// Make `label` the current task. Does not touch the countdown; the
    /// widget resets that alongside.
    pub fn select(&mut self, label: &str) {
        if !self.contains(label) {
            log::warn!("[TASKS] selecting unknown task {:?}", label);
        }
        self.current = Some(label.to_string());
    }

    /// Flip completion for `label`, returning the new state
    pub fn toggle_completion(&mut self, label: &str) -> bool {
        if !self.contains(label) {
            log::warn!("[TASKS] toggling unknown task {:?}", label);
        }
        let done = self.completed.entry(label.to_string()).or_insert(false);
        *done = !*done;
        *done
    }
}

impl Default for TaskList {
    fn default() -> Self {
        Self::new()
    }
}
