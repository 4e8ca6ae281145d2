//! Tick Scheduling
//!
//! Owns the repeating one-second interval. The interval exists only while the
//! countdown runs; dropping the handle cancels it.

use gloo_timers::callback::Interval;

/// Something that can fire a callback on a fixed period.
///
/// Dropping the returned handle must stop the callback.
pub trait Scheduler {
    type Handle;

    fn every(&self, period_ms: u32, callback: Box<dyn FnMut()>) -> Self::Handle;
}

/// `setInterval` via gloo-timers
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    type Handle = Interval;

    fn every(&self, period_ms: u32, callback: Box<dyn FnMut()>) -> Interval {
        Interval::new(period_ms, callback)
    }
}

/// At most one live interval, armed and disarmed to follow the running flag
pub struct Ticker<S: Scheduler = BrowserScheduler> {
    scheduler: S,
    period_ms: u32,
    handle: Option<S::Handle>,
}

impl<S: Scheduler> Ticker<S> {
    pub fn new(scheduler: S, period_ms: u32) -> Self {
        Self {
            scheduler,
            period_ms,
            handle: None,
        }
    }

    pub fn is_armed(&self) -> bool {
        self.handle.is_some()
    }

    /// Arm when `running` and not yet armed, disarm when not `running`.
    /// Calling again with the same flag is a no-op.
    pub fn sync(&mut self, running: bool, on_tick: impl FnMut() + 'static) {
        match (running, self.is_armed()) {
            (true, false) => {
                log::debug!("[TICKER] arming {}ms interval", self.period_ms);
                self.handle = Some(self.scheduler.every(self.period_ms, Box::new(on_tick)));
            }
            (false, true) => self.disarm(),
            _ => {}
        }
    }

    pub fn disarm(&mut self) {
        if self.handle.take().is_some() {
            log::debug!("[TICKER] interval cancelled");
        }
    }
}
