//! Countdown State Machine
//!
//! Tick-driven 20-minute countdown. The widget owns one of these; a
//! `Ticker` calls `tick` once per second while it is running.

use crate::config::{COUNTDOWN_SECONDS, URGENT_THRESHOLD_SECONDS};

/// Observable phase of the countdown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Full time left, not running
    Idle,
    Running,
    /// Stopped part way through
    Paused,
    /// Reached zero
    Expired,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Idle => "idle",
            Phase::Running => "running",
            Phase::Paused => "paused",
            Phase::Expired => "expired",
        }
    }
}

/// Remaining time plus running flag.
///
/// `running` is never true while `time_left` is zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Countdown {
    time_left: u32,
    running: bool,
}

impl Countdown {
    pub fn new() -> Self {
        Self {
            time_left: COUNTDOWN_SECONDS,
            running: false,
        }
    }

    pub fn time_left(&self) -> u32 {
        self.time_left
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Starting is blocked once time is exhausted
    pub fn can_start(&self) -> bool {
        self.time_left > 0
    }

    pub fn is_expired(&self) -> bool {
        self.time_left == 0
    }

    pub fn is_urgent(&self) -> bool {
        self.time_left <= URGENT_THRESHOLD_SECONDS
    }

    /// Derived from `(time_left, running)`, so a start then pause with no
    /// tick in between reports `Idle` rather than `Paused` at 20:00. That is
    /// intentional: both show 20:00 and both allow start and reset.
    pub fn phase(&self) -> Phase {
        if self.running {
            Phase::Running
        } else if self.time_left == 0 {
            Phase::Expired
        } else if self.time_left == COUNTDOWN_SECONDS {
            Phase::Idle
        } else {
            Phase::Paused
        }
    }

    pub fn start(&mut self) {
        if !self.can_start() {
            log::debug!("[TIMER] start ignored, time exhausted");
            return;
        }
        self.running = true;
    }

    pub fn pause(&mut self) {
        self.running = false;
    }

    pub fn reset(&mut self) {
        self.running = false;
        self.time_left = COUNTDOWN_SECONDS;
    }

    /// One elapsed second. No-op unless running.
    pub fn tick(&mut self) {
        if !self.running || self.time_left == 0 {
            return;
        }
        self.time_left -= 1;
        if self.time_left == 0 {
            self.running = false;
            log::info!("[TIMER] time's up");
        }
    }

    /// Remaining time as `MM:SS`
    pub fn display(&self) -> String {
        format_clock(self.time_left)
    }
}

impl Default for Countdown {
    fn default() -> Self {
        Self::new()
    }
}

/// Format seconds as zero-padded `MM:SS`
pub fn format_clock(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn running_at(time_left: u32) -> Countdown {
        Countdown {
            time_left,
            running: true,
        }
    }

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(0), "00:00");
        assert_eq!(format_clock(1200), "20:00");
        assert_eq!(format_clock(61), "01:01");
        assert_eq!(format_clock(59), "00:59");
        assert_eq!(format_clock(600), "10:00");
    }

    #[test]
    fn test_new_is_idle() {
        let countdown = Countdown::new();
        assert_eq!(countdown.time_left(), 1200);
        assert!(!countdown.is_running());
        assert_eq!(countdown.phase(), Phase::Idle);
        assert_eq!(countdown.display(), "20:00");
    }

    #[test]
    fn test_start_pause_resume() {
        let mut countdown = Countdown::new();
        countdown.start();
        assert_eq!(countdown.phase(), Phase::Running);

        countdown.tick();
        countdown.tick();
        countdown.pause();
        assert_eq!(countdown.phase(), Phase::Paused);
        assert_eq!(countdown.time_left(), 1198);

        // Ticks while paused change nothing
        countdown.tick();
        assert_eq!(countdown.time_left(), 1198);

        countdown.start();
        countdown.tick();
        assert_eq!(countdown.time_left(), 1197);
    }

    #[test]
    fn test_tick_to_zero_expires() {
        let mut countdown = running_at(2);
        countdown.tick();
        assert_eq!(countdown.phase(), Phase::Running);
        countdown.tick();
        assert_eq!(countdown.time_left(), 0);
        assert!(!countdown.is_running());
        assert_eq!(countdown.phase(), Phase::Expired);

        countdown.tick();
        assert_eq!(countdown.time_left(), 0);
    }

    #[test]
    fn test_full_run_never_goes_negative() {
        let mut countdown = Countdown::new();
        countdown.start();
        let mut previous = countdown.time_left();
        for _ in 0..1300 {
            countdown.tick();
            assert!(countdown.time_left() <= previous);
            assert!(!countdown.is_running() || countdown.time_left() > 0);
            previous = countdown.time_left();
        }
        assert_eq!(countdown.time_left(), 0);
        assert!(!countdown.is_running());
        assert!(countdown.is_expired());
        assert!(!countdown.can_start());
    }

    #[test]
    fn test_start_blocked_when_expired() {
        let mut countdown = running_at(1);
        countdown.tick();
        countdown.start();
        assert!(!countdown.is_running());
        assert_eq!(countdown.phase(), Phase::Expired);
    }

    #[test]
    fn test_reset_from_every_phase() {
        let mut candidates = vec![Countdown::new(), running_at(300), running_at(1)];
        let mut paused = running_at(500);
        paused.pause();
        candidates.push(paused);
        let mut expired = running_at(1);
        expired.tick();
        candidates.push(expired);

        for mut countdown in candidates {
            countdown.reset();
            assert_eq!(countdown, Countdown::new());
            assert_eq!(countdown.phase(), Phase::Idle);
        }
    }

    #[test]
    fn test_pause_before_first_tick_reads_idle() {
        let mut countdown = Countdown::new();
        countdown.start();
        countdown.pause();
        assert_eq!(countdown.phase(), Phase::Idle);
        assert_eq!(countdown, Countdown::new());
        assert!(countdown.can_start());
    }

    #[test]
    fn test_urgent_threshold() {
        assert!(!running_at(61).is_urgent());
        assert!(running_at(60).is_urgent());
        assert!(Countdown { time_left: 0, running: false }.is_urgent());
    }
}
