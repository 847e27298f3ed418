//! Repeating playback timer with an explicit stop.
//!
//! The timer does not run on its own thread. The UI loop asks [`PlaybackTimer::is_due`]
//! every frame and re-arms it after each tick, so time is always passed in.

use std::time::{Duration, Instant};

#[derive(Debug, Default)]
pub struct PlaybackTimer {
    next_due: Option<Instant>,
}

impl PlaybackTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm the timer so the first tick is due `interval` after `now`.
    pub fn start(&mut self, now: Instant, interval: Duration) {
        self.next_due = Some(now + interval);
    }

    /// Disarm. No tick is due after this returns.
    pub fn stop(&mut self) {
        self.next_due = None;
    }

    pub fn is_running(&self) -> bool {
        self.next_due.is_some()
    }

    pub fn is_due(&self, now: Instant) -> bool {
        self.next_due.is_some_and(|due| now >= due)
    }

    /// Schedule the next tick `interval` after `now`. Ignored while stopped.
    pub fn rearm(&mut self, now: Instant, interval: Duration) {
        if self.next_due.is_some() {
            self.next_due = Some(now + interval);
        }
    }

    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.next_due.map(|due| due.saturating_duration_since(now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_due_after_interval() {
        let t0 = Instant::now();
        let mut timer = PlaybackTimer::new();
        timer.start(t0, Duration::from_millis(100));

        assert!(!timer.is_due(t0));
        assert!(!timer.is_due(t0 + Duration::from_millis(99)));
        assert!(timer.is_due(t0 + Duration::from_millis(100)));
        assert_eq!(
            timer.time_until_due(t0 + Duration::from_millis(40)),
            Some(Duration::from_millis(60))
        );
    }

    #[test]
    fn test_stop_is_immediate() {
        let t0 = Instant::now();
        let mut timer = PlaybackTimer::new();
        timer.start(t0, Duration::from_millis(10));
        timer.stop();

        assert!(!timer.is_running());
        assert!(!timer.is_due(t0 + Duration::from_secs(5)));
        assert_eq!(timer.time_until_due(t0), None);
    }

    #[test]
    fn test_rearm_ignored_when_stopped() {
        let t0 = Instant::now();
        let mut timer = PlaybackTimer::new();
        timer.rearm(t0, Duration::from_millis(10));
        assert!(!timer.is_running());

        timer.start(t0, Duration::from_millis(10));
        timer.rearm(t0 + Duration::from_millis(10), Duration::from_millis(50));
        assert!(!timer.is_due(t0 + Duration::from_millis(59)));
        assert!(timer.is_due(t0 + Duration::from_millis(60)));
    }
}
