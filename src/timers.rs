//! Frame-driven timers
//!
//! egui has no callbacks for elapsed time, so timers are polled from the
//! frame loop with an explicit `Instant`. `next_deadline` tells the caller
//! when to request the next repaint.

use std::time::{Duration, Instant};

/// Delay between the last edit and the preview refresh.
pub const DEBOUNCE_DELAY: Duration = Duration::from_millis(300);

// ─────────────────────────────────────────────────────────────────────────────
// Debouncer
// ─────────────────────────────────────────────────────────────────────────────

/// Fires once, `delay` after the most recent `touch`.
#[derive(Debug, Clone)]
pub struct Debouncer {
    delay: Duration,
    deadline: Option<Instant>,
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEBOUNCE_DELAY)
    }
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    /// Restart the window from `now`.
    pub fn touch(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    /// Returns `true` exactly once when the window has elapsed.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Drop a pending firing.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.deadline
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Interval Timer
// ─────────────────────────────────────────────────────────────────────────────

/// Fires every `period`, measured from the last (re)schedule or firing.
#[derive(Debug, Clone)]
pub struct IntervalTimer {
    period: Duration,
    next: Instant,
}

impl IntervalTimer {
    pub fn new(period: Duration, now: Instant) -> Self {
        Self {
            period,
            next: now + period,
        }
    }

    /// Replace the period and restart the schedule from `now`.
    pub fn reschedule(&mut self, period: Duration, now: Instant) {
        self.period = period;
        self.next = now + period;
    }

    /// Returns `true` when a period has elapsed. Missed periods collapse into
    /// one firing.
    pub fn poll(&mut self, now: Instant) -> bool {
        if now < self.next {
            return false;
        }
        self.next = now + self.period;
        true
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn next_deadline(&self) -> Instant {
        self.next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debouncer_fires_once_after_delay() {
        let start = Instant::now();
        let mut debounce = Debouncer::default();
        assert!(!debounce.poll(start));

        debounce.touch(start);
        assert!(!debounce.poll(start + Duration::from_millis(299)));
        assert!(debounce.poll(start + Duration::from_millis(300)));
        assert!(!debounce.poll(start + Duration::from_millis(900)));
    }

    #[test]
    fn test_debouncer_touch_resets_deadline() {
        let start = Instant::now();
        let mut debounce = Debouncer::default();
        debounce.touch(start);
        debounce.touch(start + Duration::from_millis(200));

        assert!(!debounce.poll(start + Duration::from_millis(350)));
        assert!(debounce.poll(start + Duration::from_millis(500)));
    }

    #[test]
    fn test_debouncer_cancel() {
        let start = Instant::now();
        let mut debounce = Debouncer::new(Duration::from_millis(10));
        debounce.touch(start);
        assert!(debounce.next_deadline().is_some());
        debounce.cancel();
        assert!(!debounce.poll(start + Duration::from_secs(1)));
        assert_eq!(debounce.next_deadline(), None);
    }

    #[test]
    fn test_interval_timer_fires_each_period() {
        let start = Instant::now();
        let mut timer = IntervalTimer::new(Duration::from_secs(5), start);
        assert!(!timer.poll(start + Duration::from_secs(4)));
        assert!(timer.poll(start + Duration::from_secs(5)));
        assert!(!timer.poll(start + Duration::from_secs(6)));
        assert!(timer.poll(start + Duration::from_secs(10)));
    }

    #[test]
    fn test_interval_timer_collapses_missed_periods() {
        let start = Instant::now();
        let mut timer = IntervalTimer::new(Duration::from_secs(1), start);
        assert!(timer.poll(start + Duration::from_secs(30)));
        assert!(!timer.poll(start + Duration::from_millis(30_500)));
    }

    #[test]
    fn test_interval_timer_reschedule() {
        let start = Instant::now();
        let mut timer = IntervalTimer::new(Duration::from_secs(5), start);
        timer.reschedule(Duration::from_secs(60), start + Duration::from_secs(4));

        assert_eq!(timer.period(), Duration::from_secs(60));
        assert!(!timer.poll(start + Duration::from_secs(10)));
        assert!(timer.poll(start + Duration::from_secs(64)));
    }
}
