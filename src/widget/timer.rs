//! Deferred-close timer

use std::time::{Duration, Instant};

/// Default grace period between losing focus and closing the dropdown
pub const DEFAULT_GRACE_DELAY: Duration = Duration::from_millis(500);

/// A single cancellable deadline
///
/// Arming an armed timer replaces its deadline rather than stacking a
/// second one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeferredClose {
    delay: Duration,
    deadline: Option<Instant>,
}

impl Default for DeferredClose {
    fn default() -> Self {
        Self::new(DEFAULT_GRACE_DELAY)
    }
}

impl DeferredClose {
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    #[must_use]
    pub const fn delay(&self) -> Duration {
        self.delay
    }

    #[must_use]
    pub const fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    #[must_use]
    pub const fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// Arm (or re-arm) the timer to fire `delay` after `now`
    pub fn arm(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    /// Disarm the timer, returning whether it was armed
    pub const fn cancel(&mut self) -> bool {
        self.deadline.take().is_some()
    }

    /// Disarm and report `true` if the deadline has passed at `now`
    pub fn fire_if_due(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Time left until the deadline, if armed
    #[must_use]
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_after_delay() {
        let start = Instant::now();
        let mut timer = DeferredClose::new(Duration::from_millis(500));
        timer.arm(start);

        assert!(!timer.fire_if_due(start + Duration::from_millis(499)));
        assert!(timer.is_armed());
        assert!(timer.fire_if_due(start + Duration::from_millis(500)));
        assert!(!timer.is_armed());
        // Fires once
        assert!(!timer.fire_if_due(start + Duration::from_secs(2)));
    }

    #[test]
    fn test_rearm_replaces_deadline() {
        let start = Instant::now();
        let mut timer = DeferredClose::new(Duration::from_millis(500));
        timer.arm(start);
        timer.arm(start + Duration::from_millis(300));

        assert_eq!(timer.deadline(), Some(start + Duration::from_millis(800)));
        assert!(!timer.fire_if_due(start + Duration::from_millis(600)));
        assert!(timer.fire_if_due(start + Duration::from_millis(800)));
    }

    #[test]
    fn test_cancel() {
        let start = Instant::now();
        let mut timer = DeferredClose::default();
        assert!(!timer.cancel());

        timer.arm(start);
        assert!(timer.cancel());
        assert!(!timer.fire_if_due(start + Duration::from_secs(5)));
        assert_eq!(timer.remaining(start), None);
    }

    #[test]
    fn test_remaining() {
        let start = Instant::now();
        let mut timer = DeferredClose::new(Duration::from_millis(500));
        timer.arm(start);

        assert_eq!(
            timer.remaining(start + Duration::from_millis(200)),
            Some(Duration::from_millis(300))
        );
        assert_eq!(
            timer.remaining(start + Duration::from_secs(1)),
            Some(Duration::ZERO)
        );
    }
}
