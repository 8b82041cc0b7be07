use std::time::{Duration, Instant};

/// Fixed-interval deadline driven from the egui update loop.
#[derive(Debug, Clone, Copy)]
pub struct RefreshTimer {
    interval: Duration,
    next_due: Instant,
}

impl RefreshTimer {
    /// First tick is due one `interval` after `start`; the caller computes
    /// the initial value itself.
    pub fn new(interval: Duration, start: Instant) -> Self {
        Self {
            interval,
            next_due: start + interval,
        }
    }

    /// True once per elapsed interval. Missed intervals collapse into one
    /// tick and the next deadline is measured from `now`.
    pub fn poll(&mut self, now: Instant) -> bool {
        if now < self.next_due {
            return false;
        }
        self.next_due = now + self.interval;
        true
    }

    pub fn time_until_due(&self, now: Instant) -> Duration {
        self.next_due.saturating_duration_since(now)
    }
}

/// An action that should run exactly once, no earlier than a deadline.
#[derive(Debug, Clone, Copy)]
pub struct DeferredOnce {
    due: Instant,
    fired: bool,
}

impl DeferredOnce {
    pub fn new(delay: Duration, start: Instant) -> Self {
        Self {
            due: start + delay,
            fired: false,
        }
    }

    /// True exactly once, on the first poll at or after the deadline.
    pub fn poll(&mut self, now: Instant) -> bool {
        if self.fired || now < self.due {
            return false;
        }
        self.fired = true;
        true
    }

    /// Time left before the action may fire, or `None` once it has.
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        (!self.fired).then(|| self.due.saturating_duration_since(now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINUTE: Duration = Duration::from_secs(60);

    #[test]
    fn refresh_does_not_fire_early() {
        let start = Instant::now();
        let mut timer = RefreshTimer::new(MINUTE, start);
        assert!(!timer.poll(start));
        assert!(!timer.poll(start + Duration::from_secs(59)));
        assert_eq!(
            timer.time_until_due(start + Duration::from_secs(20)),
            Duration::from_secs(40)
        );
    }

    #[test]
    fn refresh_fires_each_interval() {
        let start = Instant::now();
        let mut timer = RefreshTimer::new(MINUTE, start);
        assert!(timer.poll(start + MINUTE));
        assert!(!timer.poll(start + MINUTE + Duration::from_secs(30)));
        assert!(timer.poll(start + MINUTE * 2));
    }

    #[test]
    fn missed_intervals_collapse() {
        let start = Instant::now();
        let mut timer = RefreshTimer::new(MINUTE, start);
        let late = start + MINUTE * 10;
        assert!(timer.poll(late));
        assert!(!timer.poll(late));
        assert_eq!(timer.time_until_due(late), MINUTE);
    }

    #[test]
    fn deferred_fires_once() {
        let start = Instant::now();
        let delay = Duration::from_millis(100);
        let mut action = DeferredOnce::new(delay, start);

        assert!(!action.poll(start));
        assert_eq!(action.time_until_due(start), Some(delay));

        assert!(action.poll(start + delay));
        assert!(!action.poll(start + delay * 5));
        assert_eq!(action.time_until_due(start + delay * 5), None);
    }
}
