use std::time::{Duration, Instant};

/// Gate-style rate limiter: at most one admitted call per interval,
/// intermediate calls are dropped rather than deferred.
#[derive(Debug, Clone, Copy)]
pub struct Throttle {
    interval: Duration,
    open_at: Option<Instant>,
}

impl Throttle {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            open_at: None,
        }
    }

    /// True if the call passes the gate. Time is an argument so callers
    /// (and tests) own the clock.
    pub fn admit(&mut self, now: Instant) -> bool {
        if let Some(open_at) = self.open_at {
            if now < open_at {
                return false;
            }
        }

        self.open_at = Some(now + self.interval);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_call_is_admitted() {
        let mut throttle = Throttle::new(Duration::from_millis(50));
        assert!(throttle.admit(Instant::now()));
    }

    #[test]
    fn calls_inside_the_interval_are_dropped() {
        let mut throttle = Throttle::new(Duration::from_millis(50));
        let t0 = Instant::now();

        assert!(throttle.admit(t0));
        assert!(!throttle.admit(t0 + Duration::from_millis(10)));
        assert!(!throttle.admit(t0 + Duration::from_millis(49)));
    }

    #[test]
    fn gate_reopens_after_the_interval() {
        let mut throttle = Throttle::new(Duration::from_millis(50));
        let t0 = Instant::now();

        assert!(throttle.admit(t0));
        assert!(throttle.admit(t0 + Duration::from_millis(50)));
    }

    #[test]
    fn dropped_calls_do_not_extend_the_gate() {
        let mut throttle = Throttle::new(Duration::from_millis(50));
        let t0 = Instant::now();

        assert!(throttle.admit(t0));
        assert!(!throttle.admit(t0 + Duration::from_millis(30)));
        assert!(throttle.admit(t0 + Duration::from_millis(50)));
    }

    #[test]
    fn zero_interval_admits_everything() {
        let mut throttle = Throttle::new(Duration::ZERO);
        let t0 = Instant::now();

        assert!(throttle.admit(t0));
        assert!(throttle.admit(t0));
    }
}
