//! Frame-driven timers.
//!
//! Time only moves when the owner calls `tick(dt)`, the same way the render
//! loop accumulates `dt` for its animations. Dropping the owner drops the timer.

use crate::state::AutoplayState;

/// Repeating timer used for auto-advance.
#[derive(Debug, Clone)]
pub struct Interval {
    period: f32,
    elapsed: f32,
    state: AutoplayState,
}

impl Interval {
    pub fn new(period: f32) -> Self {
        Self {
            period,
            elapsed: 0.0,
            state: AutoplayState::Stopped,
        }
    }

    pub fn state(&self) -> AutoplayState {
        self.state
    }

    pub fn start(&mut self) {
        self.elapsed = 0.0;
        self.state = AutoplayState::Running;
    }

    /// Clear and re-arm, so the next fire is a full period away.
    pub fn restart(&mut self) {
        if self.state != AutoplayState::Stopped {
            self.elapsed = 0.0;
        }
    }

    pub fn stop(&mut self) {
        self.elapsed = 0.0;
        self.state = AutoplayState::Stopped;
    }

    pub fn pause(&mut self) {
        if self.state == AutoplayState::Running {
            self.state = AutoplayState::Paused;
        }
    }

    pub fn resume(&mut self) {
        if self.state == AutoplayState::Paused {
            self.state = AutoplayState::Running;
        }
    }

    /// Advance by `dt` seconds and return how many periods elapsed.
    pub fn tick(&mut self, dt: f32) -> u32 {
        if self.state != AutoplayState::Running
            || !self.period.is_finite()
            || self.period <= 0.0
            || !dt.is_finite()
        {
            return 0;
        }
        self.elapsed += dt;
        if self.elapsed < self.period {
            return 0;
        }
        let fired = (self.elapsed / self.period).floor();
        self.elapsed %= self.period;
        fired as u32
    }
}

/// One-shot delay that is pushed back every time it is triggered again.
#[derive(Debug, Clone)]
pub struct Debounce {
    delay: f32,
    remaining: Option<f32>,
}

impl Debounce {
    pub fn new(delay: f32) -> Self {
        Self {
            delay,
            remaining: None,
        }
    }

    pub fn trigger(&mut self) {
        self.remaining = Some(self.delay);
    }

    pub fn cancel(&mut self) {
        self.remaining = None;
    }

    pub fn is_pending(&self) -> bool {
        self.remaining.is_some()
    }

    /// Returns true exactly once, on the tick where the delay runs out.
    pub fn tick(&mut self, dt: f32) -> bool {
        match self.remaining {
            Some(left) if left - dt <= 0.0 => {
                self.remaining = None;
                true
            }
            Some(left) => {
                self.remaining = Some(left - dt);
                false
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_fires_once_per_period() {
        let mut interval = Interval::new(5.0);
        interval.start();
        assert_eq!(interval.tick(4.0), 0);
        assert_eq!(interval.tick(1.0), 1);
        assert_eq!(interval.tick(2.5), 0);
        assert_eq!(interval.tick(10.0), 2);
    }

    #[test]
    fn test_tiny_period_returns_in_one_tick() {
        // elapsed -= period would not change elapsed at this scale
        let mut interval = Interval::new(1e-10);
        interval.start();
        let fired = interval.tick(1.0 / 60.0);
        assert!(fired > 1_000_000);
        assert!(interval.tick(0.0) <= 1);
    }

    #[test]
    fn test_non_finite_input_is_ignored() {
        let mut interval = Interval::new(f32::NAN);
        interval.start();
        assert_eq!(interval.tick(10.0), 0);

        let mut interval = Interval::new(1.0);
        interval.start();
        assert_eq!(interval.tick(f32::INFINITY), 0);
        assert_eq!(interval.tick(1.0), 1);
    }

    #[test]
    fn test_interval_stopped_never_fires() {
        let mut interval = Interval::new(1.0);
        assert_eq!(interval.state(), AutoplayState::Stopped);
        assert_eq!(interval.tick(100.0), 0);
    }

    #[test]
    fn test_restart_delays_next_fire() {
        let mut interval = Interval::new(5.0);
        interval.start();
        assert_eq!(interval.tick(4.5), 0);
        interval.restart();
        assert_eq!(interval.tick(4.5), 0);
        assert_eq!(interval.tick(0.5), 1);
    }

    #[test]
    fn test_restart_does_not_start_a_stopped_timer() {
        let mut interval = Interval::new(5.0);
        interval.restart();
        assert_eq!(interval.state(), AutoplayState::Stopped);
    }

    #[test]
    fn test_pause_freezes_time() {
        let mut interval = Interval::new(2.0);
        interval.start();
        interval.tick(1.5);
        interval.pause();
        assert_eq!(interval.tick(10.0), 0);
        interval.resume();
        assert_eq!(interval.tick(0.5), 1);
    }

    #[test]
    fn test_debounce_fires_after_quiet_period() {
        let mut debounce = Debounce::new(0.25);
        debounce.trigger();
        assert!(!debounce.tick(0.2));
        debounce.trigger();
        assert!(!debounce.tick(0.2));
        assert!(debounce.tick(0.1));
        assert!(!debounce.is_pending());
        assert!(!debounce.tick(1.0));
    }

    #[test]
    fn test_debounce_cancel() {
        let mut debounce = Debounce::new(0.25);
        debounce.trigger();
        debounce.cancel();
        assert!(!debounce.tick(1.0));
    }
}
