//! Countdown timer for a quiz session.

/// Default time budget for a quiz, in seconds.
pub const TIME_BUDGET_SECS: u64 = 900;

/// Remaining time below this is rendered as a warning.
pub const WARNING_SECS: u64 = 180;

/// Remaining time below this is rendered as critical (blinking).
pub const CRITICAL_SECS: u64 = 60;

/// Visual urgency of the remaining-time display. Cosmetic only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimePressure {
    Normal,
    Warning,
    Critical,
}

/// A second-granularity countdown. Ticked externally once per second;
/// stops itself on expiry so repeated ticks cannot fire twice.
#[derive(Debug, Clone)]
pub struct QuizTimer {
    remaining: u64,
    stopped: bool,
}

impl QuizTimer {
    pub fn new(budget_secs: u64) -> Self {
        Self {
            remaining: budget_secs,
            stopped: false,
        }
    }

    /// Decrement by one second. Returns true exactly once, on the tick
    /// that reaches zero.
    pub fn tick(&mut self) -> bool {
        if self.stopped {
            return false;
        }
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.stopped = true;
            return true;
        }
        false
    }

    /// Cancel the countdown. Used when submission happens first.
    pub fn stop(&mut self) {
        self.stopped = true;
    }

    pub fn remaining_secs(&self) -> u64 {
        self.remaining
    }

    /// Remaining time formatted as `M:SS`.
    pub fn display(&self) -> String {
        format!("{}:{:02}", self.remaining / 60, self.remaining % 60)
    }

    pub fn pressure(&self) -> TimePressure {
        if self.remaining < CRITICAL_SECS {
            TimePressure::Critical
        } else if self.remaining < WARNING_SECS {
            TimePressure::Warning
        } else {
            TimePressure::Normal
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_minutes_and_seconds() {
        assert_eq!(QuizTimer::new(900).display(), "15:00");
        assert_eq!(QuizTimer::new(65).display(), "1:05");
        assert_eq!(QuizTimer::new(9).display(), "0:09");
        assert_eq!(QuizTimer::new(0).display(), "0:00");
    }

    #[test]
    fn pressure_thresholds() {
        assert_eq!(QuizTimer::new(180).pressure(), TimePressure::Normal);
        assert_eq!(QuizTimer::new(179).pressure(), TimePressure::Warning);
        assert_eq!(QuizTimer::new(60).pressure(), TimePressure::Warning);
        assert_eq!(QuizTimer::new(59).pressure(), TimePressure::Critical);
    }

    #[test]
    fn expires_exactly_once() {
        let mut timer = QuizTimer::new(2);
        assert!(!timer.tick());
        assert!(timer.tick());
        assert!(!timer.tick());
        assert!(!timer.tick());
        assert_eq!(timer.remaining_secs(), 0);
    }

    #[test]
    fn stopped_timer_no_longer_ticks() {
        let mut timer = QuizTimer::new(10);
        timer.stop();
        assert!(!timer.tick());
        assert_eq!(timer.remaining_secs(), 10);
    }
}
