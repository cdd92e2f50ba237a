use crate::game::Stall;
use std::time::Duration;

/// Delays the rooms and the registry run on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerConfig {
    /// Pause before the turn passes once every die is used.
    pub settle: Duration,
    /// Pause before the turn passes when dice remain but cannot be played.
    pub stall: Duration,
    /// How long a room outlives its last closed connection.
    pub grace: Duration,
    /// Interval between sweeps of rooms nobody is connected to.
    pub sweep: Duration,
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            settle: Duration::from_millis(100),
            stall: Duration::from_millis(700),
            grace: Duration::from_secs(30),
            sweep: Duration::from_secs(600),
        }
    }
}

impl TimerConfig {
    /// No observation delays and no grace window.
    pub fn instant() -> Self {
        Self {
            settle: Duration::ZERO,
            stall: Duration::ZERO,
            grace: Duration::ZERO,
            ..Self::default()
        }
    }
    pub fn delay(&self, stall: Stall) -> Duration {
        match stall {
            Stall::Exhausted => self.settle,
            Stall::Blocked => self.stall,
        }
    }
}
