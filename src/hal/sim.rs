//! Simulated pin and timer for tests and demos.

use super::{DigitalOutput, PeriodicTimer};

/// A simulated output line that records everything written to it.
///
/// Tracks the current level, per-level write counts, and edge counts, which is
/// enough to measure a square wave's frequency and duty cycle from a simulated
/// run without any hardware.
///
/// # Examples
///
/// ```
/// use drumnoise::{DigitalOutput, SimPin};
///
/// let mut pin = SimPin::new();
/// pin.set_output();
/// pin.write(true);
/// pin.write(true);
/// pin.write(false);
/// assert_eq!(pin.high_writes(), 2);
/// assert_eq!(pin.falling_edges(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SimPin {
    configured: bool,
    level: Option<bool>,
    high_writes: u32,
    low_writes: u32,
    rising_edges: u32,
    falling_edges: u32,
}

impl SimPin {
    /// Creates a new unconfigured pin with no recorded activity.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `set_output` has been called.
    pub fn is_configured(&self) -> bool {
        self.configured
    }

    /// Current level, or `None` if nothing has been written yet.
    pub fn level(&self) -> Option<bool> {
        self.level
    }

    /// Number of HIGH writes recorded.
    pub fn high_writes(&self) -> u32 {
        self.high_writes
    }

    /// Number of LOW writes recorded.
    pub fn low_writes(&self) -> u32 {
        self.low_writes
    }

    /// Total writes recorded, regardless of level.
    pub fn total_writes(&self) -> u32 {
        self.high_writes + self.low_writes
    }

    /// Number of LOW-to-HIGH transitions recorded.
    pub fn rising_edges(&self) -> u32 {
        self.rising_edges
    }

    /// Number of HIGH-to-LOW transitions recorded.
    pub fn falling_edges(&self) -> u32 {
        self.falling_edges
    }

    fn record(&mut self, bit: bool) {
        match (self.level, bit) {
            (Some(false), true) => self.rising_edges += 1,
            (Some(true), false) => self.falling_edges += 1,
            _ => {}
        }
        if bit {
            self.high_writes += 1;
        } else {
            self.low_writes += 1;
        }
        self.level = Some(bit);
    }
}

impl DigitalOutput for SimPin {
    fn set_output(&mut self) {
        self.configured = true;
    }

    fn set_high(&mut self) {
        self.record(true);
    }

    fn set_low(&mut self) {
        self.record(false);
    }
}

/// A simulated periodic timer.
///
/// Does not fire on its own; a test or demo drives the scheduler's `on_fire`
/// directly and this type just records the configure/start/clear traffic so
/// the scheduler's timer protocol can be asserted.
#[derive(Debug, Clone, Default)]
pub struct SimTimer {
    period_us: Option<u32>,
    running: bool,
    pending_clears: u32,
}

impl SimTimer {
    /// Creates a stopped, unconfigured timer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configured period in microseconds, if any.
    pub fn period_us(&self) -> Option<u32> {
        self.period_us
    }

    /// Whether `start` has been called.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Number of `clear_pending` calls, i.e. completed tick handlers.
    pub fn pending_clears(&self) -> u32 {
        self.pending_clears
    }
}

impl PeriodicTimer for SimTimer {
    fn configure(&mut self, period_us: u32) {
        self.period_us = Some(period_us);
    }

    fn start(&mut self) {
        self.running = true;
    }

    fn clear_pending(&mut self) {
        self.pending_clears += 1;
    }
}
