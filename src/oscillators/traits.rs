//! Core trait definition for tick-driven channels.

/// Common interface for anything advanced by the tick scheduler.
///
/// The scheduler calls `tick()` exactly once per timer fire, on every
/// registered channel, in a fixed order. Implementations must do constant
/// work per call: `tick()` runs in interrupt context and every cycle it
/// spends is jitter budget taken from all channels.
pub trait Clocked {
    /// Prepares the channel's output and establishes a defined initial level.
    ///
    /// Called once, before the first `tick()`.
    fn begin(&mut self);

    /// Advances the channel by one tick.
    fn tick(&mut self);
}
