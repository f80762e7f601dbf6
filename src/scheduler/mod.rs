//! Fixed-period tick scheduler.
//!
//! The scheduler owns the hardware timer and a fixed set of tick-driven
//! channels. Every timer fire advances every channel exactly once, in array
//! order, then clears the timer's pending-fire flag. The channel set is fixed
//! at construction: no registration changes once the timer is running, no
//! allocation, no locking.

use crate::hal::PeriodicTimer;
use crate::oscillators::Clocked;

/// Advances a fixed array of channels on every timer fire.
///
/// `TICK_US` is the tick period in microseconds, matching the const parameter
/// of the registered [`SquareOscillator`](crate::SquareOscillator)s; the timer
/// is programmed with this period in [`begin`](TickScheduler::begin).
///
/// The hard real-time contract: the total work of one [`on_fire`]
/// (`N` channel ticks plus the pending-flag clear) must complete well within
/// one tick period. A configuration that cannot meet this silently
/// desynchronizes every channel at once; it is a design-time budget to verify,
/// not a runtime condition this type can detect.
///
/// [`on_fire`]: TickScheduler::on_fire
///
/// # Examples
///
/// ```
/// use drumnoise::{SimPin, SimTimer, SquareOscillator, TickScheduler};
///
/// let channels = [
///     SquareOscillator::<_, 25>::new(1049.0, SimPin::new()).unwrap(),
///     SquareOscillator::<_, 25>::new(717.0, SimPin::new()).unwrap(),
/// ];
/// let mut scheduler = TickScheduler::<_, _, 25, 2>::new(SimTimer::new(), channels);
/// scheduler.begin();
/// for _ in 0..1000 {
///     scheduler.on_fire();
/// }
/// ```
pub struct TickScheduler<T: PeriodicTimer, C: Clocked, const TICK_US: u32, const N: usize> {
    timer: T,
    channels: [C; N],
}

impl<T: PeriodicTimer, C: Clocked, const TICK_US: u32, const N: usize>
    TickScheduler<T, C, TICK_US, N>
{
    /// Creates a scheduler over the given timer and channel set.
    ///
    /// The channels' order in the array is the order they are advanced on
    /// every fire, fixed for the life of the scheduler.
    pub fn new(timer: T, channels: [C; N]) -> Self {
        Self { timer, channels }
    }

    /// Programs the timer, begins every channel in order, and starts firing.
    pub fn begin(&mut self) {
        self.timer.configure(TICK_US);
        for channel in &mut self.channels {
            channel.begin();
        }
        self.timer.start();
    }

    /// The tick handler. Call exactly once per timer fire, from the fire
    /// notification context.
    ///
    /// Advances every channel once, in the same order every time, then clears
    /// the timer's pending-fire flag so the next fire is neither dropped nor
    /// re-entered.
    pub fn on_fire(&mut self) {
        for channel in &mut self.channels {
            channel.tick();
        }
        self.timer.clear_pending();
    }

    /// Read access to the channels, for inspection after a simulated run.
    pub fn channels(&self) -> &[C; N] {
        &self.channels
    }

    /// Read access to the timer.
    pub fn timer(&self) -> &T {
        &self.timer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hal::{SimPin, SimTimer};
    use crate::oscillators::SquareOscillator;

    fn scheduler() -> TickScheduler<SimTimer, SquareOscillator<SimPin, 25>, 25, 4> {
        let channels = [1049.0, 717.0, 261.0, 392.0]
            .map(|f| SquareOscillator::new(f, SimPin::new()).unwrap());
        TickScheduler::new(SimTimer::new(), channels)
    }

    #[test]
    fn test_begin_programs_timer_then_starts() {
        let mut scheduler = scheduler();
        scheduler.begin();
        assert_eq!(scheduler.timer().period_us(), Some(25));
        assert!(scheduler.timer().is_running());
    }

    #[test]
    fn test_begin_establishes_levels_on_all_channels() {
        let mut scheduler = scheduler();
        scheduler.begin();
        for channel in scheduler.channels() {
            assert!(channel.pin().is_configured());
            assert!(channel.pin().level().is_some());
        }
    }

    #[test]
    fn test_every_fire_ticks_every_channel_once() {
        let mut scheduler = scheduler();
        scheduler.begin();
        let baseline: Vec<u32> = scheduler
            .channels()
            .iter()
            .map(|c| c.pin().total_writes())
            .collect();
        for fire in 1..=500u32 {
            scheduler.on_fire();
            for (channel, before) in scheduler.channels().iter().zip(&baseline) {
                assert_eq!(channel.pin().total_writes() - before, fire);
            }
        }
    }

    #[test]
    fn test_pending_flag_cleared_once_per_fire() {
        let mut scheduler = scheduler();
        scheduler.begin();
        for _ in 0..100 {
            scheduler.on_fire();
        }
        assert_eq!(scheduler.timer().pending_clears(), 100);
    }
}
