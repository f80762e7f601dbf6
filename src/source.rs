//! Wiring for the complete drum-machine signal source.
//!
//! One chip, five output lines: four fixed square-wave tones advanced by the
//! tick interrupt, one noise stream pumped from the main loop. The constants
//! here are the deployed image's configuration; there is no runtime
//! configuration surface.

use crate::error::ConfigError;
use crate::hal::{DigitalOutput, PeriodicTimer};
use crate::noise::{Lfsr16, NoisePump};
use crate::oscillators::SquareOscillator;
use crate::scheduler::TickScheduler;

/// Scheduler tick period in microseconds.
pub const TICK_PERIOD_US: u32 = 25;

/// Target frequencies of the four tone channels, in Hz.
///
/// Chosen mutually non-harmonic so the combined voice reads as texture rather
/// than a chord.
pub const TONE_FREQUENCIES_HZ: [f64; 4] = [1049.0, 717.0, 261.0, 392.0];

/// Power-on seed for the noise shift register. Any non-zero value works; this
/// one is the chip's canonical seed.
pub const NOISE_SEED: u16 = 0xA1E;

/// Number of tone channels.
pub const TONE_CHANNELS: usize = TONE_FREQUENCIES_HZ.len();

/// The assembled signal source, before the two execution contexts take their
/// halves.
///
/// Construction validates every channel against the tick period and the seed
/// against the shift-register recurrence, so a deployed image that gets past
/// [`new`](DrumSource::new) cannot run with degenerate output.
///
/// [`split`](DrumSource::split) expresses the concurrency design as ownership:
/// the tick-interrupt context takes the scheduler and the tone channel state
/// with it, the main-loop context takes the pump and the noise state. Neither
/// context can reach the other's state afterwards, which is what makes the
/// lock-free preemption safe.
///
/// # Examples
///
/// ```
/// use drumnoise::{DrumSource, SimPin, SimTimer};
///
/// let source = DrumSource::new(
///     SimTimer::new(),
///     [SimPin::new(), SimPin::new(), SimPin::new(), SimPin::new()],
///     SimPin::new(),
/// )
/// .unwrap();
///
/// let (mut scheduler, mut pump) = source.split();
/// scheduler.begin();
/// pump.begin();
///
/// // Tick context and loop context, interleaved here for simulation.
/// for _ in 0..1000 {
///     scheduler.on_fire();
///     pump.step();
/// }
/// ```
pub struct DrumSource<T: PeriodicTimer, P: DigitalOutput> {
    scheduler: TickScheduler<T, SquareOscillator<P, TICK_PERIOD_US>, TICK_PERIOD_US, TONE_CHANNELS>,
    pump: NoisePump<Lfsr16, P>,
}

impl<T: PeriodicTimer, P: DigitalOutput> DrumSource<T, P> {
    /// Builds the source from a timer and five output lines.
    ///
    /// Tone pins pair with [`TONE_FREQUENCIES_HZ`] by index.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if any tone frequency cannot be resolved at
    /// [`TICK_PERIOD_US`]. The canonical constants always pass; the error path
    /// exists for sources built with other pin/frequency pairings via the
    /// component types directly.
    pub fn new(timer: T, tone_pins: [P; TONE_CHANNELS], noise_pin: P) -> Result<Self, ConfigError> {
        let [p0, p1, p2, p3] = tone_pins;
        let [f0, f1, f2, f3] = TONE_FREQUENCIES_HZ;
        let channels = [
            SquareOscillator::new(f0, p0)?,
            SquareOscillator::new(f1, p1)?,
            SquareOscillator::new(f2, p2)?,
            SquareOscillator::new(f3, p3)?,
        ];

        Ok(Self {
            scheduler: TickScheduler::new(timer, channels),
            pump: NoisePump::new(Lfsr16::new(NOISE_SEED)?, noise_pin),
        })
    }

    /// Splits the source into its two execution contexts: the scheduler for
    /// the tick interrupt, the pump for the main loop.
    #[allow(clippy::type_complexity)]
    pub fn split(
        self,
    ) -> (
        TickScheduler<T, SquareOscillator<P, TICK_PERIOD_US>, TICK_PERIOD_US, TONE_CHANNELS>,
        NoisePump<Lfsr16, P>,
    ) {
        (self.scheduler, self.pump)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hal::{SimPin, SimTimer};

    fn source() -> DrumSource<SimTimer, SimPin> {
        DrumSource::new(
            SimTimer::new(),
            [SimPin::new(), SimPin::new(), SimPin::new(), SimPin::new()],
            SimPin::new(),
        )
        .unwrap()
    }

    #[test]
    fn test_canonical_constants_build() {
        let (scheduler, pump) = source().split();
        let periods: Vec<u32> = scheduler
            .channels()
            .iter()
            .map(|c| c.period_ticks())
            .collect();
        assert_eq!(periods, vec![38, 56, 153, 102]);
        assert_eq!(pump.source().state(), NOISE_SEED);
    }

    #[test]
    fn test_channel_order_follows_frequency_table() {
        let (scheduler, _) = source().split();
        for (channel, target) in scheduler.channels().iter().zip(TONE_FREQUENCIES_HZ) {
            let quantum = 1e6 / (f64::from(TICK_PERIOD_US) * f64::from(channel.period_ticks()));
            assert!((channel.actual_frequency() - target).abs() < quantum);
        }
    }
}
