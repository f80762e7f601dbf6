//! Square wave oscillator implementation.

use super::Clocked;
use crate::error::ConfigError;
use crate::hal::DigitalOutput;

/// A free-running square wave oscillator driving one output line.
///
/// The scheduler's tick period is encoded in the type as `TICK_US`
/// (microseconds per tick), so oscillators built for different tick rates
/// cannot be registered with the same scheduler. The target frequency is
/// fixed at construction; there is no runtime retuning.
///
/// The wave is produced by counting ticks: a full cycle spans `period_ticks`
/// ticks, the first `half_period_ticks` of which are HIGH. Both values are
/// integers, so the actual output frequency and duty cycle carry a
/// quantization error that shrinks as `period_ticks` grows.
///
/// # Examples
///
/// ```
/// use drumnoise::{Clocked, SimPin, SquareOscillator};
///
/// // 1049 Hz on a 25 us tick: 1 / (1049 * 25e-6) rounds to 38 ticks.
/// let mut osc = SquareOscillator::<_, 25>::new(1049.0, SimPin::new()).unwrap();
/// assert_eq!(osc.period_ticks(), 38);
/// assert_eq!(osc.half_period_ticks(), 19);
///
/// osc.begin();
/// for _ in 0..1000 {
///     osc.tick();
/// }
/// ```
#[derive(Debug)]
pub struct SquareOscillator<P: DigitalOutput, const TICK_US: u32> {
    /// Ticks per full wave cycle, fixed at construction.
    period_ticks: u32,
    /// Ticks of the cycle spent HIGH (`period_ticks / 2`).
    half_period_ticks: u32,
    /// Current phase position, always in `0..period_ticks`.
    counter: u32,
    /// Output line this channel drives.
    pin: P,
}

impl<P: DigitalOutput, const TICK_US: u32> SquareOscillator<P, TICK_US> {
    /// Creates an oscillator for the given target frequency.
    ///
    /// Derives `period_ticks = round(1 / (frequency * tick_period))` once;
    /// nothing about the configuration changes afterwards.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `TICK_US` is zero, if `frequency` is not a
    /// positive finite value, or if `frequency` is too high for the tick
    /// period to resolve (fewer than 2 ticks per cycle).
    ///
    /// # Examples
    ///
    /// ```
    /// use drumnoise::{ConfigError, SimPin, SquareOscillator};
    ///
    /// // 25 us ticks cannot resolve a 30 kHz square wave.
    /// let err = SquareOscillator::<_, 25>::new(30_000.0, SimPin::new()).unwrap_err();
    /// assert!(matches!(err, ConfigError::FrequencyTooHigh { .. }));
    /// ```
    pub fn new(frequency: f64, pin: P) -> Result<Self, ConfigError> {
        if TICK_US == 0 {
            return Err(ConfigError::ZeroTickPeriod);
        }
        if !(frequency.is_finite() && frequency > 0.0) {
            return Err(ConfigError::InvalidFrequency(frequency));
        }

        let tick_seconds = f64::from(TICK_US) * 1e-6;
        // `f64::round` is unavailable in no_std; the quotient is positive here,
        // so adding 0.5 and truncating is equivalent.
        let period_ticks = (1.0 / (frequency * tick_seconds) + 0.5) as u32;
        if period_ticks < 2 {
            return Err(ConfigError::FrequencyTooHigh {
                frequency,
                period_ticks,
            });
        }

        Ok(Self {
            period_ticks,
            half_period_ticks: period_ticks / 2,
            counter: 0,
            pin,
        })
    }

    /// Ticks per full wave cycle.
    pub fn period_ticks(&self) -> u32 {
        self.period_ticks
    }

    /// Ticks of each cycle spent HIGH.
    pub fn half_period_ticks(&self) -> u32 {
        self.half_period_ticks
    }

    /// Current phase position within the cycle.
    pub fn counter(&self) -> u32 {
        self.counter
    }

    /// The frequency actually produced after tick quantization.
    ///
    /// # Examples
    ///
    /// ```
    /// use drumnoise::{SimPin, SquareOscillator};
    ///
    /// let osc = SquareOscillator::<_, 25>::new(1049.0, SimPin::new()).unwrap();
    /// // 38 ticks of 25 us each: 1 / 950 us ~ 1052.6 Hz.
    /// assert!((osc.actual_frequency() - 1052.63).abs() < 0.01);
    /// ```
    pub fn actual_frequency(&self) -> f64 {
        1e6 / (f64::from(TICK_US) * f64::from(self.period_ticks))
    }

    /// Read access to the output line, for inspection after a simulated run.
    pub fn pin(&self) -> &P {
        &self.pin
    }
}

impl<P: DigitalOutput, const TICK_US: u32> Clocked for SquareOscillator<P, TICK_US> {
    fn begin(&mut self) {
        self.pin.set_output();
        // One tick so the line carries a defined level before the first fire.
        self.tick();
    }

    /// Advances one tick: wrap the phase counter, then drive the level.
    ///
    /// Constant work on every call regardless of phase: one increment, one
    /// wrap comparison, one level comparison, exactly one pin write. N
    /// channels ticking together therefore always cost the same, keeping the
    /// handler's contribution to jitter fixed.
    fn tick(&mut self) {
        self.counter += 1;
        if self.counter >= self.period_ticks {
            self.counter = 0;
        }
        self.pin.write(self.counter < self.half_period_ticks);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hal::SimPin;

    fn osc(frequency: f64) -> SquareOscillator<SimPin, 25> {
        SquareOscillator::new(frequency, SimPin::new()).unwrap()
    }

    #[test]
    fn test_oscillator_creation() {
        let osc = osc(1049.0);
        assert_eq!(osc.period_ticks(), 38);
        assert_eq!(osc.half_period_ticks(), 19);
        assert_eq!(osc.counter(), 0);
    }

    #[test]
    fn test_period_derivation_rounds() {
        // 717 Hz at 25 us: 1 / (717 * 25e-6) = 55.8, rounds up to 56.
        assert_eq!(osc(717.0).period_ticks(), 56);
        // 261 Hz: 153.3 rounds down to 153.
        assert_eq!(osc(261.0).period_ticks(), 153);
    }

    #[test]
    fn test_rejects_too_high_frequency() {
        // 30 kHz at 25 us ticks would need 1.3 ticks per cycle.
        let err = SquareOscillator::<_, 25>::new(30_000.0, SimPin::new()).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::FrequencyTooHigh {
                period_ticks: 1,
                ..
            }
        ));
    }

    #[test]
    fn test_rejects_non_positive_frequency() {
        for bad in [0.0, -440.0, f64::NAN, f64::INFINITY] {
            let err = SquareOscillator::<_, 25>::new(bad, SimPin::new()).unwrap_err();
            assert!(matches!(err, ConfigError::InvalidFrequency(_)));
        }
    }

    #[test]
    fn test_rejects_zero_tick_period() {
        let err = SquareOscillator::<_, 0>::new(440.0, SimPin::new()).unwrap_err();
        assert_eq!(err, ConfigError::ZeroTickPeriod);
    }

    #[test]
    fn test_begin_configures_pin_and_sets_level() {
        let mut osc = osc(1049.0);
        osc.begin();
        assert!(osc.pin().is_configured());
        assert!(osc.pin().level().is_some());
    }

    #[test]
    fn test_counter_stays_in_bounds() {
        let mut osc = osc(717.0);
        osc.begin();
        for _ in 0..10_000 {
            osc.tick();
            assert!(osc.counter() < osc.period_ticks());
        }
    }

    #[test]
    fn test_duty_cycle_split() {
        let mut osc = osc(1049.0);
        let period = osc.period_ticks();
        let half = osc.half_period_ticks();
        osc.begin();
        // Skip to a cycle boundary, then measure one full cycle.
        while osc.counter() != 0 {
            osc.tick();
        }
        let highs_before = osc.pin().high_writes();
        let lows_before = osc.pin().low_writes();
        for _ in 0..period {
            osc.tick();
        }
        assert_eq!(osc.pin().high_writes() - highs_before, half);
        assert_eq!(osc.pin().low_writes() - lows_before, period - half);
    }

    #[test]
    fn test_one_toggle_each_way_per_cycle() {
        let mut osc = osc(392.0);
        let period = osc.period_ticks();
        osc.begin();
        while osc.counter() != 0 {
            osc.tick();
        }
        let rising_before = osc.pin().rising_edges();
        let falling_before = osc.pin().falling_edges();
        for _ in 0..period * 5 {
            osc.tick();
        }
        assert_eq!(osc.pin().rising_edges() - rising_before, 5);
        assert_eq!(osc.pin().falling_edges() - falling_before, 5);
    }

    #[test]
    fn test_constant_writes_per_tick() {
        // White-box jitter check: every tick performs exactly one pin write,
        // at every phase of the cycle.
        let mut osc = osc(261.0);
        osc.begin();
        for _ in 0..osc.period_ticks() * 2 {
            let before = osc.pin().total_writes();
            osc.tick();
            assert_eq!(osc.pin().total_writes() - before, 1);
        }
    }

    #[test]
    fn test_degenerate_two_tick_period() {
        // period_ticks == 2 alternates every tick; accepted boundary, not an
        // error.
        let mut osc = SquareOscillator::<_, 25>::new(20_000.0, SimPin::new()).unwrap();
        assert_eq!(osc.period_ticks(), 2);
        assert_eq!(osc.half_period_ticks(), 1);
        osc.begin();
        for _ in 0..10 {
            let level = osc.pin().level();
            osc.tick();
            assert_ne!(osc.pin().level(), level);
        }
    }

    #[test]
    fn test_actual_frequency_quantization_bound() {
        for target in [1049.0, 717.0, 261.0, 392.0] {
            let osc = osc(target);
            let quantum = 1e6 / (25.0 * f64::from(osc.period_ticks()));
            assert!((osc.actual_frequency() - target).abs() < quantum);
        }
    }
}
