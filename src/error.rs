//! Configuration error type.
//!
//! All frequencies, tick periods, and seeds are fixed at initialization; the
//! only errors this crate can produce are rejected configurations. There is no
//! fallible I/O and no runtime-recoverable failure.

use thiserror::Error;

/// A rejected initialization parameter.
///
/// Returned by constructors instead of running with degenerate behavior. A
/// deployed image treats any of these as fatal at startup.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConfigError {
    /// The tick period was zero; no frequency can be derived from it.
    #[error("tick period must be at least 1 microsecond")]
    ZeroTickPeriod,

    /// The target frequency was zero, negative, or not finite.
    #[error("target frequency {0} Hz is not a positive finite value")]
    InvalidFrequency(f64),

    /// The target frequency is too high for the tick period to resolve: it
    /// would yield fewer than two ticks per wave cycle.
    #[error("frequency {frequency} Hz yields {period_ticks} tick(s) per cycle; at least 2 required")]
    FrequencyTooHigh {
        /// Requested target frequency in Hz.
        frequency: f64,
        /// Ticks per cycle the frequency would produce.
        period_ticks: u32,
    },

    /// The LFSR seed was zero. Zero is a fixed point of the shift-register
    /// recurrence and would silence the noise output forever.
    #[error("LFSR seed must be non-zero")]
    ZeroNoiseSeed,
}
