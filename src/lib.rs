//! Drumnoise - the tone/noise generation core of an analogue drum machine's
//! single-chip signal source.
//!
//! This library provides four free-running square-wave oscillators advanced by a
//! fixed-period tick scheduler, plus an LFSR noise stream pumped from the main
//! loop. Hardware is reached only through the narrow traits in [`hal`].

#![cfg_attr(not(any(test, feature = "std")), no_std)]

#[cfg(feature = "wav-capture")]
pub mod capture;
pub mod hal;
pub mod noise;
pub mod oscillators;
pub mod scheduler;
pub mod source;

mod error;

// Re-export commonly used types at the crate root
pub use error::ConfigError;
pub use hal::{DigitalOutput, PeriodicTimer, SimPin, SimTimer};
pub use noise::{BitSource, Lfsr16, NoisePump};
pub use oscillators::{Clocked, SquareOscillator};
pub use scheduler::TickScheduler;
pub use source::{DrumSource, NOISE_SEED, TICK_PERIOD_US, TONE_CHANNELS, TONE_FREQUENCIES_HZ};
