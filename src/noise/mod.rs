//! Pseudo-random noise generation.
//!
//! This module contains the shift-register bit generator and the main-loop
//! pump that drives the noise output line.

mod lfsr;
mod pump;
mod traits;

pub use lfsr::Lfsr16;
pub use pump::NoisePump;
pub use traits::BitSource;
