//! Square-wave tone oscillators.
//!
//! Each oscillator is a per-channel state machine advanced once per scheduler
//! tick, with its tick period fixed in the type and its frequency fixed at
//! construction.

mod square;
mod traits;

pub use square::SquareOscillator;
pub use traits::Clocked;
