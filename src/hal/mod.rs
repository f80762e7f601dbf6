//! Hardware abstraction boundary.
//!
//! The generation core never touches registers. Everything it needs from the
//! target platform is expressed by two narrow traits:
//! - [`DigitalOutput`] for a single output line
//! - [`PeriodicTimer`] for the fixed-period tick source
//!
//! Per-target implementations live out of tree; [`SimPin`] and [`SimTimer`]
//! are in-crate implementations for tests and demos.

mod pin;
mod sim;
mod timer;

pub use pin::DigitalOutput;
pub use sim::{SimPin, SimTimer};
pub use timer::PeriodicTimer;
