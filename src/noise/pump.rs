//! Main-loop pump for the noise output line.

use super::BitSource;
use crate::hal::DigitalOutput;

/// Drives the noise output line from a bit source, one bit per step.
///
/// This is the main-loop half of the generator: it runs outside the tick
/// interrupt, asynchronously with respect to the tone channels, and owns both
/// its bit source and its pin exclusively. The tick handler never touches
/// either, so no synchronization is needed despite preemption.
///
/// # Examples
///
/// ```
/// use drumnoise::{Lfsr16, NoisePump, SimPin};
///
/// let mut pump = NoisePump::new(Lfsr16::new(0xA1E).unwrap(), SimPin::new());
/// pump.begin();
/// for _ in 0..100 {
///     pump.step();
/// }
/// assert_eq!(pump.pin().total_writes(), 100);
/// ```
pub struct NoisePump<S: BitSource, P: DigitalOutput> {
    source: S,
    pin: P,
}

impl<S: BitSource, P: DigitalOutput> NoisePump<S, P> {
    /// Creates a pump over the given source and output line.
    pub fn new(source: S, pin: P) -> Self {
        Self { source, pin }
    }

    /// Configures the output line. Called once before pumping.
    pub fn begin(&mut self) {
        self.pin.set_output();
    }

    /// Pulls one bit from the source and writes it to the line.
    pub fn step(&mut self) {
        let bit = self.source.next_bit();
        self.pin.write(bit);
    }

    /// Pumps forever. No sleep, no blocking, no exit; the tick interrupt
    /// preempts and resumes this loop at the hardware's discretion.
    pub fn run(mut self) -> ! {
        loop {
            self.step();
        }
    }

    /// Read access to the bit source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Read access to the output line, for inspection after a simulated run.
    pub fn pin(&self) -> &P {
        &self.pin
    }
}
