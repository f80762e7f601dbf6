//! Digital output line trait.

/// A single addressable digital output line.
///
/// This is the only way the generation core drives hardware. Implementations
/// are expected to be cheap: `set_high`/`set_low` are called from the tick
/// interrupt and from the noise main loop, so they must not block, allocate,
/// or take locks.
///
/// # Examples
///
/// ```
/// use drumnoise::{DigitalOutput, SimPin};
///
/// let mut pin = SimPin::new();
/// pin.set_output();
/// pin.write(true);
/// assert_eq!(pin.level(), Some(true));
/// ```
pub trait DigitalOutput {
    /// Configures the line as an output. Called once before any level write.
    fn set_output(&mut self);

    /// Drives the line HIGH.
    fn set_high(&mut self);

    /// Drives the line LOW.
    fn set_low(&mut self);

    /// Drives the line to the given level.
    ///
    /// Default implementation dispatches to `set_high`/`set_low`.
    fn write(&mut self, bit: bool) {
        if bit {
            self.set_high();
        } else {
            self.set_low();
        }
    }
}
