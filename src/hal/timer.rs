//! Periodic hardware timer trait.

/// A hardware timing source that fires at a fixed period.
///
/// The fire notification itself is delivered by the platform (an interrupt
/// vector, a signal, a callback); this trait only covers what the scheduler
/// needs to say to the timer. The platform glue is expected to call
/// [`TickScheduler::on_fire`](crate::TickScheduler::on_fire) on every fire.
pub trait PeriodicTimer {
    /// Programs the timer for the given period in microseconds.
    ///
    /// Must support sub-millisecond periods with microsecond precision.
    fn configure(&mut self, period_us: u32);

    /// Starts the timer firing. Fires repeat at the configured period until
    /// power-off; there is no stop path in normal operation.
    fn start(&mut self);

    /// Clears the pending-fire indication.
    ///
    /// The tick handler must call this before returning, otherwise the
    /// platform may re-enter the handler or drop the next fire.
    fn clear_pending(&mut self);
}
