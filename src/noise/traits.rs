//! Core trait definition for bit-stream sources.

/// Common interface for anything that produces a stream of bits.
///
/// The trait provides two operations:
/// - Single bit generation via `next_bit()`
/// - Batch generation via `fill()`
pub trait BitSource {
    /// Generates the next bit from the source.
    fn next_bit(&mut self) -> bool;

    /// Generates multiple bits into a buffer.
    ///
    /// Default implementation calls `next_bit()` for each element.
    ///
    /// # Arguments
    ///
    /// * `buffer` - Mutable slice to fill with bits
    fn fill(&mut self, buffer: &mut [bool]) {
        for bit in buffer.iter_mut() {
            *bit = self.next_bit();
        }
    }
}
