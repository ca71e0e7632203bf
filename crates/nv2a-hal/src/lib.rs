#![no_std]

/// Abstracts the NV2A push buffer: the FIFO the GPU consumes method headers
/// and data words from, in submission order.
///
/// Writes are bracketed: `begin` reserves the write cursor, `push` appends
/// words, and `end` publishes them and releases the cursor. Callers must
/// pair every successful `begin` with exactly one `end`, including on error
/// paths.
pub trait PushBuffer {
    type Error: core::fmt::Debug;

    /// Reserve the write cursor.
    fn begin(&mut self) -> Result<(), Self::Error>;

    /// Append words at the cursor.
    fn push(&mut self, words: &[u32]) -> Result<(), Self::Error>;

    /// Publish everything pushed since `begin` and release the cursor.
    fn end(&mut self);
}

impl<P: PushBuffer + ?Sized> PushBuffer for &mut P {
    type Error = P::Error;

    fn begin(&mut self) -> Result<(), Self::Error> {
        (**self).begin()
    }

    fn push(&mut self, words: &[u32]) -> Result<(), Self::Error> {
        (**self).push(words)
    }

    fn end(&mut self) {
        (**self).end();
    }
}
