//! Push-buffer framing: the scoped write cursor and an in-memory sink.

use log::trace;
use nv2a_hal::PushBuffer;
use nv2a_registers::methods::{
    method_header, METHOD_ADDRESS_MASK, METHOD_COUNT_SHIFT, METHOD_MAX_COUNT,
    METHOD_SUBCHANNEL_SHIFT, SUBCH_3D,
};

/// Scoped hold on a push buffer's write cursor.
///
/// `begin` acquires the cursor and dropping the guard releases it, so the
/// `begin`/`end` bracket stays balanced on every path out of a write,
/// including `?` returns.
pub struct PushCursor<'a, P: PushBuffer> {
    pb: &'a mut P,
}

impl<'a, P: PushBuffer> PushCursor<'a, P> {
    pub fn begin(pb: &'a mut P) -> Result<Self, P::Error> {
        pb.begin()?;
        Ok(Self { pb })
    }

    /// One method header followed by one data word.
    pub fn push1(&mut self, method: u32, value: u32) -> Result<(), P::Error> {
        self.push_n(method, &[value])
    }

    /// Incrementing write of `values` to `method`, `method + 4`, ...
    ///
    /// Runs longer than a header can announce are split across headers.
    pub fn push_n(&mut self, method: u32, values: &[u32]) -> Result<(), P::Error> {
        for (chunk_index, chunk) in values.chunks(METHOD_MAX_COUNT).enumerate() {
            let base = method + (chunk_index * METHOD_MAX_COUNT * 4) as u32;
            for (i, value) in chunk.iter().enumerate() {
                trace!("method {:#06x} <- {:#010x}", base + 4 * i as u32, value);
            }
            self.pb
                .push(&[method_header(SUBCH_3D, base, chunk.len() as u32)])?;
            self.pb.push(chunk)?;
        }
        Ok(())
    }
}

impl<P: PushBuffer> Drop for PushCursor<'_, P> {
    fn drop(&mut self) {
        self.pb.end();
    }
}

/// One decoded register write.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MethodWrite {
    pub subchannel: u8,
    pub method: u32,
    pub value: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CommandBufferError {
    #[error("push buffer cursor is already held")]
    AlreadyOpen,

    #[error("push outside a begin/end bracket")]
    NotOpen,

    #[error("method header at word {at} announces {count} words, only {available} follow")]
    Truncated {
        at: usize,
        count: usize,
        available: usize,
    },
}

/// Vec-backed push buffer. Records the raw stream for inspection and
/// enforces the bracket discipline a real FIFO expects.
#[derive(Debug, Default, Clone)]
pub struct CommandBuffer {
    words: Vec<u32>,
    open: bool,
    brackets: usize,
}

impl CommandBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw header and data words in submission order.
    pub fn words(&self) -> &[u32] {
        &self.words
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Number of completed `begin`/`end` brackets.
    pub fn brackets(&self) -> usize {
        self.brackets
    }

    pub fn clear(&mut self) {
        self.words.clear();
        self.brackets = 0;
    }

    /// Decode the stream into one entry per data word. Multi-word writes
    /// are incrementing, so the n-th word lands at `method + 4 * n`.
    pub fn writes(&self) -> Result<Vec<MethodWrite>, CommandBufferError> {
        let mut writes = Vec::new();
        let mut at = 0;
        while at < self.words.len() {
            let header = self.words[at];
            let count = ((header >> METHOD_COUNT_SHIFT) as usize) & METHOD_MAX_COUNT;
            let subchannel = ((header >> METHOD_SUBCHANNEL_SHIFT) & 0x7) as u8;
            let method = header & METHOD_ADDRESS_MASK;

            let data = &self.words[at + 1..];
            if data.len() < count {
                return Err(CommandBufferError::Truncated {
                    at,
                    count,
                    available: data.len(),
                });
            }
            writes.extend(data[..count].iter().enumerate().map(|(i, &value)| MethodWrite {
                subchannel,
                method: method + 4 * i as u32,
                value,
            }));
            at += 1 + count;
        }
        Ok(writes)
    }
}

impl PushBuffer for CommandBuffer {
    type Error = CommandBufferError;

    fn begin(&mut self) -> Result<(), Self::Error> {
        if self.open {
            return Err(CommandBufferError::AlreadyOpen);
        }
        self.open = true;
        Ok(())
    }

    fn push(&mut self, words: &[u32]) -> Result<(), Self::Error> {
        if !self.open {
            return Err(CommandBufferError::NotOpen);
        }
        self.words.extend_from_slice(words);
        Ok(())
    }

    fn end(&mut self) {
        if self.open {
            self.open = false;
            self.brackets += 1;
        }
    }
}
