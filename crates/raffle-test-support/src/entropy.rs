//! Test entropy — scripted `EntropySource` implementations for tests.

use std::collections::VecDeque;
use std::io;

use raffle_core::entropy::EntropySource;

/// One scripted response of a [`ScriptedEntropy`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntropyStep {
    /// The read fails with an I/O error.
    Fail,
    /// The read copies these bytes (truncated to the buffer length).
    Bytes(Vec<u8>),
}

/// An entropy source that replays a fixed script of reads. Panics if the
/// script is exhausted. Records the buffer size of every read it serves.
#[derive(Debug)]
pub struct ScriptedEntropy {
    steps: VecDeque<EntropyStep>,
    requested: Vec<usize>,
}

impl ScriptedEntropy {
    /// Create a source that answers reads with `steps`, in order.
    #[must_use]
    pub fn new(steps: Vec<EntropyStep>) -> Self {
        Self {
            steps: steps.into(),
            requested: Vec::new(),
        }
    }

    /// A source that fails `failures` times, then returns `chunk` forever
    /// (up to `repeats` times).
    #[must_use]
    pub fn failing_then(failures: usize, chunk: &[u8], repeats: usize) -> Self {
        let mut steps = vec![EntropyStep::Fail; failures];
        steps.extend(std::iter::repeat_n(EntropyStep::Bytes(chunk.to_vec()), repeats));
        Self::new(steps)
    }

    /// Buffer sizes passed to each read, in order.
    #[must_use]
    pub fn requested(&self) -> &[usize] {
        &self.requested
    }

    /// Number of reads served.
    #[must_use]
    pub fn reads(&self) -> usize {
        self.requested.len()
    }
}

impl EntropySource for ScriptedEntropy {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.requested.push(buf.len());
        match self.steps.pop_front().expect("entropy script exhausted") {
            EntropyStep::Fail => Err(io::Error::other("scripted entropy failure")),
            EntropyStep::Bytes(bytes) => {
                let n = bytes.len().min(buf.len());
                buf[..n].copy_from_slice(&bytes[..n]);
                Ok(n)
            }
        }
    }
}

/// A broken source that fills every buffer with zeros.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZeroEntropy;

impl EntropySource for ZeroEntropy {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        buf.fill(0);
        Ok(buf.len())
    }
}
