//! Entropy source abstraction for seed derivation.
//!
//! In production, this reads the operating system CSPRNG. In tests, a
//! scripted source is injected so every retry path can be exercised.

use std::io;

use rand::TryRngCore;
use rand::rngs::OsRng;
use tracing::warn;

/// Abstraction over a provider of unpredictable bytes.
pub trait EntropySource: Send {
    /// Fill the front of `buf` with random bytes, returning how many were
    /// written.
    ///
    /// A short count is allowed. On error the contents of `buf` are
    /// unspecified, but bytes the caller accumulated earlier (outside `buf`)
    /// must not be touched.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the source could not be read.
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize>;
}

/// Production entropy source backed by the operating system CSPRNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        OsRng.try_fill_bytes(buf).map_err(|e| {
            warn!(error = %e, "operating system entropy read failed");
            io::Error::other(e.to_string())
        })?;
        Ok(buf.len())
    }
}

impl<S: EntropySource + ?Sized> EntropySource for &mut S {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        (**self).read(buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_os_entropy_fills_whole_buffer() {
        let mut buf = [0u8; 32];
        let n = OsEntropy.read(&mut buf).unwrap();
        assert_eq!(n, 32);
        // 32 zero bytes from a working CSPRNG has probability 2^-256.
        assert!(buf.iter().any(|&b| b != 0));
    }

    #[test]
    fn test_os_entropy_accepts_empty_buffer() {
        let mut buf = [0u8; 0];
        assert_eq!(OsEntropy.read(&mut buf).unwrap(), 0);
    }

    #[test]
    fn test_mutable_reference_forwards_reads() {
        fn fill_eight<E: EntropySource>(mut source: E) -> usize {
            let mut buf = [0u8; 8];
            source.read(&mut buf).unwrap()
        }

        let mut source = OsEntropy;
        assert_eq!(fill_eight(&mut source), 8);
    }
}
