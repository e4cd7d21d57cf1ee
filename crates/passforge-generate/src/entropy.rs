//! Secure randomness capability.
//!
//! The generator only talks to [`EntropySource`]. Production wiring uses
//! [`OsEntropy`]; tests can plug in any seeded cryptographic generator through
//! [`CryptoEntropy`] or a hand-written source.

use rand::TryCryptoRng;
use rand::rngs::OsRng;

use crate::errors::EntropyError;

/// Rejected draws tolerated before a bounded draw gives up.
///
/// Each draw is rejected with probability below 1/2, so a healthy source
/// never gets close.
pub const MAX_REJECTIONS: u32 = 128;

/// Source of uniformly distributed random words suitable for secrets.
pub trait EntropySource {
    fn next_u32(&mut self) -> Result<u32, EntropyError>;

    fn next_u64(&mut self) -> Result<u64, EntropyError> {
        let high = u64::from(self.next_u32()?);
        let low = u64::from(self.next_u32()?);
        Ok((high << 32) | low)
    }

    /// Uniform index in `0..bound`, without modulo bias.
    ///
    /// Draws landing in the incomplete tail of the word range are rejected
    /// and redrawn.
    fn draw_bounded_index(&mut self, bound: usize) -> Result<usize, EntropyError> {
        if bound == 0 {
            return Err(EntropyError::EmptyRange);
        }

        let bound = bound as u128;
        let wide = bound > u128::from(u32::MAX);
        let range: u128 = if wide { 1 << 64 } else { 1 << 32 };
        let zone = range - (range % bound);

        for _ in 0..MAX_REJECTIONS {
            let draw = if wide {
                u128::from(self.next_u64()?)
            } else {
                u128::from(self.next_u32()?)
            };
            if draw < zone {
                // draw % bound < bound, which came from a usize
                return Ok((draw % bound) as usize);
            }
        }

        Err(EntropyError::Exhausted(MAX_REJECTIONS))
    }

    /// Uniform character from an ASCII alphabet.
    fn draw_uniform(&mut self, alphabet: &[u8]) -> Result<char, EntropyError> {
        let index = self.draw_bounded_index(alphabet.len())?;
        Ok(char::from(alphabet[index]))
    }
}

impl<S: EntropySource + ?Sized> EntropySource for &mut S {
    fn next_u32(&mut self) -> Result<u32, EntropyError> {
        (**self).next_u32()
    }

    fn next_u64(&mut self) -> Result<u64, EntropyError> {
        (**self).next_u64()
    }

    fn draw_bounded_index(&mut self, bound: usize) -> Result<usize, EntropyError> {
        (**self).draw_bounded_index(bound)
    }

    fn draw_uniform(&mut self, alphabet: &[u8]) -> Result<char, EntropyError> {
        (**self).draw_uniform(alphabet)
    }
}

/// Adapter exposing any cryptographically secure generator as an [`EntropySource`].
///
/// The `TryCryptoRng` bound keeps statistical generators such as `SmallRng`
/// out at compile time.
#[derive(Debug, Clone, Default)]
pub struct CryptoEntropy<R> {
    rng: R,
}

impl<R: TryCryptoRng> CryptoEntropy<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: TryCryptoRng> EntropySource for CryptoEntropy<R> {
    fn next_u32(&mut self) -> Result<u32, EntropyError> {
        self.rng
            .try_next_u32()
            .map_err(|err| EntropyError::Unavailable(err.to_string()))
    }

    fn next_u64(&mut self) -> Result<u64, EntropyError> {
        self.rng
            .try_next_u64()
            .map_err(|err| EntropyError::Unavailable(err.to_string()))
    }
}

/// The operating system's secure randomness provider.
///
/// Zero-sized; every caller can hold its own handle.
pub type OsEntropy = CryptoEntropy<OsRng>;
