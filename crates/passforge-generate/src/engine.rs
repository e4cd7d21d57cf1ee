use tracing::{debug, warn};

use passforge_core::ComponentCounts;

use crate::entropy::{EntropySource, OsEntropy};
use crate::errors::GenerationError;
use crate::model::Password;
use crate::shuffle::shuffle;

/// Builds passwords with exact per-class counts in uniformly random order.
#[derive(Debug, Clone, Default)]
pub struct SecurePasswordGenerator<S = OsEntropy> {
    source: S,
}

impl<S: EntropySource> SecurePasswordGenerator<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Generate a password containing exactly the requested counts.
    ///
    /// The counts are expected to have passed
    /// [`PolicyValidator`](passforge_core::PolicyValidator) already; they are
    /// not checked again here. Counts that skip validation still produce a
    /// well-formed password with exactly those counts, only without the
    /// policy's guarantees (all-zero counts give an empty password).
    ///
    /// Fails only when the entropy source does. No partial password is
    /// returned in that case and no weaker source is tried.
    pub fn generate(&mut self, counts: &ComponentCounts) -> Result<Password, GenerationError> {
        debug!(
            lowercase = counts.lowercase,
            uppercase = counts.uppercase,
            symbols = counts.symbols,
            numbers = counts.numbers,
            "generating password"
        );

        match self.build(counts) {
            Ok(password) => {
                debug!(length = password.len(), "password generated");
                Ok(password)
            }
            Err(err) => {
                warn!(error = %err, "password generation failed");
                Err(err)
            }
        }
    }

    fn build(&mut self, counts: &ComponentCounts) -> Result<Password, GenerationError> {
        let total = counts.total();
        let length = usize::try_from(total).map_err(|_| GenerationError::LengthOverflow(total))?;

        let mut chars = Vec::with_capacity(length);
        for (class, count) in counts.iter() {
            let alphabet = class.alphabet();
            for _ in 0..count {
                chars.push(self.source.draw_uniform(alphabet)?);
            }
        }

        shuffle(&mut chars, &mut self.source)?;

        Ok(Password::new(chars.into_iter().collect()))
    }

    pub fn into_source(self) -> S {
        self.source
    }
}

/// Generate a password from caller-supplied integers using the OS source.
///
/// Negative counts are rejected with [`GenerationError::InvalidArgument`].
/// Policy validation is the caller's job; see [`SecurePasswordGenerator::generate`].
pub fn generate(
    lowercase: i64,
    uppercase: i64,
    symbols: i64,
    numbers: i64,
) -> Result<Password, GenerationError> {
    let counts = ComponentCounts::new(lowercase, uppercase, symbols, numbers)?;
    SecurePasswordGenerator::new(OsEntropy::default()).generate(&counts)
}
