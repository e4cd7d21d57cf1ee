use thiserror::Error;

use passforge_core::CoreError;

/// Failures of the secure randomness source.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EntropyError {
    /// The platform source could not supply randomness.
    #[error("secure randomness unavailable: {0}")]
    Unavailable(String),
    /// Rejection sampling never produced an acceptable draw.
    #[error("secure randomness exhausted after {0} rejected draws")]
    Exhausted(u32),
    /// A draw was requested from an empty range or alphabet.
    #[error("cannot draw from an empty range")]
    EmptyRange,
}

/// Errors emitted by the password generator.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error(transparent)]
    InvalidArgument(#[from] CoreError),
    #[error("entropy source failure: {0}")]
    EntropySource(#[from] EntropyError),
    #[error("password length {0} exceeds addressable memory")]
    LengthOverflow(u64),
}
