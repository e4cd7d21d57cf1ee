//! Secure password generation for passforge.
//!
//! This crate consumes validated [`ComponentCounts`](passforge_core::ComponentCounts),
//! draws every character from a cryptographically secure source and places
//! them with an unbiased Fisher-Yates shuffle.

pub mod engine;
pub mod entropy;
pub mod errors;
pub mod model;
pub mod shuffle;

pub use engine::{SecurePasswordGenerator, generate};
pub use entropy::{CryptoEntropy, EntropySource, OsEntropy};
pub use errors::{EntropyError, GenerationError};
pub use model::Password;
