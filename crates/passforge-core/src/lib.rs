//! Core contracts for passforge.
//!
//! This crate defines the fixed character-class alphabets, the per-class
//! count requirements a caller asks for, and the structural security policy
//! those requirements are checked against. Nothing here touches randomness;
//! see `passforge-generate` for the generator.

pub mod charset;
pub mod counts;
pub mod error;
pub mod policy;

pub use charset::CharacterClass;
pub use counts::ComponentCounts;
pub use error::{CoreError, Result};
pub use policy::{
    Policy, PolicyRule, PolicyValidator, PolicyVerdict, PolicyViolation, validate,
    validate_counts,
};

/// Minimum total password length required by the default policy.
pub const MINIMUM_LENGTH: u64 = 8;

/// Minimum number of characters required from every class by the default policy.
pub const MINIMUM_PER_CLASS: u32 = 1;
