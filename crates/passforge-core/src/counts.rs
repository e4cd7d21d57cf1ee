use serde::{Deserialize, Serialize};

use crate::charset::CharacterClass;
use crate::error::{CoreError, Result};

/// How many characters of each class a password must contain.
///
/// The sum of the four counts is the resulting password length.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ComponentCounts {
    pub lowercase: u32,
    pub uppercase: u32,
    pub symbols: u32,
    pub numbers: u32,
}

impl ComponentCounts {
    /// Build counts from caller-supplied signed integers.
    ///
    /// Negative values are a caller contract violation and are rejected with
    /// [`CoreError::InvalidArgument`]; they are never clamped to zero.
    pub fn new(lowercase: i64, uppercase: i64, symbols: i64, numbers: i64) -> Result<Self> {
        Ok(Self {
            lowercase: checked_count("lowercase", lowercase)?,
            uppercase: checked_count("uppercase", uppercase)?,
            symbols: checked_count("symbols", symbols)?,
            numbers: checked_count("numbers", numbers)?,
        })
    }

    pub fn count(&self, class: CharacterClass) -> u32 {
        match class {
            CharacterClass::Lowercase => self.lowercase,
            CharacterClass::Uppercase => self.uppercase,
            CharacterClass::Digit => self.numbers,
            CharacterClass::Symbol => self.symbols,
        }
    }

    /// Total password length these counts describe.
    pub fn total(&self) -> u64 {
        u64::from(self.lowercase)
            + u64::from(self.uppercase)
            + u64::from(self.symbols)
            + u64::from(self.numbers)
    }

    /// Iterate `(class, count)` pairs in draw order.
    pub fn iter(&self) -> impl Iterator<Item = (CharacterClass, u32)> + '_ {
        CharacterClass::ALL
            .into_iter()
            .map(move |class| (class, self.count(class)))
    }
}

fn checked_count(field: &'static str, value: i64) -> Result<u32> {
    if value < 0 {
        return Err(CoreError::InvalidArgument {
            field,
            value,
            reason: "count must not be negative",
        });
    }
    u32::try_from(value).map_err(|_| CoreError::InvalidArgument {
        field,
        value,
        reason: "count does not fit in 32 bits",
    })
}
