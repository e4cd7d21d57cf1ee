//! Fixed character-class alphabets.
//!
//! The symbol alphabet is part of the output contract: changing it changes
//! the space of passwords that can be produced.

use std::fmt;

use serde::{Deserialize, Serialize};

pub const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGITS: &[u8] = b"0123456789";
pub const SYMBOLS: &[u8] = b"!#$%^&+=*()";

/// One of the four character categories a password is composed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CharacterClass {
    Lowercase,
    Uppercase,
    Digit,
    Symbol,
}

impl CharacterClass {
    /// Every class, in the order characters are drawn before shuffling.
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Lowercase,
        CharacterClass::Uppercase,
        CharacterClass::Symbol,
        CharacterClass::Digit,
    ];

    /// The alphabet characters of this class are drawn from.
    pub const fn alphabet(self) -> &'static [u8] {
        match self {
            CharacterClass::Lowercase => LOWERCASE,
            CharacterClass::Uppercase => UPPERCASE,
            CharacterClass::Digit => DIGITS,
            CharacterClass::Symbol => SYMBOLS,
        }
    }

    pub fn contains(self, ch: char) -> bool {
        ch.is_ascii() && self.alphabet().contains(&(ch as u8))
    }

    /// Returns the class `ch` belongs to, if any.
    pub fn classify(ch: char) -> Option<CharacterClass> {
        Self::ALL.into_iter().find(|class| class.contains(ch))
    }

    /// Stable snake_case identifier used in diagnostics codes.
    pub const fn key(self) -> &'static str {
        match self {
            CharacterClass::Lowercase => "lowercase",
            CharacterClass::Uppercase => "uppercase",
            CharacterClass::Digit => "numbers",
            CharacterClass::Symbol => "symbols",
        }
    }

    /// Plural human-readable name, e.g. "lowercase letters".
    pub const fn label(self) -> &'static str {
        match self {
            CharacterClass::Lowercase => "lowercase letters",
            CharacterClass::Uppercase => "uppercase letters",
            CharacterClass::Digit => "numbers",
            CharacterClass::Symbol => "symbols",
        }
    }

    /// Singular human-readable name, e.g. "special character".
    pub const fn singular(self) -> &'static str {
        match self {
            CharacterClass::Lowercase => "lowercase letter",
            CharacterClass::Uppercase => "uppercase letter",
            CharacterClass::Digit => "number",
            CharacterClass::Symbol => "special character",
        }
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alphabets_have_expected_sizes() {
        assert_eq!(CharacterClass::Lowercase.alphabet().len(), 26);
        assert_eq!(CharacterClass::Uppercase.alphabet().len(), 26);
        assert_eq!(CharacterClass::Digit.alphabet().len(), 10);
        assert_eq!(CharacterClass::Symbol.alphabet().len(), 11);
    }

    #[test]
    fn symbol_alphabet_is_fixed() {
        assert_eq!(SYMBOLS, b"!#$%^&+=*()");
    }

    #[test]
    fn alphabets_are_disjoint() {
        for ch in (0u8..=127).map(char::from) {
            let owners = CharacterClass::ALL
                .iter()
                .filter(|class| class.contains(ch))
                .count();
            assert!(owners <= 1, "{ch:?} belongs to {owners} classes");
        }
    }

    #[test]
    fn classify_maps_characters_to_their_class() {
        assert_eq!(CharacterClass::classify('q'), Some(CharacterClass::Lowercase));
        assert_eq!(CharacterClass::classify('Q'), Some(CharacterClass::Uppercase));
        assert_eq!(CharacterClass::classify('7'), Some(CharacterClass::Digit));
        assert_eq!(CharacterClass::classify('^'), Some(CharacterClass::Symbol));
        assert_eq!(CharacterClass::classify('@'), None);
        assert_eq!(CharacterClass::classify('é'), None);
    }
}
