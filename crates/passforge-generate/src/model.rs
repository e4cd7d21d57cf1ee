use std::fmt;

use passforge_core::{CharacterClass, ComponentCounts};

/// A generated password.
///
/// `Debug` never prints the secret; use [`Password::as_str`] or
/// [`Password::into_string`] to read it.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    pub(crate) fn new(value: String) -> Self {
        Self(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// Length in characters. All alphabets are ASCII, so this equals the byte length.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Count characters by class membership.
    pub fn class_counts(&self) -> ComponentCounts {
        let mut counts = ComponentCounts::default();
        for ch in self.0.chars() {
            match CharacterClass::classify(ch) {
                Some(CharacterClass::Lowercase) => counts.lowercase += 1,
                Some(CharacterClass::Uppercase) => counts.uppercase += 1,
                Some(CharacterClass::Symbol) => counts.symbols += 1,
                Some(CharacterClass::Digit) => counts.numbers += 1,
                None => {}
            }
        }
        counts
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Password")
            .field("len", &self.len())
            .finish_non_exhaustive()
    }
}
