//! Structural security policy for requested counts.
//!
//! Every rule is evaluated, so a verdict lists all violations at once and a
//! caller can re-prompt for everything in a single round.

use serde::{Deserialize, Serialize};

use crate::charset::CharacterClass;
use crate::counts::ComponentCounts;
use crate::error::Result;
use crate::{MINIMUM_LENGTH, MINIMUM_PER_CLASS};

/// Order in which per-class rules are reported.
const CLASS_RULE_ORDER: [CharacterClass; 4] = [
    CharacterClass::Digit,
    CharacterClass::Lowercase,
    CharacterClass::Uppercase,
    CharacterClass::Symbol,
];

/// Thresholds checked by [`PolicyValidator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Policy {
    pub min_length: u64,
    pub min_per_class: u32,
}

impl Default for Policy {
    fn default() -> Self {
        Self {
            min_length: MINIMUM_LENGTH,
            min_per_class: MINIMUM_PER_CLASS,
        }
    }
}

/// The rule a [`PolicyViolation`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PolicyRule {
    MinimumLength,
    MinimumPerClass(CharacterClass),
}

impl PolicyRule {
    /// Stable machine-readable code, e.g. `min_length` or `min_symbols`.
    pub fn code(&self) -> String {
        match self {
            PolicyRule::MinimumLength => "min_length".to_string(),
            PolicyRule::MinimumPerClass(class) => format!("min_{}", class.key()),
        }
    }
}

/// A single failed rule with the observed and required values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyViolation {
    pub rule: PolicyRule,
    pub observed: u64,
    pub required: u64,
}

impl PolicyViolation {
    pub fn code(&self) -> String {
        self.rule.code()
    }

    /// How many characters are missing to satisfy the rule.
    pub fn shortfall(&self) -> u64 {
        self.required.saturating_sub(self.observed)
    }

    pub fn message(&self) -> String {
        match self.rule {
            PolicyRule::MinimumLength => format!(
                "Total: {} characters (need at least {})",
                self.observed, self.required
            ),
            PolicyRule::MinimumPerClass(class) => {
                let label = class.label();
                let mut chars = label.chars();
                let title = match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                    None => String::new(),
                };
                format!(
                    "{}: {} (need at least {})",
                    title, self.observed, self.required
                )
            }
        }
    }

    /// Remediation suggestion for the caller.
    pub fn hint(&self) -> String {
        let missing = self.shortfall();
        match self.rule {
            PolicyRule::MinimumLength => {
                format!("Add {missing} more character{}", plural(missing))
            }
            PolicyRule::MinimumPerClass(class) => format!(
                "Add at least {} {}{}",
                self.required,
                class.singular(),
                plural(self.required)
            ),
        }
    }
}

/// Outcome of validating a set of counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PolicyVerdict {
    Valid,
    /// Non-empty, in rule evaluation order.
    Invalid(Vec<PolicyViolation>),
}

impl PolicyVerdict {
    pub fn is_valid(&self) -> bool {
        matches!(self, PolicyVerdict::Valid)
    }

    pub fn violations(&self) -> &[PolicyViolation] {
        match self {
            PolicyVerdict::Valid => &[],
            PolicyVerdict::Invalid(violations) => violations,
        }
    }
}

/// Checks requested counts against a [`Policy`].
#[derive(Debug, Clone, Copy, Default)]
pub struct PolicyValidator {
    policy: Policy,
}

impl PolicyValidator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: Policy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &Policy {
        &self.policy
    }

    /// Validate counts. Pure; never fails.
    ///
    /// This checks:
    /// - the total length reaches the policy minimum
    /// - every class reaches the per-class minimum, one violation per class
    pub fn validate(&self, counts: &ComponentCounts) -> PolicyVerdict {
        let mut violations = Vec::new();

        let total = counts.total();
        if total < self.policy.min_length {
            violations.push(PolicyViolation {
                rule: PolicyRule::MinimumLength,
                observed: total,
                required: self.policy.min_length,
            });
        }

        for class in CLASS_RULE_ORDER {
            let observed = counts.count(class);
            if observed < self.policy.min_per_class {
                violations.push(PolicyViolation {
                    rule: PolicyRule::MinimumPerClass(class),
                    observed: u64::from(observed),
                    required: u64::from(self.policy.min_per_class),
                });
            }
        }

        if violations.is_empty() {
            PolicyVerdict::Valid
        } else {
            PolicyVerdict::Invalid(violations)
        }
    }
}

/// Validate already-typed counts against the default policy.
pub fn validate_counts(counts: &ComponentCounts) -> PolicyVerdict {
    PolicyValidator::new().validate(counts)
}

/// Validate caller-supplied integers against the default policy.
///
/// Negative counts are rejected as [`CoreError::InvalidArgument`](crate::CoreError)
/// rather than reported as policy violations.
pub fn validate(lowercase: i64, uppercase: i64, symbols: i64, numbers: i64) -> Result<PolicyVerdict> {
    let counts = ComponentCounts::new(lowercase, uppercase, symbols, numbers)?;
    Ok(validate_counts(&counts))
}

fn plural(n: u64) -> &'static str {
    if n == 1 { "" } else { "s" }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(lowercase: u32, uppercase: u32, symbols: u32, numbers: u32) -> ComponentCounts {
        ComponentCounts {
            lowercase,
            uppercase,
            symbols,
            numbers,
        }
    }

    #[test]
    fn messages_follow_rule_kind() {
        let verdict = validate_counts(&counts(0, 3, 1, 1));
        let violations = verdict.violations();
        assert_eq!(violations.len(), 2);
        assert_eq!(violations[0].message(), "Total: 5 characters (need at least 8)");
        assert_eq!(violations[0].hint(), "Add 3 more characters");
        assert_eq!(violations[1].message(), "Lowercase letters: 0 (need at least 1)");
        assert_eq!(violations[1].hint(), "Add at least 1 lowercase letter");
    }

    #[test]
    fn single_missing_character_hint_is_singular() {
        let verdict = validate_counts(&counts(2, 2, 2, 1));
        let violations = verdict.violations();
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].shortfall(), 1);
        assert_eq!(violations[0].hint(), "Add 1 more character");
    }

    #[test]
    fn codes_are_stable() {
        assert_eq!(PolicyRule::MinimumLength.code(), "min_length");
        assert_eq!(
            PolicyRule::MinimumPerClass(CharacterClass::Digit).code(),
            "min_numbers"
        );
        assert_eq!(
            PolicyRule::MinimumPerClass(CharacterClass::Symbol).code(),
            "min_symbols"
        );
    }

    #[test]
    fn stricter_policy_is_applied() {
        let validator = PolicyValidator::with_policy(Policy {
            min_length: 16,
            min_per_class: 2,
        });
        let verdict = validator.validate(&counts(4, 4, 4, 1));
        let codes: Vec<String> = verdict.violations().iter().map(|v| v.code()).collect();
        assert_eq!(codes, vec!["min_length", "min_numbers"]);
        assert_eq!(verdict.violations()[1].hint(), "Add at least 2 numbers");
    }
}
