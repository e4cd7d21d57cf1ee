//! Text and JSON rendering of verdicts and results.

use serde::Serialize;

use passforge_core::{CharacterClass, ComponentCounts, Policy, PolicyRule, PolicyVerdict};
use passforge_generate::Password;

const RULE: &str = "==================================================";

/// JSON shape of a verdict for `validate --json`.
#[derive(Debug, Clone, Serialize)]
pub struct VerdictReport {
    pub valid: bool,
    pub total: u64,
    pub violations: Vec<ViolationReport>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ViolationReport {
    pub code: String,
    pub rule: PolicyRule,
    pub observed: u64,
    pub required: u64,
    pub message: String,
    pub hint: String,
}

impl VerdictReport {
    pub fn new(counts: &ComponentCounts, verdict: &PolicyVerdict) -> Self {
        Self {
            valid: verdict.is_valid(),
            total: counts.total(),
            violations: verdict
                .violations()
                .iter()
                .map(|violation| ViolationReport {
                    code: violation.code(),
                    rule: violation.rule,
                    observed: violation.observed,
                    required: violation.required,
                    message: violation.message(),
                    hint: violation.hint(),
                })
                .collect(),
        }
    }
}

pub fn render_requirements(policy: &Policy) -> String {
    let mut out = String::new();
    out.push_str("Password Security Requirements:\n");
    out.push_str(RULE);
    out.push('\n');
    out.push_str(&format!(
        "   - Minimum {} characters total\n",
        policy.min_length
    ));
    for class in [
        CharacterClass::Lowercase,
        CharacterClass::Uppercase,
        CharacterClass::Digit,
        CharacterClass::Symbol,
    ] {
        let name = if policy.min_per_class == 1 {
            class.singular()
        } else {
            class.label()
        };
        out.push_str(&format!(
            "   - At least {} {} ({})\n",
            policy.min_per_class,
            name,
            alphabet_hint(class)
        ));
    }
    out.push_str(RULE);
    out.push('\n');
    out
}

pub fn render_configuration(counts: &ComponentCounts) -> String {
    format!(
        "Current Configuration:\n   Lowercase Letters: {}\n   Uppercase Letters: {}\n   Symbols: {}\n   Numbers: {}\n   Total: {} characters\n",
        counts.lowercase,
        counts.uppercase,
        counts.symbols,
        counts.numbers,
        counts.total()
    )
}

pub fn render_violations(verdict: &PolicyVerdict) -> String {
    let mut out = String::new();
    out.push_str(RULE);
    out.push_str("\nRequirements Not Met\n");
    out.push_str(RULE);
    out.push('\n');
    for violation in verdict.violations() {
        out.push_str(&format!("   x {}\n", violation.message()));
    }
    if !verdict.violations().is_empty() {
        out.push_str("\nSuggestions:\n");
        for violation in verdict.violations() {
            out.push_str(&format!("   - {}\n", violation.hint()));
        }
    }
    out
}

pub fn render_success(counts: &ComponentCounts) -> String {
    let item = |n: u32, one: &str, many: &str| {
        format!("   * {n} {}\n", if n == 1 { one } else { many })
    };
    let mut out = String::new();
    out.push_str(RULE);
    out.push_str("\nAll Security Requirements Met!\n");
    out.push_str(RULE);
    out.push_str(&format!("\n   Total Password Length: {}\n", counts.total()));
    out.push_str(&item(counts.lowercase, "lowercase letter", "lowercase letters"));
    out.push_str(&item(counts.uppercase, "uppercase letter", "uppercase letters"));
    out.push_str(&item(counts.symbols, "special character", "special characters"));
    out.push_str(&item(counts.numbers, "number", "numbers"));
    out
}

pub fn render_password(password: &Password) -> String {
    format!("{RULE}\nYOUR SECURE PASSWORD\n{RULE}\n\n   {}\n\n{RULE}\n", password.as_str())
}

fn alphabet_hint(class: CharacterClass) -> String {
    match class {
        CharacterClass::Lowercase => "a-z".to_string(),
        CharacterClass::Uppercase => "A-Z".to_string(),
        CharacterClass::Digit => "0-9".to_string(),
        CharacterClass::Symbol => String::from_utf8_lossy(class.alphabet()).into_owned(),
    }
}
