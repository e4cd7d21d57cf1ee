use passforge_core::{
    CharacterClass, ComponentCounts, CoreError, PolicyRule, PolicyVerdict, validate,
};

#[test]
fn all_zero_counts_report_length_and_every_class() {
    let verdict = validate(0, 0, 0, 0).expect("non-negative counts");
    assert!(!verdict.is_valid());

    let violations = verdict.violations();
    assert_eq!(violations.len(), 5);
    assert_eq!(violations[0].rule, PolicyRule::MinimumLength);
    assert_eq!(violations[0].observed, 0);
    assert_eq!(violations[0].required, 8);
    assert_eq!(violations[0].shortfall(), 8);

    let missing: Vec<PolicyRule> = violations[1..].iter().map(|v| v.rule).collect();
    assert_eq!(
        missing,
        vec![
            PolicyRule::MinimumPerClass(CharacterClass::Digit),
            PolicyRule::MinimumPerClass(CharacterClass::Lowercase),
            PolicyRule::MinimumPerClass(CharacterClass::Uppercase),
            PolicyRule::MinimumPerClass(CharacterClass::Symbol),
        ]
    );
    assert!(violations[1..].iter().all(|v| v.observed == 0 && v.required == 1));
}

#[test]
fn two_of_each_class_is_valid() {
    let verdict = validate(2, 2, 2, 2).expect("non-negative counts");
    assert_eq!(verdict, PolicyVerdict::Valid);
    assert!(verdict.violations().is_empty());
}

#[test]
fn one_of_each_class_is_only_short_on_length() {
    let verdict = validate(1, 1, 1, 1).expect("non-negative counts");
    let violations = verdict.violations();
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].rule, PolicyRule::MinimumLength);
    assert_eq!(violations[0].observed, 4);
    assert_eq!(violations[0].shortfall(), 4);
}

#[test]
fn long_password_missing_a_class_is_invalid() {
    let verdict = validate(10, 10, 0, 10).expect("non-negative counts");
    let violations = verdict.violations();
    assert_eq!(violations.len(), 1);
    assert_eq!(
        violations[0].rule,
        PolicyRule::MinimumPerClass(CharacterClass::Symbol)
    );
}

#[test]
fn no_upper_bound_is_enforced() {
    let verdict = validate(1_000, 1_000, 1_000, 1_000).expect("non-negative counts");
    assert!(verdict.is_valid());
}

#[test]
fn negative_counts_are_invalid_arguments_not_violations() {
    let err = validate(-1, 1, 1, 1).unwrap_err();
    assert_eq!(
        err,
        CoreError::InvalidArgument {
            field: "lowercase",
            value: -1,
            reason: "count must not be negative",
        }
    );
    assert!(ComponentCounts::new(1, 1, 1, -7).is_err());
}

#[test]
fn violations_serialize_with_rule_and_values() {
    let verdict = validate(1, 1, 0, 6).expect("non-negative counts");
    let json = serde_json::to_value(verdict.violations()).expect("serialize violations");
    assert_eq!(
        json,
        serde_json::json!([
            {"rule": {"minimum_per_class": "symbol"}, "observed": 0, "required": 1}
        ])
    );
}
