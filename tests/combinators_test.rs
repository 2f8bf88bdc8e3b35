//! Integration tests for compound and optional constraints.

use precept::predicate::{CharacterSet, CharacterSetPredicate, LengthPredicate, RegexPredicate};
use precept::{
    constraints, CompoundConstraint, Constraint, ConstraintList, OptionalConstraint,
    PredicateConstraint,
};
use serde_json::{json, Value};

#[derive(Debug, Clone, PartialEq)]
enum ProfileError {
    NotAnObject,
    MissingField(&'static str),
    NotAString(&'static str),
    NotAnInteger(&'static str),
}

fn has_field(name: &'static str) -> PredicateConstraint<Value, ProfileError> {
    PredicateConstraint::block(
        move |v: &Value| v.get(name).is_some(),
        ProfileError::MissingField(name),
    )
}

fn string_field(name: &'static str) -> PredicateConstraint<Value, ProfileError> {
    PredicateConstraint::block(
        move |v: &Value| v.get(name).map_or(true, Value::is_string),
        ProfileError::NotAString(name),
    )
}

fn integer_field(name: &'static str) -> PredicateConstraint<Value, ProfileError> {
    PredicateConstraint::block(
        move |v: &Value| v.get(name).map_or(true, |f| f.is_i64() || f.is_u64()),
        ProfileError::NotAnInteger(name),
    )
}

fn profile_rules() -> ConstraintList<Value, ProfileError> {
    constraints! {
        PredicateConstraint::block(Value::is_object, ProfileError::NotAnObject);
        has_field("name");
        string_field("name");
        has_field("age");
        integer_field("age");
    }
}

#[test]
fn test_all_of_reports_every_problem() {
    let profile = CompoundConstraint::all_of(profile_rules());

    assert!(profile.evaluate(&json!({"name": "Ada", "age": 36})).is_success());

    let summary = profile
        .evaluate(&json!({"name": 42}))
        .into_result()
        .unwrap_err();
    assert_eq!(
        summary.into_vec(),
        vec![
            ProfileError::NotAString("name"),
            ProfileError::MissingField("age"),
        ]
    );
}

#[test]
fn test_first_failure_reports_one_problem() {
    let profile = CompoundConstraint::first_failure(profile_rules());

    let summary = profile.evaluate(&json!("Ada")).into_result().unwrap_err();
    assert_eq!(summary.into_vec(), vec![ProfileError::NotAnObject]);
}

#[test]
fn test_any_of_accepts_alternative_identifiers() {
    let handle: CompoundConstraint<str, &'static str> = CompoundConstraint::any_of(constraints! {
        PredicateConstraint::new(RegexPredicate::new(r"@[a-z0-9_]{1,15}").unwrap(), "not a handle");
        PredicateConstraint::new(RegexPredicate::new(r"[^@\s]+@[^@\s]+\.[a-z]+").unwrap(), "not an email");
    });

    assert!(handle.evaluate("@ada").is_success());
    assert!(handle.evaluate("ada@example.com").is_success());

    let summary = handle.evaluate("ada").into_result().unwrap_err();
    assert_eq!(summary.into_vec(), vec!["not a handle", "not an email"]);
}

#[test]
fn test_compounds_nest() {
    let strong: CompoundConstraint<str, &'static str> = CompoundConstraint::all_of(constraints! {
        PredicateConstraint::new(LengthPredicate::min(12), "too short");
        CompoundConstraint::any_of(constraints! {
            PredicateConstraint::new(CharacterSetPredicate::any(CharacterSet::Digits), "no digit");
            PredicateConstraint::new(CharacterSetPredicate::any(CharacterSet::Punctuation), "no symbol");
        });
    });

    assert_eq!(strong.constraints().len(), 2);
    assert!(strong.evaluate("correct-horse").is_success());

    let summary = strong.evaluate("horse").into_result().unwrap_err();
    assert_eq!(summary.into_vec(), vec!["too short", "no digit", "no symbol"]);
}

#[test]
fn test_optional_field_values() {
    let nickname: OptionalConstraint<PredicateConstraint<String, &str>, &str> =
        OptionalConstraint::new(PredicateConstraint::new(
            LengthPredicate::between(2, 12),
            "nickname length",
        ));

    let inputs: Vec<Option<String>> = vec![None, Some("al".into()), Some("a".into())];
    let results: Vec<bool> = inputs
        .iter()
        .map(|input| nickname.evaluate(input).is_success())
        .collect();

    assert_eq!(results, vec![true, true, false]);
}

#[test]
fn test_optional_required_with_factory() {
    let age = OptionalConstraint::new(PredicateConstraint::block(
        |n: &u32| *n < 150,
        ProfileError::NotAnInteger("age"),
    ))
    .required_with(|| ProfileError::MissingField("age"));

    let summary = age.evaluate(&None).into_result().unwrap_err();
    assert_eq!(summary.into_vec(), vec![ProfileError::MissingField("age")]);
    assert!(age.evaluate(&Some(30)).is_success());
}

#[test]
fn test_optional_in_composition() {
    let rules: ConstraintList<Option<String>, &'static str> = constraints! {
        OptionalConstraint::new(PredicateConstraint::new(LengthPredicate::max(5), "too long"))
            .required("required");
    };

    assert!(rules.evaluate(&Some("short".to_string())).is_success());
    assert_eq!(
        rules.evaluate(&None).into_result().unwrap_err().into_vec(),
        vec!["required"]
    );
}
