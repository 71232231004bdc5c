//! Integration tests for keyed error accumulation.

use std::collections::BTreeMap;

use chrono::{TimeZone, Utc};
use fieldcheck::prelude::*;
use pretty_assertions::assert_eq;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

struct Person {
    name: String,
    age: u32,
    email: String,
    role: &'static str,
}

fn validate_person(person: &Person) -> Accumulator {
    let mut acc = Accumulator::new();
    acc.not_empty(&person.name, "name", None);
    acc.text_length(&person.name, 1, 20, "name", None);
    acc.in_range(person.age, 0, 150, "age", None);
    acc.matches(&person.email, r"^[^@\s]+@[^@\s]+$", "email", Some("is not an email address"));
    acc.contains(person.role, &["admin", "member"], "role", None);
    acc
}

// ============================================================================
// SCENARIOS
// ============================================================================

#[test]
fn out_of_range_age_is_recorded() {
    init_tracing();
    let mut acc = Accumulator::new();

    assert!(!acc.in_range(30, 50, 100, "age", None));
    assert!(acc.has_errors());
    assert_eq!(acc.error("age"), Some("must be between 50 and 100"));
}

#[test]
fn second_failure_on_same_key_wins() {
    init_tracing();
    let mut acc = Accumulator::new();

    acc.not_empty("", "name", None);
    acc.text_length("", 1, 3, "name", None);

    assert_eq!(acc.len(), 1);
    assert_eq!(acc.error("name"), Some("string length must be between 1 and 3"));
}

#[test]
fn valid_person_has_no_errors() {
    let acc = validate_person(&Person {
        name: "Taro".into(),
        age: 33,
        email: "taro@example.com".into(),
        role: "admin",
    });
    assert!(!acc.has_errors());
    assert!(acc.into_errors().is_empty());
}

#[test]
fn invalid_person_error_map() {
    init_tracing();
    let acc = validate_person(&Person {
        name: String::new(),
        age: 200,
        email: "taro".into(),
        role: "guest",
    });

    let errors: BTreeMap<String, String> = acc.into_errors().into_iter().collect();
    insta::assert_json_snapshot!(errors, @r#"
    {
      "age": "must be between 0 and 150",
      "email": "is not an email address",
      "name": "string length must be between 1 and 20",
      "role": "must be one of following values. [admin, member]"
    }
    "#);
}

#[test]
fn nested_check_reports_only_outer_key() {
    init_tracing();
    let mut acc = Accumulator::new();
    let street = "";

    let ok = acc.check_nested("address", "address is incomplete", |inner| {
        inner.not_empty(street, "street", None) && inner.text_length(street, 1, 100, "street", None)
    });

    assert!(!ok);
    assert_eq!(acc.errors().len(), 1);
    assert_eq!(acc.error("address"), Some("address is incomplete"));
    assert_eq!(acc.error("street"), None);
}

#[test]
fn boolean_composition_with_checks() {
    let mut acc = Accumulator::new();
    let password = "hunter2";
    let confirmation = "hunter3";

    let ok = acc.text_length(password, 8, 64, "password", None)
        & acc.equal(confirmation, password, "confirmation", Some("must match {0}"))
        & acc.check("password", "must contain a digit", || {
            password.chars().any(|c| c.is_ascii_digit())
        });

    assert!(!ok);
    assert_eq!(acc.error("password"), Some("string length must be between 8 and 64"));
    assert_eq!(acc.error("confirmation"), Some("must match hunter2"));
}

#[test]
fn optional_fields_compare_by_debug_form() {
    let parent: Option<u32> = None;
    let moved_to: Option<u32> = Some(7);

    let mut acc = Accumulator::new();
    assert!(acc.equal_debug(&parent, &None, "parent", None));
    assert!(!acc.equal_debug(&moved_to, &None, "moved_to", Some("{0} expected for a root node")));
    assert!(acc.equal(&Value::Null, &Value::Null, "payload", None));

    assert_eq!(acc.len(), 1);
    assert_eq!(acc.error("moved_to"), Some("None expected for a root node"));
}

#[test]
fn time_range_scenario() {
    let t1 = Utc.with_ymd_and_hms(2009, 1, 1, 0, 0, 0).unwrap();
    let t2 = Utc.with_ymd_and_hms(2010, 1, 1, 0, 0, 0).unwrap();
    let t3 = Utc.with_ymd_and_hms(2011, 1, 1, 0, 0, 0).unwrap();

    let mut acc = Accumulator::new();
    assert!(acc.time_in_range(&t2, &t1, &t3, "t2", None));
    assert!(!acc.time_in_range(&t1, &t2, &t3, "t1", None));
    assert!(acc.time_in_range(&t1, &t1, &t3, "boundary", None));

    assert_eq!(acc.len(), 1);
    assert_eq!(
        acc.error("t1"),
        Some("must be between 2010-01-01 00:00:00 UTC and 2011-01-01 00:00:00 UTC")
    );
}

#[test]
fn templates_loaded_from_json() {
    let templates: MessageTemplates =
        serde_json::from_str(r#"{ "not_empty": "is required", "in_range": "{0} to {1}, please" }"#)
            .unwrap();
    let mut acc = Accumulator::with_messages(templates);

    acc.not_empty(&None::<String>, "nickname", None);
    acc.in_range(7, 1, 5, "rating", None);
    acc.text_length("toolong", 1, 3, "code", None);

    assert_eq!(acc.error("nickname"), Some("is required"));
    assert_eq!(acc.error("rating"), Some("1 to 5, please"));
    assert_eq!(acc.error("code"), Some("string length must be between 1 and 3"));
}

#[test]
fn rule_objects_feed_the_accumulator() {
    let mut acc = Accumulator::new();
    let username = length(3, 20);
    let allowed = one_of(vec!["free", "pro"]);

    assert!(acc.validate(&username, "taro", "username", None));
    assert!(!acc.validate(&allowed, &"enterprise", "plan", None));
    assert!(!acc.validate(&not_empty::<str>(), "", "bio", Some("tell us about yourself")));

    assert_eq!(acc.error("plan"), Some("must be one of following values. [free, pro]"));
    assert_eq!(acc.error("bio"), Some("tell us about yourself"));
}

#[test]
fn error_map_serializes() {
    let mut acc = Accumulator::new();
    acc.add_error("form", "is locked");
    let json = serde_json::to_value(acc.errors()).unwrap();
    assert_eq!(json, serde_json::json!({ "form": "is locked" }));
}
