//! Tests for the user aggregate and ordered field validation.

use super::*;
use rstest::{fixture, rstest};
use serde_json::json;

fn sample_fields() -> UserFields {
    UserFields {
        name: "hit9".to_owned(),
        email: "hit9@example.com".to_owned(),
        enable_email: true,
        phone: "18701234567".to_owned(),
        enable_phone: false,
        universal: true,
        rule_level: 2,
    }
}

#[fixture]
fn valid_fields() -> UserFields {
    sample_fields()
}

#[rstest]
fn validate_accepts_valid_fields(valid_fields: UserFields) {
    let draft = valid_fields.validate().expect("fields are valid");
    assert_eq!(draft.name.as_str(), "hit9");
    assert_eq!(draft.rule_level, RuleLevel::High);
    assert!(!draft.enable_phone);
}

#[rstest]
fn validate_accepts_empty_optional_fields(mut valid_fields: UserFields) {
    valid_fields.email = String::new();
    valid_fields.phone = String::new();
    let draft = valid_fields.validate().expect("optional fields may be empty");
    assert!(draft.email.is_empty());
    assert!(draft.phone.is_empty());
}

#[rstest]
#[case::name_before_everything(
    UserFields { name: String::new(), email: "bad".into(), phone: "bad".into(), rule_level: 9, ..sample_fields() },
    UserValidationError::EmptyName
)]
#[case::email_before_phone(
    UserFields { email: "bad".into(), phone: "bad".into(), rule_level: 9, ..sample_fields() },
    UserValidationError::InvalidEmail
)]
#[case::phone_before_rule_level(
    UserFields { phone: "bad".into(), rule_level: 9, ..sample_fields() },
    UserValidationError::InvalidPhone
)]
#[case::rule_level_last(
    UserFields { rule_level: 9, ..sample_fields() },
    UserValidationError::InvalidRuleLevel { value: 9 }
)]
fn validate_reports_first_failure_in_fixed_order(
    #[case] fields: UserFields,
    #[case] expected: UserValidationError,
) {
    assert_eq!(fields.validate(), Err(expected));
}

#[rstest]
fn user_serialises_with_camel_case_fields(valid_fields: UserFields) {
    let user = User::new(UserId::new(7), valid_fields.validate().expect("valid"));
    let value = serde_json::to_value(&user).expect("serialise user");
    assert_eq!(
        value,
        json!({
            "id": 7,
            "name": "hit9",
            "email": "hit9@example.com",
            "enableEmail": true,
            "phone": "18701234567",
            "enablePhone": false,
            "universal": true,
            "ruleLevel": 2,
        })
    );
}

#[rstest]
fn replace_fields_overwrites_everything_but_id(valid_fields: UserFields) {
    let mut user = User::new(UserId::new(3), valid_fields.validate().expect("valid"));
    let replacement = UserFields {
        name: "renamed".to_owned(),
        email: String::new(),
        enable_email: false,
        phone: String::new(),
        enable_phone: false,
        universal: false,
        rule_level: 0,
    }
    .validate()
    .expect("valid");

    user.replace_fields(replacement.clone());

    assert_eq!(user, User::new(UserId::new(3), replacement));
    assert!(user.email().is_empty());
    assert!(!user.enable_phone());
}

#[rstest]
#[case("42", Some(42))]
#[case("-1", Some(-1))]
#[case("abc", None)]
#[case("4.2", None)]
#[case("", None)]
fn user_id_parses_integers_only(#[case] raw: &str, #[case] expected: Option<i32>) {
    assert_eq!(raw.parse::<UserId>().ok().map(UserId::as_i32), expected);
}

#[rstest]
fn rule_level_round_trips_through_integers() {
    assert_eq!(i32::from(RuleLevel::Medium), 1);
    assert_eq!(RuleLevel::try_from(1), Ok(RuleLevel::Medium));
    assert_eq!(RuleLevel::default(), RuleLevel::Low);
    assert!(serde_json::from_value::<RuleLevel>(json!(5)).is_err());
}
