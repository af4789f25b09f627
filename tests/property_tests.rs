/// Property-based tests using proptest
/// Tests invariants of the payload validation and defaulting rules
use proptest::prelude::*;
use rust_leads_api::models::{LeadPayload, DEFAULT_STATUS};

/// Strategy covering absent, empty, and populated field values.
fn optional_field() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        Just(Some(String::new())),
        "[a-zA-Z0-9 @.]{1,40}".prop_map(Some),
    ]
}

// Property: required-field check mirrors plain presence of name and email
proptest! {
    #[test]
    fn required_check_matches_presence(
        name in optional_field(),
        email in optional_field(),
        phone in optional_field(),
        notes in optional_field()
    ) {
        let payload = LeadPayload {
            name: name.clone(),
            email: email.clone(),
            phone,
            notes,
            ..Default::default()
        };

        let expected = name.map_or(false, |v| !v.is_empty())
            && email.map_or(false, |v| !v.is_empty());
        prop_assert_eq!(payload.has_required_fields(), expected);
    }

    #[test]
    fn optional_fields_never_affect_the_verdict(
        phone in optional_field(),
        company in optional_field(),
        status in optional_field(),
        notes in optional_field()
    ) {
        let payload = LeadPayload {
            name: Some("Ada".to_string()),
            email: Some("ada@example.com".to_string()),
            phone,
            company,
            status,
            notes,
        };
        prop_assert!(payload.has_required_fields());
    }
}

// Property: stored status is never empty
proptest! {
    #[test]
    fn status_default_never_empty(status in optional_field()) {
        let payload = LeadPayload { status, ..Default::default() };
        prop_assert!(!payload.status_or_default().is_empty());
    }

    #[test]
    fn nonempty_status_is_kept_verbatim(status in "[a-zA-Z][a-zA-Z ]{0,20}") {
        let payload = LeadPayload {
            status: Some(status.clone()),
            ..Default::default()
        };
        prop_assert_eq!(payload.status_or_default(), status.as_str());
    }

    #[test]
    fn absent_or_empty_status_becomes_new(
        status in prop_oneof![Just(None), Just(Some(String::new()))]
    ) {
        let payload = LeadPayload { status, ..Default::default() };
        prop_assert_eq!(payload.status_or_default(), DEFAULT_STATUS);
    }
}

// Property: payload deserialization accepts any subset of fields
proptest! {
    #[test]
    fn payload_parses_from_any_subset(
        include_name in proptest::bool::ANY,
        include_email in proptest::bool::ANY,
        include_status in proptest::bool::ANY,
        value in "[a-z]{1,12}"
    ) {
        let mut body = serde_json::Map::new();
        if include_name {
            body.insert("name".to_string(), serde_json::Value::String(value.clone()));
        }
        if include_email {
            body.insert("email".to_string(), serde_json::Value::String(value.clone()));
        }
        if include_status {
            body.insert("status".to_string(), serde_json::Value::String(value.clone()));
        }

        let parsed: LeadPayload =
            serde_json::from_value(serde_json::Value::Object(body)).unwrap();
        prop_assert_eq!(parsed.name.is_some(), include_name);
        prop_assert_eq!(parsed.email.is_some(), include_email);
        prop_assert_eq!(parsed.status.is_some(), include_status);
    }
}
