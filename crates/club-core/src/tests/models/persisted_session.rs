use crate::{CoreError, PersistedSession, User, UserRole};

#[test]
fn given_well_formed_record_when_parse_then_returns_token_and_user() {
    let raw = r#"{"token":"abc.def.ghi","user":{"id":"7","name":"Luis","email":"luis@club.com","role":"admin"}}"#;

    let record = PersistedSession::parse(raw).unwrap();

    assert_eq!(record.token, "abc.def.ghi");
    assert_eq!(record.user.role, UserRole::Admin);
    assert_eq!(record.user.name, "Luis");
}

#[test]
fn given_invalid_json_when_parse_then_serialization_error() {
    let result = PersistedSession::parse("{not json");

    assert!(matches!(result, Err(CoreError::Serialization { .. })));
}

#[test]
fn given_missing_user_when_parse_then_malformed_record() {
    let result = PersistedSession::parse(r#"{"token":"abc"}"#);

    assert!(matches!(result, Err(CoreError::MalformedRecord { .. })));
}

#[test]
fn given_missing_token_when_parse_then_malformed_record() {
    let raw = r#"{"user":{"id":"7","name":"Luis","email":"luis@club.com","role":"user"}}"#;

    let result = PersistedSession::parse(raw);

    assert!(matches!(result, Err(CoreError::MalformedRecord { .. })));
}

#[test]
fn given_empty_token_when_parse_then_malformed_record() {
    let raw = r#"{"token":"","user":{"id":"7","name":"Luis","email":"luis@club.com","role":"user"}}"#;

    let result = PersistedSession::parse(raw);

    assert!(matches!(result, Err(CoreError::MalformedRecord { .. })));
}

#[test]
fn given_record_when_to_json_then_matches_storage_shape() {
    let record = PersistedSession::new(
        "fake-token",
        User {
            id: "1".to_string(),
            name: "Ana".to_string(),
            email: "ana@club.com".to_string(),
            role: UserRole::User,
        },
    );

    let value: serde_json::Value = serde_json::from_str(&record.to_json().unwrap()).unwrap();

    assert_eq!(value["token"], "fake-token");
    assert_eq!(value["user"]["role"], "user");
    assert_eq!(value["user"]["email"], "ana@club.com");
}
