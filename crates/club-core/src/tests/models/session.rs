use crate::{Session, User, UserRole};

fn member() -> User {
    User {
        id: "1".to_string(),
        name: "Ana".to_string(),
        email: "ana@club.com".to_string(),
        role: UserRole::User,
    }
}

#[test]
fn given_default_session_then_loading_and_signed_out() {
    let session = Session::default();

    assert!(session.is_loading);
    assert!(!session.is_authenticated);
    assert!(session.user.is_none());
    assert!(session.token.is_none());
}

#[test]
fn given_signed_in_session_then_authenticated_with_role() {
    let session = Session::signed_in("tok".to_string(), member());

    assert!(session.is_authenticated);
    assert!(!session.is_loading);
    assert_eq!(session.role(), Some(UserRole::User));
}

#[test]
fn given_session_when_serialized_then_token_is_omitted() {
    let session = Session::signed_in("secret-token".to_string(), member());

    let json = serde_json::to_string(&session).unwrap();

    assert!(!json.contains("secret-token"));
    assert!(json.contains("ana@club.com"));
}
