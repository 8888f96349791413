use crate::UserRole;

use std::str::FromStr;

#[test]
fn test_user_role_as_str() {
    assert_eq!(UserRole::User.as_str(), "user");
    assert_eq!(UserRole::Admin.as_str(), "admin");
}

#[test]
fn test_user_role_from_str() {
    assert_eq!(UserRole::from_str("user").unwrap(), UserRole::User);
    assert_eq!(UserRole::from_str("admin").unwrap(), UserRole::Admin);
    assert!(UserRole::from_str("superuser").is_err());
    assert!(UserRole::from_str("Admin").is_err());
}

#[test]
fn test_user_role_serde_uses_lowercase() {
    assert_eq!(serde_json::to_string(&UserRole::Admin).unwrap(), "\"admin\"");
    let role: UserRole = serde_json::from_str("\"user\"").unwrap();
    assert_eq!(role, UserRole::User);
}

#[test]
fn test_unknown_role_is_rejected_by_serde() {
    assert!(serde_json::from_str::<UserRole>("\"moderator\"").is_err());
}
