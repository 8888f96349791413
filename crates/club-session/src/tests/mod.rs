mod route_guard;

use club_auth::TokenClaims;
use club_core::{User, UserRole};

use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};

pub(crate) const TEST_SECRET: &[u8] = b"test-secret-key-at-least-32-bytes";
pub(crate) const KEY: &str = "auth";

pub(crate) fn member() -> User {
    User {
        id: "u-1".to_string(),
        name: "Ana Lectora".to_string(),
        email: "ana@club.com".to_string(),
        role: UserRole::User,
    }
}

pub(crate) fn admin() -> User {
    User {
        id: "u-2".to_string(),
        name: "Luis Admin".to_string(),
        email: "luis@club.com".to_string(),
        role: UserRole::Admin,
    }
}

pub(crate) fn now() -> i64 {
    chrono::Utc::now().timestamp()
}

/// Signed credential for `user` expiring at `exp`.
pub(crate) fn token_for(user: &User, exp: i64) -> String {
    let claims = TokenClaims {
        exp,
        user: user.clone(),
        iat: None,
    };
    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(TEST_SECRET),
    )
    .unwrap()
}

/// Serialized persisted record as the provider writes it.
pub(crate) fn record_json(token: &str, user: &User) -> String {
    serde_json::json!({ "token": token, "user": user }).to_string()
}
