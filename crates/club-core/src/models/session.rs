use crate::{User, UserRole};

use serde::Serialize;

/// The client's current belief about who is signed in.
///
/// `is_authenticated` is only true while both `user` and `token` are present.
/// `is_loading` is true until the persisted record has been restored once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Session {
    pub user: Option<User>,
    #[serde(skip_serializing)]
    pub token: Option<String>,
    pub is_authenticated: bool,
    pub is_loading: bool,
}

impl Session {
    /// Session before the persisted record has been read.
    pub fn loading() -> Self {
        Self {
            user: None,
            token: None,
            is_authenticated: false,
            is_loading: true,
        }
    }

    pub fn signed_out() -> Self {
        Self {
            user: None,
            token: None,
            is_authenticated: false,
            is_loading: false,
        }
    }

    pub fn signed_in(token: String, user: User) -> Self {
        Self {
            user: Some(user),
            token: Some(token),
            is_authenticated: true,
            is_loading: false,
        }
    }

    pub fn role(&self) -> Option<UserRole> {
        self.user.as_ref().map(|u| u.role)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::loading()
    }
}
