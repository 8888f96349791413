use crate::UserRole;

use serde::{Deserialize, Serialize};

/// Club member as issued by the authentication service.
///
/// Treated as immutable; a profile update replaces the whole value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: UserRole,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}
