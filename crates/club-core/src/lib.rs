pub mod error;
pub mod models;

pub use error::{CoreError, Result};
pub use models::persisted_session::PersistedSession;
pub use models::session::Session;
pub use models::user::User;
pub use models::user_role::UserRole;

#[cfg(test)]
mod tests;
