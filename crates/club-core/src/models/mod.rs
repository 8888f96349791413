pub mod persisted_session;
pub mod session;
pub mod user;
pub mod user_role;
