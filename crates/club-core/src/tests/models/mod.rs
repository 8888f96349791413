mod persisted_session;
mod session;
mod user_role;
