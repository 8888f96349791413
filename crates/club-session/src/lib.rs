//! Client-side session layer: durable session storage, the session provider
//! that owns the signed-in state, and the route guard consulted before a
//! protected view is rendered.

pub mod error;
pub mod restore_outcome;
pub mod route_guard;
pub mod route_table;
pub mod session_provider;
pub mod storage;

pub use error::{Result, SessionError};
pub use restore_outcome::RestoreOutcome;
pub use route_guard::{Decision, RouteRequirement, guard};
pub use route_table::{DEFAULT_PATH, LOGIN_PATH, Navigation, Route, RouteTable};
pub use session_provider::SessionProvider;
pub use storage::{FileStorage, MemoryStorage, SessionStorage, StorageError};

#[cfg(test)]
mod tests;
